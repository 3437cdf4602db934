//! Recommended actions for an assessed risk tier.

use super::RiskTier;
use serde::{Deserialize, Serialize};

/// Heading placed above rendered recommendations.
pub const RECOMMENDATIONS_HEADING: &str = "Recommended Actions Based on Assessment";

const HIGH_RISK_ACTION: &str = "Identify potential nitrosamine impurity and evaluate batches for nitrosamine impurity. Establish scientifically sound specifications for nitrosamines in the excipient such that carryover into the drug product will not cause product failure.";

const ELEVATED_RISK_ACTION: &str = "Identify potential nitrosamine impurity and evaluate batches for nitrosamine impurity. If detectable amounts are observed establish scientifically sound specification limits for the nitrosamines in the excipient such that carryover into the drug product will not cause product failure. If specifications and regular monitoring is not warranted, monitor representative batches annually. No out-of-specification results shall occur or else enhance controls.";

const NIL_RISK_ACTION: &str =
    "No further action required. Document the assessment and perform periodic reassessment.";

const NITRITE_CARRYOVER_ACTION: &str = "Assess the risk of nitrosamine or NDSRI formation in the drug product due to nitrite carryover.";

const AMINE_CARRYOVER_ACTION: &str = "Assess the risk of nitrosamine or NDSRI formation in the drug product due to amine carryover.";

const NO_IMMEDIATE_ACTION: &str = "No immediate action required.";

/// One recommended action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub body: String,
}

impl Recommendation {
    fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Build the recommendations for a tier and its carryover flags.
///
/// Order is fixed: the tier entry, the nitrite advisory, the amine advisory,
/// and finally an overall entry when nothing at all needs doing.
pub fn generate_recommendations(
    tier: RiskTier,
    carry_nitrites: bool,
    carry_amines: bool,
) -> Vec<Recommendation> {
    let mut recommendations = vec![tier_recommendation(tier)];

    if carry_nitrites {
        recommendations.push(Recommendation::new(
            "Carryover of Nitrites",
            NITRITE_CARRYOVER_ACTION,
        ));
    }

    if carry_amines {
        recommendations.push(Recommendation::new(
            "Carryover of Secondary/Tertiary Amines",
            AMINE_CARRYOVER_ACTION,
        ));
    }

    if tier == RiskTier::Nil && !carry_nitrites && !carry_amines {
        recommendations.push(Recommendation::new("Overall", NO_IMMEDIATE_ACTION));
    }

    recommendations
}

fn tier_recommendation(tier: RiskTier) -> Recommendation {
    let title = format!("Nitrosamine Risk ({})", tier.label());
    let body = match tier {
        RiskTier::High => HIGH_RISK_ACTION,
        RiskTier::Moderate | RiskTier::Minor => ELEVATED_RISK_ACTION,
        RiskTier::Nil => NIL_RISK_ACTION,
    };
    Recommendation::new(title, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn titles(recommendations: &[Recommendation]) -> Vec<&str> {
        recommendations.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_nil_without_carryover() {
        let recs = generate_recommendations(RiskTier::Nil, false, false);
        assert_eq!(titles(&recs), vec!["Nitrosamine Risk (Nil)", "Overall"]);
        assert_eq!(recs[0].body, NIL_RISK_ACTION);
        assert_eq!(recs[1].body, "No immediate action required.");
    }

    #[test]
    fn test_nil_with_carryover_has_no_overall_entry() {
        let recs = generate_recommendations(RiskTier::Nil, true, false);
        assert_eq!(
            titles(&recs),
            vec!["Nitrosamine Risk (Nil)", "Carryover of Nitrites"]
        );
    }

    #[test]
    fn test_high_with_both_carryovers() {
        let recs = generate_recommendations(RiskTier::High, true, true);
        assert_eq!(
            titles(&recs),
            vec![
                "Nitrosamine Risk (High)",
                "Carryover of Nitrites",
                "Carryover of Secondary/Tertiary Amines",
            ]
        );
        assert_eq!(recs[0].body, HIGH_RISK_ACTION);
    }

    #[test]
    fn test_moderate_and_minor_share_template() {
        let moderate = generate_recommendations(RiskTier::Moderate, false, true);
        let minor = generate_recommendations(RiskTier::Minor, false, false);

        assert_eq!(moderate[0].title, "Nitrosamine Risk (Moderate)");
        assert_eq!(minor[0].title, "Nitrosamine Risk (Minor)");
        assert_eq!(moderate[0].body, minor[0].body);
        assert_eq!(moderate[1].title, "Carryover of Secondary/Tertiary Amines");
        assert_eq!(minor.len(), 1);
    }

    #[test]
    fn test_exactly_one_tier_entry() {
        for tier in [
            RiskTier::High,
            RiskTier::Moderate,
            RiskTier::Minor,
            RiskTier::Nil,
        ] {
            for (n, a) in [(false, false), (true, false), (false, true), (true, true)] {
                let recs = generate_recommendations(tier, n, a);
                let tier_entries = recs
                    .iter()
                    .filter(|r| r.title.starts_with("Nitrosamine Risk"))
                    .count();
                assert_eq!(tier_entries, 1);
                assert!(recs[0].title.starts_with("Nitrosamine Risk"));
            }
        }
    }
}
