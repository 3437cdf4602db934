//! Overall risk tier.
//!
//! The tier is an ordered cascade: the first matching clause wins. `High`
//! and the first `Moderate` clause share the (LN1, LA1) pair; `High` only
//! takes it when the amine is present in the same step as the nitrite.

use super::{AmineLevel, NitriteLevel, RiskTier};
use crate::answers::{keys, AnswerSet};

/// Raw answers the cascade reads besides the two levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskSignals {
    /// An amine is confirmed in the same step as a nitrite source.
    pub same_step: bool,
    /// Chloramine-treated process water.
    pub chloramine_water: bool,
    /// Chloramine used on equipment.
    pub chloramine_equipment: bool,
    /// Equipment materials on their own justify a minor risk.
    pub group7_minor: bool,
}

impl RiskSignals {
    pub fn from_answers(answers: &AnswerSet) -> Self {
        Self {
            same_step: keys::GROUP1_SAME_STEP
                .iter()
                .any(|key| answers.answer(key).is_yes()),
            chloramine_water: answers.answer(keys::WATER_CHLORAMINE).is_yes(),
            chloramine_equipment: answers.answer(keys::EQUIPMENT_CHLORAMINE).is_yes(),
            group7_minor: group7_minor(answers),
        }
    }
}

/// Equipment-material rule for the minor tier.
///
/// Any explicit `"no"` on either question vetoes the rule, even though the
/// positive clause already requires `"yes"` or `"dont know"` on both.
fn group7_minor(answers: &AnswerSet) -> bool {
    let materials = answers.answer(keys::EQUIPMENT_MATERIALS);
    let contact = answers.answer(keys::EQUIPMENT_CONTACT);

    let indicated = (materials.is_yes() && contact.is_possible())
        || (materials.is_dont_know() && contact.is_possible());

    indicated && !contact.is_no() && !materials.is_no()
}

pub fn combine_risk(answers: &AnswerSet, nitrite: NitriteLevel, amine: AmineLevel) -> RiskTier {
    combine_signals(&RiskSignals::from_answers(answers), nitrite, amine)
}

/// Cascade over pre-derived signals.
pub fn combine_signals(signals: &RiskSignals, nitrite: NitriteLevel, amine: AmineLevel) -> RiskTier {
    use AmineLevel::*;
    use NitriteLevel::*;

    if nitrite == Ln1 && amine == La1 && signals.same_step {
        return RiskTier::High;
    }

    if matches!((nitrite, amine), (Ln1, La1) | (Ln1, La2) | (Ln2, La1) | (Ln2, La2)) {
        return RiskTier::Moderate;
    }

    let chloramine = signals.chloramine_water || signals.chloramine_equipment;
    if (nitrite == Ln3 && matches!(amine, La1 | La2 | La3))
        || (amine == La3 && matches!(nitrite, Ln1 | Ln2 | Ln3))
        || signals.group7_minor
        || (nitrite == Ln4 && amine == La4 && chloramine)
    {
        return RiskTier::Minor;
    }

    RiskTier::Nil
}

#[cfg(test)]
mod tests {
    use super::*;
    use AmineLevel::*;
    use NitriteLevel::*;

    fn answers(pairs: &[(&str, &str)]) -> AnswerSet {
        pairs.iter().copied().collect()
    }

    fn no_signals() -> RiskSignals {
        RiskSignals::default()
    }

    #[test]
    fn test_high_requires_same_step() {
        let same_step = RiskSignals {
            same_step: true,
            ..no_signals()
        };
        assert_eq!(combine_signals(&same_step, Ln1, La1), RiskTier::High);
        assert_eq!(combine_signals(&no_signals(), Ln1, La1), RiskTier::Moderate);
        assert_eq!(combine_signals(&same_step, Ln1, La2), RiskTier::Moderate);
        assert_eq!(combine_signals(&same_step, Ln2, La1), RiskTier::Moderate);
    }

    #[test]
    fn test_moderate_pairs() {
        for (n, a) in [(Ln1, La1), (Ln1, La2), (Ln2, La1), (Ln2, La2)] {
            assert_eq!(combine_signals(&no_signals(), n, a), RiskTier::Moderate, "{n}/{a}");
        }
    }

    #[test]
    fn test_minor_pairs() {
        for (n, a) in [
            (Ln3, La1),
            (Ln3, La2),
            (Ln3, La3),
            (Ln1, La3),
            (Ln2, La3),
        ] {
            assert_eq!(combine_signals(&no_signals(), n, a), RiskTier::Minor, "{n}/{a}");
        }
    }

    #[test]
    fn test_nil_pairs() {
        for (n, a) in [
            (Ln1, La4),
            (Ln2, La4),
            (Ln3, La4),
            (Ln4, La1),
            (Ln4, La2),
            (Ln4, La3),
            (Ln4, La4),
        ] {
            assert_eq!(combine_signals(&no_signals(), n, a), RiskTier::Nil, "{n}/{a}");
        }
    }

    #[test]
    fn test_chloramine_only_lifts_ln4_la4() {
        let water = RiskSignals {
            chloramine_water: true,
            ..no_signals()
        };
        let equipment = RiskSignals {
            chloramine_equipment: true,
            ..no_signals()
        };
        assert_eq!(combine_signals(&water, Ln4, La4), RiskTier::Minor);
        assert_eq!(combine_signals(&equipment, Ln4, La4), RiskTier::Minor);
        assert_eq!(combine_signals(&water, Ln1, La4), RiskTier::Nil);
        assert_eq!(combine_signals(&equipment, Ln4, La2), RiskTier::Nil);
    }

    #[test]
    fn test_group7_minor_lifts_any_otherwise_nil_pair() {
        let signals = RiskSignals {
            group7_minor: true,
            ..no_signals()
        };
        assert_eq!(combine_signals(&signals, Ln1, La4), RiskTier::Minor);
        assert_eq!(combine_signals(&signals, Ln4, La4), RiskTier::Minor);
        // Does not pre-empt higher tiers.
        assert_eq!(combine_signals(&signals, Ln2, La2), RiskTier::Moderate);
    }

    #[test]
    fn test_group7_minor_rule() {
        let cases = [
            ("yes", "yes", true),
            ("yes", "dont know", true),
            ("yes", "no", false),
            ("dont know", "yes", true),
            ("dont know", "dont know", true),
            ("dont know", "no", false),
            ("no", "yes", false),
            ("no", "no", false),
            ("", "yes", false),
            ("yes", "", false),
        ];

        for (materials, contact, expected) in cases {
            let set = answers(&[("group7_q1", materials), ("group7_q2", contact)]);
            assert_eq!(
                group7_minor(&set),
                expected,
                "group7_q1={materials:?} group7_q2={contact:?}"
            );
        }
    }

    #[test]
    fn test_signals_from_answers() {
        let set = answers(&[
            ("group1_q3_1", "Yes"),
            ("group1_q2_2", "yes"),
            ("group3_q3", "yes"),
            ("group7_q3", "dont know"),
        ]);
        let signals = RiskSignals::from_answers(&set);
        assert!(signals.same_step);
        assert!(signals.chloramine_water);
        assert!(!signals.chloramine_equipment);
        assert!(!signals.group7_minor);

        let other_step_only = answers(&[("group1_q2_2", "yes")]);
        assert!(!RiskSignals::from_answers(&other_step_only).same_step);
    }

    #[test]
    fn test_combine_risk_from_answers() {
        let set = answers(&[("group7_q3", "yes")]);
        assert_eq!(combine_risk(&set, Ln4, La4), RiskTier::Minor);
        assert_eq!(combine_risk(&AnswerSet::new(), Ln4, La4), RiskTier::Nil);
    }
}
