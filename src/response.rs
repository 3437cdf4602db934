//! Wire shape of an assessment.
//!
//! Front ends built against the questionnaire service expect the keys and
//! value spellings below, including `"Yes"`/`"No"` carryover strings and a
//! pre-rendered HTML fragment of recommended actions.

use crate::assessment::recommendations::RECOMMENDATIONS_HEADING;
use crate::assessment::{AmineLevel, AssessmentResult, NitriteLevel, Recommendation, RiskTier};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub ln: NitriteLevel,
    pub la: AmineLevel,
    pub risk: RiskTier,
    #[serde(rename = "carryNitrites")]
    pub carry_nitrites: YesNo,
    #[serde(rename = "carryAmines")]
    pub carry_amines: YesNo,
    #[serde(rename = "recommendedActions")]
    pub recommended_actions: String,
    pub group4_disabled: bool,
}

impl From<&AssessmentResult> for AssessmentResponse {
    fn from(result: &AssessmentResult) -> Self {
        Self {
            ln: result.nitrite_level,
            la: result.amine_level,
            risk: result.risk_tier,
            carry_nitrites: result.carryover.carry_nitrites.into(),
            carry_amines: result.carryover.carry_amines.into(),
            recommended_actions: render_recommendations_html(&result.recommendations),
            group4_disabled: result.group4_disabled,
        }
    }
}

/// Render recommendations as an HTML fragment: a heading and one list item
/// per recommendation.
pub fn render_recommendations_html(recommendations: &[Recommendation]) -> String {
    let mut html = format!("<h2>{RECOMMENDATIONS_HEADING}</h2><ul>");
    for rec in recommendations {
        html.push_str("<li><strong>");
        html.push_str(&html_escape::encode_text(&rec.title));
        html.push_str(":</strong> ");
        html.push_str(&html_escape::encode_text(&rec.body));
        html.push_str("</li>");
    }
    html.push_str("</ul>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::AnswerSet;
    use crate::assessment::assess;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_response_shape() {
        let answers: AnswerSet = [("group1_q2", "dont know")].into_iter().collect();
        let response = AssessmentResponse::from(&assess(&answers));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["ln"], json!("LN2"));
        assert_eq!(value["la"], json!("LA4"));
        assert_eq!(value["risk"], json!("nil"));
        assert_eq!(value["carryNitrites"], json!("Yes"));
        assert_eq!(value["carryAmines"], json!("No"));
        assert_eq!(value["group4_disabled"], json!(true));
        assert!(value["recommendedActions"].is_string());
    }

    #[test]
    fn test_render_html_for_empty_answers() {
        let result = assess(&AnswerSet::new());
        assert_eq!(
            render_recommendations_html(&result.recommendations),
            "<h2>Recommended Actions Based on Assessment</h2><ul>\
             <li><strong>Nitrosamine Risk (Nil):</strong> No further action required. \
             Document the assessment and perform periodic reassessment.</li>\
             <li><strong>Overall:</strong> No immediate action required.</li></ul>"
        );
    }

    #[test]
    fn test_render_html_escapes_text() {
        let recs = vec![Recommendation {
            title: "A & B".to_string(),
            body: "<script>".to_string(),
        }];
        assert_eq!(
            render_recommendations_html(&recs),
            "<h2>Recommended Actions Based on Assessment</h2><ul>\
             <li><strong>A &amp; B:</strong> &lt;script&gt;</li></ul>"
        );
    }
}
