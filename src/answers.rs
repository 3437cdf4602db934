//! Questionnaire answers.
//!
//! An [`AnswerSet`] is the flat mapping of question keys (`group{G}_q{Q}` or
//! `group{G}_q{Q}_{sub}`) to answer values that one completed questionnaire
//! produces. Values are normalised to lowercase on construction and missing
//! keys read as the empty string, so every lookup is total.

use crate::errors::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;

/// Question keys used by the assessment rules.
pub mod keys {
    /// Group 1 primary questions: nitrite sources used in the process.
    pub const GROUP1_PRIMARY: [&str; 5] = [
        "group1_q1",
        "group1_q2",
        "group1_q3",
        "group1_q4",
        "group1_q5",
    ];

    /// Group 1 follow-ups: amines present in the same step as the nitrite source.
    pub const GROUP1_SAME_STEP: [&str; 5] = [
        "group1_q1_1",
        "group1_q2_1",
        "group1_q3_1",
        "group1_q4_1",
        "group1_q5_1",
    ];

    /// Group 1 follow-ups: amines present in another step of the process.
    pub const GROUP1_OTHER_STEP: [&str; 5] = [
        "group1_q1_2",
        "group1_q2_2",
        "group1_q3_2",
        "group1_q4_2",
        "group1_q5_2",
    ];

    /// Water used in the process.
    pub const WATER_USED: &str = "group3_q1";
    /// Water source (`potable`, `ion_exchange`, ...).
    pub const WATER_SOURCE: &str = "group3_q2";
    /// Chloramine-treated water.
    pub const WATER_CHLORAMINE: &str = "group3_q3";

    pub const GROUP4: &str = "group4_q1";
    pub const GROUP5: &str = "group5_q1";
    pub const GROUP6: &str = "group6_q1";

    /// Nitrocellulose or similar materials in equipment.
    pub const EQUIPMENT_MATERIALS: &str = "group7_q1";
    /// Contact of those materials with the product.
    pub const EQUIPMENT_CONTACT: &str = "group7_q2";
    /// Chloramine used for equipment sanitisation.
    pub const EQUIPMENT_CHLORAMINE: &str = "group7_q3";

    pub const WATER_SOURCE_POTABLE: &str = "potable";
    pub const WATER_SOURCE_ION_EXCHANGE: &str = "ion_exchange";
}

/// Typed view of a single answer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer<'a> {
    Yes,
    No,
    DontKnow,
    /// Missing key or empty value.
    Empty,
    /// Any other value, e.g. a water source selection.
    Other(&'a str),
}

impl<'a> Answer<'a> {
    /// Classify an already-lowercased value.
    pub fn parse(value: &'a str) -> Self {
        match value {
            "yes" => Answer::Yes,
            "no" => Answer::No,
            "dont know" => Answer::DontKnow,
            "" => Answer::Empty,
            other => Answer::Other(other),
        }
    }

    pub fn is_yes(self) -> bool {
        self == Answer::Yes
    }

    pub fn is_no(self) -> bool {
        self == Answer::No
    }

    pub fn is_dont_know(self) -> bool {
        self == Answer::DontKnow
    }

    /// `"yes"` or `"dont know"`: the answer does not rule the source out.
    pub fn is_possible(self) -> bool {
        matches!(self, Answer::Yes | Answer::DontKnow)
    }
}

/// Immutable, case-normalised answers of one questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    values: HashMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an answer set from a decoded JSON payload.
    ///
    /// The payload must be an object. `null` values become empty answers and
    /// other non-string scalars are kept as their JSON text, which matches no
    /// rule.
    pub fn from_json(payload: &Value) -> Result<Self> {
        let object = payload.as_object().ok_or_else(|| {
            Error::InvalidPayload(format!(
                "expected an object of answers, found {}",
                json_kind(payload)
            ))
        })?;

        Ok(object
            .iter()
            .map(|(key, value)| (key.clone(), value_text(value)))
            .collect())
    }

    /// Raw lowercased value; empty when the key is absent.
    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn answer(&self, key: &str) -> Answer<'_> {
        Answer::parse(self.value(key))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when any group 1 primary question is answered `"yes"` or
    /// `"dont know"`. Front ends use this to disable the group 4 question.
    pub fn group4_disabled(&self) -> bool {
        keys::GROUP1_PRIMARY
            .iter()
            .any(|key| self.answer(key).is_possible())
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: Into<String>,
    V: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.as_ref().to_lowercase()))
                .collect(),
        }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
