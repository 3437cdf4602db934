//! Nitrosamine impurity risk assessment.
//!
//! The assessment runs in four pure stages over one [`AnswerSet`]:
//!
//! 1. [`nitrite::classify_nitrite_level`] derives the nitrite evidence level.
//! 2. [`amine::classify_amine_level`] derives the amine evidence level.
//! 3. [`combiner::combine_risk`] maps both levels plus a few raw answers to a
//!    [`RiskTier`].
//! 4. [`recommendations::generate_recommendations`] turns the tier and the
//!    carryover flags into recommended actions.
//!
//! None of the stages keeps state, so an assessor can be shared freely
//! between threads.

pub mod amine;
pub mod combiner;
pub mod nitrite;
pub mod recommendations;

use crate::answers::AnswerSet;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

pub use amine::classify_amine_level;
pub use combiner::combine_risk;
pub use nitrite::classify_nitrite_level;
pub use recommendations::{generate_recommendations, Recommendation};

/// Strength of the evidence that nitrites are present.
///
/// Ordered by severity: `LN1 > LN2 > LN3 > LN4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NitriteLevel {
    /// Direct nitrite use confirmed.
    #[serde(rename = "LN1")]
    Ln1,
    /// Nitrite use unknown.
    #[serde(rename = "LN2")]
    Ln2,
    /// Indirect nitrite sources (water, equipment).
    #[serde(rename = "LN3")]
    Ln3,
    /// No evidence.
    #[serde(rename = "LN4")]
    Ln4,
}

impl NitriteLevel {
    /// Ordinal severity, 4 for LN1 down to 1 for LN4.
    pub fn severity(self) -> u8 {
        match self {
            NitriteLevel::Ln1 => 4,
            NitriteLevel::Ln2 => 3,
            NitriteLevel::Ln3 => 2,
            NitriteLevel::Ln4 => 1,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            NitriteLevel::Ln1 => "LN1",
            NitriteLevel::Ln2 => "LN2",
            NitriteLevel::Ln3 => "LN3",
            NitriteLevel::Ln4 => "LN4",
        }
    }

    /// Nitrites may carry over into the drug product.
    pub fn carries_over(self) -> bool {
        matches!(self, NitriteLevel::Ln1 | NitriteLevel::Ln2)
    }
}

impl Ord for NitriteLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.severity().cmp(&other.severity())
    }
}

impl PartialOrd for NitriteLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for NitriteLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Strength of the evidence that secondary or tertiary amines are present.
///
/// Ordered by severity: `LA1 > LA2 > LA3 > LA4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmineLevel {
    #[serde(rename = "LA1")]
    La1,
    #[serde(rename = "LA2")]
    La2,
    #[serde(rename = "LA3")]
    La3,
    #[serde(rename = "LA4")]
    La4,
}

impl AmineLevel {
    pub fn severity(self) -> u8 {
        match self {
            AmineLevel::La1 => 4,
            AmineLevel::La2 => 3,
            AmineLevel::La3 => 2,
            AmineLevel::La4 => 1,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            AmineLevel::La1 => "LA1",
            AmineLevel::La2 => "LA2",
            AmineLevel::La3 => "LA3",
            AmineLevel::La4 => "LA4",
        }
    }

    /// Amines may carry over into the drug product.
    pub fn carries_over(self) -> bool {
        matches!(self, AmineLevel::La1 | AmineLevel::La2)
    }
}

impl Ord for AmineLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.severity().cmp(&other.severity())
    }
}

impl PartialOrd for AmineLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for AmineLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Overall nitrosamine impurity risk.
///
/// Ordered by severity: `High > Moderate > Minor > Nil`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    High,
    Moderate,
    Minor,
    Nil,
}

impl RiskTier {
    pub fn severity(self) -> u8 {
        match self {
            RiskTier::High => 4,
            RiskTier::Moderate => 3,
            RiskTier::Minor => 2,
            RiskTier::Nil => 1,
        }
    }

    /// Wire name, e.g. `"moderate"`.
    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::High => "high",
            RiskTier::Moderate => "moderate",
            RiskTier::Minor => "minor",
            RiskTier::Nil => "nil",
        }
    }

    /// Capitalised name for display, e.g. `"Moderate"`.
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::High => "High",
            RiskTier::Moderate => "Moderate",
            RiskTier::Minor => "Minor",
            RiskTier::Nil => "Nil",
        }
    }
}

impl Ord for RiskTier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.severity().cmp(&other.severity())
    }
}

impl PartialOrd for RiskTier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether nitrites or amines may carry over into the drug product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CarryoverFlags {
    pub carry_nitrites: bool,
    pub carry_amines: bool,
}

impl CarryoverFlags {
    pub fn from_levels(nitrite: NitriteLevel, amine: AmineLevel) -> Self {
        Self {
            carry_nitrites: nitrite.carries_over(),
            carry_amines: amine.carries_over(),
        }
    }

    pub fn any(&self) -> bool {
        self.carry_nitrites || self.carry_amines
    }
}

/// Outcome of assessing one questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub nitrite_level: NitriteLevel,
    pub amine_level: AmineLevel,
    pub risk_tier: RiskTier,
    pub carryover: CarryoverFlags,
    pub recommendations: Vec<Recommendation>,
    /// UI hint: the group 4 question is irrelevant once a group 1 nitrite
    /// source is confirmed or unknown.
    pub group4_disabled: bool,
}

/// Stateless nitrosamine risk assessor.
///
/// Holds no configuration today; it exists so callers can inject an
/// assessor rather than reach for the free function.
#[derive(Debug, Clone, Copy, Default)]
pub struct NitrosamineAssessor;

impl NitrosamineAssessor {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, answers: &AnswerSet) -> AssessmentResult {
        let nitrite_level = classify_nitrite_level(answers);
        let amine_level = classify_amine_level(answers);
        let risk_tier = combine_risk(answers, nitrite_level, amine_level);
        let carryover = CarryoverFlags::from_levels(nitrite_level, amine_level);

        log::debug!(
            "Assessed {} answers: {} / {} -> {}",
            answers.len(),
            nitrite_level,
            amine_level,
            risk_tier
        );

        AssessmentResult {
            nitrite_level,
            amine_level,
            risk_tier,
            carryover,
            recommendations: generate_recommendations(
                risk_tier,
                carryover.carry_nitrites,
                carryover.carry_amines,
            ),
            group4_disabled: answers.group4_disabled(),
        }
    }
}

/// Assess one questionnaire with the default assessor.
pub fn assess(answers: &AnswerSet) -> AssessmentResult {
    NitrosamineAssessor::new().assess(answers)
}
