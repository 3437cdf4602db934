// Export modules for library usage
pub mod answers;
pub mod assessment;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod io;
pub mod observability;
pub mod response;

// Re-export commonly used types
pub use crate::answers::{Answer, AnswerSet};

pub use crate::assessment::{
    assess, classify_amine_level, classify_nitrite_level, combine_risk, generate_recommendations,
    AmineLevel, AssessmentResult, CarryoverFlags, NitriteLevel, NitrosamineAssessor,
    Recommendation, RiskTier,
};

pub use crate::errors::{Error, Result};

pub use crate::io::output::{create_writer, AssessmentReport, OutputFormat, OutputWriter};

pub use crate::response::{render_recommendations_html, AssessmentResponse};
