//! CLI command implementations.
//!
//! - **assess**: Assess completed questionnaires and write a report
//! - **init**: Initialize a new configuration file

pub mod assess;
pub mod init;

pub use assess::{assess_paths, handle_assess, AssessConfig};
pub use init::init_config;
