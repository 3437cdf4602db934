pub mod output;

pub use output::{create_writer, AssessmentReport, OutputFormat, OutputWriter};

use crate::answers::AnswerSet;
use crate::errors::{Error, Result};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::io(path, e))
}

fn read_stdin() -> Result<String> {
    let mut contents = String::new();
    std::io::stdin()
        .read_to_string(&mut contents)
        .map_err(|e| Error::io(STDIN_PATH, e))?;
    Ok(contents)
}

/// Load one questionnaire from a file, or from stdin when `path` is `-`.
pub fn load_answers(path: &Path) -> Result<AnswerSet> {
    let contents = if path.as_os_str() == STDIN_PATH {
        read_stdin()?
    } else {
        read_file(path)?
    };
    parse_answers(&contents, path)
}

/// Decode answers as YAML for `.yaml`/`.yml` paths and as JSON otherwise.
pub fn parse_answers(contents: &str, path: &Path) -> Result<AnswerSet> {
    let payload: Value = if is_yaml(path) {
        serde_yaml::from_str(contents).map_err(|e| Error::parse(path, e))?
    } else {
        serde_json::from_str(contents).map_err(|e| Error::parse(path, e))?
    };

    let answers = AnswerSet::from_json(&payload)?;
    log::debug!("Loaded {} answers from {}", answers.len(), path.display());
    Ok(answers)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}
