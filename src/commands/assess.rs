use crate::assessment::NitrosamineAssessor;
use crate::config::{load_config, NitrosamineConfig};
use crate::io::{self, create_writer, AssessmentReport, OutputFormat};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct AssessConfig {
    pub paths: Vec<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub plain: bool,
}

pub fn handle_assess(config: AssessConfig) -> Result<()> {
    let file_config = load_config();
    let format = resolve_format(config.format, &file_config);

    if !use_color(&config, &file_config) {
        colored::control::set_override(false);
    }

    let reports = assess_paths(&config.paths)?;
    write_reports(&reports, format, config.output.as_deref())
}

// CLI flag wins over the config file, which wins over the built-in default
fn resolve_format(flag: Option<OutputFormat>, file_config: &NitrosamineConfig) -> OutputFormat {
    flag.or_else(|| file_config.default_format())
        .unwrap_or_default()
}

fn use_color(config: &AssessConfig, file_config: &NitrosamineConfig) -> bool {
    !config.plain && config.output.is_none() && file_config.use_color().unwrap_or(true)
}

/// Load and assess every path in parallel, keeping argument order.
pub fn assess_paths(paths: &[PathBuf]) -> Result<Vec<AssessmentReport>> {
    let assessor = NitrosamineAssessor::new();

    paths
        .par_iter()
        .map(|path| -> Result<AssessmentReport> {
            let answers = io::load_answers(path)
                .with_context(|| format!("Failed to load answers from {}", path.display()))?;
            Ok(AssessmentReport {
                source: path.display().to_string(),
                result: assessor.assess(&answers),
            })
        })
        .collect()
}

fn write_reports(
    reports: &[AssessmentReport],
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };

    let mut writer = create_writer(format, sink);
    writer.write_reports(reports)?;
    log::info!("Wrote {} assessment(s) as {:?}", reports.len(), format);
    Ok(())
}
