use std::fs;
use std::path::{Path, PathBuf};

use super::core::{NitrosamineConfig, CONFIG_FILE_NAME};
use crate::errors::Error;
use crate::io::OutputFormat;

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<NitrosamineConfig, Error> {
    let config = toml::from_str::<NitrosamineConfig>(contents)
        .map_err(|e| Error::Configuration(format!("Failed to parse {CONFIG_FILE_NAME}: {e}")))?;

    if let Some(name) = config
        .output
        .as_ref()
        .and_then(|output| output.default_format.as_deref())
    {
        name.parse::<OutputFormat>()
            .map_err(|e| Error::Configuration(e.to_string()))?;
    }

    Ok(config)
}

/// Try loading config from a specific path; `None` when absent or invalid.
fn try_load_config_from_path(config_path: &Path) -> Option<NitrosamineConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} in {}. Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Handle file read errors with appropriate logging
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| dir.parent().map(Path::to_path_buf)).take(max_depth)
}

/// Load configuration by searching `start` and its ancestors.
pub fn load_config_from(start: PathBuf) -> NitrosamineConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            NitrosamineConfig::default()
        })
}

/// Load configuration from the current directory upwards.
pub fn load_config() -> NitrosamineConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            NitrosamineConfig::default()
        }
    }
}
