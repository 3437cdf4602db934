use crate::io::OutputFormat;
use serde::{Deserialize, Serialize};

/// File looked up in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".nitrosamine-risk.toml";

/// Contents written by `nitrosamine-risk init`.
pub const DEFAULT_CONFIG: &str = r#"# nitrosamine-risk configuration

[output]
# terminal | json | markdown | html
default_format = "terminal"
# Set to false to disable colored terminal output
use_color = true
"#;

/// Root configuration structure for nitrosamine-risk
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NitrosamineConfig {
    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl NitrosamineConfig {
    /// Configured default format; invalid names are rejected at load time.
    pub fn default_format(&self) -> Option<OutputFormat> {
        self.output
            .as_ref()
            .and_then(|output| output.default_format.as_deref())
            .and_then(|name| name.parse().ok())
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|output| output.use_color)
    }
}
