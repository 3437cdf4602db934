// Core configuration types
mod core;
mod loader;

pub use self::core::{NitrosamineConfig, OutputConfig, CONFIG_FILE_NAME, DEFAULT_CONFIG};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
};
