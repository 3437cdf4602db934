//! Logging setup.
//!
//! Logs go through the `log` facade and are printed by `env_logger` on
//! stderr, so they never mix with reports written to stdout.
//!
//! ```ignore
//! use nitrosamine_risk::observability::init_logging;
//!
//! fn main() {
//!     init_logging(cli.verbosity);
//!     // ... rest of application
//! }
//! ```

use log::LevelFilter;

/// Map the `-v` count to a log level filter.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialise the global logger. `RUST_LOG` takes precedence over the
/// verbosity flag when set.
pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbosity))
        .format_timestamp(None)
        .parse_env("RUST_LOG");

    if let Err(e) = builder.try_init() {
        // Already initialised (e.g. in tests) - keep the existing logger
        eprintln!("Note: Logger already configured: {}", e);
    }
}
