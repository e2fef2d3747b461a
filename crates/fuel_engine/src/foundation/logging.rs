//! Logging utilities

pub use log::{debug, error, info, trace, warn};

/// Initialize logging with `default_level` unless `RUST_LOG` overrides it
///
/// Returns an error if a logger was already installed.
pub fn init_with_level(default_level: &str) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .try_init()
}
