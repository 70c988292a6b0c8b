mod backend_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;

pub use backend_config::BackendConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "TM_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".tm";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:54321";
const DEFAULT_SESSION_FILE: &str = "session.json";
const DEFAULT_SESSION_PERSIST: bool = true;
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
