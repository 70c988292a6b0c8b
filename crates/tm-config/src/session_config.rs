use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_FILE, DEFAULT_SESSION_PERSIST};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Keep the signed-in session between runs
    pub persist: bool,
    /// Session file, relative to the config directory
    pub file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            persist: DEFAULT_SESSION_PERSIST,
            file: String::from(DEFAULT_SESSION_FILE),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.file.is_empty() {
            return Err(ConfigError::session("session.file cannot be empty"));
        }

        if Path::new(&self.file).is_absolute() || self.file.contains("..") {
            return Err(ConfigError::session(
                "session.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
