use crate::{ConfigError, ConfigErrorResult, DEFAULT_BACKEND_URL};

use serde::Deserialize;

/// Hosted backend the client talks to.
///
/// `url` is the project root; the auth API lives under `/auth/v1` and the
/// table API under `/rest/v1`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub url: String,
    /// Public (anonymous) API key sent with every request
    pub anon_key: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_BACKEND_URL),
            anon_key: String::new(),
        }
    }
}

impl BackendConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ConfigError::backend(format!(
                "backend.url must start with http:// or https://, got '{}'",
                self.url
            )));
        }

        if self.anon_key.trim().is_empty() {
            return Err(ConfigError::backend(
                "backend.anon_key is required (set TM_BACKEND_ANON_KEY)",
            ));
        }

        Ok(())
    }

    pub fn auth_url(&self) -> String {
        format!("{}/auth/v1", self.url.trim_end_matches('/'))
    }

    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.url.trim_end_matches('/'))
    }
}
