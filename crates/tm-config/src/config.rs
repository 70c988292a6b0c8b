use crate::{
    BackendConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, LoggingConfig, SessionConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
    /// Directory the config was loaded from; relative paths resolve against it
    #[serde(skip)]
    pub dir: PathBuf,
}

impl Config {
    /// Load config from the default directory.
    ///
    /// Loading order:
    /// 1. Check for TM_CONFIG_DIR env var, else use ./.tm/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply TM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Same as `load`, with an explicit config directory.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.dir = config_dir.to_path_buf();
        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TM_CONFIG_DIR env var > ./.tm/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.backend.validate()?;
        self.session.validate()?;

        if Path::new(&self.logging.dir).is_absolute() || self.logging.dir.contains("..") {
            return Err(ConfigError::logging(
                "logging.dir must be relative and cannot contain '..'",
            ));
        }

        if let Some(ref file) = self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::logging(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path of the session file, None when persistence is off.
    pub fn session_path(&self) -> Option<PathBuf> {
        self.session
            .persist
            .then(|| self.dir.join(&self.session.file))
    }

    /// Absolute path of the log file, None when logging to stderr.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.logging
            .file
            .as_ref()
            .map(|file| self.dir.join(&self.logging.dir).join(file))
    }

    /// Log configuration summary (NEVER logs the API key).
    pub fn log_summary(&self) {
        info!("Configuration loaded from {}:", self.dir.display());
        info!(
            "  backend: {} (anon key {})",
            self.backend.url,
            if self.backend.anon_key.is_empty() {
                "missing"
            } else {
                "set"
            }
        );
        info!(
            "  session: {}",
            if self.session.persist {
                self.session.file.as_str()
            } else {
                "in-memory"
            }
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Backend
        Self::apply_env_string("TM_BACKEND_URL", &mut self.backend.url);
        Self::apply_env_string("TM_BACKEND_ANON_KEY", &mut self.backend.anon_key);

        // Session
        Self::apply_env_string("TM_SESSION_FILE", &mut self.session.file);
        Self::apply_env_bool("TM_SESSION_PERSIST", &mut self.session.persist);

        // Logging
        Self::apply_env_parse("TM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_string("TM_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("TM_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
