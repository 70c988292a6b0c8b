
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Every TM_* override the loader reads, cleared for the guard's lifetime
const OVERRIDE_KEYS: [&str; 8] = [
    "TM_BACKEND_URL",
    "TM_BACKEND_ANON_KEY",
    "TM_SESSION_FILE",
    "TM_SESSION_PERSIST",
    "TM_LOG_LEVEL",
    "TM_LOG_COLORED",
    "TM_LOG_DIR",
    "TM_LOG_FILE",
];

/// Create a temp config directory, point TM_CONFIG_DIR at it and clear overrides
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let mut guards = vec![EnvGuard::set(
        "TM_CONFIG_DIR",
        temp.path().to_str().unwrap(),
    )];
    guards.extend(OVERRIDE_KEYS.iter().map(|key| EnvGuard::remove(key)));
    (temp, guards)
}
