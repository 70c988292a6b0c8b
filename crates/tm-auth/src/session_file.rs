use crate::{AuthError, Result as AuthErrorResult, Session};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// JSON file holding the last signed-in session
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored session; a missing file means no session
    pub async fn load(&self) -> AuthErrorResult<Option<Session>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AuthError::session_file(self.path.clone(), e.to_string())),
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| AuthError::session_file(self.path.clone(), e.to_string()))
    }

    pub async fn save(&self, session: &Session) -> AuthErrorResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AuthError::session_file(self.path.clone(), e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(session)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| AuthError::session_file(self.path.clone(), e.to_string()))
    }

    pub async fn clear(&self) -> AuthErrorResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::session_file(self.path.clone(), e.to_string())),
        }
    }
}
