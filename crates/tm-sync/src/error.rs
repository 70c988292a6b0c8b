use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use tm_auth::AuthError;
use tm_store::StoreError;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("{title}: {message} {location}")]
    Store {
        title: String,
        message: String,
        location: ErrorLocation,
        #[source]
        source: StoreError,
    },

    #[error("{title}: {message} {location}")]
    Auth {
        title: String,
        message: String,
        location: ErrorLocation,
        #[source]
        source: AuthError,
    },
}

impl SyncError {
    #[track_caller]
    pub fn store(title: &str, message: impl Into<String>, source: StoreError) -> Self {
        SyncError::Store {
            title: title.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn auth(title: &str, message: impl Into<String>, source: AuthError) -> Self {
        SyncError::Auth {
            title: title.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    /// Notification title the failure was reported under
    pub fn title(&self) -> &str {
        match self {
            Self::Store { title, .. } | Self::Auth { title, .. } => title,
        }
    }

    /// Notification description the failure was reported with
    pub fn user_message(&self) -> &str {
        match self {
            Self::Store { message, .. } | Self::Auth { message, .. } => message,
        }
    }

    /// Store error code, when the backend rejected the call
    pub fn store_code(&self) -> Option<&str> {
        match self {
            Self::Store { source, .. } => source.code(),
            Self::Auth { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
