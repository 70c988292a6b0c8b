use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Identity API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Session file {path}: {message} {location}")]
    SessionFile {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid login credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("User already registered: {email} {location}")]
    AlreadyRegistered {
        email: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        AuthError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        AuthError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        AuthError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn session_file(path: PathBuf, message: impl Into<String>) -> Self {
        AuthError::SessionFile {
            path,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message fit for a user-facing notification (no source location)
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { message, .. } => message.clone(),
            Self::Api { message, .. } => message.clone(),
            Self::Json { message, .. } => format!("Unexpected response: {message}"),
            Self::SessionFile { message, .. } => message.clone(),
            Self::InvalidCredentials { .. } => "Invalid login credentials".to_string(),
            Self::AlreadyRegistered { .. } => "User already registered".to_string(),
        }
    }
}

impl From<reqwest::Error> for AuthError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        AuthError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for AuthError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        AuthError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
