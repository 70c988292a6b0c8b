use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Postgres SQLSTATE for a unique-key violation
pub const UNIQUE_VIOLATION: &str = "23505";

/// PostgREST code for "no rows" on a single-object request
pub(crate) const NO_ROWS: &str = "PGRST116";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Store API error: {message} (code: {code}, status: {status}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        details: Option<String>,
        hint: Option<String>,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        StoreError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        StoreError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError::Api {
            status,
            code: code.into(),
            message: message.into(),
            details: None,
            hint: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Backend error code, when the store answered with one
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        self.code() == Some(UNIQUE_VIOLATION)
    }

    /// The backend's own message, without source location.
    /// Empty when the backend sent none.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { message, .. } => message.clone(),
            Self::Api { message, .. } => message.clone(),
            Self::Json { message, .. } => format!("Unexpected response: {message}"),
        }
    }
}

impl From<reqwest::Error> for StoreError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        StoreError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        StoreError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
