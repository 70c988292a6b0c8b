use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use tm_auth::AuthError;
use tm_config::ConfigError;
use tm_core::CoreError;
use tm_sync::SyncError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source}")]
    Config {
        #[source]
        source: ConfigError,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Auth {
        #[source]
        source: AuthError,
    },

    #[error("{}", .source.user_message())]
    Sync {
        #[source]
        source: SyncError,
    },

    #[error("Invalid argument: {source}")]
    Core {
        #[source]
        source: CoreError,
    },

    #[error("JSON serialization error: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid argument {name}: {message} {location}")]
    InvalidArgument {
        name: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Team context did not finish loading {location}")]
    NotReady { location: ErrorLocation },

    #[error("Not signed in. Run `tm auth login` first. {location}")]
    NotSignedIn { location: ErrorLocation },

    #[error("{kind} not found: {id} {location}")]
    NotFound {
        kind: String,
        id: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_argument<S: Into<String>>(name: &str, message: S) -> Self {
        CliError::InvalidArgument {
            name: name.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_ready() -> Self {
        CliError::NotReady {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_signed_in() -> Self {
        CliError::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(kind: &str, id: impl ToString) -> Self {
        CliError::NotFound {
            kind: kind.to_string(),
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(source: ConfigError) -> Self {
        CliError::Config { source }
    }
}

impl From<AuthError> for CliError {
    fn from(source: AuthError) -> Self {
        CliError::Auth { source }
    }
}

impl From<SyncError> for CliError {
    fn from(source: SyncError) -> Self {
        CliError::Sync { source }
    }
}

impl From<CoreError> for CliError {
    fn from(source: CoreError) -> Self {
        CliError::Core { source }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        CliError::Json { source }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
