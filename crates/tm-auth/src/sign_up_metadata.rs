use tm_core::UserRole;

use serde::{Deserialize, Serialize};

/// Profile data attached to a new account.
/// The backend's profile trigger reads it when creating the `profiles` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpMetadata {
    pub name: String,
    pub role: UserRole,
}

impl SignUpMetadata {
    /// Accounts registered through the app ask for the member role; the
    /// backend promotes "admin" addresses on its own.
    pub fn member(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: UserRole::Member,
        }
    }
}
