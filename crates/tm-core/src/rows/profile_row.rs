use crate::UserRole;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `profiles` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub avatar: Option<String>,
}
