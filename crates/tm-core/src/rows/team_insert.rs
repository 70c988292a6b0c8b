use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Insert payload for `teams`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInsert {
    pub name: String,
    pub description: String,
    pub created_by: Uuid,
}
