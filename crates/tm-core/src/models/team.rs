//! Team entity - a named group of users that tasks can be scoped to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A team and its member list.
/// The creator is always a member; the store's insert trigger guarantees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// User ids, in the order they joined
    pub members: Vec<Uuid>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Team {
    pub fn has_member(&self, user_id: Uuid) -> bool {
        self.members.contains(&user_id)
    }
}
