use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Team input before the store assigns `id` and `created_at`.
///
/// `members` is informational only: the created team always starts with
/// exactly its creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTeam {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub members: Vec<Uuid>,
    pub created_by: Uuid,
}

impl NewTeam {
    pub fn new(name: impl Into<String>, description: impl Into<String>, created_by: Uuid) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            members: vec![created_by],
            created_by,
        }
    }
}
