use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `team_members` row, also the insert payload for a new membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMemberRow {
    pub team_id: Uuid,
    pub user_id: Uuid,
}
