//! Row shapes of the remote store's tables, as they travel over the wire.

pub mod profile_row;
pub mod task_insert;
pub mod task_row;
pub mod team_insert;
pub mod team_member_row;
pub mod team_row;
