use crate::Result as StoreErrorResult;

use async_trait::async_trait;
use tm_core::{ProfileRow, TaskInsert, TaskRow, TaskStatus, TeamInsert, TeamMemberRow, TeamRow};
use uuid::Uuid;

/// Table operations against the hosted database.
///
/// Row-level permissions are the backend's concern: every call runs as the
/// caller the implementation was built for.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    async fn select_profiles(&self) -> StoreErrorResult<Vec<ProfileRow>>;

    /// A single profile; `None` when no row has this id
    async fn select_profile(&self, id: Uuid) -> StoreErrorResult<Option<ProfileRow>>;

    async fn select_teams(&self) -> StoreErrorResult<Vec<TeamRow>>;

    async fn select_team_members(&self) -> StoreErrorResult<Vec<TeamMemberRow>>;

    async fn select_tasks(&self) -> StoreErrorResult<Vec<TaskRow>>;

    /// Insert a task and return the stored row with its generated id and timestamp
    async fn insert_task(&self, task: &TaskInsert) -> StoreErrorResult<TaskRow>;

    /// Set the status of the task with this id. No matching row is not an error.
    async fn update_task_status(&self, id: Uuid, status: TaskStatus) -> StoreErrorResult<()>;

    /// Insert a team; the backend adds the creator to `team_members`
    async fn insert_team(&self, team: &TeamInsert) -> StoreErrorResult<TeamRow>;

    /// Fails with code `23505` when the membership already exists
    async fn insert_team_member(&self, member: &TeamMemberRow) -> StoreErrorResult<()>;

    /// Run later calls as the holder of `access_token`, or anonymously on `None`
    fn set_access_token(&self, access_token: Option<&str>);
}
