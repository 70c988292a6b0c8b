use crate::{RemoteStore, Result as StoreErrorResult, StoreError, StoreOperation, UNIQUE_VIOLATION};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use tm_core::{ProfileRow, TaskInsert, TaskRow, TaskStatus, TeamInsert, TeamMemberRow, TeamRow};
use uuid::Uuid;

/// In-process stand-in for the hosted database.
///
/// Emulates what the backend does on its own: ids and timestamps are
/// generated on insert, inserting a team also inserts the creator's
/// membership, and `(team_id, user_id)` is unique. Failures can be injected
/// per operation. Cloned handles share the same tables.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<StoreInner>>,
}

#[derive(Default)]
struct StoreInner {
    profiles: Vec<ProfileRow>,
    teams: Vec<TeamRow>,
    team_members: Vec<TeamMemberRow>,
    tasks: Vec<TaskRow>,
    /// Error message returned by the next calls of each operation
    failures: HashMap<StoreOperation, String>,
    /// Every call in arrival order
    calls: Vec<StoreOperation>,
    access_token: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // The lock is never held across an await, so a poisoned guard still
    // holds consistent tables.
    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record the call and fail it when a failure is injected for it
    fn begin(inner: &mut StoreInner, operation: StoreOperation) -> StoreErrorResult<()> {
        inner.calls.push(operation);
        debug!("memory store: {}", operation);

        match inner.failures.get(&operation) {
            Some(message) => Err(StoreError::api(500, "XX000", message.clone())),
            None => Ok(()),
        }
    }

    // =========================================================================
    // Seeding
    // =========================================================================

    /// Insert or replace a profile, the way the sign-up trigger does
    pub fn insert_profile(&self, row: ProfileRow) {
        let mut inner = self.lock();
        inner.profiles.retain(|p| p.id != row.id);
        inner.profiles.push(row);
    }

    /// Seed a team row with its memberships as given, bypassing the trigger
    pub fn seed_team(&self, row: TeamRow, members: &[Uuid]) {
        let mut inner = self.lock();
        let team_id = row.id;
        inner.teams.push(row);
        inner
            .team_members
            .extend(members.iter().map(|&user_id| TeamMemberRow { team_id, user_id }));
    }

    pub fn seed_task(&self, row: TaskRow) {
        self.lock().tasks.push(row);
    }

    /// Delete a task behind the client's back, as another session would
    pub fn remove_task(&self, id: Uuid) {
        self.lock().tasks.retain(|t| t.id != id);
    }

    // =========================================================================
    // Failure injection and inspection
    // =========================================================================

    /// Make every call of `operation` fail with `message` until cleared
    pub fn fail(&self, operation: StoreOperation, message: &str) {
        self.lock().failures.insert(operation, message.to_string());
    }

    pub fn clear_failure(&self, operation: StoreOperation) {
        self.lock().failures.remove(&operation);
    }

    pub fn clear_failures(&self) {
        self.lock().failures.clear();
    }

    /// Operations called so far, in order
    pub fn calls(&self) -> Vec<StoreOperation> {
        self.lock().calls.clone()
    }

    /// Token of the caller the store currently acts for
    pub fn access_token(&self) -> Option<String> {
        self.lock().access_token.clone()
    }

    pub fn profiles(&self) -> Vec<ProfileRow> {
        self.lock().profiles.clone()
    }

    pub fn teams(&self) -> Vec<TeamRow> {
        self.lock().teams.clone()
    }

    pub fn team_members(&self) -> Vec<TeamMemberRow> {
        self.lock().team_members.clone()
    }

    pub fn tasks(&self) -> Vec<TaskRow> {
        self.lock().tasks.clone()
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn select_profiles(&self) -> StoreErrorResult<Vec<ProfileRow>> {
        let mut inner = self.lock();
        Self::begin(&mut inner, StoreOperation::SelectProfiles)?;
        Ok(inner.profiles.clone())
    }

    async fn select_profile(&self, id: Uuid) -> StoreErrorResult<Option<ProfileRow>> {
        let mut inner = self.lock();
        Self::begin(&mut inner, StoreOperation::SelectProfile)?;
        Ok(inner.profiles.iter().find(|p| p.id == id).cloned())
    }

    async fn select_teams(&self) -> StoreErrorResult<Vec<TeamRow>> {
        let mut inner = self.lock();
        Self::begin(&mut inner, StoreOperation::SelectTeams)?;
        Ok(inner.teams.clone())
    }

    async fn select_team_members(&self) -> StoreErrorResult<Vec<TeamMemberRow>> {
        let mut inner = self.lock();
        Self::begin(&mut inner, StoreOperation::SelectTeamMembers)?;
        Ok(inner.team_members.clone())
    }

    async fn select_tasks(&self) -> StoreErrorResult<Vec<TaskRow>> {
        let mut inner = self.lock();
        Self::begin(&mut inner, StoreOperation::SelectTasks)?;
        Ok(inner.tasks.clone())
    }

    async fn insert_task(&self, task: &TaskInsert) -> StoreErrorResult<TaskRow> {
        let mut inner = self.lock();
        Self::begin(&mut inner, StoreOperation::InsertTask)?;

        let row = TaskRow {
            id: Uuid::new_v4(),
            title: task.title.clone(),
            description: Some(task.description.clone()),
            assignee_id: task.assignee_id,
            team_id: task.team_id,
            status: task.status,
            priority: task.priority,
            created_by: task.created_by,
            created_at: Utc::now(),
            due_date: task.due_date,
        };
        inner.tasks.push(row.clone());

        Ok(row)
    }

    async fn update_task_status(&self, id: Uuid, status: TaskStatus) -> StoreErrorResult<()> {
        let mut inner = self.lock();
        Self::begin(&mut inner, StoreOperation::UpdateTaskStatus)?;

        if let Some(task) = inner.tasks.iter_mut().find(|t| t.id == id) {
            task.status = status;
        }

        Ok(())
    }

    async fn insert_team(&self, team: &TeamInsert) -> StoreErrorResult<TeamRow> {
        let mut inner = self.lock();
        Self::begin(&mut inner, StoreOperation::InsertTeam)?;

        let row = TeamRow {
            id: Uuid::new_v4(),
            name: team.name.clone(),
            description: Some(team.description.clone()),
            created_by: team.created_by,
            created_at: Utc::now(),
        };
        inner.teams.push(row.clone());
        inner.team_members.push(TeamMemberRow {
            team_id: row.id,
            user_id: row.created_by,
        });

        Ok(row)
    }

    async fn insert_team_member(&self, member: &TeamMemberRow) -> StoreErrorResult<()> {
        let mut inner = self.lock();
        Self::begin(&mut inner, StoreOperation::InsertTeamMember)?;

        if inner.team_members.contains(member) {
            return Err(StoreError::api(
                409,
                UNIQUE_VIOLATION,
                "duplicate key value violates unique constraint \"team_members_pkey\"",
            ));
        }
        inner.team_members.push(*member);

        Ok(())
    }

    fn set_access_token(&self, access_token: Option<&str>) {
        self.lock().access_token = access_token.map(String::from);
    }
}
