//! One async operation per user intent against the remote store.
//!
//! Every failure is logged, reported through the notifier as a destructive
//! notification, and returned to the caller as a `SyncError`.

use crate::{Notification, Notifier, Result as SyncErrorResult, Snapshot, SyncError};

use log::{debug, error};
use tm_core::mappers::{
    task_insert, team_insert, team_member_insert, to_created_team, to_task, to_team, to_user,
};
use tm_core::{NewTask, NewTeam, Task, TaskStatus, Team};
use tm_store::{RemoteStore, Result as StoreErrorResult, StoreError};
use uuid::Uuid;

pub const LOAD_FAILED: &str = "Failed to load data";
pub const CREATE_TASK_FAILED: &str = "Failed to create task";
pub const UPDATE_TASK_FAILED: &str = "Failed to update task";
pub const CREATE_TEAM_FAILED: &str = "Failed to create team";
pub const ADD_MEMBER_FAILED: &str = "Failed to add member";

const LOAD_FALLBACK: &str = "An error occurred while loading teams and tasks.";
const CREATE_TASK_FALLBACK: &str = "An error occurred while creating the task.";
const UPDATE_TASK_FALLBACK: &str = "An error occurred while updating the task status.";
const CREATE_TEAM_FALLBACK: &str = "An error occurred while creating the team.";
const ADD_MEMBER_FALLBACK: &str = "An error occurred while adding the member to the team.";

/// Log the failure, notify, and wrap it
#[track_caller]
fn report(
    notifier: &dyn Notifier,
    title: &str,
    fallback: &str,
    err: StoreError,
) -> SyncError {
    error!("{}: {}", title, err);
    let description = Notification::describe(&err.user_message(), fallback);
    notifier.notify(Notification::destructive(title, description.clone()));
    SyncError::store(title, description, err)
}

/// Read every table and map the rows into a snapshot.
/// Tables are read one after another; the first failure stops the load.
pub async fn fetch_all(
    store: &dyn RemoteStore,
    notifier: &dyn Notifier,
) -> SyncErrorResult<Snapshot> {
    match fetch_rows(store).await {
        Ok(snapshot) => {
            debug!(
                "Loaded {} teams, {} users, {} tasks",
                snapshot.teams.len(),
                snapshot.users.len(),
                snapshot.tasks.len()
            );
            Ok(snapshot)
        }
        Err(e) => Err(report(notifier, LOAD_FAILED, LOAD_FALLBACK, e)),
    }
}

async fn fetch_rows(store: &dyn RemoteStore) -> StoreErrorResult<Snapshot> {
    let team_rows = store.select_teams().await?;
    let profile_rows = store.select_profiles().await?;
    let task_rows = store.select_tasks().await?;
    let memberships = store.select_team_members().await?;

    let teams = team_rows
        .into_iter()
        .map(|row| to_team(row, &memberships))
        .collect();
    let users = profile_rows.into_iter().map(to_user).collect();
    let tasks = task_rows.into_iter().map(to_task).collect();

    Ok(Snapshot::new(teams, users, tasks))
}

/// Insert a task; the returned task carries the store's id and timestamp
pub async fn add_task(
    store: &dyn RemoteStore,
    notifier: &dyn Notifier,
    task: &NewTask,
) -> SyncErrorResult<Task> {
    match store.insert_task(&task_insert(task)).await {
        Ok(row) => Ok(to_task(row)),
        Err(e) => Err(report(notifier, CREATE_TASK_FAILED, CREATE_TASK_FALLBACK, e)),
    }
}

pub async fn update_task_status(
    store: &dyn RemoteStore,
    notifier: &dyn Notifier,
    task_id: Uuid,
    status: TaskStatus,
) -> SyncErrorResult<()> {
    store
        .update_task_status(task_id, status)
        .await
        .map_err(|e| report(notifier, UPDATE_TASK_FAILED, UPDATE_TASK_FALLBACK, e))
}

/// Insert a team. Submitted members are ignored: the new team has its
/// creator as the only member.
pub async fn create_team(
    store: &dyn RemoteStore,
    notifier: &dyn Notifier,
    team: &NewTeam,
) -> SyncErrorResult<Team> {
    match store.insert_team(&team_insert(team)).await {
        Ok(row) => Ok(to_created_team(row)),
        Err(e) => Err(report(notifier, CREATE_TEAM_FAILED, CREATE_TEAM_FALLBACK, e)),
    }
}

/// Insert a membership. An existing membership is a store error and is
/// reported like any other.
pub async fn add_user_to_team(
    store: &dyn RemoteStore,
    notifier: &dyn Notifier,
    team_id: Uuid,
    user_id: Uuid,
) -> SyncErrorResult<()> {
    store
        .insert_team_member(&team_member_insert(team_id, user_id))
        .await
        .map_err(|e| report(notifier, ADD_MEMBER_FAILED, ADD_MEMBER_FALLBACK, e))
}
