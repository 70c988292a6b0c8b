use crate::{Notifier, Result as SyncErrorResult, Snapshot, data_access};

use std::sync::Arc;

use log::info;
use tm_core::{NewTask, NewTeam, Task, TaskStatus, Team};
use tm_store::RemoteStore;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Owner of the in-memory teams, tasks and users.
///
/// Mutations go to the remote store first and are applied locally only when
/// the store accepts them. The lock is never held across a store call.
pub struct TeamStore {
    inner: Arc<RwLock<StoreState>>,
    store: Arc<dyn RemoteStore>,
    notifier: Arc<dyn Notifier>,
}

struct StoreState {
    snapshot: Arc<Snapshot>,
    selected_team: Option<Uuid>,
    is_loading: bool,
}

impl TeamStore {
    pub fn new(store: Arc<dyn RemoteStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreState {
                snapshot: Arc::new(Snapshot::default()),
                selected_team: None,
                is_loading: false,
            })),
            store,
            notifier,
        }
    }

    /// Initial fetch; `is_loading` is set for its duration
    pub async fn load(&self) -> SyncErrorResult<()> {
        self.inner.write().await.is_loading = true;
        let result = self.fetch_and_replace().await;
        self.inner.write().await.is_loading = false;
        result
    }

    /// Fetch everything again and replace the collections wholesale.
    /// A failed fetch leaves the collections empty.
    pub async fn refresh_data(&self) -> SyncErrorResult<()> {
        self.fetch_and_replace().await
    }

    async fn fetch_and_replace(&self) -> SyncErrorResult<()> {
        let result = data_access::fetch_all(self.store.as_ref(), self.notifier.as_ref()).await;

        let (snapshot, outcome) = match result {
            Ok(snapshot) => (snapshot, Ok(())),
            Err(e) => (Snapshot::default(), Err(e)),
        };
        self.inner.write().await.snapshot = Arc::new(snapshot);

        outcome
    }

    /// Swap in a snapshot derived from the latest one
    async fn apply<F>(&self, change: F)
    where
        F: FnOnce(&Snapshot) -> Snapshot,
    {
        let mut inner = self.inner.write().await;
        inner.snapshot = Arc::new(change(&inner.snapshot));
    }

    pub async fn add_task(&self, task: NewTask) -> SyncErrorResult<Task> {
        let created =
            data_access::add_task(self.store.as_ref(), self.notifier.as_ref(), &task).await?;
        info!("Created task {} ({})", created.id, created.title);

        let appended = created.clone();
        self.apply(move |s| s.with_task(appended)).await;

        Ok(created)
    }

    pub async fn update_task_status(&self, task_id: Uuid, status: TaskStatus) -> SyncErrorResult<()> {
        data_access::update_task_status(
            self.store.as_ref(),
            self.notifier.as_ref(),
            task_id,
            status,
        )
        .await?;
        info!("Task {} moved to {}", task_id, status);

        self.apply(|s| s.with_task_status(task_id, status)).await;
        Ok(())
    }

    pub async fn create_team(&self, team: NewTeam) -> SyncErrorResult<Team> {
        let created =
            data_access::create_team(self.store.as_ref(), self.notifier.as_ref(), &team).await?;
        info!("Created team {} ({})", created.id, created.name);

        let appended = created.clone();
        self.apply(move |s| s.with_team(appended)).await;

        Ok(created)
    }

    pub async fn add_user_to_team(&self, team_id: Uuid, user_id: Uuid) -> SyncErrorResult<()> {
        data_access::add_user_to_team(
            self.store.as_ref(),
            self.notifier.as_ref(),
            team_id,
            user_id,
        )
        .await?;
        info!("Added user {} to team {}", user_id, team_id);

        self.apply(|s| s.with_member(team_id, user_id)).await;
        Ok(())
    }

    pub async fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.inner.read().await.snapshot)
    }

    pub async fn selected_team(&self) -> Option<Uuid> {
        self.inner.read().await.selected_team
    }

    pub async fn set_selected_team(&self, team_id: Option<Uuid>) {
        self.inner.write().await.selected_team = team_id;
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.read().await.is_loading
    }
}

impl Clone for TeamStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            store: Arc::clone(&self.store),
            notifier: Arc::clone(&self.notifier),
        }
    }
}
