use crate::{
    Notification, Notifier, Result as SyncErrorResult, Snapshot, SyncError, TeamStore,
};

use std::sync::Arc;

use log::{debug, error, info, warn};
use serde::Serialize;
use tm_auth::{AuthError, IdentityProvider, Session, SessionEvent, SignUpMetadata};
use tm_core::mappers::to_user;
use tm_core::{NewTask, NewTeam, Task, TaskStatus, Team, User};
use tm_store::RemoteStore;
use tokio::sync::{RwLock, broadcast::error::RecvError};
use tokio::task::JoinHandle;
use uuid::Uuid;

pub const LOAD_USER_FAILED: &str = "Failed to load user";
pub const SIGN_IN_FAILED: &str = "Failed to sign in";
pub const SIGN_UP_FAILED: &str = "Failed to create account";
pub const SIGN_OUT_FAILED: &str = "Failed to sign out";

const LOAD_USER_FALLBACK: &str = "An error occurred while loading your profile.";
const SIGN_IN_FALLBACK: &str = "Check your e-mail and password and try again.";
const SIGN_UP_FALLBACK: &str = "An error occurred while creating the account.";
const SIGN_OUT_FALLBACK: &str = "An error occurred while signing out.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// Current user or initial data still being resolved
    Loading,
    Ready,
}

/// Read-only view handed to consumers once the context is ready
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextView {
    pub current_user: Option<User>,
    pub users: Vec<User>,
    pub teams: Vec<Team>,
    pub tasks: Vec<Task>,
    pub selected_team: Option<Uuid>,
    pub is_loading: bool,
}

/// The team store plus the signed-in user, as one surface
pub struct TeamContext {
    inner: Arc<RwLock<ContextInner>>,
    team_store: TeamStore,
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn RemoteStore>,
    notifier: Arc<dyn Notifier>,
}

struct ContextInner {
    state: ContextState,
    current_user: Option<User>,
}

impl TeamContext {
    /// A context that has not loaded anything yet
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn RemoteStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ContextInner {
                state: ContextState::Loading,
                current_user: None,
            })),
            team_store: TeamStore::new(Arc::clone(&store), Arc::clone(&notifier)),
            identity,
            store,
            notifier,
        }
    }

    /// Build a context and resolve the current user alongside the initial load
    pub async fn initialize(
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn RemoteStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let context = Self::new(identity, store, notifier);
        if let Err(e) = context.load().await {
            debug!("Initial load failed: {}", e);
        }
        context
    }

    /// Resolve the current user and load the collections concurrently.
    /// Failures are already reported; the context becomes ready either way
    /// and the data load result is returned.
    pub async fn load(&self) -> SyncErrorResult<()> {
        self.inner.write().await.state = ContextState::Loading;

        let (current_user, loaded) =
            tokio::join!(self.resolve_current_user(), self.team_store.load());

        let mut inner = self.inner.write().await;
        inner.current_user = current_user;
        inner.state = ContextState::Ready;

        loaded
    }

    pub async fn state(&self) -> ContextState {
        self.inner.read().await.state
    }

    /// `None` while loading
    pub async fn view(&self) -> Option<ContextView> {
        let (state, current_user) = {
            let inner = self.inner.read().await;
            (inner.state, inner.current_user.clone())
        };
        if state == ContextState::Loading {
            return None;
        }

        let snapshot = self.team_store.snapshot().await;
        let Snapshot {
            teams,
            users,
            tasks,
        } = Snapshot::clone(&snapshot);

        Some(ContextView {
            current_user,
            users,
            teams,
            tasks,
            selected_team: self.team_store.selected_team().await,
            is_loading: self.team_store.is_loading().await,
        })
    }

    pub async fn current_user(&self) -> Option<User> {
        self.inner.read().await.current_user.clone()
    }

    pub fn team_store(&self) -> &TeamStore {
        &self.team_store
    }

    // =========================================================================
    // Current user
    // =========================================================================

    #[track_caller]
    fn report_auth(&self, title: &str, fallback: &str, err: AuthError) -> SyncError {
        error!("{}: {}", title, err);
        let description = Notification::describe(&err.user_message(), fallback);
        self.notifier
            .notify(Notification::destructive(title, description.clone()));
        SyncError::auth(title, description, err)
    }

    /// Point the store at the session's token so reads run as that user
    fn follow_session(&self, session: Option<&Session>) {
        self.store
            .set_access_token(session.map(|s| s.access_token.as_str()));
    }

    async fn resolve_current_user(&self) -> Option<User> {
        match self.identity.get_session().await {
            Ok(Some(session)) => {
                self.follow_session(Some(&session));
                self.lookup_profile(session.user_id()).await
            }
            Ok(None) => {
                debug!("No active session");
                None
            }
            Err(e) => {
                self.report_auth(LOAD_USER_FAILED, LOAD_USER_FALLBACK, e);
                None
            }
        }
    }

    async fn lookup_profile(&self, user_id: Uuid) -> Option<User> {
        match self.store.select_profile(user_id).await {
            Ok(Some(row)) => Some(to_user(row)),
            Ok(None) => {
                warn!("No profile for signed-in user {}", user_id);
                None
            }
            Err(e) => {
                error!("{}: {}", LOAD_USER_FAILED, e);
                let description = Notification::describe(&e.user_message(), LOAD_USER_FALLBACK);
                self.notifier
                    .notify(Notification::destructive(LOAD_USER_FAILED, description));
                None
            }
        }
    }

    async fn set_current_user(&self, user: Option<User>) {
        self.inner.write().await.current_user = user;
    }

    /// Follow a sign-in or sign-out reported by the identity provider
    pub async fn handle_session_event(&self, event: SessionEvent) {
        match event {
            SessionEvent::SignedIn(session) => {
                self.follow_session(Some(&session));
                let user = self.lookup_profile(session.user_id()).await;
                self.set_current_user(user).await;
            }
            SessionEvent::SignedOut => {
                self.follow_session(None);
                self.set_current_user(None).await
            }
        }
    }

    /// Track session changes in the background until the provider goes away
    pub fn watch_sessions(&self) -> JoinHandle<()> {
        let mut events = self.identity.on_session_change();
        let context = self.clone();

        tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => context.handle_session_event(event).await,
                    Err(RecvError::Lagged(missed)) => {
                        warn!("Session watcher missed {} events, re-reading session", missed);
                        let user = context.resolve_current_user().await;
                        context.set_current_user(user).await;
                    }
                    Err(RecvError::Closed) => {
                        debug!("Session events closed");
                        break;
                    }
                }
            }
        })
    }

    // =========================================================================
    // Account
    // =========================================================================

    pub async fn sign_in(&self, email: &str, password: &str) -> SyncErrorResult<Session> {
        let session = self
            .identity
            .sign_in(email, password)
            .await
            .map_err(|e| self.report_auth(SIGN_IN_FAILED, SIGN_IN_FALLBACK, e))?;

        self.follow_session(Some(&session));
        let user = self.lookup_profile(session.user_id()).await;
        let greeting = match user {
            Some(ref u) => format!("Welcome back, {}.", u.name),
            None => "Welcome back.".to_string(),
        };
        self.set_current_user(user).await;
        self.notifier.notify(Notification::new("Signed in", greeting));

        Ok(session)
    }

    /// Register a member account. `None` when the provider wants the
    /// address confirmed before the first sign-in.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> SyncErrorResult<Option<Session>> {
        let session = self
            .identity
            .sign_up(email, password, SignUpMetadata::member(name))
            .await
            .map_err(|e| self.report_auth(SIGN_UP_FAILED, SIGN_UP_FALLBACK, e))?;

        let description = match session {
            Some(ref s) => {
                self.follow_session(Some(s));
                let user = self.lookup_profile(s.user_id()).await;
                self.set_current_user(user).await;
                "Your account is ready.".to_string()
            }
            None => "Check your e-mail to confirm the account.".to_string(),
        };
        info!("Registered {}", email);
        self.notifier
            .notify(Notification::new("Account created", description));

        Ok(session)
    }

    pub async fn sign_out(&self) -> SyncErrorResult<()> {
        let result = self.identity.sign_out().await;
        self.follow_session(None);
        self.set_current_user(None).await;

        result.map_err(|e| self.report_auth(SIGN_OUT_FAILED, SIGN_OUT_FALLBACK, e))?;
        self.notifier
            .notify(Notification::new("Signed out", "See you soon."));

        Ok(())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub async fn add_task(&self, task: NewTask) -> SyncErrorResult<Task> {
        self.team_store.add_task(task).await
    }

    pub async fn update_task_status(&self, task_id: Uuid, status: TaskStatus) -> SyncErrorResult<()> {
        self.team_store.update_task_status(task_id, status).await
    }

    pub async fn create_team(&self, team: NewTeam) -> SyncErrorResult<Team> {
        self.team_store.create_team(team).await
    }

    pub async fn add_user_to_team(&self, team_id: Uuid, user_id: Uuid) -> SyncErrorResult<()> {
        self.team_store.add_user_to_team(team_id, user_id).await
    }

    pub async fn refresh_data(&self) -> SyncErrorResult<()> {
        self.team_store.refresh_data().await
    }

    pub async fn set_selected_team(&self, team_id: Option<Uuid>) {
        self.team_store.set_selected_team(team_id).await
    }
}

impl Clone for TeamContext {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            team_store: self.team_store.clone(),
            identity: Arc::clone(&self.identity),
            store: Arc::clone(&self.store),
            notifier: Arc::clone(&self.notifier),
        }
    }
}
