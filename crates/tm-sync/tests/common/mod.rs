#![allow(dead_code)]

use tm_auth::{AuthUser, IdentityProvider, InMemoryIdentityProvider, SignUpMetadata};
use tm_core::{ProfileRow, TaskPriority, TaskRow, TaskStatus, TeamRow, UserRole};
use tm_store::{MemoryStore, RemoteStore};
use tm_sync::{Notifier, RecordingNotifier, TeamContext, TeamStore};

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

/// In-memory backend: identity provider, store and a notifier that records.
/// Signing up creates the profile row the way the backend trigger does.
pub struct TestWorld {
    pub identity: InMemoryIdentityProvider,
    pub store: MemoryStore,
    pub notifier: RecordingNotifier,
}

impl TestWorld {
    pub fn new() -> Self {
        let store = MemoryStore::new();
        let profiles = store.clone();
        let identity = InMemoryIdentityProvider::new().with_sign_up_hook(Arc::new(
            move |user: &AuthUser, metadata: &SignUpMetadata| {
                let email = user.email.clone().unwrap_or_default();
                profiles.insert_profile(ProfileRow {
                    id: user.id,
                    name: metadata.name.clone(),
                    role: UserRole::for_email(&email),
                    email,
                    avatar: None,
                });
            },
        ));

        Self {
            identity,
            store,
            notifier: RecordingNotifier::new(),
        }
    }

    pub fn identity(&self) -> Arc<dyn IdentityProvider> {
        Arc::new(self.identity.clone())
    }

    pub fn remote(&self) -> Arc<dyn RemoteStore> {
        Arc::new(self.store.clone())
    }

    pub fn notifications(&self) -> Arc<dyn Notifier> {
        Arc::new(self.notifier.clone())
    }

    pub fn team_store(&self) -> TeamStore {
        TeamStore::new(self.remote(), self.notifications())
    }

    pub async fn context(&self) -> TeamContext {
        TeamContext::initialize(self.identity(), self.remote(), self.notifications()).await
    }

    /// Seed a profile without an account
    pub fn seed_user(&self, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.store.insert_profile(ProfileRow {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            role: UserRole::Member,
            avatar: None,
        });
        id
    }

    /// Seed a team with exactly these members
    pub fn seed_team(&self, name: &str, members: &[Uuid]) -> Uuid {
        let id = Uuid::new_v4();
        self.store.seed_team(
            TeamRow {
                id,
                name: name.to_string(),
                description: Some(format!("{name} team")),
                created_by: members.first().copied().unwrap_or_else(Uuid::new_v4),
                created_at: Utc::now(),
            },
            members,
        );
        id
    }

    pub fn seed_task(&self, title: &str, user: Uuid, team_id: Option<Uuid>) -> Uuid {
        let id = Uuid::new_v4();
        self.store.seed_task(TaskRow {
            id,
            title: title.to_string(),
            description: None,
            assignee_id: user,
            team_id,
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            created_by: user,
            created_at: Utc::now(),
            due_date: None,
        });
        id
    }
}
