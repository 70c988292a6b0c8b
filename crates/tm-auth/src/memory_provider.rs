use crate::{
    AuthError, AuthUser, IdentityProvider, Result as AuthErrorResult, Session,
    SessionBroadcaster, SessionEvent, SignUpMetadata,
};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use error_location::ErrorLocation;
use serde_json::json;
use tokio::sync::{RwLock, broadcast};
use uuid::Uuid;

/// Called after an account is created, the way the backend's profile
/// trigger fires on sign-up.
pub type SignUpHook = Arc<dyn Fn(&AuthUser, &SignUpMetadata) + Send + Sync>;

/// In-process identity provider for tests and offline runs.
/// Accounts sign in immediately on sign-up; sessions last one hour.
#[derive(Clone)]
pub struct InMemoryIdentityProvider {
    inner: Arc<RwLock<ProviderInner>>,
    events: SessionBroadcaster,
    on_sign_up: Option<SignUpHook>,
}

struct ProviderInner {
    /// Accounts by e-mail
    accounts: HashMap<String, Account>,
    session: Option<Session>,
    /// Message returned by every call while set
    outage: Option<String>,
}

struct Account {
    password: String,
    user: AuthUser,
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(ProviderInner {
                accounts: HashMap::new(),
                session: None,
                outage: None,
            })),
            events: SessionBroadcaster::new(),
            on_sign_up: None,
        }
    }

    pub fn with_sign_up_hook(mut self, hook: SignUpHook) -> Self {
        self.on_sign_up = Some(hook);
        self
    }

    /// Make every call fail with a 503 carrying `message`; None restores service
    pub async fn set_outage(&self, message: Option<&str>) {
        self.inner.write().await.outage = message.map(String::from);
    }

    /// Install a session directly, bypassing the password check
    pub async fn set_session(&self, session: Option<Session>) {
        self.inner.write().await.session = session;
    }

    pub async fn account_count(&self) -> usize {
        self.inner.read().await.accounts.len()
    }

    fn new_session(user: AuthUser) -> Session {
        Session {
            access_token: format!("access-{}", Uuid::new_v4()),
            refresh_token: format!("refresh-{}", Uuid::new_v4()),
            expires_at: Utc::now() + Duration::hours(1),
            user,
        }
    }

    #[track_caller]
    fn check_outage(inner: &ProviderInner) -> AuthErrorResult<()> {
        match inner.outage {
            Some(ref message) => Err(AuthError::Api {
                status: 503,
                message: message.clone(),
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Ok(()),
        }
    }
}

impl Default for InMemoryIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: SignUpMetadata,
    ) -> AuthErrorResult<Option<Session>> {
        let session = {
            let mut inner = self.inner.write().await;
            Self::check_outage(&inner)?;

            if inner.accounts.contains_key(email) {
                return Err(AuthError::AlreadyRegistered {
                    email: email.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            let user = AuthUser {
                id: Uuid::new_v4(),
                email: Some(email.to_string()),
                user_metadata: json!({ "name": metadata.name, "role": metadata.role }),
            };
            inner.accounts.insert(
                email.to_string(),
                Account {
                    password: password.to_string(),
                    user: user.clone(),
                },
            );

            if let Some(ref hook) = self.on_sign_up {
                hook(&user, &metadata);
            }

            let session = Self::new_session(user);
            inner.session = Some(session.clone());
            session
        };

        self.events.publish(SessionEvent::SignedIn(session.clone()));
        Ok(Some(session))
    }

    async fn sign_in(&self, email: &str, password: &str) -> AuthErrorResult<Session> {
        let session = {
            let mut inner = self.inner.write().await;
            Self::check_outage(&inner)?;

            let user = match inner.accounts.get(email) {
                Some(account) if account.password == password => account.user.clone(),
                _ => return Err(AuthError::invalid_credentials()),
            };

            let session = Self::new_session(user);
            inner.session = Some(session.clone());
            session
        };

        self.events.publish(SessionEvent::SignedIn(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) -> AuthErrorResult<()> {
        {
            let mut inner = self.inner.write().await;
            Self::check_outage(&inner)?;
            inner.session = None;
        }

        self.events.publish(SessionEvent::SignedOut);
        Ok(())
    }

    async fn get_session(&self) -> AuthErrorResult<Option<Session>> {
        let inner = self.inner.read().await;
        Self::check_outage(&inner)?;

        Ok(inner
            .session
            .clone()
            .filter(|s| !s.is_expired(Utc::now())))
    }

    fn on_session_change(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }
}
