use crate::{Result as AuthErrorResult, Session, SessionEvent, SignUpMetadata};

use async_trait::async_trait;
use tokio::sync::broadcast;

/// The hosted identity service, as seen by the client.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Register an account. Returns the new session when the service signs
    /// the user in straight away, None when it waits for e-mail confirmation.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: SignUpMetadata,
    ) -> AuthErrorResult<Option<Session>>;

    async fn sign_in(&self, email: &str, password: &str) -> AuthErrorResult<Session>;

    async fn sign_out(&self) -> AuthErrorResult<()>;

    /// Current session, None when signed out or expired
    async fn get_session(&self) -> AuthErrorResult<Option<Session>>;

    fn on_session_change(&self) -> broadcast::Receiver<SessionEvent>;
}
