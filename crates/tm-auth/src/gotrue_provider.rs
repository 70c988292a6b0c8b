use crate::{
    AuthError, AuthUser, IdentityProvider, Result as AuthErrorResult, Session,
    SessionBroadcaster, SessionEvent, SessionFile, SignUpMetadata,
};

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use log::{debug, info, warn};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::{RwLock, broadcast};

/// Identity provider backed by the GoTrue REST API (`<project>/auth/v1`).
///
/// The session lives in memory and, when a session file is configured, is
/// mirrored to disk so later processes start signed in.
pub struct GoTrueProvider {
    pub base_url: String,
    anon_key: String,
    client: ReqwestClient,
    session: RwLock<Option<Session>>,
    session_file: Option<SessionFile>,
    events: SessionBroadcaster,
}

/// Token grant response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: AuthUser,
}

impl TokenResponse {
    fn into_session(self) -> Session {
        let expires_at = self
            .expires_at
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
            .unwrap_or_else(|| Utc::now() + Duration::seconds(self.expires_in.unwrap_or(3600)));

        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

impl GoTrueProvider {
    /// # Arguments
    /// * `auth_url` - Auth API root (e.g., "https://abc.example.co/auth/v1")
    /// * `anon_key` - Public API key sent as the `apikey` header
    pub fn new(auth_url: &str, anon_key: &str) -> Self {
        Self {
            base_url: auth_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            client: ReqwestClient::new(),
            session: RwLock::new(None),
            session_file: None,
            events: SessionBroadcaster::new(),
        }
    }

    pub fn with_session_file(mut self, session_file: SessionFile) -> Self {
        self.session_file = Some(session_file);
        self
    }

    fn request(&self, method: Method, path: &str, bearer: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, &url)
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer.unwrap_or(&self.anon_key))
    }

    /// Execute request and turn non-success statuses into `AuthError::Api`
    async fn execute(&self, req: RequestBuilder) -> AuthErrorResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body: Value = serde_json::from_str(&text).unwrap_or_default();
            return Err(AuthError::api(status.as_u16(), error_message(&body, status)));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    async fn store_session(&self, session: &Session) {
        *self.session.write().await = Some(session.clone());

        if let Some(ref file) = self.session_file
            && let Err(e) = file.save(session).await
        {
            warn!("Failed to persist session: {}", e);
        }

        self.events.publish(SessionEvent::SignedIn(session.clone()));
    }

    async fn drop_session(&self) {
        *self.session.write().await = None;

        if let Some(ref file) = self.session_file
            && let Err(e) = file.clear().await
        {
            warn!("Failed to remove session file: {}", e);
        }
    }
}

#[async_trait]
impl IdentityProvider for GoTrueProvider {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: SignUpMetadata,
    ) -> AuthErrorResult<Option<Session>> {
        #[derive(Serialize)]
        struct SignUpRequest<'a> {
            email: &'a str,
            password: &'a str,
            data: SignUpMetadata,
        }

        let body = SignUpRequest {
            email,
            password,
            data: metadata,
        };
        let req = self.request(Method::POST, "/signup", None).json(&body);
        let value = self.execute(req).await?;

        // Auto-confirmed projects answer with a full token grant, otherwise
        // with the bare user awaiting confirmation.
        if value.get("access_token").is_none() {
            info!("Sign-up for {} awaits confirmation", email);
            return Ok(None);
        }

        let session = serde_json::from_value::<TokenResponse>(value)?.into_session();
        info!("Signed up {}", session.user.id);
        self.store_session(&session).await;

        Ok(Some(session))
    }

    async fn sign_in(&self, email: &str, password: &str) -> AuthErrorResult<Session> {
        #[derive(Serialize)]
        struct PasswordGrant<'a> {
            email: &'a str,
            password: &'a str,
        }

        let req = self
            .request(Method::POST, "/token", None)
            .query(&[("grant_type", "password")])
            .json(&PasswordGrant { email, password });
        let value = self.execute(req).await?;

        let session = serde_json::from_value::<TokenResponse>(value)?.into_session();
        info!("Signed in {}", session.user.id);
        self.store_session(&session).await;

        Ok(session)
    }

    async fn sign_out(&self) -> AuthErrorResult<()> {
        let current = match self.get_session().await {
            Ok(current) => current,
            Err(e) => {
                warn!("Discarding unreadable session: {}", e);
                None
            }
        };

        if let Some(session) = current {
            let req = self.request(Method::POST, "/logout", Some(&session.access_token));
            // The local session is dropped even when the server call fails.
            let result = self.execute(req).await;
            self.drop_session().await;
            self.events.publish(SessionEvent::SignedOut);
            result?;
            info!("Signed out {}", session.user.id);
        } else {
            debug!("Sign-out without a session");
            self.drop_session().await;
            self.events.publish(SessionEvent::SignedOut);
        }

        Ok(())
    }

    async fn get_session(&self) -> AuthErrorResult<Option<Session>> {
        let mut session = self.session.read().await.clone();

        if session.is_none()
            && let Some(ref file) = self.session_file
        {
            session = file.load().await?;
            if session.is_some() {
                debug!("Restored session from {}", file.path().display());
                *self.session.write().await = session.clone();
            }
        }

        match session {
            Some(s) if s.is_expired(Utc::now()) => {
                info!("Session for {} expired", s.user.id);
                self.drop_session().await;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    fn on_session_change(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }
}

/// Pull a readable message out of a GoTrue error body.
/// Newer servers send `msg`, older ones `error_description`. Bodies that are
/// not GoTrue JSON (gateway pages) fall back to the status reason.
fn error_message(body: &Value, status: StatusCode) -> String {
    ["msg", "error_description", "message", "error"]
        .iter()
        .find_map(|key| body.get(key).and_then(|v| v.as_str()))
        .or_else(|| status.canonical_reason())
        .unwrap_or("Unknown error")
        .to_string()
}
