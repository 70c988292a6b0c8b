
use crate::{AuthUser, Session};

use chrono::{Duration, Utc};
use serde_json::Value;
use uuid::Uuid;

pub(crate) fn test_session(expires_in: Duration) -> Session {
    Session {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        expires_at: Utc::now() + expires_in,
        user: AuthUser {
            id: Uuid::new_v4(),
            email: Some("maria@example.com".to_string()),
            user_metadata: Value::Null,
        },
    }
}
