use crate::Session;

/// Session change published by an identity provider
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    SignedIn(Session),
    SignedOut,
}
