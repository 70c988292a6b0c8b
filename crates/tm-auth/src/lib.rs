//! Identity provider boundary.
//!
//! Sign-up, sign-in and session tracking are owned by the hosted identity
//! service. This crate only models that capability (`IdentityProvider`) and
//! ships two implementations: an HTTP client for the GoTrue REST API and an
//! in-memory provider for tests.

pub mod error;
pub mod gotrue_provider;
pub mod identity_provider;
pub mod memory_provider;
pub mod session;
pub mod session_broadcaster;
pub mod session_event;
pub mod session_file;
pub mod sign_up_metadata;

pub use error::{AuthError, Result};
pub use gotrue_provider::GoTrueProvider;
pub use identity_provider::IdentityProvider;
pub use memory_provider::{InMemoryIdentityProvider, SignUpHook};
pub use session::{AuthUser, Session};
pub use session_broadcaster::SessionBroadcaster;
pub use session_event::SessionEvent;
pub use session_file::SessionFile;
pub use sign_up_metadata::SignUpMetadata;

#[cfg(test)]
mod tests;
