//! Client-side synchronization between the hosted backend and an in-memory
//! snapshot of teams, tasks and users.
//!
//! `data_access` turns one intent into remote store calls and reports
//! failures through a `Notifier`. `TeamStore` owns the snapshot and applies
//! successful mutations to it. `TeamContext` adds the signed-in user on top.

pub mod data_access;
pub mod error;
pub mod notification;
pub mod notifier;
pub mod snapshot;
pub mod team_context;
pub mod team_store;

pub use error::{Result, SyncError};
pub use notification::{Notification, NotificationVariant};
pub use notifier::{LogNotifier, Notifier, RecordingNotifier};
pub use snapshot::Snapshot;
pub use team_context::{ContextState, ContextView, TeamContext};
pub use team_store::TeamStore;

#[cfg(test)]
mod tests;
