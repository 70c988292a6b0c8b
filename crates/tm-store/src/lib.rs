//! Remote data store boundary.
//!
//! `RemoteStore` is the set of table operations the sync layer needs from the
//! hosted database. `RestStore` talks to it over PostgREST; `MemoryStore`
//! emulates it in process, including its insert trigger and unique keys.

pub mod error;
pub mod memory_store;
pub mod remote_store;
pub mod rest_store;
pub mod store_operation;

pub use error::{Result, StoreError, UNIQUE_VIOLATION};
pub use memory_store::MemoryStore;
pub use remote_store::RemoteStore;
pub use rest_store::RestStore;
pub use store_operation::StoreOperation;

#[cfg(test)]
mod tests;
