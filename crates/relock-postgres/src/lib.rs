//! PostgreSQL advisory-lock backend.
//!
//! Arbitration lives inside the engine: `pg_try_advisory_lock` and friends
//! are atomic and session-bound, so a store holds its locks exactly as
//! long as its connection lives and needs no expiry bookkeeping. The store
//! owns one dedicated session; sharing a pooled connection would detach
//! the locks from the store's lifetime.

mod config;
mod driver;
mod key;
mod store;

pub use config::PostgresConfig;
pub use key::AdvisoryKey;
pub use store::PostgresLockStore;
