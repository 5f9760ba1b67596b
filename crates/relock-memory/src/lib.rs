//! In-process lock-store backend.
//!
//! `MemoryArbiter` plays the role of the backing engine: a shared lock
//! table that arbitrates between sessions. Each `MemoryLockStore` opened
//! from the arbiter is one session; dropping a store releases everything
//! its session held, mirroring how an engine drops a closed session's
//! advisory locks.

mod store;

pub use store::{MemoryArbiter, MemoryLockStore};
