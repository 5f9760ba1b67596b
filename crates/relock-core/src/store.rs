use std::time::Duration;

use async_trait::async_trait;

use crate::error::LockError;

/// Advisory lock store over a shared arbiter.
///
/// Keys are opaque strings; their meaning is purely conventional between
/// cooperating processes. Acquisition is try-based: calls return
/// immediately with success or `LockError::Conflicted`, never block
/// waiting for the key to free up. Retry and backoff belong to the caller.
///
/// `exists` is session-local on purpose: it answers whether *this* store's
/// session holds the key, not whether any session anywhere does. A store
/// whose `save` just failed with `Conflicted` reports `exists == false`
/// even though the key is held elsewhere.
#[async_trait]
pub trait LockStore: Send + Sync {
    /// Try to acquire `key` exclusively.
    ///
    /// Fails with `LockError::Conflicted` when any other session holds the
    /// key in any mode. The caller does not hold the lock after a failure.
    async fn save(&self, key: &str) -> Result<(), LockError>;

    /// Try to acquire `key` in shared mode.
    ///
    /// Coexists with other shared holders; fails with
    /// `LockError::Conflicted` when an exclusive holder is present.
    async fn save_read(&self, key: &str) -> Result<(), LockError>;

    /// Whether the current session holds `key` in either mode.
    async fn exists(&self, key: &str) -> Result<bool, LockError>;

    /// Release whatever the current session holds on `key`.
    ///
    /// Idempotent: releasing a key this session does not hold is a no-op.
    async fn delete(&self, key: &str) -> Result<(), LockError>;

    /// Compatibility shim for TTL-based stores.
    ///
    /// Advisory locks do not expire on a timer, only on release or session
    /// end, so this does nothing beyond the store's configuration guard.
    async fn put_off_expiration(&self, key: &str, ttl: Duration) -> Result<(), LockError>;
}
