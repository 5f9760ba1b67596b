use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use relock_core::{LockError, LockStore};
use tracing::debug;

/// Hold state for one key.
#[derive(Debug, Default)]
struct Slot {
    exclusive: Option<u64>,
    shared: Vec<u64>,
}

impl Slot {
    fn is_free(&self) -> bool {
        self.exclusive.is_none() && self.shared.is_empty()
    }

    /// Whether a session other than `session` holds this slot in any mode.
    fn held_by_other(&self, session: u64) -> bool {
        self.exclusive.is_some_and(|s| s != session)
            || self.shared.iter().any(|s| *s != session)
    }
}

/// Shared in-process lock table arbitrating between sessions.
///
/// One arbiter per cooperating group; it is the in-process analogue of the
/// backing engine. Stores opened from it contend with each other exactly
/// like stores on separate connections to a shared engine.
#[derive(Debug, Default)]
pub struct MemoryArbiter {
    slots: DashMap<String, Slot>,
    next_session: AtomicU64,
}

impl MemoryArbiter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Open a new session against this arbiter.
    pub fn store(self: &Arc<Self>) -> MemoryLockStore {
        let session = self.next_session.fetch_add(1, Ordering::Relaxed);
        MemoryLockStore {
            arbiter: Arc::clone(self),
            session,
        }
    }

    fn release_session(&self, session: u64) {
        self.slots.retain(|_, slot| {
            if slot.exclusive == Some(session) {
                slot.exclusive = None;
            }
            slot.shared.retain(|s| *s != session);
            !slot.is_free()
        });
    }
}

/// One session against a `MemoryArbiter`.
///
/// Locks are bound to the session: dropping the store releases everything
/// it holds. `exists` reports only this session's holds.
#[derive(Debug)]
pub struct MemoryLockStore {
    arbiter: Arc<MemoryArbiter>,
    session: u64,
}

#[async_trait]
impl LockStore for MemoryLockStore {
    async fn save(&self, key: &str) -> Result<(), LockError> {
        let mut slot = self.arbiter.slots.entry(key.to_string()).or_default();
        if slot.held_by_other(self.session) {
            debug!("save conflict on {} (session {})", key, self.session);
            return Err(LockError::Conflicted(format!(
                "key {:?} is held by another session",
                key
            )));
        }
        slot.exclusive = Some(self.session);
        debug!("acquired {} exclusively (session {})", key, self.session);
        Ok(())
    }

    async fn save_read(&self, key: &str) -> Result<(), LockError> {
        let mut slot = self.arbiter.slots.entry(key.to_string()).or_default();
        if slot.exclusive.is_some_and(|s| s != self.session) {
            debug!("save_read conflict on {} (session {})", key, self.session);
            return Err(LockError::Conflicted(format!(
                "key {:?} is held exclusively by another session",
                key
            )));
        }
        if !slot.shared.contains(&self.session) {
            slot.shared.push(self.session);
        }
        debug!("acquired {} shared (session {})", key, self.session);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, LockError> {
        let held = self.arbiter.slots.get(key).is_some_and(|slot| {
            slot.exclusive == Some(self.session) || slot.shared.contains(&self.session)
        });
        Ok(held)
    }

    async fn delete(&self, key: &str) -> Result<(), LockError> {
        if let Some(mut slot) = self.arbiter.slots.get_mut(key) {
            if slot.exclusive == Some(self.session) {
                slot.exclusive = None;
            }
            slot.shared.retain(|s| *s != self.session);
            let free = slot.is_free();
            drop(slot);
            if free {
                self.arbiter.slots.remove_if(key, |_, s| s.is_free());
            }
            debug!("released {} (session {})", key, self.session);
        }
        Ok(())
    }

    async fn put_off_expiration(&self, key: &str, ttl: Duration) -> Result<(), LockError> {
        // Session-bound locks have no timer to push back.
        debug!("put_off_expiration({}, {:?}) is a no-op", key, ttl);
        Ok(())
    }
}

impl Drop for MemoryLockStore {
    fn drop(&mut self) {
        self.arbiter.release_session(self.session);
    }
}
