use thiserror::Error;

/// Errors that can occur in a lock store.
#[derive(Error, Debug)]
pub enum LockError {
    /// The store is misconfigured (e.g. the DSN names an unsupported
    /// driver). Retrying the same call cannot succeed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Another session holds the key in an incompatible mode. Expected
    /// under contention; callers retry with their own backoff.
    #[error("lock conflicted: {0}")]
    Conflicted(String),

    /// The session to the backing engine failed. Locks bound to that
    /// session are gone; never masked as success.
    #[error("connection error: {0}")]
    Connection(String),

    #[error("internal error: {0}")]
    Internal(String),
}
