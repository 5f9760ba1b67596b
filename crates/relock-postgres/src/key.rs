use sha2::{Digest, Sha256};

/// A lock key mapped into PostgreSQL's 64-bit advisory keyspace.
///
/// The one-argument advisory functions take a `bigint`, so arbitrary key
/// strings are hashed rather than truncated: SHA-256 of the key bytes,
/// first 8 bytes read big-endian. Using the full 64 bits keeps collisions
/// between distinct keys unlikely. The engine records the value in
/// `pg_locks` split into the `classid` (high) and `objid` (low) halves
/// with `objsubid = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdvisoryKey(i64);

impl AdvisoryKey {
    /// Derive the advisory key for a lock key string.
    pub fn from_key(key: &str) -> Self {
        let digest = Sha256::digest(key.as_bytes());
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        Self(i64::from_be_bytes(bytes))
    }

    /// The value passed to the advisory functions.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_is_deterministic() {
        assert_eq!(
            AdvisoryKey::from_key("resource"),
            AdvisoryKey::from_key("resource")
        );
        assert_ne!(
            AdvisoryKey::from_key("resource"),
            AdvisoryKey::from_key("resource-2")
        );
    }

    #[test]
    fn test_known_vectors() {
        // First 8 bytes of SHA-256, big-endian.
        assert_eq!(AdvisoryKey::from_key("resource").as_i64(), 6767031285991106541);
        assert_eq!(AdvisoryKey::from_key("relock").as_i64(), 5322638926487691707);
        assert_eq!(AdvisoryKey::from_key("a").as_i64(), -3848465438864589366);
        assert_eq!(AdvisoryKey::from_key("").as_i64(), -2039914840885289964);
    }
}
