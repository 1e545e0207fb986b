/// Token revocation list (blacklist).
use std::collections::HashSet;
use std::sync::RwLock;

use sha2::{Digest, Sha256};

/// Tokens invalidated before their natural expiry, e.g. on logout.
///
/// Raw bearer tokens are never kept around: entries are SHA-256 digests and
/// membership tests hash the presented token. Entries are never evicted, so
/// the set grows for the lifetime of the process.
pub struct RevocationList {
    revoked: RwLock<HashSet<String>>,
}

impl RevocationList {
    pub fn new() -> Self {
        Self {
            revoked: RwLock::new(HashSet::new()),
        }
    }

    /// Mark a token as revoked. Idempotent.
    pub fn revoke(&self, token: &str) {
        let mut revoked = self.revoked.write().expect("revocation list lock poisoned");
        revoked.insert(sha256_hash(token));
    }

    /// Whether a token has been revoked.
    pub fn is_revoked(&self, token: &str) -> bool {
        let revoked = self.revoked.read().expect("revocation list lock poisoned");
        revoked.contains(&sha256_hash(token))
    }
}

impl Default for RevocationList {
    fn default() -> Self {
        Self::new()
    }
}

fn sha256_hash(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_token_is_not_revoked() {
        let list = RevocationList::new();
        assert!(!list.is_revoked("some.jwt.token"));
    }

    #[test]
    fn test_revoke_then_member() {
        let list = RevocationList::new();
        list.revoke("some.jwt.token");

        assert!(list.is_revoked("some.jwt.token"));
        assert!(!list.is_revoked("another.jwt.token"));
    }

    #[test]
    fn test_revoke_is_idempotent() {
        let list = RevocationList::new();
        list.revoke("some.jwt.token");
        list.revoke("some.jwt.token");

        assert!(list.is_revoked("some.jwt.token"));
    }
}
