//! Credential hashing.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One-way digest of an account password.
///
/// Stored as the lowercase hex encoding of the SHA-256 of the plaintext.
/// The digest is persisted and restored verbatim — never re-hashed on load —
/// so a digest written by one process run authenticates in the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialHash(String);

impl CredentialHash {
    /// Derive the digest for a plaintext password.
    pub fn derive(password: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    /// Check a candidate password by recomputing its digest.
    ///
    /// Exact equality on fixed-length digests. Deterministic and
    /// side-effect-free; not constant-time.
    pub fn matches(&self, password: &str) -> bool {
        self == &Self::derive(password)
    }

    /// The hex digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
