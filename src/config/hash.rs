//! Configuration hashing for plan stamping.
//!
//! Each emitted deployment plan carries a deterministic hash of the
//! configuration it was composed from, so two plans can be compared for
//! configuration equality without diffing resource specifications.

use sha2::{Digest, Sha256};

use super::spec::PlatformConfig;

/// Hasher for computing configuration hashes.
#[derive(Debug, Default)]
pub struct ConfigHasher;

impl ConfigHasher {
    /// Creates a new configuration hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Computes a hash of the entire platform configuration.
    ///
    /// Struct fields serialize in declaration order, so the JSON
    /// rendering is canonical and the hash deterministic.
    #[must_use]
    pub fn hash_config(&self, config: &PlatformConfig) -> String {
        let mut hasher = Sha256::new();
        // Serialization of these plain data types cannot fail.
        let canonical = serde_json::to_vec(config).unwrap_or_default();
        hasher.update(&canonical);
        hex::encode(hasher.finalize())
    }

    /// Computes a short hash (first 8 characters) for display purposes.
    #[must_use]
    pub fn short_hash(&self, hash: &str) -> String {
        hash.chars().take(8).collect()
    }
}
