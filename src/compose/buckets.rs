//! Composition of object storage buckets.

use tracing::debug;

use crate::config::BucketConfig;
use crate::error::{ConfigurationError, Result};
use crate::resources::BucketSpec;

/// Composer for object storage buckets.
///
/// Buckets are network-independent and may compose in parallel with
/// everything except the plan's aggregate ordering.
#[derive(Debug, Default)]
pub struct BucketComposer;

impl BucketComposer {
    /// Creates a new bucket composer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Composes bucket specifications from the `STORAGE_BUCKETS` section.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] on duplicate bucket names.
    pub fn compose(&self, configs: &[BucketConfig]) -> Result<Vec<BucketSpec>> {
        let mut seen = std::collections::HashSet::new();
        let mut buckets = Vec::with_capacity(configs.len());

        for config in configs {
            if !seen.insert(&config.name) {
                return Err(ConfigurationError::invalid_value(
                    "STORAGE_BUCKETS",
                    "name",
                    format!("duplicate bucket name: {}", config.name),
                )
                .into());
            }
            buckets.push(BucketSpec::standard(&config.name));
        }

        debug!(count = buckets.len(), "Composed storage buckets");
        Ok(buckets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(name: &str) -> BucketConfig {
        BucketConfig {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_compose_buckets() {
        let composer = BucketComposer::new();
        let buckets = composer
            .compose(&[bucket("platform-assets"), bucket("platform-exports")])
            .unwrap();

        assert_eq!(buckets.len(), 2);
        assert!(buckets.iter().all(|b| b.versioned));
        assert!(buckets.iter().all(|b| !b.retain_on_delete));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let composer = BucketComposer::new();
        let result = composer.compose(&[bucket("assets"), bucket("assets")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_list_is_valid() {
        let composer = BucketComposer::new();
        assert!(composer.compose(&[]).unwrap().is_empty());
    }
}
