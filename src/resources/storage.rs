//! Object storage bucket specification.

use serde::{Deserialize, Serialize};

/// A versioned object storage bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BucketSpec {
    /// Globally unique bucket name.
    pub name: String,
    /// Whether object versioning is enabled.
    pub versioned: bool,
    /// Whether the bucket is retained when removed from configuration.
    pub retain_on_delete: bool,
    /// Whether objects are deleted automatically when the bucket is destroyed.
    pub auto_delete_objects: bool,
}

impl BucketSpec {
    /// Creates the standard platform bucket: versioned, destroyed with
    /// its objects when removed from configuration.
    #[must_use]
    pub fn standard(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            versioned: true,
            retain_on_delete: false,
            auto_delete_objects: true,
        }
    }
}
