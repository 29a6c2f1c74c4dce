//! Error types for the Skystack composition engine.
//!
//! Composition is deterministic, so every error here is fatal to the
//! current run: retrying without a configuration change would reproduce
//! the same failure. Errors carry the component section and field that
//! triggered them so a failed run identifies its cause precisely.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Skystack operations.
#[derive(Debug, Error)]
pub enum SkystackError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigurationError),

    /// Subnet placement errors.
    #[error("Placement error: {0}")]
    Placement(#[from] PlacementError),

    /// Composer sequencing errors.
    #[error("Dependency error: {0}")]
    Dependency(#[from] DependencyError),

    /// IO errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors: missing or invalid required input.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The configuration file was not found.
    #[error("Configuration file not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// The configuration file could not be parsed.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Optional source location.
        location: Option<String>,
    },

    /// A required component section is absent from the configuration.
    #[error("Missing required configuration section: {section}")]
    MissingSection {
        /// Name of the missing section (e.g. `RELATIONAL_DB`).
        section: String,
    },

    /// A required field within a section is absent.
    #[error("Missing required field {section}.{field}")]
    MissingField {
        /// Section containing the field.
        section: String,
        /// Name of the missing field.
        field: String,
    },

    /// An address space is not a valid CIDR block.
    #[error("Invalid CIDR block for {section}.{field}: {value}")]
    InvalidCidr {
        /// Section containing the field.
        section: String,
        /// Name of the field.
        field: String,
        /// The invalid value.
        value: String,
    },

    /// A numeric value lies outside its permitted range.
    #[error("Value out of range for {section}.{field}: {message}")]
    OutOfRange {
        /// Section containing the field.
        section: String,
        /// Name of the field.
        field: String,
        /// Description of the violated bound.
        message: String,
    },

    /// A field value is invalid for reasons other than range.
    #[error("Invalid value for {section}.{field}: {message}")]
    InvalidValue {
        /// Section containing the field.
        section: String,
        /// Name of the field.
        field: String,
        /// Description of the problem.
        message: String,
    },
}

/// Placement errors: the network topology cannot satisfy a tier's
/// subnet requirement.
#[derive(Debug, Error)]
pub enum PlacementError {
    /// A component requires private subnets but the topology has none.
    #[error("No private subnets available for {component}")]
    NoPrivateSubnets {
        /// Component that requested private placement.
        component: String,
    },
}

/// Dependency errors: a composer was invoked before its required
/// upstream output existed.
#[derive(Debug, Error)]
pub enum DependencyError {
    /// An upstream output required by a composer is missing.
    #[error("{component} requires {requires}, which has not been composed")]
    MissingUpstream {
        /// Component that was invoked too early.
        component: String,
        /// The upstream output it needs.
        requires: String,
    },
}

/// Result type alias for Skystack operations.
pub type Result<T> = std::result::Result<T, SkystackError>;

impl ConfigurationError {
    /// Creates a missing-section error.
    #[must_use]
    pub fn missing_section(section: impl Into<String>) -> Self {
        Self::MissingSection {
            section: section.into(),
        }
    }

    /// Creates a missing-field error.
    #[must_use]
    pub fn missing_field(section: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            section: section.into(),
            field: field.into(),
        }
    }

    /// Creates an out-of-range error.
    #[must_use]
    pub fn out_of_range(
        section: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            section: section.into(),
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid-value error.
    #[must_use]
    pub fn invalid_value(
        section: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            section: section.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}

impl PlacementError {
    /// Creates a no-private-subnets error for the given component.
    #[must_use]
    pub fn no_private_subnets(component: impl Into<String>) -> Self {
        Self::NoPrivateSubnets {
            component: component.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_section_names_section() {
        let err = ConfigurationError::missing_section("RELATIONAL_DB");
        assert!(err.to_string().contains("RELATIONAL_DB"));
    }

    #[test]
    fn test_out_of_range_names_field() {
        let err = ConfigurationError::out_of_range("CLUSTER", "desired", "5 not in [1, 3]");
        let msg = err.to_string();
        assert!(msg.contains("CLUSTER"));
        assert!(msg.contains("desired"));
    }

    #[test]
    fn test_placement_error_wraps_into_main() {
        let err: SkystackError = PlacementError::no_private_subnets("CACHE").into();
        assert!(matches!(err, SkystackError::Placement(_)));
    }
}
