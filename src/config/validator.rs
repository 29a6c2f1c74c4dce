//! Configuration validation for platform configurations.
//!
//! Validation runs before composition and reports every problem it
//! finds, addressed by section and field. The composers enforce their
//! own hard invariants as well; the validator exists so a bad file is
//! rejected with the full list of issues instead of the first one hit
//! during composition.

use crate::error::{ConfigurationError, Result, SkystackError};
use ipnet::Ipv4Net;
use std::collections::HashSet;
use tracing::debug;

use super::spec::{
    CacheConfig, ClusterConfig, IdentityConfig, NetworkConfig, PlatformConfig, RelationalDbConfig,
};

/// Validator for platform configurations.
#[derive(Debug, Default)]
pub struct ConfigValidator;

/// Validation result containing all errors found.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of warnings (non-fatal issues).
    pub warnings: Vec<String>,
}

/// A single validation error.
#[derive(Debug)]
pub struct ValidationError {
    /// The field path that failed validation.
    pub field: String,
    /// The error message.
    pub message: String,
}

impl ConfigValidator {
    /// Creates a new validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates a platform configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation check fails; the returned
    /// error carries the first failing field.
    pub fn validate(&self, config: &PlatformConfig) -> Result<ValidationResult> {
        let mut result = ValidationResult::default();

        if let Some(network) = &config.network {
            Self::validate_network(network, &mut result);
        }
        Self::validate_buckets(config, &mut result);
        if let Some(db) = &config.relational_db {
            Self::validate_relational_db(db, &mut result);
        }
        if let Some(cluster) = &config.cluster {
            Self::validate_cluster(cluster, &mut result);
        }
        if let Some(identity) = &config.identity {
            Self::validate_identity(identity, &mut result);
        }
        if let Some(cache) = &config.cache {
            Self::validate_cache(cache, &mut result);
        }

        if result.errors.is_empty() {
            debug!("Configuration validation passed");
            Ok(result)
        } else {
            let first_error = &result.errors[0];
            Err(SkystackError::Config(ConfigurationError::InvalidValue {
                section: first_error
                    .field
                    .split(['.', '['])
                    .next()
                    .unwrap_or_default()
                    .to_string(),
                field: first_error.field.clone(),
                message: first_error.message.clone(),
            }))
        }
    }

    /// Validates the network section.
    fn validate_network(network: &NetworkConfig, result: &mut ValidationResult) {
        if network.cidr.parse::<Ipv4Net>().is_err() {
            result.errors.push(ValidationError {
                field: String::from("NETWORK.cidr"),
                message: format!("'{}' is not a valid IPv4 CIDR block", network.cidr),
            });
        }

        if network.max_azs < 1 {
            result.errors.push(ValidationError {
                field: String::from("NETWORK.max_azs"),
                message: String::from("Availability zone count must be at least 1"),
            });
        }

        if network.nat_gateways == 0 {
            result.warnings.push(String::from(
                "NETWORK.nat_gateways: private subnets will have no egress path",
            ));
        }

        if !is_valid_name(&network.name) {
            result.errors.push(ValidationError {
                field: String::from("NETWORK.name"),
                message: format!(
                    "Network name '{}' is invalid. Must be lowercase alphanumeric with hyphens.",
                    network.name
                ),
            });
        }
    }

    /// Validates the storage bucket list.
    fn validate_buckets(config: &PlatformConfig, result: &mut ValidationResult) {
        let mut seen = HashSet::new();
        for (i, bucket) in config.storage_buckets.iter().enumerate() {
            if !seen.insert(&bucket.name) {
                result.errors.push(ValidationError {
                    field: format!("STORAGE_BUCKETS[{i}].name"),
                    message: format!("Duplicate bucket name: {}", bucket.name),
                });
            }
            if !is_valid_name(&bucket.name) {
                result.errors.push(ValidationError {
                    field: format!("STORAGE_BUCKETS[{i}].name"),
                    message: format!(
                        "Bucket name '{}' is invalid. Must be lowercase alphanumeric with hyphens.",
                        bucket.name
                    ),
                });
            }
        }
    }

    /// Validates the relational database section.
    fn validate_relational_db(db: &RelationalDbConfig, result: &mut ValidationResult) {
        if db.allocated_storage == 0 {
            result.errors.push(ValidationError {
                field: String::from("RELATIONAL_DB.allocated_storage"),
                message: String::from("Allocated storage must be at least 1 GB"),
            });
        }

        if db.master_username.is_empty() {
            result.errors.push(ValidationError {
                field: String::from("RELATIONAL_DB.master_username"),
                message: String::from("Master username cannot be empty"),
            });
        }

        if !db.deletion_protection {
            result.warnings.push(String::from(
                "RELATIONAL_DB.deletion_protection: disabled; a subsequent run may destroy the instance",
            ));
        }
    }

    /// Validates the cluster section.
    fn validate_cluster(cluster: &ClusterConfig, result: &mut ValidationResult) {
        if cluster.node_groups.is_empty() {
            result.errors.push(ValidationError {
                field: String::from("CLUSTER.node_groups"),
                message: String::from("At least one worker-capacity group is required"),
            });
        }

        let mut seen = HashSet::new();
        for (i, group) in cluster.node_groups.iter().enumerate() {
            let prefix = format!("CLUSTER.node_groups[{i}]");

            if !seen.insert(&group.name) {
                result.errors.push(ValidationError {
                    field: format!("{prefix}.name"),
                    message: format!("Duplicate node group name: {}", group.name),
                });
            }

            if group.min > group.max {
                result.errors.push(ValidationError {
                    field: format!("{prefix}.min"),
                    message: format!("min ({}) exceeds max ({})", group.min, group.max),
                });
            }

            if group.desired < group.min || group.desired > group.max {
                result.errors.push(ValidationError {
                    field: format!("{prefix}.desired"),
                    message: format!(
                        "desired ({}) must lie within [{}, {}]",
                        group.desired, group.min, group.max
                    ),
                });
            }

            if group.instance_types.is_empty() {
                result.errors.push(ValidationError {
                    field: format!("{prefix}.instance_types"),
                    message: String::from("Instance-type preference list cannot be empty"),
                });
            }
        }
    }

    /// Validates the identity section.
    fn validate_identity(identity: &IdentityConfig, result: &mut ValidationResult) {
        Self::validate_identity_url(&identity.callback_url, "callback_url", result);
        Self::validate_identity_url(&identity.logout_url, "logout_url", result);

        // Both URLs must land in the same deployment environment.
        if let (Some(callback), Some(logout)) = (&identity.callback_url, &identity.logout_url)
            && url_host(callback) != url_host(logout)
        {
            result.errors.push(ValidationError {
                field: String::from("IDENTITY.logout_url"),
                message: String::from("Callback and logout URLs must resolve to the same host"),
            });
        }
    }

    /// Validates one identity URL field.
    fn validate_identity_url(
        url: &Option<String>,
        field: &str,
        result: &mut ValidationResult,
    ) {
        match url {
            None => result.errors.push(ValidationError {
                field: format!("IDENTITY.{field}"),
                message: String::from("URL is required when the IDENTITY tier is present"),
            }),
            Some(value) if !value.starts_with("https://") => {
                result.errors.push(ValidationError {
                    field: format!("IDENTITY.{field}"),
                    message: format!("'{value}' must be an https:// URL"),
                });
            }
            Some(_) => {}
        }
    }

    /// Validates the cache section.
    fn validate_cache(cache: &CacheConfig, result: &mut ValidationResult) {
        if cache.num_nodes < 1 {
            result.errors.push(ValidationError {
                field: String::from("CACHE.num_nodes"),
                message: String::from("Cache node count must be at least 1"),
            });
        }

        if cache.node_type.is_empty() {
            result.errors.push(ValidationError {
                field: String::from("CACHE.node_type"),
                message: String::from("Cache node type cannot be empty"),
            });
        }
    }
}

/// Extracts the host portion of an https URL.
fn url_host(url: &str) -> Option<&str> {
    url.strip_prefix("https://")
        .map(|rest| rest.split('/').next().unwrap_or(rest))
}

/// Validates that a name follows the naming convention.
/// Names must be lowercase alphanumeric with hyphens, starting with a letter.
fn is_valid_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }

    let mut chars = name.chars();

    if let Some(first) = chars.next()
        && !first.is_ascii_lowercase()
    {
        return false;
    }

    for c in chars {
        if !c.is_ascii_lowercase() && !c.is_ascii_digit() && c != '-' {
            return false;
        }
    }

    !name.ends_with('-') && !name.contains("--")
}

impl ValidationResult {
    /// Returns true if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Returns the number of warnings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::spec::NodeGroupConfig;

    fn network(cidr: &str, max_azs: u8) -> NetworkConfig {
        NetworkConfig {
            name: String::from("platform-vpc"),
            cidr: cidr.to_string(),
            max_azs,
            nat_gateways: 1,
        }
    }

    #[test]
    fn test_valid_name() {
        assert!(is_valid_name("platform-vpc"));
        assert!(is_valid_name("db-subnets-2"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("Platform"));
        assert!(!is_valid_name("vpc-"));
        assert!(!is_valid_name("vpc--main"));
    }

    #[test]
    fn test_invalid_cidr_rejected() {
        let config = PlatformConfig {
            network: Some(network("not-a-cidr", 2)),
            ..PlatformConfig::default()
        };
        let validator = ConfigValidator::new();
        let result = validator.validate(&config);
        assert!(result.is_err());
    }

    #[test]
    fn test_desired_outside_bounds_rejected() {
        let config = PlatformConfig {
            cluster: Some(ClusterConfig {
                name: String::from("platform-eks"),
                version: String::from("1.28"),
                node_groups: vec![NodeGroupConfig {
                    name: String::from("workers"),
                    desired: 5,
                    min: 1,
                    max: 4,
                    disk_size_gb: 20,
                    instance_types: vec![String::from("t3.medium")],
                    interruptible: true,
                }],
            }),
            ..PlatformConfig::default()
        };
        let validator = ConfigValidator::new();
        assert!(validator.validate(&config).is_err());
    }

    #[test]
    fn test_identity_host_mismatch_rejected() {
        let config = PlatformConfig {
            identity: Some(IdentityConfig {
                domain_prefix: String::from("platform"),
                callback_url: Some(String::from("https://app.example.com/callback")),
                logout_url: Some(String::from("https://other.example.org/logout")),
            }),
            ..PlatformConfig::default()
        };
        let validator = ConfigValidator::new();
        assert!(validator.validate(&config).is_err());
    }

    #[test]
    fn test_valid_config_passes_with_warnings() {
        let config = PlatformConfig {
            network: Some(NetworkConfig {
                nat_gateways: 0,
                ..network("10.0.0.0/16", 2)
            }),
            ..PlatformConfig::default()
        };
        let validator = ConfigValidator::new();
        let result = validator.validate(&config).unwrap();
        assert!(result.is_valid());
        assert_eq!(result.warning_count(), 1);
    }
}
