//! Configuration loading keyed by deployment environment.
//!
//! The environment is an explicit parameter: the parser never inspects
//! process environment variables, so composition stays a pure function
//! of its inputs. A missing or malformed file fails fast with a
//! [`ConfigurationError`] instead of letting downstream composers fail
//! obscurely on absent sections.

use crate::error::{ConfigurationError, Result, SkystackError};
use std::path::Path;
use tracing::{debug, info};

use super::spec::{DeployEnvironment, PlatformConfig};

/// Configuration parser for loading per-environment platform configuration.
#[derive(Debug, Default)]
pub struct ConfigParser {
    /// Base directory for resolving environment config files.
    base_path: Option<std::path::PathBuf>,
}

impl ConfigParser {
    /// Creates a new configuration parser.
    #[must_use]
    pub const fn new() -> Self {
        Self { base_path: None }
    }

    /// Sets the base directory for resolving environment config files.
    #[must_use]
    pub fn with_base_path(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Loads the configuration file conventionally named for the given
    /// environment (`config.prod.yaml`, `config.nonprod.yaml`,
    /// `config.dev.yaml`).
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be parsed.
    pub fn load_environment(&self, environment: DeployEnvironment) -> Result<PlatformConfig> {
        let path = self.base_path.as_ref().map_or_else(
            || std::path::PathBuf::from(environment.config_file()),
            |base| base.join(environment.config_file()),
        );
        info!(%environment, "Loading configuration from: {}", path.display());
        self.load_file(&path)
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<PlatformConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SkystackError::Config(ConfigurationError::FileNotFound {
                path: path.to_path_buf(),
            }));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            SkystackError::Config(ConfigurationError::ParseError {
                message: format!("Failed to read file: {e}"),
                location: Some(path.display().to_string()),
            })
        })?;

        self.parse_yaml(&content, Some(path))
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn parse_yaml(&self, content: &str, source: Option<&Path>) -> Result<PlatformConfig> {
        debug!("Parsing YAML configuration");

        let config: PlatformConfig = serde_yaml::from_str(content).map_err(|e| {
            let location = source.map(|p| p.display().to_string());
            SkystackError::Config(ConfigurationError::ParseError {
                message: format!("YAML parse error: {e}"),
                location,
            })
        })?;

        debug!(
            optional_tiers = ?config.optional_tiers(),
            "Successfully parsed configuration"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL_CONFIG: &str = r#"
NETWORK:
  name: platform-vpc
  cidr: 10.0.0.0/16
  max_azs: 2
  nat_gateways: 1

STORAGE_BUCKETS:
  - name: platform-assets
  - name: platform-exports

RELATIONAL_DB:
  instance_identifier: platform-db
  database_name: platform
  instance_class: db.t3.micro
  allocated_storage: 20
  master_username: admin
  subnet_group_name: platform-db-subnets
  security_group_name: platform-db-sg
  secret_name: platform-db-secret

CLUSTER:
  name: platform-eks
  node_groups:
    - name: workers
      desired: 2
      min: 1
      max: 4

CACHE:
  cluster_id: platform-redis
  node_type: cache.t3.micro
  engine_version: "7.0"
  subnet_group_name: platform-redis-subnets
  security_group_name: platform-redis-sg
"#;

    #[test]
    fn test_parse_full_config() {
        let parser = ConfigParser::new();
        let config = parser.parse_yaml(FULL_CONFIG, None).unwrap();

        assert_eq!(config.network.as_ref().unwrap().cidr, "10.0.0.0/16");
        assert_eq!(config.storage_buckets.len(), 2);
        assert_eq!(
            config.relational_db.as_ref().unwrap().master_username,
            "admin"
        );
        assert!(config.gateway.is_none());
        assert_eq!(config.optional_tiers(), vec!["CACHE"]);
    }

    #[test]
    fn test_parse_minimal_config() {
        let parser = ConfigParser::new();
        let config = parser.parse_yaml("{}", None).unwrap();
        // Section presence is the orchestrator's concern, not the parser's.
        assert!(config.network.is_none());
        assert!(config.relational_db.is_none());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let parser = ConfigParser::new();
        let result = parser.parse_yaml("NETWORK: [not, a, mapping", None);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let parser = ConfigParser::new().with_base_path(dir.path());
        let result = parser.load_environment(DeployEnvironment::Production);
        assert!(matches!(
            result,
            Err(crate::error::SkystackError::Config(
                ConfigurationError::FileNotFound { .. }
            ))
        ));
    }

    #[test]
    fn test_load_environment_selects_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.nonprod.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(FULL_CONFIG.as_bytes()).unwrap();

        let parser = ConfigParser::new().with_base_path(dir.path());
        let config = parser.load_environment(DeployEnvironment::Nonprod).unwrap();
        assert_eq!(config.network.as_ref().unwrap().name, "platform-vpc");
    }
}
