//! Configuration specification types for the composition engine.
//!
//! This module defines the structs that map to the per-environment
//! configuration files (`config.prod.yaml`, `config.nonprod.yaml`,
//! `config.dev.yaml`). Section keys follow the platform component names
//! (`NETWORK`, `RELATIONAL_DB`, ...). Sections whose absence must be
//! reported as a configuration error rather than a parse failure are
//! modelled as `Option` and demanded by the orchestrator.

use serde::{Deserialize, Serialize};

/// The deployment environment a configuration file is selected for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeployEnvironment {
    /// Production environment.
    Production,
    /// Staging / pre-production environment.
    Nonprod,
    /// Local development environment.
    #[default]
    Development,
}

impl DeployEnvironment {
    /// Returns the configuration file name conventionally used for this
    /// environment.
    #[must_use]
    pub const fn config_file(self) -> &'static str {
        match self {
            Self::Production => "config.prod.yaml",
            Self::Nonprod => "config.nonprod.yaml",
            Self::Development => "config.dev.yaml",
        }
    }

    /// Returns a short label for plan stamping and logging.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Nonprod => "nonprod",
            Self::Development => "development",
        }
    }
}

impl std::fmt::Display for DeployEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The root configuration structure for one deployment environment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PlatformConfig {
    /// Virtual network definition. Required.
    #[serde(rename = "NETWORK", default)]
    pub network: Option<NetworkConfig>,
    /// Object storage buckets. Defaults to none.
    #[serde(rename = "STORAGE_BUCKETS", default)]
    pub storage_buckets: Vec<BucketConfig>,
    /// Relational database tier. Required.
    #[serde(rename = "RELATIONAL_DB", default)]
    pub relational_db: Option<RelationalDbConfig>,
    /// Container-orchestration cluster. Required.
    #[serde(rename = "CLUSTER", default)]
    pub cluster: Option<ClusterConfig>,
    /// Public API gateway. Optional tier.
    #[serde(rename = "GATEWAY", default)]
    pub gateway: Option<GatewayConfig>,
    /// Identity provider. Optional tier.
    #[serde(rename = "IDENTITY", default)]
    pub identity: Option<IdentityConfig>,
    /// Distributed in-memory cache. Optional tier.
    #[serde(rename = "CACHE", default)]
    pub cache: Option<CacheConfig>,
}

/// Virtual network configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Network name.
    pub name: String,
    /// Address space CIDR block (e.g. `10.0.0.0/16`).
    pub cidr: String,
    /// Number of availability zones to span.
    pub max_azs: u8,
    /// Number of NAT gateways for private-tier egress.
    #[serde(default = "default_nat_gateways")]
    pub nat_gateways: u8,
}

/// Object storage bucket configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BucketConfig {
    /// Globally unique bucket name.
    pub name: String,
}

/// Relational database tier configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelationalDbConfig {
    /// Database instance identifier.
    pub instance_identifier: String,
    /// Initial database name.
    pub database_name: String,
    /// Instance class (e.g. `db.t3.micro`).
    pub instance_class: String,
    /// Allocated storage in GB.
    pub allocated_storage: u32,
    /// Master username injected into the credential secret template.
    pub master_username: String,
    /// Name for the private subnet grouping.
    pub subnet_group_name: String,
    /// Name for the isolation boundary.
    pub security_group_name: String,
    /// Name for the generated credential secret.
    pub secret_name: String,
    /// Whether the instance spans multiple availability zones.
    #[serde(default)]
    pub multi_az: bool,
    /// Automated backup retention in days.
    #[serde(default = "default_backup_retention")]
    pub backup_retention_days: u16,
    /// Hard block against destruction by a subsequent run.
    #[serde(default = "default_deletion_protection")]
    pub deletion_protection: bool,
}

/// Container-orchestration cluster configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClusterConfig {
    /// Cluster name.
    pub name: String,
    /// Kubernetes version.
    #[serde(default = "default_kubernetes_version")]
    pub version: String,
    /// Worker-capacity groups. At least one is required.
    #[serde(default)]
    pub node_groups: Vec<NodeGroupConfig>,
}

/// A single worker-capacity group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeGroupConfig {
    /// Capacity group name.
    pub name: String,
    /// Desired node count. Must lie within `[min, max]`.
    pub desired: u32,
    /// Minimum node count.
    pub min: u32,
    /// Maximum node count.
    pub max: u32,
    /// Per-node disk size in GB.
    #[serde(default = "default_disk_size")]
    pub disk_size_gb: u32,
    /// Instance-type preference list, most preferred first.
    #[serde(default = "default_instance_types")]
    pub instance_types: Vec<String>,
    /// Whether to use interruptible ("spot") capacity.
    #[serde(default = "default_interruptible")]
    pub interruptible: bool,
}

/// Public API gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Front door name.
    pub name: String,
    /// Deployment stage name (one stage per environment).
    pub stage_name: String,
}

/// Identity provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityConfig {
    /// Prefix for the public sign-in domain.
    pub domain_prefix: String,
    /// OAuth callback URL for the client registration.
    #[serde(default)]
    pub callback_url: Option<String>,
    /// OAuth logout URL for the client registration.
    #[serde(default)]
    pub logout_url: Option<String>,
}

/// Distributed cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheConfig {
    /// Cache cluster identifier.
    pub cluster_id: String,
    /// Cache node type (e.g. `cache.t3.micro`).
    pub node_type: String,
    /// Number of cache nodes. Must be at least 1.
    #[serde(default = "default_cache_nodes")]
    pub num_nodes: u32,
    /// Cache engine version.
    pub engine_version: String,
    /// Name for the private subnet grouping.
    pub subnet_group_name: String,
    /// Name for the isolation boundary.
    pub security_group_name: String,
}

// Default value functions

const fn default_nat_gateways() -> u8 {
    1
}

const fn default_backup_retention() -> u16 {
    7
}

const fn default_deletion_protection() -> bool {
    true
}

fn default_kubernetes_version() -> String {
    String::from("1.28")
}

const fn default_disk_size() -> u32 {
    20
}

fn default_instance_types() -> Vec<String> {
    vec![String::from("t3.medium"), String::from("t3.large")]
}

const fn default_interruptible() -> bool {
    true
}

const fn default_cache_nodes() -> u32 {
    1
}

impl PlatformConfig {
    /// Returns the names of the optional tiers present in this
    /// configuration.
    #[must_use]
    pub fn optional_tiers(&self) -> Vec<&'static str> {
        let mut tiers = Vec::new();
        if self.cache.is_some() {
            tiers.push("CACHE");
        }
        if self.gateway.is_some() {
            tiers.push("GATEWAY");
        }
        if self.identity.is_some() {
            tiers.push("IDENTITY");
        }
        tiers
    }
}
