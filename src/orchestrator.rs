//! The resource graph orchestrator.
//!
//! Sequences the composers in dependency order and emits a single
//! aggregate deployment plan. The network composes first because every
//! tiered component places itself into it; the identity tier is
//! network-independent and composes last. If any composer fails, no
//! plan is emitted at all: partial plans are never handed to the
//! control plane.

use tracing::{debug, info, warn};

use crate::compose::{
    BucketComposer, CacheComposer, ComputeClusterComposer, DataTierComposer, GatewayComposer,
    IdentityComposer, NetworkTopologyBuilder,
};
use crate::config::{ConfigHasher, ConfigValidator, DeployEnvironment, PlatformConfig};
use crate::error::{ConfigurationError, Result};
use crate::plan::{DeploymentPlan, ResourceSpec};

/// Orchestrator producing a deployment plan from a platform
/// configuration.
///
/// The configuration is an explicit constructor parameter, so
/// composition is a pure function of its inputs with no ambient
/// process state involved.
#[derive(Debug)]
pub struct ResourceGraphOrchestrator {
    config: PlatformConfig,
    environment: Option<DeployEnvironment>,
    validator: ConfigValidator,
    hasher: ConfigHasher,
}

impl ResourceGraphOrchestrator {
    /// Creates a new orchestrator over the given configuration.
    #[must_use]
    pub const fn new(config: PlatformConfig) -> Self {
        Self {
            config,
            environment: None,
            validator: ConfigValidator::new(),
            hasher: ConfigHasher::new(),
        }
    }

    /// Labels the emitted plan with the environment it was composed for.
    #[must_use]
    pub const fn with_environment(mut self, environment: DeployEnvironment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Composes the full deployment plan.
    ///
    /// Composition is all-or-nothing: the first composer error aborts
    /// the run and no resource specifications are emitted.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigurationError`], `PlacementError`, or
    /// `DependencyError` encountered, identified by component and field.
    pub fn compose(&self) -> Result<DeploymentPlan> {
        info!(
            environment = ?self.environment,
            "Starting composition run"
        );

        // Validation runs before any composer so a bad file is rejected
        // with the offending field, not mid-composition.
        let validation = self.validator.validate(&self.config)?;
        for warning in &validation.warnings {
            warn!("{warning}");
        }

        let network_config = self
            .config
            .network
            .as_ref()
            .ok_or_else(|| ConfigurationError::missing_section("NETWORK"))?;
        let db_config = self
            .config
            .relational_db
            .as_ref()
            .ok_or_else(|| ConfigurationError::missing_section("RELATIONAL_DB"))?;
        let cluster_config = self
            .config
            .cluster
            .as_ref()
            .ok_or_else(|| ConfigurationError::missing_section("CLUSTER"))?;

        let network = NetworkTopologyBuilder::new().build(network_config)?;
        let buckets = BucketComposer::new().compose(&self.config.storage_buckets)?;
        let data_tier = DataTierComposer::new(&network).compose(db_config)?;
        let cluster = ComputeClusterComposer::new(&network).compose(cluster_config)?;

        // Optional tiers compose only when their section is present.
        let cache = self
            .config
            .cache
            .as_ref()
            .map(|c| CacheComposer::new(&network).compose(c))
            .transpose()?;
        let gateway = self
            .config
            .gateway
            .as_ref()
            .map(|g| GatewayComposer::new(&network).compose(g))
            .transpose()?;
        let identity = self
            .config
            .identity
            .as_ref()
            .map(|i| IdentityComposer::new().compose(i))
            .transpose()?;

        let mut resources = Vec::new();
        resources.push(ResourceSpec::Network(network));
        resources.extend(buckets.into_iter().map(ResourceSpec::Bucket));
        resources.push(ResourceSpec::DataTier(data_tier));
        resources.push(ResourceSpec::ComputeCluster(cluster));
        if let Some(cache) = cache {
            resources.push(ResourceSpec::Cache(cache));
        }
        if let Some(gateway) = gateway {
            resources.push(ResourceSpec::Gateway(gateway));
        }
        if let Some(identity) = identity {
            resources.push(ResourceSpec::Identity(identity));
        }

        let config_hash = self.hasher.hash_config(&self.config);
        debug!(
            resources = resources.len(),
            config_hash = %self.hasher.short_hash(&config_hash),
            "Composition complete"
        );

        Ok(DeploymentPlan {
            created_at: chrono::Utc::now(),
            environment: self.environment,
            config_hash,
            resources,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        BucketConfig, CacheConfig, ClusterConfig, IdentityConfig, NetworkConfig, NodeGroupConfig,
        RelationalDbConfig,
    };
    use crate::error::SkystackError;
    use crate::resources::{DATABASE_PORT, CACHE_PORT, RuleSource};

    fn full_config() -> PlatformConfig {
        PlatformConfig {
            network: Some(NetworkConfig {
                name: String::from("platform-vpc"),
                cidr: String::from("10.0.0.0/16"),
                max_azs: 2,
                nat_gateways: 1,
            }),
            storage_buckets: vec![BucketConfig {
                name: String::from("platform-assets"),
            }],
            relational_db: Some(RelationalDbConfig {
                instance_identifier: String::from("platform-db"),
                database_name: String::from("platform"),
                instance_class: String::from("db.t3.micro"),
                allocated_storage: 20,
                master_username: String::from("admin"),
                subnet_group_name: String::from("platform-db-subnets"),
                security_group_name: String::from("platform-db-sg"),
                secret_name: String::from("platform-db-secret"),
                multi_az: false,
                backup_retention_days: 7,
                deletion_protection: true,
            }),
            cluster: Some(ClusterConfig {
                name: String::from("platform-eks"),
                version: String::from("1.28"),
                node_groups: vec![NodeGroupConfig {
                    name: String::from("workers"),
                    desired: 2,
                    min: 1,
                    max: 4,
                    disk_size_gb: 20,
                    instance_types: vec![String::from("t3.medium"), String::from("t3.large")],
                    interruptible: true,
                }],
            }),
            gateway: None,
            identity: Some(IdentityConfig {
                domain_prefix: String::from("platform-auth"),
                callback_url: Some(String::from("https://app.example.com/callback")),
                logout_url: Some(String::from("https://app.example.com/logout")),
            }),
            cache: Some(CacheConfig {
                cluster_id: String::from("platform-redis"),
                node_type: String::from("cache.t3.micro"),
                num_nodes: 1,
                engine_version: String::from("7.0"),
                subnet_group_name: String::from("platform-redis-subnets"),
                security_group_name: String::from("platform-redis-sg"),
            }),
        }
    }

    #[test]
    fn test_end_to_end_composition() {
        let plan = ResourceGraphOrchestrator::new(full_config())
            .with_environment(DeployEnvironment::Development)
            .compose()
            .unwrap();

        // Network first, with 2 public + 2 private subnets.
        let ResourceSpec::Network(network) = &plan.resources[0] else {
            panic!("network must be the first resource");
        };
        assert_eq!(network.subnets.len(), 4);
        assert_eq!(network.public_subnets().len(), 2);
        assert_eq!(network.private_subnets().len(), 2);

        let expected_source = RuleSource::Cidr("10.0.0.0/16".parse().unwrap());

        let data_tiers = plan.resources_of_kind("data-tier");
        let ResourceSpec::DataTier(tier) = data_tiers[0] else {
            panic!("expected data tier");
        };
        assert_eq!(tier.boundary.ingress_ports(), vec![DATABASE_PORT]);
        assert_eq!(tier.boundary.ingress[0].source, expected_source);

        let caches = plan.resources_of_kind("cache");
        let ResourceSpec::Cache(cache) = caches[0] else {
            panic!("expected cache");
        };
        assert_eq!(cache.node_type, "cache.t3.micro");
        assert_eq!(cache.num_nodes, 1);
        assert_eq!(cache.boundary.ingress_ports(), vec![CACHE_PORT]);
        assert_eq!(cache.boundary.ingress[0].source, expected_source);
    }

    #[test]
    fn test_composition_is_idempotent() {
        let first = ResourceGraphOrchestrator::new(full_config()).compose().unwrap();
        let second = ResourceGraphOrchestrator::new(full_config()).compose().unwrap();

        // Timestamps differ; the resource specifications must not.
        assert_eq!(first.resources, second.resources);
        assert_eq!(first.config_hash, second.config_hash);
    }

    #[test]
    fn test_missing_relational_db_aborts_with_section_name() {
        let config = PlatformConfig {
            relational_db: None,
            ..full_config()
        };
        let result = ResourceGraphOrchestrator::new(config).compose();

        match result {
            Err(SkystackError::Config(ConfigurationError::MissingSection { section })) => {
                assert_eq!(section, "RELATIONAL_DB");
            }
            other => panic!("expected MissingSection, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_network_aborts() {
        let config = PlatformConfig {
            network: None,
            ..full_config()
        };
        assert!(ResourceGraphOrchestrator::new(config).compose().is_err());
    }

    #[test]
    fn test_optional_tiers_are_skipped_when_absent() {
        let config = PlatformConfig {
            cache: None,
            identity: None,
            gateway: None,
            ..full_config()
        };
        let plan = ResourceGraphOrchestrator::new(config).compose().unwrap();

        assert!(plan.resources_of_kind("cache").is_empty());
        assert!(plan.resources_of_kind("identity").is_empty());
        assert!(plan.resources_of_kind("gateway").is_empty());
        // Required tiers are still present.
        assert_eq!(plan.resources_of_kind("data-tier").len(), 1);
        assert_eq!(plan.resources_of_kind("compute-cluster").len(), 1);
    }

    #[test]
    fn test_composer_failure_emits_no_plan() {
        let mut config = full_config();
        if let Some(network) = config.network.as_mut() {
            // Parses fine, but cannot be carved into /24 blocks.
            network.cidr = String::from("10.0.0.0/25");
        }

        let result = ResourceGraphOrchestrator::new(config).compose();
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_capacity_bounds_abort_composition() {
        let mut config = full_config();
        if let Some(cluster) = config.cluster.as_mut() {
            cluster.node_groups[0].desired = 99;
        }

        assert!(ResourceGraphOrchestrator::new(config).compose().is_err());
    }

    #[test]
    fn test_mismatched_identity_hosts_abort_composition() {
        let mut config = full_config();
        if let Some(identity) = config.identity.as_mut() {
            identity.logout_url = Some(String::from("https://evil.other.org/logout"));
        }

        let result = ResourceGraphOrchestrator::new(config).compose();
        match result {
            Err(SkystackError::Config(ConfigurationError::InvalidValue { field, .. })) => {
                assert_eq!(field, "IDENTITY.logout_url");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_plan_is_stamped_with_environment_and_hash() {
        let plan = ResourceGraphOrchestrator::new(full_config())
            .with_environment(DeployEnvironment::Production)
            .compose()
            .unwrap();

        assert_eq!(plan.environment, Some(DeployEnvironment::Production));
        assert_eq!(plan.config_hash.len(), 64);
    }
}
