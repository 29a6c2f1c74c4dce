//! Composition of the distributed cache tier.
//!
//! Mirrors the data tier's placement and isolation pattern for the
//! cache engine's standard port. No credential secret is attached.

use tracing::debug;

use crate::config::CacheConfig;
use crate::error::{ConfigurationError, PlacementError, Result};
use crate::resources::{
    CACHE_PORT, CacheCluster, IsolationBoundary, NetworkTopology, Protocol, SubnetGroup,
};

use super::security::SecurityRuleResolver;

/// Composer for the distributed cache tier.
#[derive(Debug)]
pub struct CacheComposer<'a> {
    network: &'a NetworkTopology,
    rules: SecurityRuleResolver,
}

impl<'a> CacheComposer<'a> {
    /// Creates a new cache composer over the given network.
    #[must_use]
    pub const fn new(network: &'a NetworkTopology) -> Self {
        Self {
            network,
            rules: SecurityRuleResolver::new(),
        }
    }

    /// Composes the cache tier from the `CACHE` section.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the node count is below 1
    /// and a [`PlacementError`] if the network has no private subnets.
    pub fn compose(&self, config: &CacheConfig) -> Result<CacheCluster> {
        if config.num_nodes < 1 {
            return Err(ConfigurationError::out_of_range(
                "CACHE",
                "num_nodes",
                "node count must be at least 1",
            )
            .into());
        }

        let subnet_names = self.network.private_subnet_names();
        if subnet_names.is_empty() {
            return Err(PlacementError::no_private_subnets("CACHE").into());
        }

        let subnet_group = SubnetGroup {
            name: config.subnet_group_name.clone(),
            description: String::from("Subnet group for the cache cluster"),
            subnet_names,
        };

        let boundary = IsolationBoundary {
            name: config.security_group_name.clone(),
            network: self.network.name.clone(),
            description: String::from("Security group for the cache cluster"),
            ingress: vec![self.rules.ingress_within(
                self.network,
                Protocol::Tcp,
                CACHE_PORT,
                "Cache access from within the network",
            )],
            egress: vec![self.rules.egress_all("Allow all outbound traffic")],
        };

        debug!(cluster = %config.cluster_id, "Composed cache tier");

        Ok(CacheCluster {
            cluster_id: config.cluster_id.clone(),
            engine: String::from("redis"),
            engine_version: config.engine_version.clone(),
            node_type: config.node_type.clone(),
            num_nodes: config.num_nodes,
            network: self.network.name.clone(),
            subnet_group,
            boundary,
        })
    }
}
