//! Deployment plan types.
//!
//! A plan is the aggregate, ordered set of resource specifications
//! emitted by one composition run. Creation order is the order of the
//! `resources` vector; destruction order is its strict reverse, with
//! deletion-protected resources skipped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::DeployEnvironment;
use crate::resources::{
    BucketSpec, CacheCluster, ComputeCluster, DataTierResource, GatewayResource,
    IdentityDirectory, NetworkTopology,
};

/// One resource specification within a deployment plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceSpec {
    /// Virtual network topology.
    Network(NetworkTopology),
    /// Object storage bucket.
    Bucket(BucketSpec),
    /// Relational data tier.
    DataTier(DataTierResource),
    /// Container-orchestration cluster.
    ComputeCluster(ComputeCluster),
    /// Distributed cache tier.
    Cache(CacheCluster),
    /// Public gateway tier.
    Gateway(GatewayResource),
    /// Identity directory.
    Identity(IdentityDirectory),
}

impl ResourceSpec {
    /// Returns the resource kind as a short label.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Bucket(_) => "bucket",
            Self::DataTier(_) => "data-tier",
            Self::ComputeCluster(_) => "compute-cluster",
            Self::Cache(_) => "cache",
            Self::Gateway(_) => "gateway",
            Self::Identity(_) => "identity",
        }
    }

    /// Returns the resource's stable identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Network(n) => &n.name,
            Self::Bucket(b) => &b.name,
            Self::DataTier(d) => &d.instance_identifier,
            Self::ComputeCluster(c) => &c.name,
            Self::Cache(c) => &c.cluster_id,
            Self::Gateway(g) => &g.front_door.name,
            Self::Identity(i) => &i.pool_name,
        }
    }

    /// Whether this resource is protected against destruction by a
    /// subsequent run.
    #[must_use]
    pub const fn deletion_protected(&self) -> bool {
        match self {
            Self::DataTier(d) => d.deletion_protection,
            Self::Identity(i) => i.deletion_protection,
            Self::Bucket(b) => b.retain_on_delete,
            _ => false,
        }
    }
}

/// A complete deployment plan for one environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentPlan {
    /// When the plan was composed.
    pub created_at: DateTime<Utc>,
    /// Environment the plan was composed for, if known.
    pub environment: Option<DeployEnvironment>,
    /// Hash of the configuration this plan was composed from.
    pub config_hash: String,
    /// Resource specifications in creation order.
    pub resources: Vec<ResourceSpec>,
}

impl DeploymentPlan {
    /// Returns the number of resource specifications.
    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Returns the resources of the given kind.
    #[must_use]
    pub fn resources_of_kind(&self, kind: &str) -> Vec<&ResourceSpec> {
        self.resources.iter().filter(|r| r.kind() == kind).collect()
    }

    /// Returns the resources in destruction order: the strict reverse
    /// of creation order, skipping deletion-protected resources. A
    /// protected resource is only destroyable after its protection flag
    /// is disabled in configuration and the plan recomposed.
    #[must_use]
    pub fn destruction_order(&self) -> Vec<&ResourceSpec> {
        self.resources
            .iter()
            .rev()
            .filter(|r| !r.deletion_protected())
            .collect()
    }
}

impl std::fmt::Display for ResourceSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}'", self.kind(), self.name())
    }
}

impl std::fmt::Display for DeploymentPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.resources.is_empty() {
            return write!(f, "Empty plan");
        }

        writeln!(f, "Deployment plan ({} resources):", self.resources.len())?;
        for (i, resource) in self.resources.iter().enumerate() {
            writeln!(f, "  {i}. {resource}")?;
        }
        Ok(())
    }
}
