//! Distributed cache specification types.

use serde::{Deserialize, Serialize};

use super::database::SubnetGroup;
use super::network::IsolationBoundary;

/// Standard port of the cache engine.
pub const CACHE_PORT: u16 = 6379;

/// The composed in-memory cache cluster.
///
/// The cache engine used here has no in-transit authentication layer,
/// so no credential secret is attached; isolation relies entirely on
/// private placement and the boundary's port restriction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheCluster {
    /// Cache cluster identifier.
    pub cluster_id: String,
    /// Cache engine name.
    pub engine: String,
    /// Cache engine version.
    pub engine_version: String,
    /// Cache node type.
    pub node_type: String,
    /// Number of cache nodes, at least 1.
    pub num_nodes: u32,
    /// Name of the owning network.
    pub network: String,
    /// Private subnet grouping.
    pub subnet_group: SubnetGroup,
    /// Isolation boundary admitting only the engine's standard port.
    pub boundary: IsolationBoundary,
}
