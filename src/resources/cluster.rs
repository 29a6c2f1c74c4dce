//! Container-orchestration cluster specification types.

use serde::{Deserialize, Serialize};

/// A platform role with a fixed set of managed capability grants.
///
/// Grant sets are the platform's baseline trust boundary and are not
/// configurable per environment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClusterRole {
    /// Role name.
    pub name: String,
    /// Service allowed to assume the role.
    pub assumed_by: String,
    /// Managed capability grants attached to the role.
    pub managed_grants: Vec<String>,
}

/// Scheduling priority of a capacity group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CapacityKind {
    /// Interruptible ("spot") capacity.
    Interruptible,
    /// On-demand capacity.
    OnDemand,
}

/// A worker-capacity group attached to the cluster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CapacityGroup {
    /// Capacity group name.
    pub name: String,
    /// Scheduling priority.
    pub capacity_kind: CapacityKind,
    /// Desired node count, within `[min, max]`.
    pub desired: u32,
    /// Minimum node count.
    pub min: u32,
    /// Maximum node count.
    pub max: u32,
    /// Per-node disk size in GB.
    pub disk_size_gb: u32,
    /// Instance-type preference list, most preferred first.
    pub instance_types: Vec<String>,
    /// Names of the private subnets the group attaches to.
    pub subnet_names: Vec<String>,
}

/// The composed container-orchestration cluster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComputeCluster {
    /// Cluster name.
    pub name: String,
    /// Kubernetes version.
    pub version: String,
    /// Name of the owning network.
    pub network: String,
    /// Control-plane role.
    pub control_plane_role: ClusterRole,
    /// Worker role shared by all capacity groups.
    pub worker_role: ClusterRole,
    /// Names of the private subnets hosting the cluster.
    pub subnet_names: Vec<String>,
    /// Built-in compute capacity; always zero, capacity groups provide nodes.
    pub default_capacity: u32,
    /// Worker-capacity groups.
    pub capacity_groups: Vec<CapacityGroup>,
}
