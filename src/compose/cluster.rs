//! Composition of the container-orchestration cluster.
//!
//! The cluster carries two fixed-grant roles, binds to private subnets
//! with zero built-in capacity, and attaches one or more worker
//! capacity groups drawn from configuration.

use tracing::debug;

use crate::config::ClusterConfig;
use crate::error::{ConfigurationError, PlacementError, Result};
use crate::resources::{
    CapacityGroup, CapacityKind, ClusterRole, ComputeCluster, NetworkTopology,
};

/// Managed capability grants for the control-plane role. Part of the
/// platform's baseline trust boundary, not configurable.
const CONTROL_PLANE_GRANTS: &[&str] = &["ClusterLifecycle", "ClusterService"];

/// Managed capability grants for the worker role.
const WORKER_GRANTS: &[&str] = &[
    "WorkerRegistration",
    "ContainerRegistryRead",
    "NetworkInterfaceManagement",
];

/// Composer for the container-orchestration cluster.
#[derive(Debug)]
pub struct ComputeClusterComposer<'a> {
    network: &'a NetworkTopology,
}

impl<'a> ComputeClusterComposer<'a> {
    /// Creates a new cluster composer over the given network.
    #[must_use]
    pub const fn new(network: &'a NetworkTopology) -> Self {
        Self { network }
    }

    /// Composes the cluster from the `CLUSTER` section.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if any capacity group's desired
    /// size lies outside `[min, max]` or the group list is empty, and a
    /// [`PlacementError`] if the network has no private subnets.
    pub fn compose(&self, config: &ClusterConfig) -> Result<ComputeCluster> {
        let subnet_names = self.network.private_subnet_names();
        if subnet_names.is_empty() {
            return Err(PlacementError::no_private_subnets("CLUSTER").into());
        }

        if config.node_groups.is_empty() {
            return Err(ConfigurationError::missing_field("CLUSTER", "node_groups").into());
        }

        let mut capacity_groups = Vec::with_capacity(config.node_groups.len());
        for group in &config.node_groups {
            if group.desired < group.min || group.desired > group.max {
                return Err(ConfigurationError::out_of_range(
                    "CLUSTER",
                    format!("node_groups.{}.desired", group.name),
                    format!(
                        "desired ({}) must lie within [{}, {}]",
                        group.desired, group.min, group.max
                    ),
                )
                .into());
            }

            capacity_groups.push(CapacityGroup {
                name: group.name.clone(),
                capacity_kind: if group.interruptible {
                    CapacityKind::Interruptible
                } else {
                    CapacityKind::OnDemand
                },
                desired: group.desired,
                min: group.min,
                max: group.max,
                disk_size_gb: group.disk_size_gb,
                instance_types: group.instance_types.clone(),
                subnet_names: subnet_names.clone(),
            });
        }

        debug!(
            cluster = %config.name,
            groups = capacity_groups.len(),
            "Composed compute cluster"
        );

        Ok(ComputeCluster {
            name: config.name.clone(),
            version: config.version.clone(),
            network: self.network.name.clone(),
            control_plane_role: ClusterRole {
                name: format!("{}-control-plane", config.name),
                assumed_by: String::from("orchestration-control-plane"),
                managed_grants: CONTROL_PLANE_GRANTS.iter().map(ToString::to_string).collect(),
            },
            worker_role: ClusterRole {
                name: format!("{}-workers", config.name),
                assumed_by: String::from("compute-instances"),
                managed_grants: WORKER_GRANTS.iter().map(ToString::to_string).collect(),
            },
            subnet_names,
            default_capacity: 0,
            capacity_groups,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::NetworkTopologyBuilder;
    use crate::config::{NetworkConfig, NodeGroupConfig};
    use crate::error::SkystackError;
    use crate::resources::SubnetTier;

    fn test_network() -> NetworkTopology {
        NetworkTopologyBuilder::new()
            .build(&NetworkConfig {
                name: String::from("platform-vpc"),
                cidr: String::from("10.0.0.0/16"),
                max_azs: 2,
                nat_gateways: 1,
            })
            .unwrap()
    }

    fn node_group(desired: u32, min: u32, max: u32) -> NodeGroupConfig {
        NodeGroupConfig {
            name: String::from("workers"),
            desired,
            min,
            max,
            disk_size_gb: 20,
            instance_types: vec![String::from("t3.medium"), String::from("t3.large")],
            interruptible: true,
        }
    }

    fn cluster_config(groups: Vec<NodeGroupConfig>) -> ClusterConfig {
        ClusterConfig {
            name: String::from("platform-eks"),
            version: String::from("1.28"),
            node_groups: groups,
        }
    }

    #[test]
    fn test_cluster_has_zero_default_capacity_and_fixed_grants() {
        let network = test_network();
        let cluster = ComputeClusterComposer::new(&network)
            .compose(&cluster_config(vec![node_group(2, 1, 4)]))
            .unwrap();

        assert_eq!(cluster.default_capacity, 0);
        assert_eq!(
            cluster.control_plane_role.managed_grants,
            vec!["ClusterLifecycle", "ClusterService"]
        );
        assert_eq!(cluster.worker_role.managed_grants.len(), 3);
    }

    #[test]
    fn test_capacity_groups_attach_to_private_subnets() {
        let network = test_network();
        let cluster = ComputeClusterComposer::new(&network)
            .compose(&cluster_config(vec![node_group(2, 1, 4)]))
            .unwrap();

        let group = &cluster.capacity_groups[0];
        assert_eq!(group.capacity_kind, CapacityKind::Interruptible);
        for name in &group.subnet_names {
            let subnet = network.subnets.iter().find(|s| &s.name == name).unwrap();
            assert_eq!(subnet.tier, SubnetTier::PrivateWithEgress);
        }
    }

    #[test]
    fn test_desired_below_min_rejected() {
        let network = test_network();
        let result = ComputeClusterComposer::new(&network)
            .compose(&cluster_config(vec![node_group(0, 1, 4)]));
        assert!(matches!(
            result,
            Err(SkystackError::Config(ConfigurationError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_desired_above_max_rejected() {
        let network = test_network();
        let result = ComputeClusterComposer::new(&network)
            .compose(&cluster_config(vec![node_group(5, 1, 4)]));
        assert!(result.is_err());
    }

    #[test]
    fn test_boundary_values_succeed() {
        let network = test_network();
        let composer = ComputeClusterComposer::new(&network);

        assert!(composer.compose(&cluster_config(vec![node_group(1, 1, 4)])).is_ok());
        assert!(composer.compose(&cluster_config(vec![node_group(4, 1, 4)])).is_ok());
    }

    #[test]
    fn test_empty_node_groups_rejected() {
        let network = test_network();
        let result = ComputeClusterComposer::new(&network).compose(&cluster_config(vec![]));
        assert!(matches!(
            result,
            Err(SkystackError::Config(ConfigurationError::MissingField { .. }))
        ));
    }
}
