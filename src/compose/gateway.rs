//! Composition of the public gateway tier.
//!
//! The gateway is the only sanctioned bridge from public traffic into
//! the private compute tier: a public front door, one auto-deploying
//! stage, and a private-connectivity link terminating in the private
//! subnets behind an egress-only isolation boundary.

use tracing::debug;

use crate::config::GatewayConfig;
use crate::error::{PlacementError, Result};
use crate::resources::{
    DeploymentStage, FrontDoor, GatewayResource, IsolationBoundary, NetworkTopology, PrivateLink,
};

use super::security::SecurityRuleResolver;

/// Composer for the public gateway tier.
#[derive(Debug)]
pub struct GatewayComposer<'a> {
    network: &'a NetworkTopology,
    rules: SecurityRuleResolver,
}

impl<'a> GatewayComposer<'a> {
    /// Creates a new gateway composer over the given network.
    #[must_use]
    pub const fn new(network: &'a NetworkTopology) -> Self {
        Self {
            network,
            rules: SecurityRuleResolver::new(),
        }
    }

    /// Composes the gateway tier from the `GATEWAY` section.
    ///
    /// # Errors
    ///
    /// Returns a [`PlacementError`] if the network has no private
    /// subnets for the connectivity link.
    pub fn compose(&self, config: &GatewayConfig) -> Result<GatewayResource> {
        let subnet_names = self.network.private_subnet_names();
        if subnet_names.is_empty() {
            return Err(PlacementError::no_private_subnets("GATEWAY").into());
        }

        let front_door = FrontDoor {
            name: config.name.clone(),
            create_default_stage: false,
        };

        // The stage references the front door by name, so the control
        // plane creates it only after the front door exists.
        let stage = DeploymentStage {
            name: config.stage_name.clone(),
            front_door: front_door.name.clone(),
            auto_deploy: true,
        };

        let boundary_name = format!("{}-link", config.name);
        let boundary = IsolationBoundary {
            name: boundary_name.clone(),
            network: self.network.name.clone(),
            description: String::from("Security group for the gateway connectivity link"),
            ingress: vec![],
            egress: vec![self.rules.egress_all("Allow all outbound traffic")],
        };

        let link = PrivateLink {
            name: format!("{}-private-link", config.name),
            network: self.network.name.clone(),
            subnet_names,
            boundary: boundary_name,
        };

        debug!(front_door = %front_door.name, stage = %stage.name, "Composed gateway");

        Ok(GatewayResource {
            front_door,
            stage,
            boundary,
            link,
        })
    }
}
