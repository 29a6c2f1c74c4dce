//! Public API gateway specification types.

use serde::{Deserialize, Serialize};

use super::network::IsolationBoundary;

/// The public HTTP front door.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrontDoor {
    /// Front door name, used as the stable reference.
    pub name: String,
    /// Whether the control plane creates an implicit default stage.
    /// Always false; the stage below is the only stage.
    pub create_default_stage: bool,
}

/// A deployment stage bound to an existing front door.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeploymentStage {
    /// Stage name.
    pub name: String,
    /// Name of the front door this stage deploys.
    pub front_door: String,
    /// Whether changes deploy automatically.
    pub auto_deploy: bool,
}

/// The private-connectivity link bridging the front door into the
/// private compute tier. This link is the only sanctioned path from
/// public traffic into private subnets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrivateLink {
    /// Link name.
    pub name: String,
    /// Name of the owning network.
    pub network: String,
    /// Names of the private subnets the link terminates in.
    pub subnet_names: Vec<String>,
    /// Name of the boundary attached to the link.
    pub boundary: String,
}

/// The composed gateway tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GatewayResource {
    /// Public front door.
    pub front_door: FrontDoor,
    /// The single deployment stage for this environment.
    pub stage: DeploymentStage,
    /// Dedicated boundary: no ingress, unrestricted egress.
    pub boundary: IsolationBoundary,
    /// Private-connectivity link into the compute tier.
    pub link: PrivateLink,
}
