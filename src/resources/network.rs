//! Network topology and traffic isolation types.
//!
//! The network is the root of the resource dependency graph: every
//! tiered component places itself into one of its subnet tiers and
//! scopes its traffic rules to its address space.

use ipnet::Ipv4Net;
use serde::{Deserialize, Serialize};

/// A named group of subnets sharing a routing policy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SubnetTier {
    /// Directly externally reachable subnets.
    Public,
    /// Subnets with NAT egress but no inbound reachability.
    PrivateWithEgress,
}

impl SubnetTier {
    /// Whether subnets in this tier are directly externally reachable.
    #[must_use]
    pub const fn is_publicly_routable(self) -> bool {
        matches!(self, Self::Public)
    }
}

/// A single subnet within a tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubnetSpec {
    /// Stable subnet identifier (e.g. `platform-vpc-private-a`).
    pub name: String,
    /// Subnet CIDR block.
    pub cidr: Ipv4Net,
    /// Availability zone suffix (`a`, `b`, ...).
    pub availability_zone: String,
    /// Routing tier this subnet belongs to.
    pub tier: SubnetTier,
}

/// The composed virtual network: address space plus two subnet tiers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkTopology {
    /// Network name, used as the stable reference by dependent tiers.
    pub name: String,
    /// Address space of the whole network.
    pub cidr: Ipv4Net,
    /// Number of availability zones spanned.
    pub max_azs: u8,
    /// Number of NAT gateways serving the private tier.
    pub nat_gateways: u8,
    /// All subnets, public tier first.
    pub subnets: Vec<SubnetSpec>,
}

impl NetworkTopology {
    /// Returns the subnets of the public tier.
    #[must_use]
    pub fn public_subnets(&self) -> Vec<&SubnetSpec> {
        self.subnets
            .iter()
            .filter(|s| s.tier == SubnetTier::Public)
            .collect()
    }

    /// Returns the subnets of the private-with-egress tier.
    #[must_use]
    pub fn private_subnets(&self) -> Vec<&SubnetSpec> {
        self.subnets
            .iter()
            .filter(|s| s.tier == SubnetTier::PrivateWithEgress)
            .collect()
    }

    /// Returns the names of the private-tier subnets.
    #[must_use]
    pub fn private_subnet_names(&self) -> Vec<String> {
        self.private_subnets()
            .iter()
            .map(|s| s.name.clone())
            .collect()
    }
}

/// Transport protocol a traffic rule applies to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// TCP traffic.
    Tcp,
    /// UDP traffic.
    Udp,
    /// Any protocol (used only for unrestricted egress).
    All,
}

/// The source (or destination) of a traffic rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RuleSource {
    /// A specific CIDR block.
    Cidr(Ipv4Net),
    /// Any IPv4 address. Never produced implicitly.
    AnyIpv4,
}

/// A single inbound allow rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngressRule {
    /// Protocol the rule admits.
    pub protocol: Protocol,
    /// Port the rule admits.
    pub port: u16,
    /// Permitted traffic source.
    pub source: RuleSource,
    /// Human-readable rule description.
    pub description: String,
}

/// A single outbound allow rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EgressRule {
    /// Protocol the rule permits.
    pub protocol: Protocol,
    /// Destination port; `None` permits all ports.
    pub port: Option<u16>,
    /// Permitted traffic destination.
    pub destination: RuleSource,
    /// Human-readable rule description.
    pub description: String,
}

/// A named, rule-based traffic filter attached to a resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IsolationBoundary {
    /// Boundary name, used as the stable reference.
    pub name: String,
    /// Name of the owning network.
    pub network: String,
    /// Purpose of the boundary.
    pub description: String,
    /// Ordered inbound allow rules.
    pub ingress: Vec<IngressRule>,
    /// Ordered outbound allow rules.
    pub egress: Vec<EgressRule>,
}

impl IsolationBoundary {
    /// Returns the ports admitted by this boundary's ingress rules.
    #[must_use]
    pub fn ingress_ports(&self) -> Vec<u16> {
        self.ingress.iter().map(|r| r.port).collect()
    }
}
