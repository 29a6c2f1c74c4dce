//! Pure construction of traffic rules for isolation boundaries.
//!
//! Every tiered composer builds its ingress rules through this resolver
//! so rule construction logic lives in one place. Ingress is always
//! scoped to the network's own address space; no "allow all" ingress
//! exists. Only egress may be unrestricted, and only explicitly.

use crate::resources::{EgressRule, IngressRule, NetworkTopology, Protocol, RuleSource};

/// Resolver for ingress and egress rule construction.
#[derive(Debug, Default)]
pub struct SecurityRuleResolver;

impl SecurityRuleResolver {
    /// Creates a new rule resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Builds an ingress rule admitting `port` only from the network's
    /// own address space.
    #[must_use]
    pub fn ingress_within(
        &self,
        network: &NetworkTopology,
        protocol: Protocol,
        port: u16,
        description: impl Into<String>,
    ) -> IngressRule {
        IngressRule {
            protocol,
            port,
            source: RuleSource::Cidr(network.cidr),
            description: description.into(),
        }
    }

    /// Builds the unrestricted egress rule (any protocol, any port,
    /// any IPv4 destination).
    #[must_use]
    pub fn egress_all(&self, description: impl Into<String>) -> EgressRule {
        EgressRule {
            protocol: Protocol::All,
            port: None,
            destination: RuleSource::AnyIpv4,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::NetworkTopologyBuilder;
    use crate::config::NetworkConfig;

    fn test_network() -> NetworkTopology {
        NetworkTopologyBuilder::new()
            .build(&NetworkConfig {
                name: String::from("test-vpc"),
                cidr: String::from("10.0.0.0/16"),
                max_azs: 2,
                nat_gateways: 1,
            })
            .unwrap()
    }

    #[test]
    fn test_ingress_within_scopes_to_network_cidr() {
        let network = test_network();
        let resolver = SecurityRuleResolver::new();
        let rule = resolver.ingress_within(&network, Protocol::Tcp, 3306, "db access");

        assert_eq!(rule.port, 3306);
        assert_eq!(rule.source, RuleSource::Cidr("10.0.0.0/16".parse().unwrap()));
    }

    #[test]
    fn test_egress_all_is_fully_open() {
        let resolver = SecurityRuleResolver::new();
        let rule = resolver.egress_all("all outbound");
        assert_eq!(rule.protocol, Protocol::All);
        assert_eq!(rule.port, None);
        assert_eq!(rule.destination, RuleSource::AnyIpv4);
    }
}
