//! Derivation of the virtual network topology.
//!
//! The builder carves one /24 block per availability zone for each of
//! the two subnet tiers, public tier first, from the configured address
//! space. All downstream composers depend on the resulting topology.

use ipnet::Ipv4Net;
use tracing::debug;

use crate::config::NetworkConfig;
use crate::error::{ConfigurationError, Result};
use crate::resources::{NetworkTopology, SubnetSpec, SubnetTier};

/// Subnet mask applied to every carved subnet.
const SUBNET_PREFIX_LEN: u8 = 24;

/// Availability zone suffixes, in carving order.
const AZ_SUFFIXES: &[&str] = &["a", "b", "c", "d", "e", "f"];

/// Builder for the virtual network topology.
#[derive(Debug, Default)]
pub struct NetworkTopologyBuilder;

impl NetworkTopologyBuilder {
    /// Creates a new topology builder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Builds the network topology from the `NETWORK` section.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the address space is not a
    /// valid CIDR block, the availability zone count is below 1, or the
    /// address space cannot hold one /24 per tier per zone.
    pub fn build(&self, config: &NetworkConfig) -> Result<NetworkTopology> {
        let cidr: Ipv4Net = config.cidr.parse().map_err(|_| {
            ConfigurationError::InvalidCidr {
                section: String::from("NETWORK"),
                field: String::from("cidr"),
                value: config.cidr.clone(),
            }
        })?;

        if config.max_azs < 1 {
            return Err(ConfigurationError::out_of_range(
                "NETWORK",
                "max_azs",
                "availability zone count must be at least 1",
            )
            .into());
        }

        if usize::from(config.max_azs) > AZ_SUFFIXES.len() {
            return Err(ConfigurationError::out_of_range(
                "NETWORK",
                "max_azs",
                format!("at most {} availability zones are supported", AZ_SUFFIXES.len()),
            )
            .into());
        }

        let needed = usize::from(config.max_azs) * 2;
        let mut blocks = cidr.subnets(SUBNET_PREFIX_LEN).map_err(|_| {
            ConfigurationError::invalid_value(
                "NETWORK",
                "cidr",
                format!("prefix longer than /{SUBNET_PREFIX_LEN} cannot be subdivided"),
            )
        })?;

        let mut subnets = Vec::with_capacity(needed);
        for tier in [SubnetTier::Public, SubnetTier::PrivateWithEgress] {
            for az in &AZ_SUFFIXES[..usize::from(config.max_azs)] {
                let block = blocks.next().ok_or_else(|| {
                    ConfigurationError::invalid_value(
                        "NETWORK",
                        "cidr",
                        format!("address space too small for {needed} /{SUBNET_PREFIX_LEN} subnets"),
                    )
                })?;
                let tier_label = match tier {
                    SubnetTier::Public => "public",
                    SubnetTier::PrivateWithEgress => "private",
                };
                subnets.push(SubnetSpec {
                    name: format!("{}-{tier_label}-{az}", config.name),
                    cidr: block,
                    availability_zone: (*az).to_string(),
                    tier,
                });
            }
        }

        debug!(
            network = %config.name,
            subnet_count = subnets.len(),
            "Derived network topology"
        );

        Ok(NetworkTopology {
            name: config.name.clone(),
            cidr,
            max_azs: config.max_azs,
            nat_gateways: config.nat_gateways,
            subnets,
        })
    }
}
