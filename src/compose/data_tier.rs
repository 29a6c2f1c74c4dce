//! Composition of the relational data tier.
//!
//! The data tier lives entirely inside the private subnet tier: a
//! subnet grouping, an isolation boundary admitting only the engine's
//! standard port from the network's own address space, a credential
//! secret whose value the control plane generates, and the database
//! instance binding them together.

use serde_json::json;
use tracing::debug;

use crate::config::RelationalDbConfig;
use crate::error::{PlacementError, Result};
use crate::resources::{
    CredentialSecret, DATABASE_PORT, DataTierResource, DatabaseEngine, IsolationBoundary,
    NetworkTopology, Protocol, SubnetGroup,
};

use super::security::SecurityRuleResolver;

/// Length of the generated database password.
const PASSWORD_LENGTH: u8 = 12;

/// Characters excluded from password generation; these break shell
/// quoting or the JSON secret template.
const PASSWORD_EXCLUDE_CHARACTERS: &str = "\"@/\\";

/// Composer for the relational data tier.
#[derive(Debug)]
pub struct DataTierComposer<'a> {
    network: &'a NetworkTopology,
    rules: SecurityRuleResolver,
}

impl<'a> DataTierComposer<'a> {
    /// Creates a new data-tier composer over the given network.
    #[must_use]
    pub const fn new(network: &'a NetworkTopology) -> Self {
        Self {
            network,
            rules: SecurityRuleResolver::new(),
        }
    }

    /// Composes the data tier from the `RELATIONAL_DB` section.
    ///
    /// # Errors
    ///
    /// Returns a [`PlacementError`] if the network has no private
    /// subnets.
    pub fn compose(&self, config: &RelationalDbConfig) -> Result<DataTierResource> {
        let subnet_names = self.network.private_subnet_names();
        if subnet_names.is_empty() {
            return Err(PlacementError::no_private_subnets("RELATIONAL_DB").into());
        }

        let subnet_group = SubnetGroup {
            name: config.subnet_group_name.clone(),
            description: String::from("Database subnet group"),
            subnet_names,
        };

        let boundary = IsolationBoundary {
            name: config.security_group_name.clone(),
            network: self.network.name.clone(),
            description: String::from("Security group for the database instance"),
            ingress: vec![self.rules.ingress_within(
                self.network,
                Protocol::Tcp,
                DATABASE_PORT,
                "Database access from within the network",
            )],
            egress: vec![self.rules.egress_all("Allow all outbound traffic")],
        };

        // The secret value is generated by the control plane; only the
        // username template and the generation policy live here.
        let secret = CredentialSecret {
            name: config.secret_name.clone(),
            secret_string_template: json!({ "username": config.master_username }).to_string(),
            generate_key: String::from("password"),
            password_length: PASSWORD_LENGTH,
            exclude_characters: String::from(PASSWORD_EXCLUDE_CHARACTERS),
        };

        debug!(
            instance = %config.instance_identifier,
            "Composed data tier"
        );

        Ok(DataTierResource {
            instance_identifier: config.instance_identifier.clone(),
            engine: DatabaseEngine::Mysql(String::from("8.0")),
            instance_class: config.instance_class.clone(),
            database_name: config.database_name.clone(),
            allocated_storage: config.allocated_storage,
            network: self.network.name.clone(),
            subnet_group,
            boundary,
            secret,
            multi_az: config.multi_az,
            backup_retention_days: config.backup_retention_days,
            deletion_protection: config.deletion_protection,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::NetworkTopologyBuilder;
    use crate::config::NetworkConfig;
    use crate::error::SkystackError;
    use crate::resources::{RuleSource, SubnetTier};

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

    fn test_db_config() -> RelationalDbConfig {
        RelationalDbConfig {
            instance_identifier: String::from("platform-db"),
            database_name: String::from("platform"),
            instance_class: String::from("db.t3.micro"),
            allocated_storage: 20,
            master_username: String::from("admin"),
            subnet_group_name: String::from("platform-db-subnets"),
            security_group_name: String::from("platform-db-sg"),
            secret_name: String::from("platform-db-secret"),
            multi_az: false,
            backup_retention_days: 7,
            deletion_protection: true,
        }
    }

    #[test]
    fn test_boundary_admits_only_database_port_from_network() {
        let network = test_network();
        let tier = DataTierComposer::new(&network)
            .compose(&test_db_config())
            .unwrap();

        assert_eq!(tier.boundary.ingress_ports(), vec![DATABASE_PORT]);
        assert_eq!(
            tier.boundary.ingress[0].source,
            RuleSource::Cidr("10.0.0.0/16".parse().unwrap())
        );
    }

    #[test]
    fn test_placed_in_private_subnets_only() {
        let network = test_network();
        let tier = DataTierComposer::new(&network)
            .compose(&test_db_config())
            .unwrap();

        assert_eq!(tier.subnet_group.subnet_names.len(), 2);
        for name in &tier.subnet_group.subnet_names {
            let subnet = network.subnets.iter().find(|s| &s.name == name).unwrap();
            assert_eq!(subnet.tier, SubnetTier::PrivateWithEgress);
        }
    }

    #[test]
    fn test_secret_carries_template_not_value() {
        let network = test_network();
        let tier = DataTierComposer::new(&network)
            .compose(&test_db_config())
            .unwrap();

        assert_eq!(tier.secret.secret_string_template, r#"{"username":"admin"}"#);
        assert_eq!(tier.secret.generate_key, "password");
        assert_eq!(tier.secret.password_length, 12);
    }

    #[test]
    fn test_config_flags_propagate_unchanged() {
        let network = test_network();
        let mut config = test_db_config();
        config.multi_az = true;
        config.backup_retention_days = 30;
        config.deletion_protection = false;

        let tier = DataTierComposer::new(&network).compose(&config).unwrap();
        assert!(tier.multi_az);
        assert_eq!(tier.backup_retention_days, 30);
        assert!(!tier.deletion_protection);
    }

    #[test]
    fn test_no_private_subnets_is_placement_error() {
        let mut network = test_network();
        network.subnets.retain(|s| s.tier == SubnetTier::Public);

        let result = DataTierComposer::new(&network).compose(&test_db_config());
        assert!(matches!(result, Err(SkystackError::Placement(_))));
    }
}
