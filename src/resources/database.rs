//! Relational data tier specification types.

use serde::{Deserialize, Serialize};

use super::network::IsolationBoundary;

/// Standard port of the relational database engine.
pub const DATABASE_PORT: u16 = 3306;

/// A named grouping of subnets a placed resource spreads across.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubnetGroup {
    /// Group name, used as the stable reference.
    pub name: String,
    /// Purpose of the group.
    pub description: String,
    /// Names of the member subnets.
    pub subnet_names: Vec<String>,
}

/// A credential secret whose value is generated by the control plane.
///
/// The specification only carries the generation policy and a template
/// indicating where the generated value goes; no secret material is
/// ever embedded here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CredentialSecret {
    /// Secret name, used as the stable reference.
    pub name: String,
    /// JSON template with the non-generated fields (the username).
    pub secret_string_template: String,
    /// Key under which the control plane stores the generated value.
    pub generate_key: String,
    /// Length of the generated value.
    pub password_length: u8,
    /// Characters excluded from generation.
    pub exclude_characters: String,
}

/// Relational database engine variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", tag = "engine", content = "version")]
pub enum DatabaseEngine {
    /// MySQL at the given major version.
    Mysql(String),
}

/// The composed relational data tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataTierResource {
    /// Database instance identifier.
    pub instance_identifier: String,
    /// Database engine and version.
    pub engine: DatabaseEngine,
    /// Instance class.
    pub instance_class: String,
    /// Initial database name.
    pub database_name: String,
    /// Allocated storage in GB.
    pub allocated_storage: u32,
    /// Name of the owning network.
    pub network: String,
    /// Private subnet grouping.
    pub subnet_group: SubnetGroup,
    /// Isolation boundary admitting only the engine's standard port.
    pub boundary: IsolationBoundary,
    /// Attached credential secret.
    pub secret: CredentialSecret,
    /// Whether the instance spans multiple availability zones.
    pub multi_az: bool,
    /// Automated backup retention in days.
    pub backup_retention_days: u16,
    /// Hard block against destruction by a subsequent run.
    pub deletion_protection: bool,
}
