//! Resource specification types emitted into deployment plans.
//!
//! Every type here is a pure value object: created once per composition
//! run, never mutated in place, cross-referencing other resources by
//! stable name. The control plane reconciles these specifications into
//! real infrastructure.

mod cache;
mod cluster;
mod database;
mod gateway;
mod identity;
mod network;
mod storage;

pub use cache::{CACHE_PORT, CacheCluster};
pub use cluster::{CapacityGroup, CapacityKind, ClusterRole, ComputeCluster};
pub use database::{
    CredentialSecret, DATABASE_PORT, DataTierResource, DatabaseEngine, SubnetGroup,
};
pub use gateway::{DeploymentStage, FrontDoor, GatewayResource, PrivateLink};
pub use identity::{
    ClientRegistration, IdentityDirectory, MfaPolicy, OAuthScope, PasswordPolicy, RoleGroup,
    SignInAliases, StandardAttribute,
};
pub use network::{
    EgressRule, IngressRule, IsolationBoundary, NetworkTopology, Protocol, RuleSource, SubnetSpec,
    SubnetTier,
};
pub use storage::BucketSpec;
