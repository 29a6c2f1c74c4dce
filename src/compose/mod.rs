//! Composers: pure transformations from configuration plus upstream
//! outputs into resource specifications.
//!
//! Every composer takes its upstream dependencies as explicit typed
//! parameters, so each is independently testable with synthetic inputs.
//! None performs I/O; provisioning belongs to the control plane.

mod buckets;
mod cache;
mod cluster;
mod data_tier;
mod gateway;
mod identity;
mod network;
mod security;

pub use buckets::BucketComposer;
pub use cache::CacheComposer;
pub use cluster::ComputeClusterComposer;
pub use data_tier::DataTierComposer;
pub use gateway::GatewayComposer;
pub use identity::IdentityComposer;
pub use network::NetworkTopologyBuilder;
pub use security::SecurityRuleResolver;
