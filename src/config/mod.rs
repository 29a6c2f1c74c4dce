//! Configuration module for the Skystack composition engine.
//!
//! This module handles all configuration-related functionality:
//! - Deserializing per-environment platform configuration files
//! - Validation of configuration values
//! - Computing configuration hashes for plan stamping

mod hash;
mod parser;
mod spec;
mod validator;

pub use hash::ConfigHasher;
pub use parser::ConfigParser;
pub use spec::{
    BucketConfig, CacheConfig, ClusterConfig, DeployEnvironment, GatewayConfig, IdentityConfig,
    NetworkConfig, NodeGroupConfig, PlatformConfig, RelationalDbConfig,
};
pub use validator::{ConfigValidator, ValidationError, ValidationResult};
