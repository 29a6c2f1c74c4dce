// ============================================================================
// Strict linting - Dangerous or non-idiomatic practices are forbidden
// ============================================================================

#![deny(warnings)]                    // All warnings are treated as errors
#![deny(unsafe_code)]                 // Unsafe code is forbidden
#![deny(missing_docs)]                // All public items must be documented
#![deny(dead_code)]                   // Unused code is forbidden
#![deny(non_camel_case_types)]        // Types must follow CamelCase convention

// Additional strictness - Leave nothing unchecked
#![deny(unused_imports)]              // Unused imports are forbidden
#![deny(unused_variables)]            // Unused variables are forbidden
#![deny(unused_must_use)]             // Must handle Result and Option explicitly
#![deny(non_snake_case)]              // Variables and functions must be snake_case
#![deny(non_upper_case_globals)]      // Constants must be UPPER_CASE
#![deny(nonstandard_style)]           // Non-standard code style is forbidden

// Clippy lints (warnings only)
#![warn(clippy::all)]                 // All standard Clippy lints
#![warn(clippy::pedantic)]            // Very strict Clippy lints
#![warn(clippy::nursery)]             // Experimental lints
#![warn(clippy::unwrap_used)]         // unwrap() warning
#![warn(clippy::expect_used)]         // expect() warning
#![warn(clippy::panic)]               // panic!() warning
#![warn(clippy::missing_const_for_fn)] // Force const when possible
#![warn(clippy::redundant_clone)]     // Useless clones warning
#![warn(clippy::shadow_unrelated)]    // Shadowing unrelated variables warning

// ============================================================================
// Crate Documentation
// ============================================================================

//! # Skystack
//!
//! An environment-aware infrastructure composition engine.
//!
//! ## Overview
//!
//! Skystack takes a typed platform configuration (network, storage,
//! relational database, container-orchestration cluster, API gateway,
//! identity provider, cache) and composes a single coherent deployment
//! plan for an external cloud control plane:
//!
//! - Derives the correct resource creation order
//! - Wires cross-resource references (traffic rules, subnet placement,
//!   credential injection) by stable identifier
//! - Fails fast with the offending component and field; partial plans
//!   are never emitted
//!
//! Composition is synchronous and pure: every composer is a function
//! from configuration plus upstream outputs to a resource
//! specification. Reconciling specifications into real infrastructure
//! is the control plane's job, not this crate's.
//!
//! ## Modules
//!
//! - [`config`]: Configuration parsing, validation, and hashing
//! - [`resources`]: Resource specification value types
//! - [`compose`]: Per-tier composers and the security rule resolver
//! - [`plan`]: The aggregate deployment plan
//! - [`orchestrator`]: Dependency-ordered composition
//!
//! ## Example
//!
//! ```no_run
//! use skystack::{ConfigParser, DeployEnvironment, ResourceGraphOrchestrator};
//!
//! # fn main() -> skystack::Result<()> {
//! let config = ConfigParser::new()
//!     .with_base_path("./config")
//!     .load_environment(DeployEnvironment::Production)?;
//!
//! let plan = ResourceGraphOrchestrator::new(config)
//!     .with_environment(DeployEnvironment::Production)
//!     .compose()?;
//!
//! println!("{plan}");
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod compose;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod plan;
pub mod resources;

// ============================================================================
// Re-exports
// ============================================================================

pub use compose::{
    BucketComposer, CacheComposer, ComputeClusterComposer, DataTierComposer, GatewayComposer,
    IdentityComposer, NetworkTopologyBuilder, SecurityRuleResolver,
};
pub use config::{ConfigHasher, ConfigParser, ConfigValidator, DeployEnvironment, PlatformConfig};
pub use error::{
    ConfigurationError, DependencyError, PlacementError, Result, SkystackError,
};
pub use orchestrator::ResourceGraphOrchestrator;
pub use plan::{DeploymentPlan, ResourceSpec};
