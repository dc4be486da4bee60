//! Custom profile attributes feature
//!
//! Feature-scoped façade over the generic property service. The manager is
//! bound to the `custom_profile_attributes` group at construction and never
//! accepts a caller-supplied group on write paths, so cross-feature leakage
//! is ruled out by construction rather than by runtime checks alone.

mod config;
mod error;
mod manager;

pub use config::{CpaConfig, DEFAULT_FIELD_LIMIT};
pub use error::CpaError;
pub use manager::CpaManager;

/// Name under which the feature registers its property group.
pub const GROUP_NAME: &str = "custom_profile_attributes";
