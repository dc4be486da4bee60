//! Feature configuration

/// Default ceiling on active fields in the feature's group.
pub const DEFAULT_FIELD_LIMIT: usize = 20;

/// Configuration parameters for the custom profile attributes feature.
#[derive(Debug, Clone)]
pub struct CpaConfig {
    /// Maximum number of active (non-deleted) fields in the group.
    pub field_limit: usize,
}

impl Default for CpaConfig {
    fn default() -> Self {
        Self {
            field_limit: DEFAULT_FIELD_LIMIT,
        }
    }
}

impl CpaConfig {
    /// Read the configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let field_limit = std::env::var("CPA_FIELD_LIMIT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_FIELD_LIMIT);

        Self { field_limit }
    }
}
