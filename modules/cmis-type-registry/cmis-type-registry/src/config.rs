//! Configuration for the CMIS Type Registry module.

use cmis_type_registry_sdk::TypeDefinition;
use serde::Deserialize;

/// Configuration for the CMIS Type Registry module.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TypeRegistryConfig {
    /// Page size used by the client when `get_type_children` is called
    /// without `max_items`.
    /// Default: `50`
    pub default_max_items_types: i64,

    /// Depth used by the client when `get_type_descendants` is called
    /// without `depth`. Negative means unbounded.
    /// Default: `-1`
    pub default_depth_types: i64,

    /// Additional types registered, in order, when the module initializes.
    /// Default: empty
    pub types: Vec<TypeDefinition>,
}

impl Default for TypeRegistryConfig {
    fn default() -> Self {
        Self {
            default_max_items_types: 50,
            default_depth_types: -1,
            types: Vec::new(),
        }
    }
}
