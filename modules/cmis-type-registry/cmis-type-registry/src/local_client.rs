//! Local client implementing the `TypeRegistryClient` trait.

use std::sync::Arc;

use async_trait::async_trait;
use cmis_type_registry_sdk::{
    TypeDefinition, TypeDefinitionContainer, TypeDefinitionList, TypeRegistryClient,
    TypeRegistryError,
};

use crate::config::TypeRegistryConfig;
use crate::domain::service::TypeRegistryService;

/// Local client for the CMIS Type Registry module.
///
/// Read-only facade over a published service. Absent `max_items` and `depth`
/// arguments are replaced with the configured defaults before delegating.
pub struct TypeRegistryLocalClient {
    service: Arc<TypeRegistryService>,
    default_max_items: i64,
    default_depth: i64,
}

impl TypeRegistryLocalClient {
    /// Creates a new local client over the given service.
    #[must_use]
    pub fn new(service: Arc<TypeRegistryService>, config: &TypeRegistryConfig) -> Self {
        Self {
            service,
            default_max_items: config.default_max_items_types,
            default_depth: config.default_depth_types,
        }
    }
}

#[async_trait]
impl TypeRegistryClient for TypeRegistryLocalClient {
    async fn get_type_children(
        &self,
        type_id: Option<&str>,
        include_property_definitions: bool,
        max_items: Option<i64>,
        skip_count: Option<i64>,
    ) -> Result<TypeDefinitionList, TypeRegistryError> {
        Ok(self.service.get_type_children(
            type_id,
            include_property_definitions,
            Some(max_items.unwrap_or(self.default_max_items)),
            skip_count,
        ))
    }

    async fn get_type_descendants(
        &self,
        type_id: Option<&str>,
        depth: Option<i64>,
        include_property_definitions: Option<bool>,
    ) -> Result<Vec<TypeDefinitionContainer>, TypeRegistryError> {
        self.service
            .get_type_descendants(
                type_id,
                Some(depth.unwrap_or(self.default_depth)),
                include_property_definitions,
            )
            .map_err(TypeRegistryError::from)
    }

    async fn get_type_definition(
        &self,
        type_id: &str,
    ) -> Result<TypeDefinition, TypeRegistryError> {
        self.service
            .get_type_definition(type_id)
            .map_err(TypeRegistryError::from)
    }
}
