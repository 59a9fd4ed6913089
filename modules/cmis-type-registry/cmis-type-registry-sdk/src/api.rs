//! `TypeRegistryClient` trait definition.
//!
//! This trait defines the public, read-only API of the `cmis-type-registry`
//! module: the three CMIS 1.0 type services (section 2.2.2).

use async_trait::async_trait;

use crate::error::TypeRegistryError;
use crate::models::{TypeDefinition, TypeDefinitionContainer, TypeDefinitionList};

/// Public API trait for the `cmis-type-registry` module.
///
/// Implementations hand out deep copies: callers may freely mutate the
/// returned values without affecting the registry.
///
/// ```ignore
/// let client = module.client()?;
/// let roots = client.get_type_children(None, false, None, None).await?;
/// let doc = client.get_type_definition("cmis:document").await?;
/// ```
#[async_trait]
pub trait TypeRegistryClient: Send + Sync {
    /// Lists the direct children of a type (CMIS 2.2.2.3 `getTypeChildren`).
    ///
    /// With `type_id = None` the base types `cmis:folder` and `cmis:document`
    /// are listed. An unknown or childless type yields an empty list.
    ///
    /// # Errors
    ///
    /// Implementations backed by the in-process registry never fail; remote
    /// implementations may return `Internal`.
    async fn get_type_children(
        &self,
        type_id: Option<&str>,
        include_property_definitions: bool,
        max_items: Option<i64>,
        skip_count: Option<i64>,
    ) -> Result<TypeDefinitionList, TypeRegistryError>;

    /// Returns the descendants tree of a type (CMIS 2.2.2.4 `getTypeDescendants`).
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - If `depth` is `Some(0)`
    async fn get_type_descendants(
        &self,
        type_id: Option<&str>,
        depth: Option<i64>,
        include_property_definitions: Option<bool>,
    ) -> Result<Vec<TypeDefinitionContainer>, TypeRegistryError>;

    /// Returns a single type definition (CMIS 2.2.2.5 `getTypeDefinition`).
    ///
    /// # Errors
    ///
    /// * `ObjectNotFound` - If no type with the given id is registered
    async fn get_type_definition(&self, type_id: &str)
    -> Result<TypeDefinition, TypeRegistryError>;
}
