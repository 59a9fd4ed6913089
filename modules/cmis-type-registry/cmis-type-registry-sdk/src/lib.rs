//! CMIS Type Registry SDK
//!
//! This crate provides the public API for the `cmis-type-registry` module:
//! - `TypeRegistryClient` trait for read access to the type schema
//! - `TypeDefinition`, `PropertyDefinition` and related CMIS type models
//! - `ids` with the CMIS type and property identifiers
//! - `TypeRegistryError` for error handling
//!
//! ## Usage
//!
//! ```ignore
//! use cmis_type_registry_sdk::TypeRegistryClient;
//!
//! let client = module.client()?;
//!
//! // Walk the whole hierarchy below the base types
//! let tree = client.get_type_descendants(None, Some(-1), Some(false)).await?;
//!
//! // Fetch one type with its property definitions
//! let doc = client.get_type_definition("cmis:document").await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod ids;
pub mod models;

// Re-export main types at crate root for convenience
pub use api::TypeRegistryClient;
pub use error::TypeRegistryError;
pub use models::{
    BaseTypeId, Cardinality, ContentStreamAllowed, PropertyDefinition, PropertyType,
    TypeDefinition, TypeDefinitionContainer, TypeDefinitionList, TypeKind, Updatability,
};
