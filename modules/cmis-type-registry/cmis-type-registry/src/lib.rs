//! CMIS Type Registry Module Implementation
//!
//! This module owns the CMIS type schema of a content repository: the seeded
//! base types, registration of custom types, and the read operations of the
//! CMIS repository service that walk the type hierarchy.
//! The public API is defined in `cmis-type-registry-sdk` and re-exported here.
//!
//! ## Architecture
//!
//! - **Build, then publish**: types are registered through `&mut` access while
//!   the module initializes; the populated registry is then shared read-only
//! - **Arena storage**: the hierarchy lives in a single arena indexed by type id
//! - **Copy-out reads**: every definition handed to a caller is a detached copy

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === PUBLIC API (from SDK) ===
pub use cmis_type_registry_sdk::{
    BaseTypeId, Cardinality, ContentStreamAllowed, PropertyDefinition, PropertyType,
    TypeDefinition, TypeDefinitionContainer, TypeDefinitionList, TypeKind, TypeRegistryClient,
    TypeRegistryError, Updatability, ids,
};

// === MODULE DEFINITION ===
pub mod module;
pub use module::TypeRegistryModule;

// === CONFIGURATION ===
pub mod config;

// === LOCAL CLIENT ===
pub mod local_client;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
