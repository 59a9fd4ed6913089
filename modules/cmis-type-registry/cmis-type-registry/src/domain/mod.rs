//! Domain layer for the CMIS Type Registry module.
//!
//! Contains the registry service, the property factory, the built-in type
//! definitions, and error types.

pub mod error;
pub mod property;
pub mod seed;
pub mod service;

pub use error::DomainError;
pub use service::TypeRegistryService;
