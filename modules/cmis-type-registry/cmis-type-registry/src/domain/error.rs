//! Domain error types for the CMIS Type Registry module.

use cmis_type_registry_sdk::TypeRegistryError;
use thiserror::Error;

/// Domain-level errors for the CMIS Type Registry module.
#[derive(Error, Debug)]
pub enum DomainError {
    /// An argument violates the operation contract.
    #[error("{0}")]
    InvalidArgument(String),

    /// The requested type is not registered.
    #[error("Type '{0}' is unknown!")]
    ObjectNotFound(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DomainError {
    /// Creates an `InvalidArgument` error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates an `ObjectNotFound` error for the given type id.
    #[must_use]
    pub fn not_found(type_id: impl Into<String>) -> Self {
        Self::ObjectNotFound(type_id.into())
    }
}

impl From<DomainError> for TypeRegistryError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidArgument(msg) => TypeRegistryError::invalid_argument(msg),
            DomainError::ObjectNotFound(id) => TypeRegistryError::type_not_found(&id),
            DomainError::Internal(e) => TypeRegistryError::internal(e.to_string()),
        }
    }
}
