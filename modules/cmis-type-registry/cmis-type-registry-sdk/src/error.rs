//! Public error types for the `cmis-type-registry` module.
//!
//! These errors are safe to expose to other modules and consumers. Each
//! variant displays exactly its message, matching the CMIS exception text.

use thiserror::Error;

/// Errors that can be returned by the `TypeRegistryClient`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeRegistryError {
    /// An argument violates the operation contract.
    #[error("{0}")]
    InvalidArgument(String),

    /// The requested type does not exist.
    #[error("{0}")]
    ObjectNotFound(String),

    /// A property datatype name outside the CMIS datatype set.
    #[error("{0}")]
    UnknownDatatype(String),

    /// An internal error occurred.
    #[error("{0}")]
    Internal(String),
}

impl TypeRegistryError {
    /// Creates an `InvalidArgument` error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates an `ObjectNotFound` error for an unknown type id.
    #[must_use]
    pub fn type_not_found(type_id: &str) -> Self {
        Self::ObjectNotFound(format!("Type '{type_id}' is unknown!"))
    }

    /// Creates an `UnknownDatatype` error for the given datatype name.
    #[must_use]
    pub fn unknown_datatype(name: &str) -> Self {
        Self::UnknownDatatype(format!("Unknown datatype '{name}'!"))
    }

    /// Creates an `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns `true` if this is an invalid argument error.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` if this is an object not found error.
    #[must_use]
    pub const fn is_object_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound(_))
    }

    /// Returns `true` if this is an unknown datatype error.
    #[must_use]
    pub const fn is_unknown_datatype(&self) -> bool {
        matches!(self, Self::UnknownDatatype(_))
    }
}
