//! Infrastructure layer for the CMIS Type Registry module.

pub mod storage;

pub use storage::TypeTree;
