//! Storage implementations for the CMIS Type Registry module.

mod type_tree;

pub use type_tree::{NodeId, TypeTree};
