//! Arena-backed index of the type hierarchy.

use std::collections::HashMap;

use cmis_type_registry_sdk::TypeDefinition;

/// Handle to a node of a [`TypeTree`]. Only valid for the tree that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug)]
struct TypeNode {
    definition: TypeDefinition,
    children: Vec<NodeId>,
}

/// Type definitions and their parent/child links.
///
/// The tree owns every node in a single arena; parent nodes refer to their
/// children by [`NodeId`], and the id index maps a type id to its node. A
/// type whose parent is not registered becomes a detached root that is only
/// reachable through the index.
#[derive(Debug, Default)]
pub struct TypeTree {
    nodes: Vec<TypeNode>,
    index: HashMap<String, NodeId>,
}

impl TypeTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a type definition.
    ///
    /// Returns `false` and leaves the tree untouched if a type with the same
    /// id is already present. Otherwise the node is appended to its parent's
    /// children when the parent is registered.
    pub fn insert(&mut self, definition: TypeDefinition) -> bool {
        if self.index.contains_key(&definition.id) {
            return false;
        }

        let node_id = NodeId(self.nodes.len());
        let parent = definition
            .parent_type_id
            .as_deref()
            .and_then(|parent_id| self.index.get(parent_id).copied());

        self.index.insert(definition.id.clone(), node_id);
        self.nodes.push(TypeNode {
            definition,
            children: Vec::new(),
        });

        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(node_id);
        }

        true
    }

    /// Returns `true` if a type with the given id is registered.
    #[must_use]
    pub fn contains(&self, type_id: &str) -> bool {
        self.index.contains_key(type_id)
    }

    /// Looks up the node of a type.
    #[must_use]
    pub fn lookup(&self, type_id: &str) -> Option<NodeId> {
        self.index.get(type_id).copied()
    }

    /// Returns the definition stored at a node.
    #[must_use]
    pub fn definition(&self, node: NodeId) -> &TypeDefinition {
        &self.nodes[node.0].definition
    }

    /// Returns the children of a node in registration order.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Returns the definition of a type.
    #[must_use]
    pub fn get(&self, type_id: &str) -> Option<&TypeDefinition> {
        self.lookup(type_id).map(|node| self.definition(node))
    }

    /// Iterates over all registered type ids in registration order.
    pub fn type_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.definition.id.as_str())
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no type is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
