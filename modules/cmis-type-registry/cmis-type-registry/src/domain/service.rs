//! Domain service for the CMIS Type Registry module.

use cmis_type_registry_sdk::{
    PropertyDefinition, TypeDefinition, TypeDefinitionContainer, TypeDefinitionList, ids,
};
use tracing::{debug, info, warn};

use super::error::DomainError;
use super::seed;
use crate::infra::storage::{NodeId, TypeTree};

/// Base types listed when the type hierarchy is queried without an anchor.
const ROOT_TYPE_IDS: [&str; 2] = [ids::FOLDER_TYPE_ID, ids::DOCUMENT_TYPE_ID];

/// Domain service holding the CMIS type hierarchy.
///
/// The service is built and populated through `&mut self` (`new`,
/// [`add_type`](Self::add_type)) and then shared behind an `Arc`, after which
/// only the read operations are reachable. Every definition handed out by a
/// read operation is a copy; callers never observe registry-owned state.
#[derive(Debug)]
pub struct TypeRegistryService {
    tree: TypeTree,
}

impl Default for TypeRegistryService {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistryService {
    /// Creates a registry seeded with `cmis:folder`, `cmis:document` and
    /// `cmis:unversioned-document`.
    #[must_use]
    pub fn new() -> Self {
        let mut tree = TypeTree::new();

        let folder = seed::folder_type();
        let document = seed::document_type();
        let unversioned = seed::unversioned_document_type(&document);

        for type_def in [folder, document, unversioned] {
            debug!(type_id = %type_def.id, "Seeding built-in type");
            tree.insert(type_def);
        }

        Self { tree }
    }

    /// Registers a type, inheriting the property definitions of its base
    /// type and of its parent.
    ///
    /// Inherited properties replace own properties with the same id. A type
    /// whose id is the canonical id of its own base and which has no parent
    /// is registered as that base: it receives the CMIS-mandated property set
    /// of its kind, again replacing own properties with the same ids.
    ///
    /// Returns `false` without touching the registry if the id is taken, a
    /// property definition is keyed by something other than its id, the base
    /// type is not registered, or the parent has a different base.
    pub fn add_type(&mut self, type_def: &TypeDefinition) -> bool {
        let base_type_id = type_def.base_type_id();

        if self.tree.contains(&type_def.id) {
            warn!(type_id = %type_def.id, "Type is already registered");
            return false;
        }

        if let Some((key, property)) = type_def
            .property_definitions
            .iter()
            .find(|(key, property)| **key != property.id)
        {
            warn!(
                type_id = %type_def.id,
                key = %key,
                property_id = %property.id,
                "Property definition is not keyed by its id"
            );
            return false;
        }

        if type_def.id == base_type_id.type_id() && type_def.parent_type_id.is_none() {
            let mut new_type = type_def.clone();
            seed::add_mandated_property_definitions(&mut new_type);
            fill_defaults(&mut new_type);
            self.tree.insert(new_type);
            info!("Added base type '{}'.", type_def.id);
            return true;
        }

        let Some(base) = self.get_type(base_type_id.type_id()) else {
            warn!(
                type_id = %type_def.id,
                base_type_id = %base_type_id,
                "Base type is not registered"
            );
            return false;
        };

        let parent = match type_def.parent_type_id.as_deref() {
            Some(parent_id) => match self.get_type(parent_id) {
                Some(parent) if parent.base_type_id() != base_type_id => {
                    warn!(
                        type_id = %type_def.id,
                        parent_type_id = %parent_id,
                        "Parent type has a different base type"
                    );
                    return false;
                }
                parent => parent,
            },
            None => None,
        };

        let inherited: Vec<PropertyDefinition> = base
            .property_definitions
            .values()
            .chain(
                parent
                    .filter(|p| p.id != base.id)
                    .into_iter()
                    .flat_map(|p| p.property_definitions.values()),
            )
            .cloned()
            .collect();

        let mut new_type = type_def.clone();
        for mut property in inherited {
            property.is_inherited = true;
            new_type.add_property_definition(property);
        }
        fill_defaults(&mut new_type);

        let type_id = new_type.id.clone();
        if !self.tree.insert(new_type) {
            return false;
        }

        info!("Added type '{type_id}'.");
        true
    }

    /// Registers a batch of types in order; returns how many were added.
    pub fn add_types(&mut self, types: &[TypeDefinition]) -> usize {
        types.iter().filter(|t| self.add_type(t)).count()
    }

    /// Lists the direct children of a type (CMIS 1.0, 2.2.2.3).
    ///
    /// `skip_count` below zero counts as zero; `max_items` of `None` is
    /// unbounded and below one yields an empty page. Without `type_id` the
    /// page is taken from `[cmis:folder, cmis:document]`. Unknown and
    /// childless types yield an empty page without `num_items`.
    #[must_use]
    pub fn get_type_children(
        &self,
        type_id: Option<&str>,
        include_property_definitions: bool,
        max_items: Option<i64>,
        skip_count: Option<i64>,
    ) -> TypeDefinitionList {
        let mut result = TypeDefinitionList::default();

        let skip = skip_count.map_or(0, clamp_to_usize);
        let max = match max_items {
            None => usize::MAX,
            Some(m) if m < 1 => return result,
            Some(m) => clamp_to_usize(m),
        };

        let candidates: Vec<&TypeDefinition> = match type_id {
            None => ROOT_TYPE_IDS
                .iter()
                .filter_map(|id| self.get_type(id))
                .collect(),
            Some(id) => {
                let Some(node) = self.tree.lookup(id) else {
                    return result;
                };
                self.tree
                    .children(node)
                    .iter()
                    .map(|child| self.tree.definition(*child))
                    .collect()
            }
        };

        let total = match type_id {
            None => ROOT_TYPE_IDS.len(),
            Some(_) if candidates.is_empty() => return result,
            Some(_) => candidates.len(),
        };

        result.list = candidates
            .into_iter()
            .skip(skip)
            .take(max)
            .map(|t| detach(t, include_property_definitions))
            .collect();
        result.has_more_items = result.list.len().saturating_add(skip) < total;
        result.num_items = u64::try_from(total).ok();

        result
    }

    /// Returns the descendants tree of a type (CMIS 1.0, 2.2.2.4).
    ///
    /// `depth` of `None` or below zero is unbounded; a positive depth limits
    /// the height of each returned tree. Without `type_id` the trees of
    /// `cmis:folder` and `cmis:document` are returned. An unknown type yields
    /// an empty list.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - If `depth` is `Some(0)`
    pub fn get_type_descendants(
        &self,
        type_id: Option<&str>,
        depth: Option<i64>,
        include_property_definitions: Option<bool>,
    ) -> Result<Vec<TypeDefinitionContainer>, DomainError> {
        let depth = depth.unwrap_or(-1);
        if depth == 0 {
            return Err(DomainError::invalid_argument("Depth must not be 0!"));
        }

        let include = include_property_definitions.unwrap_or(false);

        match type_id {
            None => ROOT_TYPE_IDS
                .iter()
                .map(|id| {
                    let node = self.tree.lookup(id).ok_or_else(|| {
                        DomainError::Internal(anyhow::anyhow!("built-in type '{id}' is missing"))
                    })?;
                    Ok(self.collect_descendants(node, depth, include))
                })
                .collect(),
            Some(id) => Ok(self
                .tree
                .lookup(id)
                .map(|node| vec![self.collect_descendants(node, depth, include)])
                .unwrap_or_default()),
        }
    }

    /// Returns a copy of a type definition (CMIS 1.0, 2.2.2.5).
    ///
    /// # Errors
    ///
    /// * `ObjectNotFound` - If no type with the given id is registered
    pub fn get_type_definition(&self, type_id: &str) -> Result<TypeDefinition, DomainError> {
        self.get_type(type_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(type_id))
    }

    /// Returns the registry-owned definition of a type, without copying.
    pub(crate) fn get_type(&self, type_id: &str) -> Option<&TypeDefinition> {
        self.tree.get(type_id)
    }

    /// Lists all registered type ids in registration order.
    #[must_use]
    pub fn type_ids(&self) -> Vec<&str> {
        self.tree.type_ids().collect()
    }

    fn collect_descendants(
        &self,
        node: NodeId,
        depth: i64,
        include_property_definitions: bool,
    ) -> TypeDefinitionContainer {
        let mut container = TypeDefinitionContainer::new(detach(
            self.tree.definition(node),
            include_property_definitions,
        ));

        if depth != 0 {
            let next = if depth < 0 { -1 } else { depth - 1 };
            container.children = self
                .tree
                .children(node)
                .iter()
                .map(|child| self.collect_descendants(*child, next, include_property_definitions))
                .collect();
        }

        container
    }
}

/// Copies a definition out of the registry, dropping its property
/// definitions unless requested.
fn detach(type_def: &TypeDefinition, include_property_definitions: bool) -> TypeDefinition {
    let mut copy = type_def.clone();
    if !include_property_definitions {
        copy.property_definitions.clear();
    }
    copy
}

/// Fills names left empty by a deserialized definition with the id.
fn fill_defaults(type_def: &mut TypeDefinition) {
    for name in [
        &mut type_def.local_name,
        &mut type_def.query_name,
        &mut type_def.display_name,
    ] {
        if name.is_empty() {
            name.clone_from(&type_def.id);
        }
    }

    for property in type_def.property_definitions.values_mut() {
        for name in [
            &mut property.local_name,
            &mut property.query_name,
            &mut property.display_name,
        ] {
            if name.is_empty() {
                name.clone_from(&property.id);
            }
        }
    }
}

/// Negative values clamp to zero, values beyond `usize` to `usize::MAX`.
fn clamp_to_usize(value: i64) -> usize {
    if value < 0 {
        0
    } else {
        usize::try_from(value).unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmis_type_registry_sdk::{
        BaseTypeId, Cardinality, ContentStreamAllowed, PropertyType, TypeKind, Updatability,
    };

    fn folder_subtype(id: &str, parent: &str) -> TypeDefinition {
        TypeDefinition::new(
            id,
            TypeKind::Folder {
                allowed_child_object_type_ids: vec![],
            },
        )
        .with_parent(parent)
    }

    fn document_subtype(id: &str, parent: &str) -> TypeDefinition {
        TypeDefinition::new(
            id,
            TypeKind::Document {
                is_versionable: false,
                content_stream_allowed: ContentStreamAllowed::Allowed,
            },
        )
        .with_parent(parent)
    }

    #[test]
    fn test_seeded_types() {
        let service = TypeRegistryService::new();
        assert_eq!(
            service.type_ids(),
            vec!["cmis:folder", "cmis:document", "cmis:unversioned-document"]
        );
        assert!(service.get_type("cmis:relationship").is_none());
        assert!(service.get_type("cmis:policy").is_none());
    }

    #[test]
    fn test_add_type_inherits_base_properties() {
        let mut service = TypeRegistryService::new();
        let own = PropertyDefinition::new(
            "my:tag",
            PropertyType::String,
            Cardinality::Single,
            Updatability::ReadWrite,
        );
        assert!(service.add_type(&document_subtype("my:doc", "cmis:document").with_property(own)));

        let t = service.get_type("my:doc").unwrap();
        let base = service.get_type("cmis:document").unwrap();
        for id in base.property_definitions.keys() {
            assert!(t.property_definition(id).unwrap().is_inherited, "{id}");
        }
        assert!(!t.property_definition("my:tag").unwrap().is_inherited);
        assert_eq!(t.property_definitions.len(), base.property_definitions.len() + 1);
    }

    #[test]
    fn test_add_type_base_wins_on_collision() {
        let mut service = TypeRegistryService::new();
        let clash = PropertyDefinition::new(
            ids::NAME,
            PropertyType::Integer,
            Cardinality::Multi,
            Updatability::ReadOnly,
        );
        assert!(service.add_type(&folder_subtype("my:folder", "cmis:folder").with_property(clash)));

        let name = service
            .get_type("my:folder")
            .unwrap()
            .property_definition(ids::NAME)
            .unwrap();
        assert_eq!(name.property_type(), PropertyType::String);
        assert_eq!(name.cardinality(), Cardinality::Single);
        assert!(name.is_inherited);
    }

    #[test]
    fn test_add_type_does_not_mutate_input_or_base() {
        let mut service = TypeRegistryService::new();
        let input = folder_subtype("my:folder", "cmis:folder");
        assert!(service.add_type(&input));

        assert!(input.property_definitions.is_empty());
        let folder = service.get_type("cmis:folder").unwrap();
        assert!(folder.property_definitions.values().all(|p| !p.is_inherited));
    }

    #[test]
    fn test_add_type_duplicate_is_rejected() {
        let mut service = TypeRegistryService::new();
        let mut first = folder_subtype("my:folder", "cmis:folder");
        first.display_name = "First".to_owned();
        let mut second = folder_subtype("my:folder", "cmis:folder");
        second.display_name = "Second".to_owned();

        assert!(service.add_type(&first));
        assert!(!service.add_type(&second));
        assert_eq!(service.get_type("my:folder").unwrap().display_name, "First");

        let children = service.get_type_children(Some("cmis:folder"), false, None, None);
        assert_eq!(children.num_items, Some(1));
    }

    #[test]
    fn test_add_type_rejects_seeded_id() {
        let mut service = TypeRegistryService::new();
        assert!(!service.add_type(&seed::document_type()));
        assert_eq!(service.type_ids().len(), 3);
    }

    #[test]
    fn test_add_type_rejects_missing_base() {
        let mut service = TypeRegistryService::new();
        let rel = TypeDefinition::new(
            "my:link",
            TypeKind::Relationship {
                allowed_source_type_ids: vec![],
                allowed_target_type_ids: vec![],
            },
        )
        .with_parent("cmis:relationship");
        assert!(!service.add_type(&rel));
        assert!(service.get_type("my:link").is_none());
    }

    #[test]
    fn test_add_base_then_subtype() {
        let mut service = TypeRegistryService::new();
        assert!(service.add_type(&seed::relationship_type()));

        let rel = TypeDefinition::new(
            "my:link",
            TypeKind::Relationship {
                allowed_source_type_ids: vec!["cmis:document".to_owned()],
                allowed_target_type_ids: vec![],
            },
        )
        .with_parent("cmis:relationship");
        assert!(service.add_type(&rel));

        let link = service.get_type("my:link").unwrap();
        assert_eq!(link.base_type_id(), BaseTypeId::Relationship);
        assert!(link.property_definition(ids::SOURCE_ID).unwrap().is_inherited);

        let base = service.get_type("cmis:relationship").unwrap();
        assert!(base.property_definitions.values().all(|p| !p.is_inherited));
    }

    #[test]
    fn test_bare_base_registration_gets_mandated_properties() {
        let mut service = TypeRegistryService::new();
        let bare = TypeDefinition::new(
            "cmis:relationship",
            TypeKind::Relationship {
                allowed_source_type_ids: vec![],
                allowed_target_type_ids: vec![],
            },
        );
        assert!(bare.property_definitions.is_empty());
        assert!(service.add_type(&bare));

        let link = TypeDefinition::new(
            "my:link",
            TypeKind::Relationship {
                allowed_source_type_ids: vec![],
                allowed_target_type_ids: vec![],
            },
        )
        .with_parent("cmis:relationship");
        assert!(service.add_type(&link));

        let base = service.get_type("cmis:relationship").unwrap();
        let link = service.get_type("my:link").unwrap();
        for id in seed::mandated_property_ids(BaseTypeId::Relationship) {
            assert!(!base.property_definition(id).unwrap().is_inherited, "{id}");
            assert!(link.property_definition(id).unwrap().is_inherited, "{id}");
        }
    }

    #[test]
    fn test_bare_policy_base_keeps_own_extra_properties() {
        let mut service = TypeRegistryService::new();
        let extra = PropertyDefinition::new(
            "my:scope",
            PropertyType::String,
            Cardinality::Single,
            Updatability::ReadWrite,
        );
        let clash = PropertyDefinition::new(
            ids::POLICY_TEXT,
            PropertyType::Integer,
            Cardinality::Multi,
            Updatability::ReadOnly,
        );
        let bare = TypeDefinition::new("cmis:policy", TypeKind::Policy)
            .with_property(extra)
            .with_property(clash);
        assert!(service.add_type(&bare));

        let policy = service.get_type("cmis:policy").unwrap();
        assert!(policy.property_definition("my:scope").is_some());
        let text = policy.property_definition(ids::POLICY_TEXT).unwrap();
        assert_eq!(text.property_type(), PropertyType::String);
        assert_eq!(text.cardinality(), Cardinality::Single);
        for id in seed::mandated_property_ids(BaseTypeId::Policy) {
            assert!(policy.property_definition(id).is_some(), "{id}");
        }
    }

    #[test]
    fn test_add_type_rejects_property_keyed_by_other_id() {
        let mut service = TypeRegistryService::new();
        let alias = PropertyDefinition::new(
            ids::NAME,
            PropertyType::Integer,
            Cardinality::Multi,
            Updatability::ReadWrite,
        );
        let mut t = document_subtype("my:doc", "cmis:document");
        t.property_definitions.insert("alias".to_owned(), alias);

        assert!(!service.add_type(&t));
        assert!(service.get_type("my:doc").is_none());
    }

    #[test]
    fn test_add_type_rejects_parent_with_other_base() {
        let mut service = TypeRegistryService::new();
        assert!(!service.add_type(&document_subtype("my:doc", "cmis:folder")));
        assert!(service.get_type("my:doc").is_none());
    }

    #[test]
    fn test_add_type_unknown_parent_is_detached_root() {
        let mut service = TypeRegistryService::new();
        assert!(service.add_type(&document_subtype("my:doc", "my:missing")));

        assert!(service.get_type_definition("my:doc").is_ok());
        let children = service.get_type_children(Some("cmis:document"), false, None, None);
        assert_eq!(children.ids(), vec!["cmis:unversioned-document"]);
    }

    #[test]
    fn test_add_type_inherits_from_parent_chain() {
        let mut service = TypeRegistryService::new();
        let own = PropertyDefinition::new(
            "my:tag",
            PropertyType::String,
            Cardinality::Single,
            Updatability::ReadWrite,
        );
        assert!(service.add_type(&document_subtype("my:doc", "cmis:document").with_property(own)));
        assert!(service.add_type(&document_subtype("my:report", "my:doc")));

        let report = service.get_type("my:report").unwrap();
        let tag = report.property_definition("my:tag").unwrap();
        assert!(tag.is_inherited);
        assert!(report.property_definition(ids::VERSION_SERIES_ID).unwrap().is_inherited);
    }

    #[test]
    fn test_add_type_fills_default_names() {
        let mut service = TypeRegistryService::new();
        let mut t = folder_subtype("my:folder", "cmis:folder");
        t.query_name = String::new();
        t.local_name = String::new();
        assert!(service.add_type(&t));

        let stored = service.get_type("my:folder").unwrap();
        assert_eq!(stored.query_name, "my:folder");
        assert_eq!(stored.local_name, "my:folder");
    }

    #[test]
    fn test_add_types_counts_successes() {
        let mut service = TypeRegistryService::new();
        let types = vec![
            folder_subtype("my:a", "cmis:folder"),
            folder_subtype("my:a", "cmis:folder"),
            folder_subtype("my:b", "my:a"),
        ];
        assert_eq!(service.add_types(&types), 2);
    }

    #[test]
    fn test_children_of_unknown_type_is_empty() {
        let service = TypeRegistryService::new();
        let result = service.get_type_children(Some("cmis:nope"), true, None, None);
        assert!(result.list.is_empty());
        assert!(!result.has_more_items);
        assert_eq!(result.num_items, None);
    }

    #[test]
    fn test_children_of_childless_type_is_empty() {
        let service = TypeRegistryService::new();
        let result = service.get_type_children(Some("cmis:folder"), true, None, None);
        assert!(result.list.is_empty());
        assert_eq!(result.num_items, None);
    }

    #[test]
    fn test_children_max_items_below_one() {
        let service = TypeRegistryService::new();
        for max in [0, -3] {
            let result = service.get_type_children(None, true, Some(max), None);
            assert!(result.list.is_empty());
            assert!(!result.has_more_items);
            assert_eq!(result.num_items, None);
        }
    }

    #[test]
    fn test_children_negative_skip_counts_as_zero() {
        let service = TypeRegistryService::new();
        let result = service.get_type_children(None, false, None, Some(-5));
        assert_eq!(result.ids(), vec!["cmis:folder", "cmis:document"]);
        assert!(!result.has_more_items);
    }

    #[test]
    fn test_children_skip_past_end() {
        let service = TypeRegistryService::new();
        let result = service.get_type_children(None, false, None, Some(7));
        assert!(result.list.is_empty());
        assert!(!result.has_more_items);
        assert_eq!(result.num_items, Some(2));
    }

    #[test]
    fn test_descendants_depth_zero() {
        let service = TypeRegistryService::new();
        let err = service
            .get_type_descendants(Some("cmis:folder"), Some(0), Some(false))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Depth must not be 0!");
    }

    #[test]
    fn test_descendants_unknown_type_is_empty() {
        let service = TypeRegistryService::new();
        let result = service
            .get_type_descendants(Some("cmis:nope"), None, None)
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_descendants_depth_limits_height() {
        let mut service = TypeRegistryService::new();
        service.add_type(&document_subtype("my:a", "cmis:document"));
        service.add_type(&document_subtype("my:b", "my:a"));
        service.add_type(&document_subtype("my:c", "my:b"));

        let unbounded = service
            .get_type_descendants(Some("cmis:document"), None, None)
            .unwrap();
        assert_eq!(unbounded[0].height(), 3);

        for depth in 1..=3 {
            let trees = service
                .get_type_descendants(Some("cmis:document"), Some(depth), None)
                .unwrap();
            assert_eq!(trees.len(), 1);
            assert_eq!(trees[0].height(), usize::try_from(depth).unwrap());
        }

        let one = service
            .get_type_descendants(Some("cmis:document"), Some(1), None)
            .unwrap();
        let ids: Vec<&str> = one[0]
            .children
            .iter()
            .map(|c| c.type_definition.id.as_str())
            .collect();
        assert_eq!(ids, vec!["cmis:unversioned-document", "my:a"]);
    }

    #[test]
    fn test_descendants_property_definitions_flag() {
        let service = TypeRegistryService::new();

        let without = service.get_type_descendants(None, None, None).unwrap();
        assert!(without[1].type_definition.property_definitions.is_empty());
        assert!(without[1].children[0].type_definition.property_definitions.is_empty());

        let with = service.get_type_descendants(None, None, Some(true)).unwrap();
        assert!(!with[1].children[0].type_definition.property_definitions.is_empty());

        assert!(!service
            .get_type("cmis:document")
            .unwrap()
            .property_definitions
            .is_empty());
    }

    #[test]
    fn test_get_type_definition_not_found() {
        let service = TypeRegistryService::new();
        let err = service.get_type_definition("cmis:nope").unwrap_err();
        assert!(matches!(err, DomainError::ObjectNotFound(_)));
        assert_eq!(err.to_string(), "Type 'cmis:nope' is unknown!");
    }

    #[test]
    fn test_clamp_to_usize() {
        assert_eq!(clamp_to_usize(-1), 0);
        assert_eq!(clamp_to_usize(0), 0);
        assert_eq!(clamp_to_usize(42), 42);
    }
}
