//! Public models for the `cmis-type-registry` module.
//!
//! These are transport-agnostic data structures describing the CMIS 1.0
//! type model: property definitions, type definitions tagged by their base
//! type, the container nodes of the type tree, and paginated type lists.
//!
//! The serialized form is `camelCase` JSON. A type definition carries its base
//! type as an internal `baseId` tag, and the fields specific to that base live
//! only under the matching tag.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeRegistryError;
use crate::ids;

/// Datatype of a property. Closed set defined by CMIS 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PropertyType {
    Boolean,
    DateTime,
    Decimal,
    Html,
    Id,
    Integer,
    String,
    Uri,
}

impl PropertyType {
    /// Returns the CMIS name of this datatype.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::DateTime => "datetime",
            Self::Decimal => "decimal",
            Self::Html => "html",
            Self::Id => "id",
            Self::Integer => "integer",
            Self::String => "string",
            Self::Uri => "uri",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = TypeRegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boolean" => Ok(Self::Boolean),
            "datetime" => Ok(Self::DateTime),
            "decimal" => Ok(Self::Decimal),
            "html" => Ok(Self::Html),
            "id" => Ok(Self::Id),
            "integer" => Ok(Self::Integer),
            "string" => Ok(Self::String),
            "uri" => Ok(Self::Uri),
            other => Err(TypeRegistryError::unknown_datatype(other)),
        }
    }
}

impl TryFrom<String> for PropertyType {
    type Error = TypeRegistryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Whether a property holds a single value or a list of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    Single,
    Multi,
}

/// When a property value may be changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Updatability {
    ReadOnly,
    OnCreate,
    ReadWrite,
    WhenCheckedOut,
}

/// Schema entry for one attribute of a type.
///
/// The datatype and cardinality are fixed at construction and only exposed
/// through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    /// Property id, unique within a type's property set.
    pub id: String,
    #[serde(default)]
    pub local_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_namespace: Option<String>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    property_type: PropertyType,
    cardinality: Cardinality,
    pub updatability: Updatability,
    /// Name used in queries. Defaults to the id.
    #[serde(default)]
    pub query_name: String,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub is_queryable: bool,
    /// `true` when the property was inherited from an ancestor type.
    #[serde(default)]
    pub is_inherited: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_orderable: Option<bool>,
}

impl PropertyDefinition {
    /// Creates a non-required, non-inherited, non-queryable property whose
    /// local name, query name, display name and description all equal `id`.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        property_type: PropertyType,
        cardinality: Cardinality,
        updatability: Updatability,
    ) -> Self {
        let id = id.into();
        Self {
            local_name: id.clone(),
            local_namespace: None,
            display_name: id.clone(),
            description: id.clone(),
            property_type,
            cardinality,
            updatability,
            query_name: id.clone(),
            is_required: false,
            is_queryable: false,
            is_inherited: false,
            is_orderable: None,
            id,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the `is_required` flag.
    #[must_use]
    pub const fn with_required(mut self, is_required: bool) -> Self {
        self.is_required = is_required;
        self
    }

    /// Sets the `is_inherited` flag.
    #[must_use]
    pub const fn with_inherited(mut self, is_inherited: bool) -> Self {
        self.is_inherited = is_inherited;
        self
    }

    /// Returns the datatype.
    #[must_use]
    pub const fn property_type(&self) -> PropertyType {
        self.property_type
    }

    /// Returns the cardinality.
    #[must_use]
    pub const fn cardinality(&self) -> Cardinality {
        self.cardinality
    }
}

/// The CMIS base type a type descends from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseTypeId {
    #[serde(rename = "cmis:document")]
    Document,
    #[serde(rename = "cmis:folder")]
    Folder,
    #[serde(rename = "cmis:relationship")]
    Relationship,
    #[serde(rename = "cmis:policy")]
    Policy,
}

impl BaseTypeId {
    /// Returns the type id of the base type itself (e.g. `cmis:document`).
    #[must_use]
    pub const fn type_id(self) -> &'static str {
        match self {
            Self::Document => ids::DOCUMENT_TYPE_ID,
            Self::Folder => ids::FOLDER_TYPE_ID,
            Self::Relationship => ids::RELATIONSHIP_TYPE_ID,
            Self::Policy => ids::POLICY_TYPE_ID,
        }
    }
}

impl fmt::Display for BaseTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_id())
    }
}

/// Whether documents of a type may, must, or must not carry a content stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStreamAllowed {
    NotAllowed,
    Allowed,
    Required,
}

/// Base-type tag of a type definition together with the fields that only
/// exist for that base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "baseId")]
pub enum TypeKind {
    #[serde(rename = "cmis:document", rename_all = "camelCase")]
    Document {
        is_versionable: bool,
        content_stream_allowed: ContentStreamAllowed,
    },
    #[serde(rename = "cmis:folder", rename_all = "camelCase")]
    Folder {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        allowed_child_object_type_ids: Vec<String>,
    },
    #[serde(rename = "cmis:relationship", rename_all = "camelCase")]
    Relationship {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        allowed_source_type_ids: Vec<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        allowed_target_type_ids: Vec<String>,
    },
    #[serde(rename = "cmis:policy")]
    Policy,
}

impl TypeKind {
    /// Returns the base-type tag.
    #[must_use]
    pub const fn base_type_id(&self) -> BaseTypeId {
        match self {
            Self::Document { .. } => BaseTypeId::Document,
            Self::Folder { .. } => BaseTypeId::Folder,
            Self::Relationship { .. } => BaseTypeId::Relationship,
            Self::Policy => BaseTypeId::Policy,
        }
    }
}

/// Definition of a CMIS object type.
///
/// Capability flags map one-to-one onto the CMIS type attributes; the
/// property map is keyed by property id.
#[allow(clippy::struct_excessive_bools)] // Intentional: CMIS defines these as independent flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefinition {
    pub id: String,
    #[serde(default)]
    pub local_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_namespace: Option<String>,
    #[serde(default)]
    pub query_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    /// `None` only for a base type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_type_id: Option<String>,
    #[serde(flatten)]
    pub kind: TypeKind,
    #[serde(default)]
    pub is_creatable: bool,
    #[serde(default)]
    pub is_fileable: bool,
    #[serde(default)]
    pub is_queryable: bool,
    #[serde(default)]
    pub is_fulltext_indexed: bool,
    #[serde(default)]
    pub is_included_in_supertype_query: bool,
    #[serde(default)]
    pub is_controllable_acl: bool,
    #[serde(default)]
    pub is_controllable_policy: bool,
    #[serde(default)]
    pub property_definitions: BTreeMap<String, PropertyDefinition>,
}

impl TypeDefinition {
    /// Creates a type with all capability flags off, no parent and no
    /// properties. Local name, query name, display name and description
    /// default to `id`.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: TypeKind) -> Self {
        let id = id.into();
        Self {
            local_name: id.clone(),
            local_namespace: None,
            query_name: id.clone(),
            display_name: id.clone(),
            description: id.clone(),
            parent_type_id: None,
            kind,
            is_creatable: false,
            is_fileable: false,
            is_queryable: false,
            is_fulltext_indexed: false,
            is_included_in_supertype_query: false,
            is_controllable_acl: false,
            is_controllable_policy: false,
            property_definitions: BTreeMap::new(),
            id,
        }
    }

    /// Sets the parent type id.
    #[must_use]
    pub fn with_parent(mut self, parent_type_id: impl Into<String>) -> Self {
        self.parent_type_id = Some(parent_type_id.into());
        self
    }

    /// Adds a property definition, replacing any existing one with the same id.
    #[must_use]
    pub fn with_property(mut self, property: PropertyDefinition) -> Self {
        self.add_property_definition(property);
        self
    }

    /// Returns the base-type tag.
    #[must_use]
    pub const fn base_type_id(&self) -> BaseTypeId {
        self.kind.base_type_id()
    }

    /// Adds a property definition, replacing any existing one with the same id.
    pub fn add_property_definition(&mut self, property: PropertyDefinition) {
        self.property_definitions
            .insert(property.id.clone(), property);
    }

    /// Returns the property definition with the given id.
    #[must_use]
    pub fn property_definition(&self, id: &str) -> Option<&PropertyDefinition> {
        self.property_definitions.get(id)
    }

    /// Returns `true` iff this is a document type flagged as versionable.
    #[must_use]
    pub const fn is_versionable(&self) -> bool {
        matches!(
            self.kind,
            TypeKind::Document {
                is_versionable: true,
                ..
            }
        )
    }
}

/// A node of the type tree: one type definition and its direct children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefinitionContainer {
    pub type_definition: TypeDefinition,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TypeDefinitionContainer>,
}

impl TypeDefinitionContainer {
    /// Creates a container without children.
    #[must_use]
    pub const fn new(type_definition: TypeDefinition) -> Self {
        Self {
            type_definition,
            children: Vec::new(),
        }
    }

    /// Returns the height of this subtree; a leaf has height 0.
    #[must_use]
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.height() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// One page of type definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefinitionList {
    pub list: Vec<TypeDefinition>,
    pub has_more_items: bool,
    /// Total number of items available, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_items: Option<u64>,
}

impl TypeDefinitionList {
    /// Returns the ids of the listed types, in order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.list.iter().map(|t| t.id.as_str()).collect()
    }
}
