//! CMIS-mandated property sets and the built-in type definitions.
//!
//! `cmis:folder`, `cmis:document` and `cmis:unversioned-document` are seeded
//! by [`TypeRegistryService::new`](super::service::TypeRegistryService::new).
//! The relationship and policy bases are only constructed here; callers
//! register them when their repository supports those object kinds.

use cmis_type_registry_sdk::{
    BaseTypeId, ContentStreamAllowed, PropertyType, TypeDefinition, TypeKind, Updatability, ids,
};

use super::property::{PropertyTemplate, create_property_definition};

use PropertyType::{Boolean, DateTime, Id, Integer, String as Str};
use Updatability::{OnCreate, ReadOnly, ReadWrite};

const BASE_PROPERTIES: &[PropertyTemplate] = &[
    PropertyTemplate::single(ids::BASE_TYPE_ID, "Base Type Id", Id, ReadOnly, true),
    PropertyTemplate::single(ids::OBJECT_ID, "Object Id", Id, ReadOnly, true),
    PropertyTemplate::single(ids::OBJECT_TYPE_ID, "Type Id", Id, OnCreate, true),
    PropertyTemplate::single(ids::NAME, "Name", Str, ReadWrite, true),
    PropertyTemplate::single(ids::CREATED_BY, "Created By", Str, ReadOnly, true),
    PropertyTemplate::single(ids::CREATION_DATE, "Creation Date", DateTime, ReadOnly, true),
    PropertyTemplate::single(ids::LAST_MODIFIED_BY, "Last Modified By", Str, ReadOnly, true),
    PropertyTemplate::single(
        ids::LAST_MODIFICATION_DATE,
        "Last Modification Date",
        DateTime,
        ReadOnly,
        true,
    ),
    PropertyTemplate::single(ids::CHANGE_TOKEN, "Change Token", Str, ReadOnly, false),
];

const FOLDER_PROPERTIES: &[PropertyTemplate] = &[
    PropertyTemplate::single(ids::PARENT_ID, "Parent Id", Id, ReadOnly, false),
    PropertyTemplate::multi(
        ids::ALLOWED_CHILD_OBJECT_TYPE_IDS,
        "Allowed Child Object Type Ids",
        Id,
        ReadOnly,
        false,
    ),
    PropertyTemplate::single(ids::PATH, "Path", Str, ReadOnly, false),
];

const DOCUMENT_PROPERTIES: &[PropertyTemplate] = &[
    PropertyTemplate::single(ids::IS_IMMUTABLE, "Is Immutable", Boolean, ReadOnly, false),
    PropertyTemplate::single(ids::IS_LATEST_VERSION, "Is Latest Version", Boolean, ReadOnly, false),
    PropertyTemplate::single(ids::IS_MAJOR_VERSION, "Is Major Version", Boolean, ReadOnly, false),
    PropertyTemplate::single(
        ids::IS_LATEST_MAJOR_VERSION,
        "Is Latest Major Version",
        Boolean,
        ReadOnly,
        false,
    ),
    PropertyTemplate::single(ids::VERSION_LABEL, "Version Label", Str, ReadOnly, false),
    PropertyTemplate::single(ids::VERSION_SERIES_ID, "Version Series Id", Id, ReadOnly, true),
    PropertyTemplate::single(
        ids::IS_VERSION_SERIES_CHECKED_OUT,
        "Is Version Series Checked Out",
        Boolean,
        ReadOnly,
        true,
    ),
    PropertyTemplate::single(
        ids::VERSION_SERIES_CHECKED_OUT_ID,
        "Version Series Checked Out Id",
        Id,
        ReadOnly,
        false,
    ),
    PropertyTemplate::single(
        ids::VERSION_SERIES_CHECKED_OUT_BY,
        "Version Series Checked Out By",
        Str,
        ReadOnly,
        false,
    ),
    PropertyTemplate::single(ids::CHECKIN_COMMENT, "Checkin Comment", Str, ReadOnly, false),
    PropertyTemplate::single(
        ids::CONTENT_STREAM_LENGTH,
        "Content Stream Length",
        Integer,
        ReadOnly,
        false,
    ),
    PropertyTemplate::single(ids::CONTENT_STREAM_MIME_TYPE, "MIME Type", Str, ReadOnly, false),
    PropertyTemplate::single(ids::CONTENT_STREAM_FILE_NAME, "Filename", Str, ReadOnly, false),
    PropertyTemplate::single(ids::CONTENT_STREAM_ID, "Content Stream Id", Id, ReadOnly, false),
];

const RELATIONSHIP_PROPERTIES: &[PropertyTemplate] = &[
    PropertyTemplate::single(ids::SOURCE_ID, "Source Id", Id, OnCreate, true),
    PropertyTemplate::single(ids::TARGET_ID, "Target Id", Id, OnCreate, true),
];

const POLICY_PROPERTIES: &[PropertyTemplate] = &[PropertyTemplate::single(
    ids::POLICY_TEXT,
    "Policy Text",
    Str,
    ReadWrite,
    false,
)];

fn add_property_definitions(type_def: &mut TypeDefinition, templates: &[PropertyTemplate]) {
    for template in templates {
        type_def.add_property_definition(create_property_definition(template, false));
    }
}

/// Adds the properties every CMIS object type carries.
pub fn add_base_property_definitions(type_def: &mut TypeDefinition) {
    add_property_definitions(type_def, BASE_PROPERTIES);
}

/// Adds the folder-specific properties.
pub fn add_folder_property_definitions(type_def: &mut TypeDefinition) {
    add_property_definitions(type_def, FOLDER_PROPERTIES);
}

/// Adds the document-specific (versioning and content stream) properties.
pub fn add_document_property_definitions(type_def: &mut TypeDefinition) {
    add_property_definitions(type_def, DOCUMENT_PROPERTIES);
}

/// Adds the relationship-specific properties.
pub fn add_relationship_property_definitions(type_def: &mut TypeDefinition) {
    add_property_definitions(type_def, RELATIONSHIP_PROPERTIES);
}

/// Adds the policy-specific properties.
pub fn add_policy_property_definitions(type_def: &mut TypeDefinition) {
    add_property_definitions(type_def, POLICY_PROPERTIES);
}

fn kind_properties(base: BaseTypeId) -> &'static [PropertyTemplate] {
    match base {
        BaseTypeId::Document => DOCUMENT_PROPERTIES,
        BaseTypeId::Folder => FOLDER_PROPERTIES,
        BaseTypeId::Relationship => RELATIONSHIP_PROPERTIES,
        BaseTypeId::Policy => POLICY_PROPERTIES,
    }
}

/// Adds the full CMIS-mandated property set of the type's base: the common
/// properties plus those of its base kind. Existing entries with the same
/// ids are replaced.
pub fn add_mandated_property_definitions(type_def: &mut TypeDefinition) {
    add_base_property_definitions(type_def);
    add_property_definitions(type_def, kind_properties(type_def.base_type_id()));
}

/// Ids of the CMIS-mandated property set of a base type.
pub fn mandated_property_ids(base: BaseTypeId) -> impl Iterator<Item = &'static str> {
    BASE_PROPERTIES
        .iter()
        .chain(kind_properties(base))
        .map(|template| template.id)
}

/// Common attributes of the base types: creatable, included in supertype
/// queries, not queryable, not fulltext indexed, no ACL or policy control.
fn base_type(id: &str, name: &str, kind: TypeKind) -> TypeDefinition {
    let mut t = TypeDefinition::new(id, kind);
    t.local_name = name.to_owned();
    t.local_namespace = Some(ids::NAMESPACE.to_owned());
    t.display_name = name.to_owned();
    t.description = name.to_owned();
    t.is_creatable = true;
    t.is_included_in_supertype_query = true;
    add_base_property_definitions(&mut t);
    t
}

/// The `cmis:folder` base type.
#[must_use]
pub fn folder_type() -> TypeDefinition {
    let mut t = base_type(
        ids::FOLDER_TYPE_ID,
        "Folder",
        TypeKind::Folder {
            allowed_child_object_type_ids: Vec::new(),
        },
    );
    t.is_fileable = true;
    add_folder_property_definitions(&mut t);
    t
}

/// The `cmis:document` base type: versionable, content stream allowed.
#[must_use]
pub fn document_type() -> TypeDefinition {
    let mut t = base_type(
        ids::DOCUMENT_TYPE_ID,
        "Document",
        TypeKind::Document {
            is_versionable: true,
            content_stream_allowed: ContentStreamAllowed::Allowed,
        },
    );
    t.is_fileable = true;
    add_document_property_definitions(&mut t);
    t
}

/// The `cmis:unversioned-document` type, a non-versionable child of
/// `document` that otherwise shares its capability flags.
#[must_use]
pub fn unversioned_document_type(document: &TypeDefinition) -> TypeDefinition {
    let mut t = document.clone();
    t.id = ids::DOCUMENT_UNVERSIONED_TYPE_ID.to_owned();
    t.local_name = "Unversioned document".to_owned();
    t.display_name = "Unversioned document".to_owned();
    t.description = "Unversioned document".to_owned();
    t.query_name = ids::DOCUMENT_UNVERSIONED_TYPE_ID.to_owned();
    t.parent_type_id = Some(document.id.clone());
    t.kind = TypeKind::Document {
        is_versionable: false,
        content_stream_allowed: ContentStreamAllowed::Allowed,
    };
    t.property_definitions.clear();
    add_base_property_definitions(&mut t);
    add_document_property_definitions(&mut t);
    t
}

/// The `cmis:relationship` base type. Not seeded by default.
#[must_use]
pub fn relationship_type() -> TypeDefinition {
    let mut t = base_type(
        ids::RELATIONSHIP_TYPE_ID,
        "Relationship",
        TypeKind::Relationship {
            allowed_source_type_ids: Vec::new(),
            allowed_target_type_ids: Vec::new(),
        },
    );
    add_relationship_property_definitions(&mut t);
    t
}

/// The `cmis:policy` base type. Not seeded by default.
#[must_use]
pub fn policy_type() -> TypeDefinition {
    let mut t = base_type(ids::POLICY_TYPE_ID, "Policy", TypeKind::Policy);
    t.is_fileable = true;
    add_policy_property_definitions(&mut t);
    t
}
