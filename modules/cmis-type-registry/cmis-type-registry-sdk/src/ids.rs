//! Identifiers defined by CMIS 1.0 for base types and their properties.

/// Namespace of the types seeded by this registry.
pub const NAMESPACE: &str = "http://opencmis.org/jcr";

// Type ids
pub const DOCUMENT_TYPE_ID: &str = "cmis:document";
pub const DOCUMENT_UNVERSIONED_TYPE_ID: &str = "cmis:unversioned-document";
pub const FOLDER_TYPE_ID: &str = "cmis:folder";
pub const RELATIONSHIP_TYPE_ID: &str = "cmis:relationship";
pub const POLICY_TYPE_ID: &str = "cmis:policy";

// Base properties
pub const BASE_TYPE_ID: &str = "cmis:baseTypeId";
pub const OBJECT_ID: &str = "cmis:objectId";
pub const OBJECT_TYPE_ID: &str = "cmis:objectTypeId";
pub const NAME: &str = "cmis:name";
pub const CREATED_BY: &str = "cmis:createdBy";
pub const CREATION_DATE: &str = "cmis:creationDate";
pub const LAST_MODIFIED_BY: &str = "cmis:lastModifiedBy";
pub const LAST_MODIFICATION_DATE: &str = "cmis:lastModificationDate";
pub const CHANGE_TOKEN: &str = "cmis:changeToken";

// Folder properties
pub const PARENT_ID: &str = "cmis:parentId";
pub const ALLOWED_CHILD_OBJECT_TYPE_IDS: &str = "cmis:allowedChildObjectTypeIds";
pub const PATH: &str = "cmis:path";

// Document properties
pub const IS_IMMUTABLE: &str = "cmis:isImmutable";
pub const IS_LATEST_VERSION: &str = "cmis:isLatestVersion";
pub const IS_MAJOR_VERSION: &str = "cmis:isMajorVersion";
pub const IS_LATEST_MAJOR_VERSION: &str = "cmis:isLatestMajorVersion";
pub const VERSION_LABEL: &str = "cmis:versionLabel";
pub const VERSION_SERIES_ID: &str = "cmis:versionSeriesId";
pub const IS_VERSION_SERIES_CHECKED_OUT: &str = "cmis:isVersionSeriesCheckedOut";
pub const VERSION_SERIES_CHECKED_OUT_ID: &str = "cmis:versionSeriesCheckedOutId";
pub const VERSION_SERIES_CHECKED_OUT_BY: &str = "cmis:versionSeriesCheckedOutBy";
pub const CHECKIN_COMMENT: &str = "cmis:checkinComment";
pub const CONTENT_STREAM_LENGTH: &str = "cmis:contentStreamLength";
pub const CONTENT_STREAM_MIME_TYPE: &str = "cmis:contentStreamMimeType";
pub const CONTENT_STREAM_FILE_NAME: &str = "cmis:contentStreamFileName";
pub const CONTENT_STREAM_ID: &str = "cmis:contentStreamId";

// Relationship properties
pub const SOURCE_ID: &str = "cmis:sourceId";
pub const TARGET_ID: &str = "cmis:targetId";

// Policy properties
pub const POLICY_TEXT: &str = "cmis:policyText";
