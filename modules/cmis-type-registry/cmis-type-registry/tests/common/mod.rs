#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Common test utilities for cmis-type-registry integration tests

use std::sync::Arc;

use cmis_type_registry::{
    ContentStreamAllowed, TypeDefinition, TypeKind, TypeRegistryClient,
    config::TypeRegistryConfig, domain::service::TypeRegistryService,
    local_client::TypeRegistryLocalClient,
};

pub fn create_service() -> TypeRegistryService {
    TypeRegistryService::new()
}

pub fn create_client(service: TypeRegistryService) -> Arc<dyn TypeRegistryClient> {
    Arc::new(TypeRegistryLocalClient::new(
        Arc::new(service),
        &TypeRegistryConfig::default(),
    ))
}

pub fn document_subtype(id: &str, parent: &str) -> TypeDefinition {
    TypeDefinition::new(
        id,
        TypeKind::Document {
            is_versionable: false,
            content_stream_allowed: ContentStreamAllowed::Allowed,
        },
    )
    .with_parent(parent)
}

pub fn folder_subtype(id: &str, parent: &str) -> TypeDefinition {
    TypeDefinition::new(
        id,
        TypeKind::Folder {
            allowed_child_object_type_ids: Vec::new(),
        },
    )
    .with_parent(parent)
}
