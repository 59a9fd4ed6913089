//! Property definition factory.

use cmis_type_registry_sdk::{Cardinality, PropertyDefinition, PropertyType, Updatability};

/// Static description of one entry of a CMIS-mandated property set.
#[derive(Debug, Clone, Copy)]
pub struct PropertyTemplate {
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub property_type: PropertyType,
    pub cardinality: Cardinality,
    pub updatability: Updatability,
    pub required: bool,
}

impl PropertyTemplate {
    /// Single-valued property template. The description defaults to the
    /// display name.
    #[must_use]
    pub const fn single(
        id: &'static str,
        display_name: &'static str,
        property_type: PropertyType,
        updatability: Updatability,
        required: bool,
    ) -> Self {
        Self {
            id,
            display_name,
            description: display_name,
            property_type,
            cardinality: Cardinality::Single,
            updatability,
            required,
        }
    }

    /// Multi-valued property template.
    #[must_use]
    pub const fn multi(
        id: &'static str,
        display_name: &'static str,
        property_type: PropertyType,
        updatability: Updatability,
        required: bool,
    ) -> Self {
        Self {
            cardinality: Cardinality::Multi,
            ..Self::single(id, display_name, property_type, updatability, required)
        }
    }

    /// Sets a description distinct from the display name.
    #[must_use]
    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }
}

/// Builds a property definition from a template.
///
/// Local name and query name equal the id, the property is not queryable
/// and `is_orderable` is unset.
#[must_use]
pub fn create_property_definition(
    template: &PropertyTemplate,
    inherited: bool,
) -> PropertyDefinition {
    PropertyDefinition::new(
        template.id,
        template.property_type,
        template.cardinality,
        template.updatability,
    )
    .with_display_name(template.display_name)
    .with_description(template.description)
    .with_inherited(inherited)
    .with_required(template.required)
}
