//! Field classification
//!
//! This module resolves one field's schema into exactly one
//! [`PropertyDefinition`]. Classification is priority-ordered: the
//! primary-key tag wins over a reference tag, a reference tag wins over
//! whatever the inner schema is, and only untagged inner schemas fall
//! through to embedded-value and scalar resolution. A field that matches
//! no branch is an error, never a silent skip.

use crate::definition::PropertyDefinition;
use modelgraph_core::{ModelError, ModelResult, ScalarType, SchemaKind};
use modelgraph_schema::{Schema, SchemaNode};
use tracing::trace;

/// Classify one field of an entity into its property definition
///
/// `entity` and `field` name the field being classified and appear in
/// every error message. The schema may be wrapped in any nesting of
/// optional/nullable/array modifiers, tagged before or after wrapping.
pub fn classify_field(
    entity: &str,
    field: &str,
    schema: &Schema,
) -> ModelResult<PropertyDefinition> {
    // Primary key wins over every other tag. An identifier records no
    // nullability or uniqueness: it is assumed non-null and non-repeating.
    if schema.is_primary_key() {
        trace!(entity, field, "classified as primary key");
        return Ok(PropertyDefinition::PrimaryKey {
            name: field.to_string(),
        });
    }

    // Reference tags are resolved against the captured target metadata.
    // Nullability comes from unwrapping the field schema, not the target.
    if let Some(reference) = schema.reference() {
        if reference.target_kind != Some(SchemaKind::Entity) {
            return Err(ModelError::invalid_reference_target(entity, field));
        }
        let target_entity = reference.target_name.clone().ok_or_else(|| {
            ModelError::missing_name(format!("entity referenced by '{entity}.{field}'"))
        })?;

        let unwrapped = schema.unwrap_modifiers();
        trace!(entity, field, target = %target_entity, "classified as reference");
        return Ok(PropertyDefinition::Reference {
            name: field.to_string(),
            target_entity,
            unique: schema.is_unique(),
            nullable: unwrapped.nullable,
        });
    }

    let unwrapped = schema.unwrap_modifiers();
    let inner = unwrapped.schema;

    match inner.kind() {
        // Entities never embed by value, no matter how deeply wrapped.
        Some(SchemaKind::Entity) => Err(ModelError::illegal_embedding(entity, field)),

        Some(SchemaKind::Struct) | Some(SchemaKind::Json) => {
            let struct_type_name = inner
                .tag_name()
                .ok_or_else(|| {
                    ModelError::missing_name(format!(
                        "embedded value type for '{entity}.{field}'"
                    ))
                })?
                .to_string();
            trace!(entity, field, value_type = %struct_type_name, "classified as embedded value");
            Ok(PropertyDefinition::EmbeddedValue {
                name: field.to_string(),
                struct_type_name,
                unique: schema.is_unique(),
                nullable: unwrapped.nullable,
                array: unwrapped.array,
            })
        }

        None => classify_scalar(entity, field, schema, &unwrapped),
    }
}

/// Resolve an untagged inner schema to a scalar property
fn classify_scalar(
    entity: &str,
    field: &str,
    schema: &Schema,
    unwrapped: &modelgraph_schema::Unwrapped<'_>,
) -> ModelResult<PropertyDefinition> {
    let (scalar_type, acceptable_values) = match &unwrapped.schema.node {
        SchemaNode::Boolean => (ScalarType::Boolean, None),
        SchemaNode::Number => (ScalarType::Number, None),
        SchemaNode::String => (ScalarType::String, None),
        SchemaNode::Date => (ScalarType::Date, None),
        SchemaNode::StringEnum(values) => (ScalarType::String, Some(values.clone())),
        _ => return Err(ModelError::unsupported_field_type(entity, field)),
    };

    trace!(entity, field, %scalar_type, "classified as scalar");
    Ok(PropertyDefinition::Scalar {
        name: field.to_string(),
        scalar_type,
        unique: schema.is_unique(),
        nullable: unwrapped.nullable,
        array: unwrapped.array,
        acceptable_values,
    })
}

// ============================================================================
// Tests
// ============================================================================
