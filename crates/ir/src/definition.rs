//! Entity definitions for the derived model
//!
//! This module contains the `EntityDefinition` and `PropertyDefinition`
//! types: the normalized, flat description of every entity and the
//! semantic role of each of its fields. Definitions are created fresh per
//! generation call and are immutable once returned.

use crate::relation::EntityRelation;
use modelgraph_core::{Described, ModelResult, Named, ScalarType};
use serde::{Deserialize, Serialize};

// ============================================================================
// EntityDefinition
// ============================================================================

/// Normalized description of one entity
///
/// The name is the join key of the derived model: relation records and
/// reference properties point at entities by declared name, never by
/// identity. Property order matches field declaration order in the source
/// schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDefinition {
    /// Declared entity name, unique across the input set
    pub name: String,

    /// Free-text description; omitted from serialized output when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Classified properties in declaration order
    pub properties: Vec<PropertyDefinition>,
}

impl EntityDefinition {
    // ========================================================================
    // Query methods
    // ========================================================================

    /// Get a property by name
    pub fn property(&self, name: &str) -> Option<&PropertyDefinition> {
        self.properties.iter().find(|p| p.name() == name)
    }

    /// Check if the entity has a property with the given name
    pub fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    /// Get the first primary-key property, if any
    pub fn primary_key(&self) -> Option<&PropertyDefinition> {
        self.properties.iter().find(|p| p.is_primary_key())
    }

    /// Get all reference properties, in declaration order
    pub fn references(&self) -> Vec<&PropertyDefinition> {
        self.properties.iter().filter(|p| p.is_reference()).collect()
    }

    /// Get the number of properties
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}

impl Named for EntityDefinition {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Described for EntityDefinition {
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

// ============================================================================
// PropertyDefinition
// ============================================================================

/// Semantic role of one entity field
///
/// Classification is total and mutually exclusive: every field resolves to
/// exactly one variant or generation fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "property_type", rename_all = "snake_case")]
pub enum PropertyDefinition {
    /// The entity's identifying field; assumed non-null and non-repeating
    PrimaryKey {
        /// Field name
        name: String,
    },

    /// A foreign-key-like pointer to another entity by declared name
    Reference {
        /// Field name
        name: String,
        /// Declared name of the referenced entity
        target_entity: String,
        /// Whether the field's value must be unique
        unique: bool,
        /// Whether any optional or nullable layer wraps the field
        nullable: bool,
    },

    /// An embedded reusable value type (not an entity)
    EmbeddedValue {
        /// Field name
        name: String,
        /// Declared name of the embedded value type
        struct_type_name: String,
        /// Whether the field's value must be unique
        unique: bool,
        /// Whether any optional or nullable layer wraps the field
        nullable: bool,
        /// Whether any array layer wraps the field
        array: bool,
    },

    /// A scalar field
    Scalar {
        /// Field name
        name: String,
        /// Resolved scalar kind
        scalar_type: ScalarType,
        /// Whether the field's value must be unique
        unique: bool,
        /// Whether any optional or nullable layer wraps the field
        nullable: bool,
        /// Whether any array layer wraps the field
        array: bool,
        /// Literal values of a closed string enumeration, in declaration
        /// order; absent for every other scalar field
        #[serde(default, skip_serializing_if = "Option::is_none")]
        acceptable_values: Option<Vec<String>>,
    },
}

impl PropertyDefinition {
    /// Check if this is a primary-key property
    pub fn is_primary_key(&self) -> bool {
        matches!(self, PropertyDefinition::PrimaryKey { .. })
    }

    /// Check if this is a reference property
    pub fn is_reference(&self) -> bool {
        matches!(self, PropertyDefinition::Reference { .. })
    }

    /// Check if this is an embedded value property
    pub fn is_embedded_value(&self) -> bool {
        matches!(self, PropertyDefinition::EmbeddedValue { .. })
    }

    /// Check if this is a scalar property
    pub fn is_scalar(&self) -> bool {
        matches!(self, PropertyDefinition::Scalar { .. })
    }

    /// Get the referenced entity name, if this is a reference
    pub fn target_entity(&self) -> Option<&str> {
        match self {
            PropertyDefinition::Reference { target_entity, .. } => Some(target_entity),
            _ => None,
        }
    }

    /// Check the uniqueness flag; primary keys carry none
    pub fn is_unique(&self) -> bool {
        match self {
            PropertyDefinition::PrimaryKey { .. } => false,
            PropertyDefinition::Reference { unique, .. }
            | PropertyDefinition::EmbeddedValue { unique, .. }
            | PropertyDefinition::Scalar { unique, .. } => *unique,
        }
    }

    /// Check the nullability flag; primary keys carry none
    pub fn is_nullable(&self) -> bool {
        match self {
            PropertyDefinition::PrimaryKey { .. } => false,
            PropertyDefinition::Reference { nullable, .. }
            | PropertyDefinition::EmbeddedValue { nullable, .. }
            | PropertyDefinition::Scalar { nullable, .. } => *nullable,
        }
    }
}

impl Named for PropertyDefinition {
    fn name(&self) -> &str {
        match self {
            PropertyDefinition::PrimaryKey { name }
            | PropertyDefinition::Reference { name, .. }
            | PropertyDefinition::EmbeddedValue { name, .. }
            | PropertyDefinition::Scalar { name, .. } => name,
        }
    }
}

// ============================================================================
// ModelDocument
// ============================================================================

/// The two derived artifacts of one generation call, paired
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDocument {
    /// Entity definitions in input order
    pub definitions: Vec<EntityDefinition>,

    /// One relation record per definition, in the same order
    pub relations: Vec<EntityRelation>,
}

impl ModelDocument {
    /// Get a definition by entity name
    pub fn definition(&self, name: &str) -> Option<&EntityDefinition> {
        modelgraph_core::find_named(&self.definitions, name)
    }

    /// Get a relation record by entity name
    pub fn relation(&self, name: &str) -> Option<&EntityRelation> {
        modelgraph_core::find_named(&self.relations, name)
    }

    /// Get the number of entities in the document
    pub fn entity_count(&self) -> usize {
        self.definitions.len()
    }

    /// Serialize to a pretty-printed JSON string
    pub fn to_json(&self) -> ModelResult<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    /// Deserialize from a JSON string
    pub fn from_json(json: &str) -> ModelResult<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }
}

// ============================================================================
// Tests
// ============================================================================
