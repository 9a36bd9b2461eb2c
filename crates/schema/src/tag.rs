//! Metadata tagging layer
//!
//! This module contains the `TagSet` attached to schema objects and the
//! tagging surface on `Schema`: kind/name/description constructors,
//! chainable field-level tag setters, and the tag readers.
//!
//! Tags are order-independent: a field can be tagged before or after being
//! wrapped in modifiers, and every reader consults both the raw schema and
//! its fully-unwrapped inner schema. No tag setter performs validation;
//! the classifier validates with full context at generation time.

use crate::schema::Schema;
use modelgraph_core::SchemaKind;
use serde::{Deserialize, Serialize};

/// Target field a reference points at when none is given
pub const DEFAULT_REFERENCE_FIELD: &str = "id";

// ============================================================================
// TagSet
// ============================================================================

/// Structural metadata declared on a schema object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagSet {
    /// Kind tag; absent on plain, untagged schemas
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SchemaKind>,

    /// Display name; required for any kind-tagged schema, checked at
    /// generation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the field is the owning entity's identifying field
    #[serde(default)]
    pub primary_key: bool,

    /// Whether the field's value must be unique
    #[serde(default)]
    pub unique: bool,

    /// Reference to another named schema
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<ReferenceTag>,
}

impl TagSet {
    /// Check if no tag is set
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.name.is_none()
            && self.description.is_none()
            && !self.primary_key
            && !self.unique
            && self.reference.is_none()
    }
}

// ============================================================================
// ReferenceTag
// ============================================================================

/// A reference to another schema, resolved against the target at tag time
///
/// The target's kind and name tags are captured as declared when the
/// reference is set; whether they describe a valid target is checked by
/// the classifier, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTag {
    /// The target schema's kind tag, as declared
    pub target_kind: Option<SchemaKind>,

    /// The target schema's display name, as declared
    pub target_name: Option<String>,

    /// Name of the referenced field on the target (usually "id")
    pub target_field: String,
}

impl ReferenceTag {
    /// Capture a reference to the target's default field
    pub fn new(target: &Schema) -> Self {
        Self::with_field(target, DEFAULT_REFERENCE_FIELD)
    }

    /// Capture a reference to a named field on the target
    pub fn with_field(target: &Schema, field: impl Into<String>) -> Self {
        Self {
            target_kind: target.kind(),
            target_name: target.tag_name().map(str::to_string),
            target_field: field.into(),
        }
    }
}

// ============================================================================
// Tagging surface on Schema
// ============================================================================

impl Schema {
    // ========================================================================
    // Tagged constructors
    // ========================================================================

    /// Create an entity schema from an ordered field list
    pub fn entity<I, S>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (S, Schema)>,
        S: Into<String>,
    {
        let mut schema = Self::object(fields);
        schema.tags.kind = Some(SchemaKind::Entity);
        schema.tags.name = Some(name.into());
        schema
    }

    /// Create a reusable embeddable value type from an ordered field list
    pub fn struct_type<I, S>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (S, Schema)>,
        S: Into<String>,
    {
        let mut schema = Self::object(fields);
        schema.tags.kind = Some(SchemaKind::Struct);
        schema.tags.name = Some(name.into());
        schema
    }

    /// Create a named arbitrary-JSON value type over an inner schema
    pub fn json_type(name: impl Into<String>, inner: Schema) -> Self {
        let mut schema = inner;
        schema.tags.kind = Some(SchemaKind::Json);
        schema.tags.name = Some(name.into());
        schema
    }

    // ========================================================================
    // Tag setters
    // ========================================================================

    /// Set the description tag
    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.tags.description = Some(text.into());
        self
    }

    /// Mark the field as the owning entity's identifying field
    pub fn primary_key(mut self) -> Self {
        self.tags.primary_key = true;
        self
    }

    /// Mark the field's value as unique
    pub fn unique(mut self) -> Self {
        self.tags.unique = true;
        self
    }

    /// Mark the field as a reference to the target's default field
    pub fn references(self, target: &Schema) -> Self {
        self.references_field(target, DEFAULT_REFERENCE_FIELD)
    }

    /// Mark the field as a reference to a named field on the target
    pub fn references_field(mut self, target: &Schema, field: impl Into<String>) -> Self {
        self.tags.reference = Some(ReferenceTag::with_field(target, field));
        self
    }

    // ========================================================================
    // Tag readers
    // ========================================================================

    /// Get the kind tag, checking the raw and fully-unwrapped schema
    pub fn kind(&self) -> Option<SchemaKind> {
        self.tags.kind.or(self.innermost().tags.kind)
    }

    /// Get the name tag, checking the raw and fully-unwrapped schema
    pub fn tag_name(&self) -> Option<&str> {
        self.tags
            .name
            .as_deref()
            .or_else(|| self.innermost().tags.name.as_deref())
    }

    /// Get the description tag, checking the raw and fully-unwrapped schema
    pub fn tag_description(&self) -> Option<&str> {
        self.tags
            .description
            .as_deref()
            .or_else(|| self.innermost().tags.description.as_deref())
    }

    /// Check the primary-key tag on the raw and fully-unwrapped schema
    pub fn is_primary_key(&self) -> bool {
        self.tags.primary_key || self.innermost().tags.primary_key
    }

    /// Check the uniqueness tag on the raw and fully-unwrapped schema
    pub fn is_unique(&self) -> bool {
        self.tags.unique || self.innermost().tags.unique
    }

    /// Get the reference tag, checking the raw and fully-unwrapped schema
    pub fn reference(&self) -> Option<&ReferenceTag> {
        self.tags
            .reference
            .as_ref()
            .or_else(|| self.innermost().tags.reference.as_ref())
    }
}

// ============================================================================
// Tests
// ============================================================================
