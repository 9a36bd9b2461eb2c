//! Schema object representation
//!
//! This module contains the `Schema` struct: a validator shape paired with
//! an explicit, immutable tag set. Schemas compose via modifier wrapping
//! (optional, nullable, array) to arbitrary depth; tag lookup and modifier
//! unwrapping both tolerate any nesting order.

use crate::tag::TagSet;
use indexmap::IndexMap;
use modelgraph_core::ValidationRule;
use serde::{Deserialize, Serialize};

// ============================================================================
// SchemaNode
// ============================================================================

/// The validator shape of a schema object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "params", rename_all = "snake_case")]
pub enum SchemaNode {
    /// Boolean true/false
    Boolean,
    /// Numeric value (integer or floating point)
    Number,
    /// Text value
    String,
    /// Date and time
    Date,
    /// Closed enumeration of string literals, order as declared
    StringEnum(Vec<String>),
    /// Record shape with a declaration-ordered field map
    Object(IndexMap<String, Schema>),
    /// Arbitrary value; accepts anything
    Any,
    /// Optional wrapper; the value may be absent
    Optional(Box<Schema>),
    /// Nullable wrapper; the value may be null
    Nullable(Box<Schema>),
    /// Array/list of items
    Array(Box<Schema>),
}

impl SchemaNode {
    /// Check if this node is a modifier wrapper
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            SchemaNode::Optional(_) | SchemaNode::Nullable(_) | SchemaNode::Array(_)
        )
    }
}

// ============================================================================
// Schema
// ============================================================================

/// A schema object: a validator shape plus its declared tags
///
/// Tags are an explicit record carried alongside the shape, not hidden
/// side-channel state; they are visible to equality and serialization.
/// Wrapping a schema in a modifier produces a new schema whose inner value
/// keeps its own tags, so tags applied before or after wrapping are
/// equally retrievable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// The validator shape
    pub node: SchemaNode,

    /// Declared structural metadata
    #[serde(default, skip_serializing_if = "TagSet::is_empty")]
    pub tags: TagSet,

    /// Per-field validation rules riding along with the shape
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<ValidationRule>,
}

impl Schema {
    /// Create a schema from a bare node
    pub fn new(node: SchemaNode) -> Self {
        Self {
            node,
            tags: TagSet::default(),
            rules: Vec::new(),
        }
    }

    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a boolean schema
    pub fn boolean() -> Self {
        Self::new(SchemaNode::Boolean)
    }

    /// Create a number schema
    pub fn number() -> Self {
        Self::new(SchemaNode::Number)
    }

    /// Create a string schema
    pub fn string() -> Self {
        Self::new(SchemaNode::String)
    }

    /// Create a date schema
    pub fn date() -> Self {
        Self::new(SchemaNode::Date)
    }

    /// Create an accept-anything schema
    pub fn any() -> Self {
        Self::new(SchemaNode::Any)
    }

    /// Create a closed string enumeration schema
    ///
    /// Literal order is preserved exactly as declared.
    pub fn string_enum<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(SchemaNode::StringEnum(
            values.into_iter().map(Into::into).collect(),
        ))
    }

    /// Create a plain, untagged object schema from an ordered field list
    pub fn object<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (S, Schema)>,
        S: Into<String>,
    {
        Self::new(SchemaNode::Object(
            fields
                .into_iter()
                .map(|(name, schema)| (name.into(), schema))
                .collect(),
        ))
    }

    /// Create an array schema over an element schema
    pub fn array(element: Schema) -> Self {
        Self::new(SchemaNode::Array(Box::new(element)))
    }

    // ========================================================================
    // Modifier wrapping
    // ========================================================================

    /// Wrap this schema in an optional modifier
    pub fn optional(self) -> Self {
        Self::new(SchemaNode::Optional(Box::new(self)))
    }

    /// Wrap this schema in a nullable modifier
    pub fn nullable(self) -> Self {
        Self::new(SchemaNode::Nullable(Box::new(self)))
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Attach a validation rule
    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append a field to an object-shaped schema
    ///
    /// Inserts into the innermost object's field map, after any declared
    /// fields. Has no effect when the innermost schema is not an object.
    /// Appending after construction is how a field can reference the
    /// schema it belongs to.
    pub fn with_field(mut self, name: impl Into<String>, schema: Schema) -> Self {
        if let SchemaNode::Object(fields) = &mut self.innermost_mut().node {
            fields.insert(name.into(), schema);
        }
        self
    }

    // ========================================================================
    // Modifier unwrapping
    // ========================================================================

    /// Strip all modifier layers, tracking their semantic effects
    ///
    /// Tolerates any ordering and nesting of the three modifier kinds and
    /// descends through array element types.
    pub fn unwrap_modifiers(&self) -> Unwrapped<'_> {
        let mut schema = self;
        let mut nullable = false;
        let mut array = false;

        loop {
            match &schema.node {
                SchemaNode::Optional(inner) | SchemaNode::Nullable(inner) => {
                    nullable = true;
                    schema = inner;
                }
                SchemaNode::Array(inner) => {
                    array = true;
                    schema = inner;
                }
                _ => {
                    return Unwrapped {
                        schema,
                        nullable,
                        array,
                    };
                }
            }
        }
    }

    /// Get the fully-unwrapped inner schema
    pub fn innermost(&self) -> &Schema {
        self.unwrap_modifiers().schema
    }

    fn innermost_mut(&mut self) -> &mut Schema {
        let mut schema = self;
        while schema.node.is_modifier() {
            schema = match &mut schema.node {
                SchemaNode::Optional(inner)
                | SchemaNode::Nullable(inner)
                | SchemaNode::Array(inner) => inner,
                _ => unreachable!(),
            };
        }
        schema
    }

    // ========================================================================
    // Shape queries
    // ========================================================================

    /// Get the field map if the fully-unwrapped schema is object-shaped
    pub fn as_object(&self) -> Option<&IndexMap<String, Schema>> {
        match &self.innermost().node {
            SchemaNode::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Check if the fully-unwrapped schema is object-shaped
    pub fn is_object(&self) -> bool {
        self.as_object().is_some()
    }

    /// Check if any modifier layer wraps this schema
    pub fn is_wrapped(&self) -> bool {
        self.node.is_modifier()
    }
}

// ============================================================================
// Unwrapped
// ============================================================================

/// Result of stripping modifier layers off a schema
#[derive(Debug, Clone, Copy)]
pub struct Unwrapped<'a> {
    /// The fully-unwrapped inner schema
    pub schema: &'a Schema,

    /// Whether any optional or nullable layer was traversed
    pub nullable: bool,

    /// Whether any array layer was traversed
    pub array: bool,
}

// ============================================================================
// Tests
// ============================================================================
