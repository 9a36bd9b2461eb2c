//! Core types used throughout modelgraph
//!
//! This module contains the closed vocabularies shared by the schema layer
//! and the derived model: scalar kinds, schema kind tags, and the
//! per-field validation-rule vocabulary that rides along with schemas.

use serde::{Deserialize, Serialize};

// ============================================================================
// Scalar Types
// ============================================================================

/// Scalar kinds a primitive property can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    /// Boolean true/false
    Boolean,
    /// Numeric value (integer or floating point)
    Number,
    /// Text value
    String,
    /// Date and time
    Date,
}

impl ScalarType {
    /// Get a user-friendly display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ScalarType::Boolean => "boolean",
            ScalarType::Number => "number",
            ScalarType::String => "string",
            ScalarType::Date => "date",
        }
    }

    /// Get all scalar types
    pub fn all() -> &'static [ScalarType] {
        &[
            ScalarType::Boolean,
            ScalarType::Number,
            ScalarType::String,
            ScalarType::Date,
        ]
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Schema Kinds
// ============================================================================

/// Kind tag a schema can be annotated with
///
/// An untagged schema has no kind and is treated as a plain validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    /// A top-level entity; participates in the relation graph
    Entity,
    /// A reusable embeddable value type (not an entity)
    Struct,
    /// A named arbitrary-JSON value type
    Json,
}

impl SchemaKind {
    /// Get a user-friendly display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SchemaKind::Entity => "entity",
            SchemaKind::Struct => "struct",
            SchemaKind::Json => "json",
        }
    }

    /// Check if this kind names an embeddable value type
    pub fn is_embeddable(&self) -> bool {
        matches!(self, SchemaKind::Struct | SchemaKind::Json)
    }

    /// Get all schema kinds
    pub fn all() -> &'static [SchemaKind] {
        &[SchemaKind::Entity, SchemaKind::Struct, SchemaKind::Json]
    }
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Validation Rules
// ============================================================================

/// Per-field validation rules carried by schema objects
///
/// The model derivation never evaluates these; they ride along with the
/// field schema so downstream consumers see the declared constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationRule {
    /// Minimum string length
    MinLength(usize),
    /// Maximum string length
    MaxLength(usize),
    /// Minimum numeric value
    Min(f64),
    /// Maximum numeric value
    Max(f64),
    /// Regex pattern validation
    Pattern { regex: String, message: String },
    /// Valid email address
    Email,
    /// Valid URL
    Url,
}

impl ValidationRule {
    /// Get a user-friendly error message
    pub fn error_message(&self) -> String {
        match self {
            ValidationRule::MinLength(n) => format!("Minimum length is {} characters", n),
            ValidationRule::MaxLength(n) => format!("Maximum length is {} characters", n),
            ValidationRule::Min(n) => format!("Minimum value is {}", n),
            ValidationRule::Max(n) => format!("Maximum value is {}", n),
            ValidationRule::Pattern { message, .. } => message.clone(),
            ValidationRule::Email => "Must be a valid email address".to_string(),
            ValidationRule::Url => "Must be a valid URL".to_string(),
        }
    }
}

impl std::fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationRule::MinLength(n) => write!(f, "min_length({})", n),
            ValidationRule::MaxLength(n) => write!(f, "max_length({})", n),
            ValidationRule::Min(n) => write!(f, "min({})", n),
            ValidationRule::Max(n) => write!(f, "max({})", n),
            ValidationRule::Pattern { regex, .. } => write!(f, "pattern({})", regex),
            ValidationRule::Email => write!(f, "email"),
            ValidationRule::Url => write!(f, "url"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
