//! Error types for modelgraph
//!
//! This module provides unified error handling for model derivation.
//! Every failure is a synchronous, fatal-to-the-call error value carrying
//! a human-readable message that names the offending entity or field.

use thiserror::Error;

/// The main error type for modelgraph
#[derive(Debug, Error)]
pub enum ModelError {
    // ========================================================================
    // Structural Errors
    // ========================================================================
    /// A schema that requires a display name has none
    #[error("{context} must have a name")]
    MissingName { context: String },

    /// An entity-tagged schema is not an object shape
    #[error("entity '{entity}' must be an object schema")]
    InvalidShape { entity: String },

    // ========================================================================
    // Classification Errors
    // ========================================================================
    /// A field's resolved inner schema is itself an entity
    #[error("field '{entity}.{field}' embeds an entity directly; use a reference")]
    IllegalEmbedding { entity: String, field: String },

    /// A reference tag points at a schema that is not an entity
    #[error("reference on field '{entity}.{field}' must target an entity")]
    InvalidReferenceTarget { entity: String, field: String },

    /// No classification branch applies to the field's inner schema
    #[error("field '{entity}.{field}' has an unsupported type")]
    UnsupportedFieldType { entity: String, field: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl ModelError {
    /// Create a missing-name error; `context` names the schema that lacks one
    pub fn missing_name(context: impl Into<String>) -> Self {
        ModelError::MissingName {
            context: context.into(),
        }
    }

    /// Create an invalid-shape error for an entity
    pub fn invalid_shape(entity: impl Into<String>) -> Self {
        ModelError::InvalidShape {
            entity: entity.into(),
        }
    }

    /// Create an illegal-embedding error for a field
    pub fn illegal_embedding(entity: impl Into<String>, field: impl Into<String>) -> Self {
        ModelError::IllegalEmbedding {
            entity: entity.into(),
            field: field.into(),
        }
    }

    /// Create an invalid-reference-target error for a field
    pub fn invalid_reference_target(entity: impl Into<String>, field: impl Into<String>) -> Self {
        ModelError::InvalidReferenceTarget {
            entity: entity.into(),
            field: field.into(),
        }
    }

    /// Create an unsupported-field-type error for a field
    pub fn unsupported_field_type(entity: impl Into<String>, field: impl Into<String>) -> Self {
        ModelError::UnsupportedFieldType {
            entity: entity.into(),
            field: field.into(),
        }
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        ModelError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a structural error (bad schema shape or missing name)
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ModelError::MissingName { .. } | ModelError::InvalidShape { .. }
        )
    }

    /// Check if this error is a field-classification error
    pub fn is_classification(&self) -> bool {
        matches!(
            self,
            ModelError::IllegalEmbedding { .. }
                | ModelError::InvalidReferenceTarget { .. }
                | ModelError::UnsupportedFieldType { .. }
        )
    }

    /// Check if this error is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, ModelError::Serialization(_))
    }
}

/// Result type alias using ModelError
pub type ModelResult<T> = Result<T, ModelError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> ModelResult<T>;
}

impl<T, E: Into<ModelError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> ModelResult<T> {
        self.map_err(|e| {
            let err: ModelError = e.into();
            ModelError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
