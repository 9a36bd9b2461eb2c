//! # modelgraph
//!
//! Derives a framework-agnostic entity-relationship model from annotated
//! validation schemas: a normalized entity-definition list plus a
//! bidirectional relation graph that downstream generators can consume.
//!
//! ## Overview
//!
//! Schemas are built from scalar and object validators, composed with
//! optional/nullable/array modifiers, and annotated with structural
//! metadata: entity kind and name, primary-key and uniqueness flags, and
//! references to other named schemas. Tags can be applied before or after
//! modifier wrapping. Generation walks an ordered collection of schemas,
//! classifies every field of every entity, and derives the relation graph
//! from the resulting definitions.
//!
//! ## Example
//!
//! ```rust
//! use modelgraph::prelude::*;
//!
//! let company = Schema::entity(
//!     "Company",
//!     [
//!         ("id", Schema::string().primary_key()),
//!         ("name", Schema::string()),
//!     ],
//! );
//! let user = Schema::entity(
//!     "User",
//!     [
//!         ("id", Schema::string().primary_key()),
//!         ("email", Schema::string().unique()),
//!         ("company_id", Schema::string().references(&company)),
//!     ],
//! );
//!
//! let document = generate_model(&[company, user])?;
//! assert_eq!(document.entity_count(), 2);
//!
//! let relation = document.relation("Company").unwrap();
//! assert!(relation.is_referred_by("User"));
//! # Ok::<(), ModelError>(())
//! ```

// Re-export the member crates under stable module names
pub use modelgraph_ir as ir;
pub use modelgraph_schema as schema;

// Re-export the primary surface at crate root
pub use modelgraph_core::{
    Described, ModelError, ModelResult, Named, ResultExt, ScalarType, SchemaKind, ValidationRule,
};
pub use modelgraph_ir::{
    EntityDefinition, EntityRelation, ModelDocument, PropertyDefinition, RelationEdge,
    classify_field, generate_definitions, generate_model, generate_relations,
};
pub use modelgraph_schema::{
    DEFAULT_REFERENCE_FIELD, ReferenceTag, Schema, SchemaNode, TagSet, Unwrapped,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        EntityDefinition,
        EntityRelation,
        ModelDocument,
        ModelError,
        ModelResult,
        PropertyDefinition,
        RelationEdge,
        ScalarType,
        // Core types
        Schema,
        SchemaKind,
        SchemaNode,
        ValidationRule,
        // Operations
        classify_field,
        generate_definitions,
        generate_model,
        generate_relations,
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_model_as_json() {
        let company = Schema::entity(
            "Company",
            [
                ("id", Schema::string().primary_key()),
                ("name", Schema::string()),
            ],
        );
        let user = Schema::entity(
            "User",
            [
                ("id", Schema::string().primary_key()),
                ("email", Schema::string().unique()),
                ("company_id", Schema::string().references(&company)),
            ],
        );

        let document = generate_model(&[company, user]).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&document.to_json().unwrap()).unwrap();

        assert_eq!(json["definitions"][1]["name"], "User");
        assert_eq!(
            json["definitions"][1]["properties"][2]["property_type"],
            "reference"
        );
        assert_eq!(
            json["relations"][0]["referred_bys"][0]["entity_name"],
            "User"
        );
    }

    #[test]
    fn test_facade_version() {
        assert!(!crate::VERSION.is_empty());
    }
}
