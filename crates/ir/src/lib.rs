//! # Modelgraph IR (Derived Model)
//!
//! This crate derives the framework-agnostic entity-relationship model
//! from tagged schema objects: a normalized entity-definition list and a
//! bidirectional relation graph.
//!
//! ## Core Concepts
//!
//! - **EntityDefinition**: one entity's declared name, description, and
//!   classified properties in declaration order
//! - **PropertyDefinition**: the semantic role of one field — primary key,
//!   reference, embedded value, or scalar
//! - **EntityRelation**: per entity, the entities it points to and the
//!   entities pointing back at it
//! - **Generation**: a pure function of the input schema list; the first
//!   failure aborts the whole batch
//!

// Module declarations
pub mod classify;
pub mod definition;
pub mod generator;
pub mod relation;

// Re-export commonly used types at crate root
pub use classify::classify_field;
pub use definition::{EntityDefinition, ModelDocument, PropertyDefinition};
pub use generator::{generate_definitions, generate_model, generate_relations};
pub use relation::{EntityRelation, RelationEdge};

// Re-export core types that are commonly used with the derived model
pub use modelgraph_core::{ModelError, ModelResult, ScalarType, SchemaKind};

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
        SchemaKind,
        // Operations
        classify_field,
        generate_definitions,
        generate_model,
        generate_relations,
    };
    pub use modelgraph_schema::{Schema, SchemaNode};
}
