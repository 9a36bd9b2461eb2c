//! # Modelgraph Schema
//!
//! Schema objects and the metadata tagging layer for modelgraph.
//!
//! ## Core Concepts
//!
//! - **Schema**: a validator shape paired with an explicit tag set,
//!   composable via optional/nullable/array modifier wrapping
//! - **TagSet**: structural metadata declared on a schema (kind, name,
//!   description, primary-key flag, uniqueness flag, reference target)
//! - **Tag order independence**: tags applied before or after modifier
//!   wrapping are equally visible to every reader
//!
//! Tagging performs no validation; the derivation layer validates tags
//! with full context when the model is generated.

pub mod schema;
pub mod tag;

// Re-export commonly used types at crate root
pub use schema::{Schema, SchemaNode, Unwrapped};
pub use tag::{DEFAULT_REFERENCE_FIELD, ReferenceTag, TagSet};

// Re-export core types that are commonly used with schemas
pub use modelgraph_core::{SchemaKind, ValidationRule};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
