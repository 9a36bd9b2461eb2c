//! # Modelgraph Core
//!
//! Core types, traits, and error handling for modelgraph.
//!
//! This crate provides the foundational building blocks used throughout
//! the modelgraph ecosystem, including:
//!
//! - **Types**: Scalar kinds, schema kind tags, validation-rule vocabulary
//! - **Traits**: Common behaviors like `Named` and `Described`
//! - **Errors**: Unified error handling with `ModelError` and `ModelResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{ModelError, ModelResult, ResultExt};
pub use traits::{Described, Named, find_named};
pub use types::{ScalarType, SchemaKind, ValidationRule};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
