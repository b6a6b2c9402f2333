//! # notewise-core
//!
//! Core types, traits, and abstractions for notewise.
//!
//! This crate provides the domain model (notes, categories, analysis
//! requests), the shared error type, default constants, and the
//! [`NoteAnalyzer`] trait that inference backends implement.

pub mod categories;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod notes;
pub mod traits;

// Re-export commonly used types at crate root
pub use categories::{
    default_category_inputs, duplicate_category_ids, find_by_name, is_default_category,
    needs_default_seed,
};
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
