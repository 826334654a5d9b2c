//! Core data types shared by the analysis pipeline.
//!
//! ## Module Structure
//!
//! - `source`: Source code location types (SourceContext, SourceLocation)

pub mod source;

pub use source::{SourceContext, SourceLocation};
