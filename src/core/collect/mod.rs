//! Per-file collection of the AST facts the rule works on.
//!
//! - `imports`: Import statements and their byte positions
//! - `literals`: String and expression-free template literals

pub mod imports;
pub mod literals;

pub use imports::{FileImports, ImportStatement, is_locators_source};
pub use literals::{LiteralKind, StaticLiteral, collect_literals};
