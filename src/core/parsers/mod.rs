//! Source file parsers.
//!
//! - `typescript`: TS/TSX source file parser (uses swc for AST generation)

pub mod typescript;

pub use typescript::{ExtractedComments, ParsedModule, parse_ts_source};
