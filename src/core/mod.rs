//! Core analysis pipeline.
//!
//! ```text
//! file path ──► repo root ──► locators module ──► LocatorTable (cached)
//!                                                      │
//! file source ──► parse ──► literals ──► match ──► fix plan ──► issue
//! ```
//!
//! ## Module Structure
//!
//! - `collect`: Imports and static literals of a consuming file
//! - `context`: Lint context (config, scanned files, table cache, parallel lint/fix)
//! - `data`: Source location types
//! - `directives`: `loclint-disable` comment handling
//! - `file_scanner`: Source file discovery
//! - `fix`: Text edits, multi-pass fix application and the fix planner
//! - `locators`: Locators module parsing, table construction and caching
//! - `matcher`: Exact and longest-substring matching against the table
//! - `parsers`: swc-based TypeScript parsing
//! - `repo`: Repository root discovery and import path computation

pub mod collect;
pub mod context;
pub mod data;
pub mod directives;
pub mod file_scanner;
pub mod fix;
pub mod locators;
pub mod matcher;
pub mod parsers;
pub mod repo;

pub use context::{FileFix, LintContext, duplicate_issues};
pub use data::{SourceContext, SourceLocation};
