//! loclint - duplicate Playwright locator checker
//!
//! loclint is a CLI tool and library that finds string literals in TypeScript
//! sources which duplicate selector constants exported from the project's
//! Playwright locators module, and rewrites them to use the exported constant.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Analysis engine (parsing, locator tables, matching, fix planning)
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Detection rules
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
pub mod utils;
