//! Locators module analysis.
//!
//! Turns the project's locators module (a TypeScript file exporting selector
//! constants) into a [`LocatorTable`] of `selector value -> constant name`.
//!
//! ## Module Structure
//!
//! - `declaration`: Exported declarations and their initializer shapes
//! - `builder`: Two-pass constant folding into a table
//! - `table`: Insertion-ordered, last-write-wins value table
//! - `cache`: Per-repository-root table cache

pub mod builder;
pub mod cache;
pub mod declaration;
pub mod table;

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

pub use builder::build_locator_table;
pub use cache::LocatorCache;
pub use table::{LocatorEntry, LocatorTable};

use crate::core::parsers::parse_ts_source;

/// Why no table could be produced for a locators module.
#[derive(Debug, Error)]
pub enum LocatorError {
    #[error("failed to read locators module {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse locators module {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

/// Read, parse and fold the locators module at `path`.
pub fn load_locator_table(path: &Path) -> Result<LocatorTable, LocatorError> {
    let source = fs::read_to_string(path).map_err(|source| LocatorError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed =
        parse_ts_source(&source, &path.to_string_lossy()).map_err(|e| LocatorError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let table = build_locator_table(&parsed.module);
    tracing::debug!(
        path = %path.display(),
        entries = table.len(),
        "built locator table"
    );
    Ok(table)
}
