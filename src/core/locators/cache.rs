use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use super::{LocatorTable, load_locator_table};
use crate::core::repo::locators_module_path;

/// Locator tables keyed by repository root.
///
/// Entries are built on first request and kept for the lifetime of the cache;
/// edits to a locators module are not picked up until [`LocatorCache::invalidate`]
/// is called for its root. Failed builds are not cached.
///
/// Safe to share between rayon workers. Two workers racing on the first build
/// for one root both build the (identical) table and the first insert wins.
#[derive(Debug, Default)]
pub struct LocatorCache {
    tables: Mutex<HashMap<PathBuf, Arc<LocatorTable>>>,
}

impl LocatorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table for the locators module under `repo_root`, building it if needed.
    ///
    /// Returns `None` when the module is missing, unreadable or unparseable.
    pub fn get_or_build(&self, repo_root: &Path) -> Option<Arc<LocatorTable>> {
        if let Some(table) = self.lock().get(repo_root) {
            return Some(Arc::clone(table));
        }

        let path = locators_module_path(repo_root);
        match load_locator_table(&path) {
            Ok(table) => {
                let mut tables = self.lock();
                let entry = tables
                    .entry(repo_root.to_path_buf())
                    .or_insert_with(|| Arc::new(table));
                Some(Arc::clone(entry))
            }
            Err(err) => {
                tracing::debug!(root = %repo_root.display(), "no locator table: {}", err);
                None
            }
        }
    }

    /// Drop the cached table for `repo_root`. Returns whether one was cached.
    pub fn invalidate(&self, repo_root: &Path) -> bool {
        self.lock().remove(repo_root).is_some()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<PathBuf, Arc<LocatorTable>>> {
        // A panic while holding the lock cannot leave a half-written entry.
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
