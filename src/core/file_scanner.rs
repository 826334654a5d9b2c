use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use walkdir::{DirEntry, WalkDir};

use crate::config::{Config, TEST_FILE_PATTERNS};

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    /// Lintable files, sorted.
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

/// Compiled ignore rules.
struct IgnoreSet {
    literal_paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(base_dir: &Path, ignores: &[String], ignore_test_files: bool) -> Self {
        let mut literal_paths = Vec::new();
        let mut patterns = Vec::new();

        for p in ignores {
            if is_glob_pattern(p) {
                match Pattern::new(p) {
                    Ok(pattern) => patterns.push(pattern),
                    Err(e) => tracing::warn!("invalid ignore pattern '{}': {}", p, e),
                }
            } else {
                literal_paths.push(base_dir.join(p));
            }
        }

        if ignore_test_files {
            patterns.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        Self {
            literal_paths,
            patterns,
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.literal_paths.iter().any(|p| path.starts_with(p)) {
            return true;
        }
        let path_str = path.to_string_lossy();
        self.patterns.iter().any(|p| p.matches(&path_str))
    }
}

/// Directories to walk: the base directory, or the configured includes.
fn scan_roots(base_dir: &Path, includes: &[String]) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut roots = Vec::new();
    for inc in includes {
        if is_glob_pattern(inc) {
            let full_pattern = base_dir.join(inc);
            match glob(&full_pattern.to_string_lossy()) {
                Ok(entries) => roots.extend(entries.flatten().filter(|entry| entry.is_dir())),
                Err(e) => tracing::warn!("invalid include pattern '{}': {}", inc, e),
            }
        } else {
            let path = base_dir.join(inc);
            if path.exists() {
                roots.push(path);
            } else {
                tracing::warn!("include path does not exist: {}", path.display());
            }
        }
    }
    roots
}

/// Collect the TS/TSX/JS/JSX files below `base_dir` selected by `config`.
pub fn scan_files(base_dir: &Path, config: &Config) -> ScanResult {
    let ignore_set = IgnoreSet::new(base_dir, &config.ignores, config.ignore_test_files);
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    for root in scan_roots(base_dir, &config.includes) {
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !is_ignored_dir(entry, &ignore_set));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    tracing::warn!("cannot access path: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            if entry.file_type().is_file()
                && is_scannable_file(path)
                && !ignore_set.is_ignored(path)
            {
                files.insert(path.to_string_lossy().into_owned());
            }
        }
    }

    tracing::debug!(files = files.len(), "scanned source files");
    ScanResult {
        files,
        skipped_count,
    }
}

fn is_ignored_dir(entry: &DirEntry, ignore_set: &IgnoreSet) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && ignore_set.is_ignored(entry.path())
}

fn is_scannable_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "ts" | "jsx" | "js")
    )
}
