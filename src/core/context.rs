use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, load_config},
    core::{
        file_scanner::scan_files,
        locators::LocatorCache,
        parsers::parse_ts_source,
    },
    issues::{DuplicateLocatorIssue, Issue, ParseErrorIssue},
    rules::{FixOutcome, check_duplicate_locators, fix_duplicate_locators, resolve_target},
};

/// Outcome of fixing one file.
#[derive(Debug)]
pub struct FileFix {
    pub file_path: String,
    pub outcome: FixOutcome,
}

/// Lint context shared by the commands.
///
/// Holds the files selected for linting and the locator table cache. Files
/// are processed in parallel with rayon; the cache is shared between workers,
/// so the locators module of a repository is parsed once per run.
pub struct LintContext {
    /// All source files to lint (TS/TSX/JS/JSX), sorted.
    pub files: BTreeSet<String>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    cache: LocatorCache,
}

impl LintContext {
    /// Create a new `LintContext` from command line arguments.
    ///
    /// Loads `.loclintrc.json` (searching upward from the source root) and
    /// scans the source files it selects.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let scan_result = scan_files(&root_dir, &config_result.config);
        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            files: scan_result.files,
            verbose,
            cache: LocatorCache::new(),
        })
    }

    /// Lint every file. Issues are sorted by file and position.
    pub fn lint(&self) -> Vec<Issue> {
        let mut issues: Vec<Issue> = self
            .files
            .par_iter()
            .flat_map_iter(|file_path| self.lint_file(file_path))
            .collect();
        tracing::debug!(
            files = self.files.len(),
            tables = self.cache.len(),
            issues = issues.len(),
            "lint finished"
        );
        issues.sort();
        issues
    }

    fn lint_file(&self, file_path: &str) -> Vec<Issue> {
        let Some(target) = resolve_target(Path::new(file_path), &self.cache) else {
            return Vec::new();
        };

        let parsed = fs::read_to_string(file_path)
            .map_err(|e| anyhow::anyhow!("Failed to read file: {}", e))
            .and_then(|code| parse_ts_source(&code, file_path));

        match parsed {
            Ok(parsed) => check_duplicate_locators(&parsed, file_path, &target)
                .into_iter()
                .map(Issue::from)
                .collect(),
            Err(e) => vec![self.parse_error(file_path, e)],
        }
    }

    /// Run the fixer on every file. Files are not written.
    ///
    /// Returns one entry per file that has duplicates, plus parse errors of
    /// files that could not be read or parsed.
    pub fn fix(&self) -> (Vec<FileFix>, Vec<Issue>) {
        let results: Vec<Result<Option<FileFix>, Issue>> = self
            .files
            .par_iter()
            .map(|file_path| self.fix_file(file_path))
            .collect();

        let mut fixes = Vec::new();
        let mut errors = Vec::new();
        for result in results {
            match result {
                Ok(Some(fix)) => fixes.push(fix),
                Ok(None) => {}
                Err(issue) => errors.push(issue),
            }
        }
        fixes.sort_by(|a, b| a.file_path.cmp(&b.file_path));
        errors.sort();
        (fixes, errors)
    }

    fn fix_file(&self, file_path: &str) -> Result<Option<FileFix>, Issue> {
        let Some(target) = resolve_target(Path::new(file_path), &self.cache) else {
            return Ok(None);
        };

        let outcome = fs::read_to_string(file_path)
            .map_err(|e| anyhow::anyhow!("Failed to read file: {}", e))
            .and_then(|code| fix_duplicate_locators(&code, file_path, &target))
            .map_err(|e| self.parse_error(file_path, e))?;

        if !outcome.changed() && outcome.remaining.is_empty() {
            return Ok(None);
        }
        Ok(Some(FileFix {
            file_path: file_path.to_string(),
            outcome,
        }))
    }

    fn parse_error(&self, file_path: &str, error: anyhow::Error) -> Issue {
        if self.verbose {
            eprintln!("Warning: {} - {}", file_path, error);
        }
        Issue::ParseError(ParseErrorIssue {
            file_path: file_path.to_string(),
            error: error.to_string(),
        })
    }
}

/// Duplicate locator issues among `issues`.
pub fn duplicate_issues(issues: &[Issue]) -> impl Iterator<Item = &DuplicateLocatorIssue> {
    issues.iter().filter_map(|issue| match issue {
        Issue::DuplicateLocator(issue) => Some(issue),
        Issue::ParseError(_) => None,
    })
}
