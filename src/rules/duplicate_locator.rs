//! Duplicate locator detection rule.
//!
//! Flags string literals (and template literals without expressions) whose
//! text duplicates a selector exported by the repository's locators module,
//! and plans a fix that switches to the exported constant.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Result;

use crate::{
    core::{
        SourceContext, SourceLocation,
        collect::{FileImports, collect_literals},
        directives::Suppressions,
        fix::{Fix, apply_fixes, plan_fix, plan_replacement},
        locators::{LocatorCache, LocatorTable},
        matcher::find_matching_locator,
        parsers::{ParsedModule, parse_ts_source},
        repo::{find_repo_root, import_path_for, locators_module_path},
    },
    issues::DuplicateLocatorIssue,
};

/// Upper bound on fix passes per file.
pub const MAX_FIX_PASSES: usize = 10;

/// Where a linted file gets its locators from.
#[derive(Debug, Clone)]
pub struct LocatorTarget {
    pub repo_root: PathBuf,
    pub table: Arc<LocatorTable>,
    /// Import specifier this file should use for the locators module.
    pub import_path: String,
}

/// Resolve the locator table and import path for `file_path`.
///
/// Returns `None` (the rule does nothing for the file) when no repository
/// root is found, the locators module is missing, unreadable, unparseable or
/// empty, or `file_path` is the locators module itself.
pub fn resolve_target(file_path: &Path, cache: &LocatorCache) -> Option<LocatorTarget> {
    let Some(repo_root) = find_repo_root(file_path) else {
        tracing::debug!(file = %file_path.display(), "no repository root");
        return None;
    };

    let locators_module = locators_module_path(&repo_root);
    if std::path::absolute(file_path).is_ok_and(|abs| abs == locators_module) {
        return None;
    }

    let table = cache.get_or_build(&repo_root)?;
    if table.is_empty() {
        return None;
    }

    let import_path = import_path_for(file_path, &repo_root);
    Some(LocatorTarget {
        repo_root,
        table,
        import_path,
    })
}

/// Check one parsed file against `target`.
pub fn check_duplicate_locators(
    parsed: &ParsedModule,
    file_path: &str,
    target: &LocatorTarget,
) -> Vec<DuplicateLocatorIssue> {
    let imports = FileImports::from_parsed(parsed);
    let suppressions = Suppressions::from_parsed(parsed);

    collect_literals(&parsed.module)
        .into_iter()
        .filter_map(|literal| {
            let matched = find_matching_locator(&literal.text, &target.table)?;
            if imports.is_constant_imported(&matched.name, &target.import_path) {
                return None;
            }

            let loc = parsed.lookup(literal.span.lo);
            if suppressions.is_suppressed(loc.line) {
                return None;
            }

            let edits = plan_fix(
                parsed.range(literal.span),
                &literal,
                &matched,
                &imports,
                &target.import_path,
            );
            let fix = match Fix::merge(&parsed.source, edits) {
                Ok(fix) => Some(fix),
                Err(err) => {
                    tracing::debug!(file = file_path, line = loc.line, "unfixable: {}", err);
                    None
                }
            };

            Some(DuplicateLocatorIssue {
                context: SourceContext::new(
                    SourceLocation::new(file_path, loc.line, loc.col_display + 1),
                    parsed.line_text(&loc),
                ),
                replacement: plan_replacement(&literal.text, literal.kind, &matched),
                text: literal.text,
                constant_name: matched.name,
                matched_value: matched.value,
                import_path: target.import_path.clone(),
                fix,
            })
        })
        .collect()
}

/// Result of fixing one file.
#[derive(Debug)]
pub struct FixOutcome {
    /// Fixed source text.
    pub output: String,
    /// Number of fixes applied over all passes.
    pub fixes_applied: usize,
    /// Issues still reported for `output`.
    pub remaining: Vec<DuplicateLocatorIssue>,
}

impl FixOutcome {
    pub fn changed(&self) -> bool {
        self.fixes_applied > 0
    }
}

/// Apply fixes to `source` until none apply or [`MAX_FIX_PASSES`] is reached.
///
/// Each pass re-parses and re-checks the text, so a fix deferred because it
/// conflicted with another one is planned again against the updated imports.
/// A pass whose output no longer parses is discarded: the outcome keeps the
/// last parseable text and reports that pass's issues as remaining.
pub fn fix_duplicate_locators(
    source: &str,
    file_path: &str,
    target: &LocatorTarget,
) -> Result<FixOutcome> {
    let mut parsed = parse_ts_source(source, file_path)?;
    let mut output = source.to_string();
    let mut fixes_applied = 0;

    for pass in 1..=MAX_FIX_PASSES {
        let issues = check_duplicate_locators(&parsed, file_path, target);
        let fixes: Vec<Fix> = issues.iter().filter_map(|i| i.fix.clone()).collect();
        if fixes.is_empty() {
            return Ok(FixOutcome {
                output,
                fixes_applied,
                remaining: issues,
            });
        }

        let applied = apply_fixes(&parsed.source, &fixes);
        tracing::debug!(
            file = file_path,
            pass,
            applied = applied.applied,
            deferred = applied.deferred,
            "applied fixes"
        );
        let candidate = parsed.restore_bom(applied.output);

        match parse_ts_source(&candidate, file_path) {
            Ok(reparsed) => {
                output = candidate;
                fixes_applied += applied.applied;
                parsed = reparsed;
            }
            Err(err) => {
                tracing::warn!(
                    file = file_path,
                    pass,
                    "discarding fixes, output does not parse: {}",
                    err
                );
                return Ok(FixOutcome {
                    output,
                    fixes_applied,
                    remaining: issues,
                });
            }
        }
    }

    Ok(FixOutcome {
        remaining: check_duplicate_locators(&parsed, file_path, target),
        output,
        fixes_applied,
    })
}
