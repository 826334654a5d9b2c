//! Fix command - replace duplicated selectors with locator constants.
//!
//! Each literal is replaced with its constant (or a template literal that
//! keeps the unmatched suffix) and the constant is imported, extending an
//! existing locators import when there is one.
//!
//! Use `--apply` to write the files (default is dry-run mode).

use std::{collections::BTreeSet, fs, io};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{args::FixCommand, exit_status::ExitStatus, report};
use crate::{
    core::{LintContext, duplicate_issues},
    issues::{DuplicateLocatorIssue, Issue},
};

pub fn fix(cmd: FixCommand, verbose: bool) -> Result<ExitStatus> {
    let args = &cmd.args;
    let ctx = LintContext::new(&args.common)?;

    if args.apply {
        apply(&ctx, verbose)
    } else {
        preview(&ctx, verbose)
    }
}

/// Dry-run: list what would change.
fn preview(ctx: &LintContext, verbose: bool) -> Result<ExitStatus> {
    let issues = ctx.lint();
    let parse_errors: Vec<Issue> = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .cloned()
        .collect();
    let duplicates: Vec<&DuplicateLocatorIssue> = duplicate_issues(&issues).collect();

    if duplicates.is_empty() {
        report::print_success(ctx.files.len());
    } else {
        report::print_fix_preview_to(&duplicates, &mut io::stdout().lock());
        let files: BTreeSet<&str> = duplicates.iter().map(|i| i.context.file_path()).collect();
        println!(
            "{} {} duplicate(s) in {} file(s).",
            "Would fix".yellow().bold(),
            duplicates.len(),
            files.len()
        );
        println!("Run with {} to write these fixes.", "--apply".cyan());
    }

    report::report(&parse_errors);
    report::print_parse_warning(parse_errors.len(), verbose);

    // In dry-run mode, finding duplicates is "Failure" to signal there is work to do.
    if !duplicates.is_empty() || !parse_errors.is_empty() {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

fn apply(ctx: &LintContext, verbose: bool) -> Result<ExitStatus> {
    let (file_fixes, parse_errors) = ctx.fix();

    let mut fixed_count = 0;
    let mut file_count = 0;
    let mut remaining: Vec<Issue> = Vec::new();

    for file_fix in file_fixes {
        let outcome = file_fix.outcome;
        if outcome.changed() {
            fs::write(&file_fix.file_path, &outcome.output)
                .with_context(|| format!("Failed to write file: {}", file_fix.file_path))?;
            tracing::debug!(file = %file_fix.file_path, fixes = outcome.fixes_applied, "wrote fixes");
            fixed_count += outcome.fixes_applied;
            file_count += 1;
        }
        remaining.extend(outcome.remaining.into_iter().map(Issue::DuplicateLocator));
    }

    if fixed_count > 0 {
        println!(
            "{} {} duplicate(s) in {} file(s).",
            "Fixed".green().bold(),
            fixed_count,
            file_count
        );
    } else if remaining.is_empty() && parse_errors.is_empty() {
        report::print_success(ctx.files.len());
    }

    if !remaining.is_empty() {
        println!(
            "{} {} duplicate(s) could not be fixed automatically:",
            report::FAILURE_MARK.red(),
            remaining.len()
        );
        println!();
    }
    remaining.extend(parse_errors.iter().cloned());
    report::report(&remaining);
    report::print_parse_warning(parse_errors.len(), verbose);

    if remaining.is_empty() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}
