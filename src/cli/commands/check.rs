use anyhow::Result;

use super::super::{args::CheckCommand, exit_status::ExitStatus, report};
use crate::{core::LintContext, issues::Issue};

pub fn check(cmd: CheckCommand, verbose: bool) -> Result<ExitStatus> {
    let ctx = LintContext::new(&cmd.args.common)?;
    let issues = ctx.lint();

    if issues.is_empty() {
        report::print_success(ctx.files.len());
    } else {
        report::report(&issues);
    }

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();
    report::print_parse_warning(parse_error_count, verbose);

    if !issues.is_empty() {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
