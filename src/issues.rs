//! Issue types for lint results.
//!
//! Each issue is self-contained with all information needed by:
//! - Reporter: to display the issue to users
//! - Fix command: to rewrite the offending file

use enum_dispatch::enum_dispatch;

use crate::core::SourceContext;
use crate::core::fix::Fix;

// ============================================================
// Rule
// ============================================================

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    DuplicateLocator,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::DuplicateLocator => write!(f, "duplicate-locator"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// String literal duplicating a value exported by the locators module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateLocatorIssue {
    pub context: SourceContext,
    /// Runtime text of the literal.
    pub text: String,
    /// Exported constant that should be used instead.
    pub constant_name: String,
    /// The locator value that matched inside `text`.
    pub matched_value: String,
    /// Import specifier of the locators module for this file.
    pub import_path: String,
    /// Text replacing the literal.
    pub replacement: String,
    /// Replacement plus import edits, merged. `None` if the edits conflict.
    pub fix: Option<Fix>,
}

impl DuplicateLocatorIssue {
    pub fn rule() -> Rule {
        Rule::DuplicateLocator
    }
}

/// File could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An issue found during analysis. Every issue is an error.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    DuplicateLocator(DuplicateLocatorIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn rule(&self) -> Rule {
        match self {
            Issue::DuplicateLocator(_) => DuplicateLocatorIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for static dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for DuplicateLocatorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!(
            "Use `{}` from '{}' instead of duplicating the selector string.",
            self.constant_name, self.import_path
        )
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        Some(format!("replace with {}", self.replacement))
    }

    fn details(&self) -> Option<String> {
        (self.matched_value != self.text)
            .then(|| format!("contains locator value \"{}\"", self.matched_value))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.file_path(),
            ReportLocation::File { path } => path,
        }
    }

    fn sort_position(&self) -> (usize, usize) {
        match self.location() {
            ReportLocation::Source(ctx) => (ctx.line(), ctx.col()),
            ReportLocation::File { .. } => (0, 0),
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, col, rule, message
        self.sort_file_path()
            .cmp(other.sort_file_path())
            .then_with(|| self.sort_position().cmp(&other.sort_position()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
