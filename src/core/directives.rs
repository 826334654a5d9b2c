//! Suppression directives in source comments.
//!
//! Supported forms:
//! - `// loclint-disable-next-line` - suppress violations on the next line
//! - `/* loclint-disable */` ... `/* loclint-enable */` - suppress a range of lines
//!
//! A `loclint-disable` without a matching `loclint-enable` runs to the end of the file.

use std::collections::HashSet;

use crate::core::parsers::ParsedModule;

/// Parsed loclint directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    DisableNextLine,
    Disable,
    Enable,
}

impl Directive {
    /// Parse directive from comment text.
    /// Returns None if not a loclint directive.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();

        // Longer prefix first
        if text.starts_with("loclint-disable-next-line") {
            return Some(Self::DisableNextLine);
        }
        if text.starts_with("loclint-disable") {
            return Some(Self::Disable);
        }
        if text.starts_with("loclint-enable") {
            return Some(Self::Enable);
        }
        None
    }
}

/// Inclusive line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineRange {
    start: usize,
    end: usize,
}

/// Lines on which violations are suppressed for one file.
#[derive(Debug, Clone, Default)]
pub struct Suppressions {
    disabled_lines: HashSet<usize>,
    disabled_ranges: Vec<LineRange>,
}

impl Suppressions {
    pub fn from_parsed(parsed: &ParsedModule) -> Self {
        let mut directives: Vec<(usize, usize, Directive)> = parsed
            .comments
            .iter()
            .filter_map(|cmt| {
                let directive = Directive::parse(&cmt.text)?;
                let start_line = parsed.lookup(cmt.span.lo).line;
                let end_line = parsed.lookup(cmt.span.hi).line;
                Some((start_line, end_line, directive))
            })
            .collect();
        directives.sort_by_key(|(line, _, _)| *line);

        let mut suppressions = Self::default();
        let mut open_range: Option<usize> = None;

        for (start_line, end_line, directive) in directives {
            match directive {
                Directive::DisableNextLine => {
                    suppressions.disabled_lines.insert(end_line + 1);
                }
                Directive::Disable => {
                    open_range.get_or_insert(start_line);
                }
                Directive::Enable => {
                    if let Some(start) = open_range.take() {
                        suppressions.disabled_ranges.push(LineRange {
                            start,
                            end: end_line,
                        });
                    }
                }
            }
        }

        if let Some(start) = open_range {
            suppressions.disabled_ranges.push(LineRange {
                start,
                end: usize::MAX,
            });
        }

        suppressions
    }

    pub fn is_suppressed(&self, line: usize) -> bool {
        self.disabled_lines.contains(&line)
            || self
                .disabled_ranges
                .iter()
                .any(|r| line >= r.start && line <= r.end)
    }
}
