//! Text edits and their application to source text.
//!
//! A violation carries one [`Fix`]: its edits merged into a single span.
//! Fixes are applied sorted by span; a fix whose span starts at or before
//! the end of an already-applied fix is left for a later pass.

use std::ops::Range;

use thiserror::Error;

/// Replace the bytes in `range` with `text`. Insertions use an empty range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range<usize>,
    pub text: String,
}

impl TextEdit {
    pub fn replace(range: Range<usize>, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }

    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::replace(at..at, text)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FixError {
    #[error("fix edits overlap at byte {0}")]
    Overlap(usize),
    #[error("fix edit range {start}..{end} is outside the source")]
    OutOfBounds { start: usize, end: usize },
}

/// An atomic fix: one contiguous replacement covering all of its edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub range: Range<usize>,
    pub text: String,
}

impl Fix {
    /// Merge `edits` into a single fix against `source`.
    ///
    /// The source text between edits is carried into the merged text
    /// unchanged. Overlapping edits are rejected.
    pub fn merge(source: &str, mut edits: Vec<TextEdit>) -> Result<Self, FixError> {
        edits.sort_by_key(|edit| (edit.range.start, edit.range.end));

        let Some(start) = edits.first().map(|edit| edit.range.start) else {
            return Ok(Self {
                range: 0..0,
                text: String::new(),
            });
        };

        let mut text = String::new();
        let mut last_pos = start;
        for (i, edit) in edits.iter().enumerate() {
            let Range { start: lo, end: hi } = edit.range;
            if lo > hi || hi > source.len() {
                return Err(FixError::OutOfBounds { start: lo, end: hi });
            }
            if i > 0 && lo < last_pos {
                return Err(FixError::Overlap(lo));
            }
            text.push_str(slice(source, last_pos, lo)?);
            text.push_str(&edit.text);
            last_pos = hi;
        }

        Ok(Self {
            range: start..last_pos,
            text,
        })
    }
}

fn slice(source: &str, start: usize, end: usize) -> Result<&str, FixError> {
    source
        .get(start..end)
        .ok_or(FixError::OutOfBounds { start, end })
}

/// Outcome of applying one batch of fixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedFixes {
    pub output: String,
    /// Number of fixes written into `output`.
    pub applied: usize,
    /// Number of fixes skipped because they overlapped or touched an
    /// earlier fix.
    pub deferred: usize,
}

/// Apply non-conflicting fixes to `source`.
pub fn apply_fixes(source: &str, fixes: &[Fix]) -> AppliedFixes {
    let mut sorted: Vec<&Fix> = fixes.iter().collect();
    sorted.sort_by_key(|fix| (fix.range.start, fix.range.end));

    let mut output = String::with_capacity(source.len());
    let mut last_pos: Option<usize> = None;
    let mut applied = 0;
    let mut deferred = 0;

    for fix in sorted {
        let in_bounds = fix.range.start <= fix.range.end
            && source.get(fix.range.clone()).is_some();
        if !in_bounds || last_pos.is_some_and(|pos| pos >= fix.range.start) {
            deferred += 1;
            continue;
        }
        output.push_str(&source[last_pos.unwrap_or(0)..fix.range.start]);
        output.push_str(&fix.text);
        last_pos = Some(fix.range.end);
        applied += 1;
    }
    output.push_str(&source[last_pos.unwrap_or(0)..]);

    AppliedFixes {
        output,
        applied,
        deferred,
    }
}
