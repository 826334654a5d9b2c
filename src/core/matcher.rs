//! Matching literal text against the locator table.

use crate::core::locators::{LocatorEntry, LocatorTable};

/// A table entry matched by a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorMatch {
    /// Exported constant name.
    pub name: String,
    /// The table value that matched (the whole literal for exact matches).
    pub value: String,
}

impl LocatorMatch {
    pub fn is_exact(&self, text: &str) -> bool {
        self.value == text
    }

    pub fn is_prefix(&self, text: &str) -> bool {
        text.starts_with(&self.value)
    }
}

/// Find the best table entry for `text`.
///
/// An exact match wins. Otherwise the longest table value contained in `text`
/// is chosen; among equally long values the one inserted first wins.
pub fn find_matching_locator(text: &str, table: &LocatorTable) -> Option<LocatorMatch> {
    if let Some(name) = table.get(text) {
        return Some(LocatorMatch {
            name: name.to_string(),
            value: text.to_string(),
        });
    }

    table
        .iter()
        .filter(|entry| text.contains(entry.value.as_str()))
        .fold(None::<&LocatorEntry>, |best, entry| match best {
            Some(best) if entry.value.len() <= best.value.len() => Some(best),
            _ => Some(entry),
        })
        .map(|entry| LocatorMatch {
            name: entry.name.clone(),
            value: entry.value.clone(),
        })
}
