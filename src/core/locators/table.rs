use std::collections::HashMap;

/// One `selector value -> constant name` mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorEntry {
    pub value: String,
    pub name: String,
}

/// Table of selector values exported by the locators module, keyed by value.
///
/// Iteration follows first-insertion order of each value. Re-inserting an
/// existing value replaces its name but keeps its position, so the
/// later-declared constant wins while iteration order stays stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocatorTable {
    entries: Vec<LocatorEntry>,
    index: HashMap<String, usize>,
}

impl LocatorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value -> name`. Empty values are ignored.
    pub fn insert(&mut self, value: impl Into<String>, name: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        let name = name.into();

        match self.index.get(&value) {
            Some(&i) => self.entries[i].name = name,
            None => {
                self.index.insert(value.clone(), self.entries.len());
                self.entries.push(LocatorEntry { value, name });
            }
        }
    }

    /// Constant name exporting exactly `value`.
    pub fn get(&self, value: &str) -> Option<&str> {
        self.index
            .get(value)
            .map(|&i| self.entries[i].name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocatorEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Into<String>, N: Into<String>> FromIterator<(V, N)> for LocatorTable {
    fn from_iter<T: IntoIterator<Item = (V, N)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (value, name) in iter {
            table.insert(value, name);
        }
        table
    }
}
