use std::collections::HashMap;

use anyhow::{Result, ensure};

/// Stable mapping between names and consecutive indices (`0..n`), in insertion order.
///
/// Every matrix axis of the library is backed by one of these, so that names, matrix rows and
/// layout positions can never go out of alignment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameIndex {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl NameIndex {
    /// Builds the index, failing on the first duplicate name.
    pub fn try_new<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Result<Self> {
        let mut name_index = NameIndex::default();
        for name in names {
            let name = name.as_ref();
            ensure!(
                !name_index.index.contains_key(name),
                "duplicate name: {name:?}"
            );
            name_index.index.insert(name.to_string(), name_index.names.len());
            name_index.names.push(name.to_string());
        }
        Ok(name_index)
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Name at index `idx`, panics if out of bounds
    pub fn name(&self, idx: usize) -> &str {
        &self.names[idx]
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|n| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
