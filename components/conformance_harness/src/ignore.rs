//! Named ignore registry for known-bad fixtures.
//!
//! Fixtures relying on engine gaps (legacy lexical forms and the like) must
//! not inflate failure counts, but every exclusion has to stay auditable:
//! each entry carries a reason and is scoped to exactly one category.

use crate::corpus::Category;
use crate::error::{HarnessError, HarnessResult};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One declared suppression: a fixture id excluded from evaluation within a
/// single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreEntry {
    /// Fixture id (file name) to suppress.
    pub id: String,
    /// Category the suppression is scoped to. The same id appearing in
    /// another category is still evaluated.
    pub category: Category,
    /// Why the fixture is excluded.
    pub reason: String,
}

impl IgnoreEntry {
    /// Create an entry.
    pub fn new(id: impl Into<String>, category: Category, reason: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category,
            reason: reason.into(),
        }
    }
}

/// Set of fixtures excluded from evaluation, keyed by `(category, id)`.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRegistry {
    entries: Vec<IgnoreEntry>,
    index: HashMap<Category, HashSet<String>>,
}

impl IgnoreRegistry {
    /// Registry that suppresses nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a registry, rejecting duplicate `(category, id)` pairs.
    pub fn from_entries(entries: Vec<IgnoreEntry>) -> HarnessResult<Self> {
        let mut index: HashMap<Category, HashSet<String>> = HashMap::new();
        for entry in &entries {
            let inserted = index
                .entry(entry.category)
                .or_default()
                .insert(entry.id.clone());
            if !inserted {
                return Err(HarnessError::DuplicateIgnore {
                    category: entry.category,
                    id: entry.id.clone(),
                });
            }
        }
        Ok(Self { entries, index })
    }

    /// Membership test applied by the loader before execution.
    pub fn is_ignored(&self, category: Category, id: &str) -> bool {
        self.index
            .get(&category)
            .map_or(false, |ids| ids.contains(id))
    }

    /// All entries, in declaration order.
    pub fn entries(&self) -> &[IgnoreEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry suppresses anything at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
