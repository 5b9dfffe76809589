//! Run summary aggregation and rendering.
//!
//! The only place that formats human-facing text. Counts derive from the
//! loader's ignore record and the per-fixture verdicts; rendering never
//! alters them.

use crate::classifier::Verdict;
use crate::corpus::{Category, LoadedCategory};
use serde::{Deserialize, Serialize};

/// Per-category counts for one harness run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category these counts describe.
    pub category: Category,
    /// Fixtures discovered in the corpus, before ignore filtering.
    pub total: usize,
    /// Fixtures excluded by the ignore registry.
    pub ignored: usize,
    /// Fixtures executed and classified.
    pub evaluated: usize,
    /// Evaluated fixtures whose verdict did not match.
    pub mismatched: usize,
}

/// Aggregated outcome of one harness run: per-category counts plus every
/// mismatched verdict, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// One entry per category, in run order.
    pub categories: Vec<CategorySummary>,
    /// Mismatched verdicts across all categories, in evaluation order.
    pub mismatches: Vec<Verdict>,
}

impl RunSummary {
    /// Create an empty summary.
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            mismatches: Vec::new(),
        }
    }

    /// Fold one category's verdicts into the summary.
    pub fn add_category(&mut self, loaded: &LoadedCategory, verdicts: &[Verdict]) {
        let mismatched: Vec<&Verdict> = verdicts.iter().filter(|v| !v.matched).collect();
        self.categories.push(CategorySummary {
            category: loaded.category,
            total: loaded.total(),
            ignored: loaded.ignored.len(),
            evaluated: verdicts.len(),
            mismatched: mismatched.len(),
        });
        self.mismatches.extend(mismatched.into_iter().cloned());
    }

    /// True iff no category recorded a mismatch.
    pub fn is_success(&self) -> bool {
        self.categories.iter().all(|c| c.mismatched == 0)
    }

    /// Total fixtures evaluated across categories.
    pub fn total_evaluated(&self) -> usize {
        self.categories.iter().map(|c| c.evaluated).sum()
    }

    /// Total mismatches across categories.
    pub fn total_mismatched(&self) -> usize {
        self.categories.iter().map(|c| c.mismatched).sum()
    }

    /// Total fixtures suppressed by the ignore registry.
    pub fn total_ignored(&self) -> usize {
        self.categories.iter().map(|c| c.ignored).sum()
    }

    /// Render the category-by-category summary followed by one block per
    /// mismatch naming the fixture and its diagnostic text.
    pub fn render(&self) -> String {
        let mut out = String::from("--- Summary ---\n");
        for c in &self.categories {
            out.push_str(&format!(
                "[{}] {} mismatched / {} evaluated ({} ignored)\n",
                c.category.label(),
                c.mismatched,
                c.evaluated,
                c.ignored
            ));
        }

        if !self.mismatches.is_empty() {
            out.push_str("\nMismatches:\n");
            for verdict in &self.mismatches {
                out.push_str(&format!(
                    "- {} [{}]\n",
                    verdict.fixture.id,
                    verdict.fixture.category.label()
                ));
                if let Some(detail) = &verdict.detail {
                    for line in detail.lines() {
                        out.push_str(&format!("    {line}\n"));
                    }
                }
            }
        }

        out
    }

    /// Export the summary as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Import a summary from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}
