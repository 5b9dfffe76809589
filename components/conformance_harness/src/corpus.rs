//! Fixture corpus model: categories, fixture references, and discovery.

use crate::error::{HarnessError, HarnessResult};
use crate::ignore::IgnoreRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expected-outcome class of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// The engine must process the fixture without error.
    MustAccept,
    /// Same contract as `MustAccept`, but the fixture exercises a named
    /// opt-in language mode.
    MustAcceptExplicit,
    /// The engine must refuse the fixture with a nonzero exit.
    MustReject,
    /// The fixture has a paired expected-output file; the engine must accept
    /// the input and produce output identical to the pair.
    Transform,
}

impl Category {
    /// The categories of the three-directory corpus layout.
    pub const CORPUS: [Category; 3] = [
        Category::MustAccept,
        Category::MustAcceptExplicit,
        Category::MustReject,
    ];

    /// Corpus subdirectory holding this category's fixtures.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::MustAccept => "pass",
            Category::MustAcceptExplicit => "pass-explicit",
            Category::MustReject => "fail",
            Category::Transform => "fixtures",
        }
    }

    /// Human-facing label used in summary lines.
    pub fn label(&self) -> &'static str {
        match self {
            Category::MustAccept => "Pass",
            Category::MustAcceptExplicit => "Pass explicit",
            Category::MustReject => "Fail",
            Category::Transform => "Transform",
        }
    }

    /// Whether the engine is expected to accept fixtures in this category.
    pub fn expects_acceptance(&self) -> bool {
        !matches!(self, Category::MustReject)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable reference to one fixture in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureRef {
    /// Stable identifier (file name); the unit referenced by ignore entries.
    pub id: String,
    /// Expected-outcome class.
    pub category: Category,
    /// Path handed to the engine.
    pub path: PathBuf,
    /// Paired expected-output path, `Transform` fixtures only.
    pub expected_output: Option<PathBuf>,
}

/// Fixtures discovered for one category, after ignore filtering.
#[derive(Debug, Clone)]
pub struct LoadedCategory {
    /// Category these fixtures belong to.
    pub category: Category,
    /// Fixtures to evaluate, ordered by file name.
    pub fixtures: Vec<FixtureRef>,
    /// Ids excluded by the ignore registry, in discovery order.
    pub ignored: Vec<String>,
}

impl LoadedCategory {
    /// Number of fixtures discovered before ignore filtering.
    pub fn total(&self) -> usize {
        self.fixtures.len() + self.ignored.len()
    }
}

/// Discovers fixtures under a corpus root, applying an ignore registry.
pub struct FixtureLoader<'a> {
    registry: &'a IgnoreRegistry,
}

impl<'a> FixtureLoader<'a> {
    /// Create a loader that filters through the given registry.
    pub fn new(registry: &'a IgnoreRegistry) -> Self {
        Self { registry }
    }

    /// Enumerate fixtures for each requested category.
    ///
    /// Fixtures are sorted by file name so two runs over the same corpus
    /// report mismatches in the same order. A missing category directory
    /// aborts the whole run; there is no partial corpus.
    pub fn load(
        &self,
        corpus_root: &Path,
        categories: &[Category],
    ) -> HarnessResult<Vec<LoadedCategory>> {
        categories
            .iter()
            .map(|&category| self.load_category(corpus_root, category))
            .collect()
    }

    fn load_category(
        &self,
        corpus_root: &Path,
        category: Category,
    ) -> HarnessResult<LoadedCategory> {
        let dir = corpus_root.join(category.dir_name());
        let mut fixtures = Vec::new();
        let mut ignored = Vec::new();

        let walker = WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|err| {
                let source = err.into_io_error().unwrap_or_else(|| {
                    std::io::Error::new(std::io::ErrorKind::Other, "unreadable directory entry")
                });
                HarnessError::CorpusUnavailable {
                    category,
                    path: dir.clone(),
                    source,
                }
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let id = entry.file_name().to_string_lossy().to_string();
            let expected_output = match category {
                Category::Transform => {
                    // Only the `.in.` half of a pair names a fixture; the
                    // `.out.` half is its expected output.
                    if !id.contains(".in.") {
                        continue;
                    }
                    Some(dir.join(id.replacen(".in.", ".out.", 1)))
                }
                _ => None,
            };

            if self.registry.is_ignored(category, &id) {
                ignored.push(id);
                continue;
            }

            fixtures.push(FixtureRef {
                id,
                category,
                path: entry.into_path(),
                expected_output,
            });
        }

        Ok(LoadedCategory {
            category,
            fixtures,
            ignored,
        })
    }
}
