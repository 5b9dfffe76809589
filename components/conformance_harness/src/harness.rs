//! Harness orchestration: one pass from discovery to summary.

use crate::classifier::{classify, Verdict};
use crate::corpus::{Category, FixtureLoader, LoadedCategory};
use crate::error::HarnessResult;
use crate::executor::Executor;
use crate::ignore::IgnoreRegistry;
use crate::report::RunSummary;
use std::path::{Path, PathBuf};

/// Drives a full conformance run: discovery, execution, classification, and
/// aggregation, one fixture at a time.
///
/// Scheduling is deliberately sequential. The engine-under-test is an
/// external, possibly non-reentrant binary, and one-at-a-time execution keeps
/// the mismatch list in a deterministic order that diffs cleanly across
/// engine versions.
pub struct Harness {
    executor: Executor,
    registry: IgnoreRegistry,
    progress: bool,
}

impl Harness {
    /// Create a harness for the given engine binary with an empty ignore
    /// registry and the default timeout.
    pub fn new(engine: impl Into<PathBuf>) -> Self {
        Self {
            executor: Executor::new(engine),
            registry: IgnoreRegistry::empty(),
            progress: false,
        }
    }

    /// Replace the ignore registry.
    pub fn with_ignores(mut self, registry: IgnoreRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Override the per-invocation timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.executor.set_timeout_ms(timeout_ms);
        self
    }

    /// Print a header line as each category starts.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Run the given categories under `corpus_root` and aggregate verdicts.
    ///
    /// A hanging or crashing fixture never aborts the pass; only a missing
    /// corpus directory or an unspawnable engine does, so a run that starts
    /// evaluating always yields a complete summary.
    pub fn run(&self, corpus_root: &Path, categories: &[Category]) -> HarnessResult<RunSummary> {
        let loader = FixtureLoader::new(&self.registry);
        let loaded = loader.load(corpus_root, categories)?;

        let mut summary = RunSummary::new();
        for category in &loaded {
            if self.progress {
                println!("> Running {} fixtures", category.category.label().to_lowercase());
            }
            let verdicts = self.run_category(category)?;
            summary.add_category(category, &verdicts);
        }
        Ok(summary)
    }

    fn run_category(&self, loaded: &LoadedCategory) -> HarnessResult<Vec<Verdict>> {
        let mut verdicts = Vec::with_capacity(loaded.fixtures.len());
        for fixture in &loaded.fixtures {
            let result = self.executor.run(fixture)?;
            verdicts.push(classify(fixture, &result));
        }
        Ok(verdicts)
    }
}
