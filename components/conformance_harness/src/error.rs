//! Error types for the conformance harness.

use crate::corpus::Category;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a harness run.
///
/// Per-fixture failures (wrong exit status, engine crash, timeout) are never
/// errors; they surface as non-matching verdicts in the final summary and
/// the run continues.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A category directory is missing or unreadable. The corpus is
    /// all-or-nothing, so this aborts the run before anything executes.
    #[error("corpus unavailable: {category} directory {}: {source}", path.display())]
    CorpusUnavailable {
        /// Category whose directory could not be read.
        category: Category,
        /// The directory that was expected to exist.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The engine-under-test could not be spawned.
    #[error("engine unavailable: {}: {source}", path.display())]
    EngineUnavailable {
        /// Path of the engine executable.
        path: PathBuf,
        /// Underlying spawn failure.
        source: std::io::Error,
    },

    /// Two ignore entries name the same fixture within one category.
    #[error("duplicate ignore entry: {id} in category {category}")]
    DuplicateIgnore {
        /// Category both entries are scoped to.
        category: Category,
        /// Fixture id named twice.
        id: String,
    },

    /// An ignore file could not be read or parsed.
    #[error("invalid ignore file {}: {reason}", path.display())]
    IgnoreFileInvalid {
        /// Path of the offending file.
        path: PathBuf,
        /// What went wrong reading or parsing it.
        reason: String,
    },

    /// The run summary could not be serialized for export.
    #[error("summary export failed: {0}")]
    Export(#[from] serde_json::Error),

    /// Other I/O failure while driving a run.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;
