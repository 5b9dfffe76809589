//! Engine Conformance Test Harness
//!
//! This crate validates an external, independently-built language-engine
//! executable against a corpus of categorized script fixtures and reports
//! which fixtures behave as expected. The engine is a black box: the harness
//! observes only its process exit status and captured diagnostic output.

pub mod classifier;
pub mod corpus;
pub mod error;
pub mod executor;
pub mod harness;
pub mod ignore;
pub mod report;

pub use classifier::{classify, Verdict};
pub use corpus::{Category, FixtureLoader, FixtureRef, LoadedCategory};
pub use error::{HarnessError, HarnessResult};
pub use executor::{ExecutionResult, Executor, DEFAULT_TIMEOUT_MS};
pub use harness::Harness;
pub use ignore::{IgnoreEntry, IgnoreRegistry};
pub use report::{CategorySummary, RunSummary};
