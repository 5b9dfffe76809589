//! Pass/fail policy: the decision table mapping observed engine behavior to
//! a per-fixture verdict.

use crate::corpus::FixtureRef;
use crate::executor::ExecutionResult;
use serde::{Deserialize, Serialize};

/// Per-fixture judgment of whether observed behavior matched expectations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// The fixture that was evaluated.
    pub fixture: FixtureRef,
    /// True when the engine behaved as the category requires.
    pub matched: bool,
    /// Diagnostic text; always present when `matched` is false, absent
    /// otherwise.
    pub detail: Option<String>,
}

/// Decide whether an execution result matches the fixture's category.
///
/// Pure: driven only by the category tag and the observed result, never by
/// fixture content. `Transform` output comparison is delegated to the
/// engine's dual-file invocation, so acceptance alone decides it here.
///
/// | Category           | matched when                        |
/// |--------------------|-------------------------------------|
/// | MustAccept         | exit code 0 and no timeout          |
/// | MustAcceptExplicit | exit code 0 and no timeout          |
/// | MustReject         | nonzero exit code or timeout        |
/// | Transform          | exit code 0 and no timeout          |
pub fn classify(fixture: &FixtureRef, result: &ExecutionResult) -> Verdict {
    let matched = if fixture.category.expects_acceptance() {
        result.accepted()
    } else {
        !result.accepted()
    };

    let detail = if matched {
        None
    } else {
        Some(mismatch_detail(fixture, result))
    };

    Verdict {
        fixture: fixture.clone(),
        matched,
        detail,
    }
}

fn mismatch_detail(fixture: &FixtureRef, result: &ExecutionResult) -> String {
    if result.timed_out {
        return format!("engine timed out after {} ms", result.elapsed_ms);
    }

    let stderr = result.stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }

    if fixture.category.expects_acceptance() {
        let status = match result.exit_code {
            Some(code) => format!("exit code {code}"),
            None => "killed by signal".to_string(),
        };
        format!("engine rejected fixture ({status}) but acceptance was expected")
    } else {
        "engine accepted fixture but rejection was expected".to_string()
    }
}
