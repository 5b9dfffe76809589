//! Unit tests for the verdict decision table

use conformance_harness::{classify, Category, ExecutionResult, FixtureRef};
use std::path::PathBuf;

fn fixture(id: &str, category: Category) -> FixtureRef {
    FixtureRef {
        id: id.to_string(),
        category,
        path: PathBuf::from(format!("/corpus/{id}")),
        expected_output: None,
    }
}

fn result(exit_code: Option<i32>, stderr: &str, timed_out: bool) -> ExecutionResult {
    ExecutionResult {
        exit_code,
        stderr: stderr.to_string(),
        timed_out,
        elapsed_ms: 7,
    }
}

#[test]
fn test_must_accept_matches_on_zero_exit() {
    let verdict = classify(
        &fixture("a.js", Category::MustAccept),
        &result(Some(0), "", false),
    );
    assert!(verdict.matched);
    assert!(verdict.detail.is_none());
}

#[test]
fn test_must_accept_mismatch_on_nonzero_exit() {
    let verdict = classify(
        &fixture("a.js", Category::MustAccept),
        &result(Some(1), "unexpected token", false),
    );
    assert!(!verdict.matched);
    assert_eq!(verdict.detail.as_deref(), Some("unexpected token"));
}

#[test]
fn test_must_accept_mismatch_synthesizes_detail_when_stderr_empty() {
    let verdict = classify(
        &fixture("a.js", Category::MustAccept),
        &result(Some(2), "", false),
    );
    assert!(!verdict.matched);
    let detail = verdict.detail.unwrap();
    assert!(detail.contains("acceptance was expected"));
    assert!(detail.contains("exit code 2"));
}

#[test]
fn test_must_accept_mismatch_on_timeout() {
    let verdict = classify(
        &fixture("a.js", Category::MustAccept),
        &result(None, "", true),
    );
    assert!(!verdict.matched);
    assert!(verdict.detail.unwrap().contains("timed out after 7 ms"));
}

#[test]
fn test_must_accept_explicit_follows_accept_policy() {
    let accepted = classify(
        &fixture("b.js", Category::MustAcceptExplicit),
        &result(Some(0), "", false),
    );
    assert!(accepted.matched);

    let rejected = classify(
        &fixture("b.js", Category::MustAcceptExplicit),
        &result(Some(1), "bad explicit mode", false),
    );
    assert!(!rejected.matched);
    assert_eq!(rejected.detail.as_deref(), Some("bad explicit mode"));
}

#[test]
fn test_must_reject_matches_on_nonzero_exit() {
    let verdict = classify(
        &fixture("c.js", Category::MustReject),
        &result(Some(1), "syntax error", false),
    );
    assert!(verdict.matched);
    assert!(verdict.detail.is_none());
}

#[test]
fn test_must_reject_matches_on_timeout() {
    let verdict = classify(
        &fixture("c.js", Category::MustReject),
        &result(None, "", true),
    );
    assert!(verdict.matched);
}

#[test]
fn test_must_reject_mismatch_on_zero_exit() {
    let verdict = classify(
        &fixture("c.js", Category::MustReject),
        &result(Some(0), "", false),
    );
    assert!(!verdict.matched);
    assert!(verdict
        .detail
        .unwrap()
        .contains("rejection was expected"));
}

#[test]
fn test_signal_kill_counts_as_rejection() {
    // Exit code None without timeout means the engine was killed by a signal.
    let rejected = classify(
        &fixture("d.js", Category::MustReject),
        &result(None, "", false),
    );
    assert!(rejected.matched);

    let accepted = classify(
        &fixture("d.js", Category::MustAccept),
        &result(None, "", false),
    );
    assert!(!accepted.matched);
    assert!(accepted.detail.unwrap().contains("killed by signal"));
}

#[test]
fn test_transform_matches_on_zero_exit() {
    let verdict = classify(
        &fixture("e.in.js", Category::Transform),
        &result(Some(0), "", false),
    );
    assert!(verdict.matched);
}

#[test]
fn test_transform_mismatch_uses_stderr() {
    let verdict = classify(
        &fixture("e.in.js", Category::Transform),
        &result(Some(1), "output mismatch at line 3", false),
    );
    assert!(!verdict.matched);
    assert_eq!(verdict.detail.as_deref(), Some("output mismatch at line 3"));
}

#[test]
fn test_verdict_carries_its_fixture() {
    let verdict = classify(
        &fixture("f.js", Category::MustAccept),
        &result(Some(1), "", false),
    );
    assert_eq!(verdict.fixture.id, "f.js");
    assert_eq!(verdict.fixture.category, Category::MustAccept);
}

#[test]
fn test_stderr_is_trimmed_in_detail() {
    let verdict = classify(
        &fixture("g.js", Category::MustAccept),
        &result(Some(1), "  parse error  \n", false),
    );
    assert_eq!(verdict.detail.as_deref(), Some("parse error"));
}
