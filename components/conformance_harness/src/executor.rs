//! Engine-under-test invocation with a bounded timeout.

use crate::corpus::FixtureRef;
use crate::error::{HarnessError, HarnessResult};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Default per-invocation timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Observed outcome of one engine invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit code of the engine process; `None` when it was killed by a
    /// signal (including the timeout kill).
    pub exit_code: Option<i32>,
    /// Captured diagnostic output.
    pub stderr: String,
    /// True when the invocation exceeded the timeout and was terminated.
    pub timed_out: bool,
    /// Wall time of the invocation. Informational only, never scored.
    pub elapsed_ms: u64,
}

impl ExecutionResult {
    /// Whether the engine accepted the fixture (exit 0, no timeout).
    pub fn accepted(&self) -> bool {
        self.exit_code == Some(0) && !self.timed_out
    }
}

/// Invokes the engine-under-test once per fixture.
///
/// The engine's stdout is never evaluated; exit status is the oracle, with
/// stderr captured for mismatch reporting. The executor performs no
/// filesystem writes of its own.
pub struct Executor {
    engine: PathBuf,
    timeout: Duration,
}

impl Executor {
    /// Create an executor for the given engine binary.
    pub fn new(engine: impl Into<PathBuf>) -> Self {
        Self {
            engine: engine.into(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Set the per-invocation timeout.
    pub fn set_timeout_ms(&mut self, timeout_ms: u64) {
        self.timeout = Duration::from_millis(timeout_ms.max(1));
    }

    /// Current timeout setting in milliseconds.
    pub fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }

    /// Path of the engine binary.
    pub fn engine(&self) -> &Path {
        &self.engine
    }

    /// Run the engine on one fixture and observe its exit status.
    ///
    /// The child is always reaped before this returns: on timeout it is
    /// killed and waited, never leaked past the call boundary.
    pub fn run(&self, fixture: &FixtureRef) -> HarnessResult<ExecutionResult> {
        let mut command = Command::new(&self.engine);
        command.arg(&fixture.path);
        if let Some(expected) = &fixture.expected_output {
            command.arg(expected);
        }
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        let started = Instant::now();
        let mut child = command
            .spawn()
            .map_err(|source| HarnessError::EngineUnavailable {
                path: self.engine.clone(),
                source,
            })?;

        // Drain stderr on a separate thread so a chatty engine cannot fill
        // the pipe buffer and stall against our wait loop.
        let stderr_pipe = child.stderr.take();
        let reader = thread::spawn(move || {
            let mut buf = String::new();
            if let Some(mut pipe) = stderr_pipe {
                let _ = pipe.read_to_string(&mut buf);
            }
            buf
        });

        let (exit_code, timed_out) = self.wait(&mut child)?;
        let stderr = reader.join().unwrap_or_default();

        Ok(ExecutionResult {
            exit_code,
            stderr,
            timed_out,
            elapsed_ms: started.elapsed().as_millis() as u64,
        })
    }

    fn wait(&self, child: &mut Child) -> HarnessResult<(Option<i32>, bool)> {
        let started = Instant::now();
        loop {
            match child.try_wait()? {
                Some(status) => return Ok((status.code(), false)),
                None => {
                    if started.elapsed() >= self.timeout {
                        child.kill()?;
                        let status = child.wait()?;
                        return Ok((status.code(), true));
                    }
                    thread::sleep(POLL_INTERVAL);
                }
            }
        }
    }
}
