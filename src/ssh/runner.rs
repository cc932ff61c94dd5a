use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::RunError;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A fully described external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Kill the child once this elapses. `None` waits forever.
    pub timeout: Option<Duration>,
    /// Capture stdout/stderr; otherwise the child writes to our terminal.
    pub capture: bool,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new(), timeout: None, capture: true }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn passthrough(mut self) -> Self {
        self.capture = false;
        self
    }

    /// Space-joined command line, for logs.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// What a finished child left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external commands. Swapped for a scripted fake in tests.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput, RunError>;
}

/// Spawns real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, inv: &Invocation) -> Result<CommandOutput, RunError> {
        let mut cmd = Command::new(&inv.program);
        cmd.args(&inv.args);
        if inv.capture {
            cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
        }

        let mut child = cmd.spawn().map_err(|source| RunError::Spawn {
            program: inv.program.clone(),
            source,
        })?;
        let deadline = inv.timeout.map(|limit| Instant::now() + limit);
        let timed_out = || RunError::Timeout {
            program: inv.program.clone(),
            timeout: inv.timeout.unwrap_or_default(),
        };

        // Drain both pipes while we wait.
        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        let status = match deadline {
            None => child.wait().map(Some),
            Some(deadline) => wait_until(&mut child, deadline),
        };
        let status = match status {
            Ok(Some(st)) => st,
            Ok(None) => return Err(timed_out()),
            Err(source) => return Err(RunError::Wait { program: inv.program.clone(), source }),
        };

        // A background grandchild may still hold a pipe open; the deadline
        // covers reading too.
        let stdout = collect(stdout, deadline).ok_or_else(timed_out)?;
        let stderr = collect(stderr, deadline).ok_or_else(timed_out)?;

        Ok(CommandOutput { code: status.code(), stdout, stderr })
    }
}

/// Poll until the child exits or `deadline` passes. On expiry, or if polling
/// itself fails, the child is killed and reaped.
fn wait_until(child: &mut Child, deadline: Instant) -> std::io::Result<Option<ExitStatus>> {
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(Some(status)),
            Ok(None) => {}
            Err(e) => {
                kill(child);
                return Err(e);
            }
        }
        if Instant::now() >= deadline {
            kill(child);
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn kill(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
    });
    rx
}

/// Output of one drained pipe; `None` if it is still open at `deadline`.
fn collect(pipe: Option<Receiver<String>>, deadline: Option<Instant>) -> Option<String> {
    let Some(rx) = pipe else { return Some(String::new()) };
    match deadline {
        None => Some(rx.recv().unwrap_or_default()),
        Some(deadline) => {
            match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
                Ok(out) => Some(out),
                Err(RecvTimeoutError::Disconnected) => Some(String::new()),
                Err(RecvTimeoutError::Timeout) => None,
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_captures_stdout_and_exit_code() {
        let inv = Invocation::new("sh").arg("-c").arg("echo hello; echo oops >&2; exit 3");
        let out = ProcessRunner.run(&inv).unwrap();
        assert_eq!(out.code, Some(3));
        assert!(!out.success());
        assert_eq!(out.stdout.trim(), "hello");
        assert_eq!(out.stderr.trim(), "oops");
    }

    #[test]
    fn test_timeout_kills_child() {
        let inv = Invocation::new("sh")
            .arg("-c")
            .arg("exec sleep 5")
            .timeout(Duration::from_millis(200));
        let started = Instant::now();
        let err = ProcessRunner.run(&inv).unwrap_err();
        assert!(matches!(err, RunError::Timeout { .. }));
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn test_timeout_covers_output_held_by_background_job() {
        let inv = Invocation::new("sh")
            .arg("-c")
            .arg("sleep 4 & echo hi")
            .timeout(Duration::from_millis(300));
        let started = Instant::now();
        let res = ProcessRunner.run(&inv);
        assert!(started.elapsed() < Duration::from_secs(2), "took {:?}", started.elapsed());
        assert!(matches!(res, Err(RunError::Timeout { .. })));
    }

    #[test]
    fn test_no_timeout_waits_for_output() {
        let inv = Invocation::new("sh").arg("-c").arg("sleep 0.2; echo done");
        let out = ProcessRunner.run(&inv).unwrap();
        assert!(out.success());
        assert_eq!(out.stdout.trim(), "done");
    }

    #[test]
    fn test_missing_binary_is_spawn_error() {
        let inv = Invocation::new("definitely-not-a-real-binary-ssh-push");
        assert!(matches!(ProcessRunner.run(&inv), Err(RunError::Spawn { .. })));
    }

    #[test]
    fn test_command_line_joins_args() {
        let inv = Invocation::new("scp").arg("-P").arg("22").arg("a.txt");
        assert_eq!(inv.command_line(), "scp -P 22 a.txt");
    }
}
