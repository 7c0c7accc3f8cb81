//! Process execution in the native OS shell.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, info, warn};

use super::builder::ShellDialect;
use super::result::{FailureKind, ShellResult};
use crate::secrets::{Credential, OutputMasker};

/// What the runner executes: a composed command line plus optional stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The full command string handed to the shell.
    pub command: String,

    /// Credential written to the process's stdin, then the pipe is closed.
    pub stdin: Option<Credential>,
}

impl Invocation {
    /// An invocation without stdin.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            stdin: None,
        }
    }

    /// Attach a credential to be piped to stdin.
    pub fn with_stdin(mut self, credential: Credential) -> Self {
        self.stdin = Some(credential);
        self
    }
}

/// Output line from command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    Stdout(String),
    Stderr(String),
}

/// Receives every line a process writes, as it is written.
///
/// Called from reader threads, so implementations must not block for long.
pub trait OutputSink: Send + Sync {
    /// Handle one line of output.
    fn line(&self, line: &OutputLine);
}

/// Forwards process output to `tracing`: stdout at info, stderr at warn.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl OutputSink for TracingSink {
    fn line(&self, line: &OutputLine) {
        match line {
            OutputLine::Stdout(text) => info!(target: "python2go::shell", "{}", text),
            OutputLine::Stderr(text) => warn!(target: "python2go::shell", "{}", text),
        }
    }
}

/// Runs invocations and normalizes their outcome.
///
/// The seam between the orchestrator and real processes; tests substitute a
/// recording implementation.
pub trait ProcessRunner: Send + Sync {
    /// Run to completion and report the outcome.
    fn run(&self, invocation: &Invocation) -> ShellResult;
}

/// Exit status POSIX shells use when the program cannot be found.
const COMMAND_NOT_FOUND: i32 = 127;

/// Captured output and exit status of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,
}

impl ProcessOutput {
    /// Turn a finished process into a [`ShellResult`].
    ///
    /// A non-zero exit with an empty stderr is reported as a success carrying
    /// stdout. Callers relying on the exit code alone must not depend on
    /// this runner.
    pub fn into_result(self) -> ShellResult {
        if self.exit_code == Some(0) {
            return ShellResult::success(&self.stdout, Some(self.stderr));
        }

        let stderr = self.stderr.trim();
        let stdout = self.stdout.trim();
        if stderr.is_empty() {
            return ShellResult::success(stdout, None);
        }
        if self.exit_code == Some(COMMAND_NOT_FOUND) {
            return ShellResult::failure(
                FailureKind::Spawn,
                format!("NotFound: {}", stderr),
                (!stdout.is_empty()).then(|| stdout.to_string()),
            );
        }
        if stdout.is_empty() {
            ShellResult::non_zero_exit(stderr, None)
        } else {
            ShellResult::non_zero_exit(
                format!("{}\n{}", stderr, stdout),
                Some(stdout.to_string()),
            )
        }
    }
}

/// A live child process with its output being pumped to a sink.
///
/// Owned by whoever spawned it; dropped after [`wait`](Self::wait) or
/// [`kill`](Self::kill).
pub struct ProcessHandle {
    child: Child,
    stdout: Option<JoinHandle<String>>,
    stderr: Option<JoinHandle<String>>,
}

impl ProcessHandle {
    /// OS process id.
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Forcefully terminate the process.
    pub fn kill(&mut self) -> io::Result<()> {
        self.child.kill()
    }

    /// Wait for exit and collect everything the process wrote.
    pub fn wait(mut self) -> io::Result<ProcessOutput> {
        let status = self.child.wait()?;
        let stdout = self
            .stdout
            .take()
            .map(|h| h.join().unwrap_or_default())
            .unwrap_or_default();
        let stderr = self
            .stderr
            .take()
            .map(|h| h.join().unwrap_or_default())
            .unwrap_or_default();

        Ok(ProcessOutput {
            exit_code: status.code(),
            stdout,
            stderr,
        })
    }
}

/// Runs commands through the platform shell.
///
/// `sh -c` for [`ShellDialect::Posix`], `powershell -NoProfile
/// -ExecutionPolicy Bypass -Command` for [`ShellDialect::PowerShell`].
#[derive(Clone)]
pub struct SystemRunner {
    dialect: ShellDialect,
    sink: Arc<dyn OutputSink>,
}

impl SystemRunner {
    /// Create a runner for `dialect` forwarding output to `sink`.
    pub fn new(dialect: ShellDialect, sink: Arc<dyn OutputSink>) -> Self {
        Self { dialect, sink }
    }

    /// Create a runner that logs output through `tracing`.
    pub fn with_tracing(dialect: ShellDialect) -> Self {
        Self::new(dialect, Arc::new(TracingSink))
    }

    /// The dialect commands are interpreted in.
    pub fn dialect(&self) -> ShellDialect {
        self.dialect
    }

    fn shell_command(&self, command: &str) -> Command {
        match self.dialect {
            ShellDialect::Posix => {
                let mut cmd = Command::new("/bin/sh");
                cmd.arg("-c").arg(command);
                cmd
            }
            ShellDialect::PowerShell => {
                let mut cmd = Command::new("powershell");
                cmd.args(["-NoProfile", "-ExecutionPolicy", "Bypass", "-Command"])
                    .arg(command);
                cmd
            }
        }
    }

    /// Start the invocation without waiting for it.
    pub fn spawn(&self, invocation: &Invocation) -> io::Result<ProcessHandle> {
        let mut cmd = self.shell_command(&invocation.command);
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
        cmd.stdin(if invocation.stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        });

        let mut child = cmd.spawn()?;
        debug!("PID [{}] started", child.id());

        let masker = invocation
            .stdin
            .as_ref()
            .map(OutputMasker::for_credential)
            .unwrap_or_default();

        if let (Some(credential), Some(mut stdin)) = (&invocation.stdin, child.stdin.take()) {
            // The process may exit without reading; a broken pipe is not an error here.
            let _ = writeln!(stdin, "{}", credential.expose());
        }

        let stdout = child.stdout.take().map(|pipe| {
            pump(pipe, masker.clone(), Arc::clone(&self.sink), OutputLine::Stdout)
        });
        let stderr = child
            .stderr
            .take()
            .map(|pipe| pump(pipe, masker, Arc::clone(&self.sink), OutputLine::Stderr));

        Ok(ProcessHandle {
            child,
            stdout,
            stderr,
        })
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> ShellResult {
        debug!(dialect = ?self.dialect, "Running command: {}", invocation.command);

        let handle = match self.spawn(invocation) {
            Ok(handle) => handle,
            Err(e) => return ShellResult::spawn_error(&e),
        };
        let pid = handle.id();

        match handle.wait() {
            Ok(output) => {
                debug!("PID [{}] finished with {:?}", pid, output.exit_code);
                output.into_result()
            }
            Err(e) => ShellResult::spawn_error(&e),
        }
    }
}

/// Read `pipe` line by line on its own thread, forwarding each line to `sink`
/// and returning the full text once the pipe closes.
///
/// Lines that are exactly the credential are masked; nothing else is rewritten.
fn pump<R>(
    pipe: R,
    masker: OutputMasker,
    sink: Arc<dyn OutputSink>,
    wrap: fn(String) -> OutputLine,
) -> JoinHandle<String>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut reader = BufReader::new(pipe);
        let mut captured = String::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) | Err(_) => break,
                Ok(_) => {
                    let raw = String::from_utf8_lossy(&buf);
                    let line = masker.mask(raw.trim_end_matches(['\r', '\n']));
                    captured.push_str(&line);
                    captured.push('\n');
                    sink.line(&wrap(line));
                }
            }
        }
        captured
    })
}
