//! External process invocation
//!
//! Every package-manager call goes through a [`CommandRunner`]. The default
//! [`ProcessRunner`] spawns the process with captured output; the TUI wraps it
//! in a spinner, and tests substitute a recording double.

use crate::error::ScaffoldError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// One external process invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory for the process
    pub cwd: PathBuf,
    /// Extra environment variables
    pub envs: Vec<(String, String)>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I, cwd: impl AsRef<Path>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.as_ref().to_path_buf(),
            envs: Vec::new(),
        }
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// The command line as shown to the user
    pub fn display_line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_line())
    }
}

/// Captured output of a successful command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs external commands
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run one command to completion, failing on spawn errors and non-zero exits
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ScaffoldError>;
}

impl<R: CommandRunner> CommandRunner for &R {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ScaffoldError> {
        (**self).run(spec).await
    }
}

/// Spawns real processes with stdin closed and output captured
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ScaffoldError> {
        let output = TokioCommand::new(&spec.program)
            .args(&spec.args)
            .current_dir(&spec.cwd)
            .envs(spec.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| ScaffoldError::CommandFailed {
                command: spec.display_line(),
                status: None,
                reason: Some(e.to_string()),
                stdout: String::new(),
                stderr: String::new(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if output.status.success() {
            Ok(CommandOutput { stdout, stderr })
        } else {
            Err(ScaffoldError::CommandFailed {
                command: spec.display_line(),
                status: output.status.code(),
                reason: None,
                stdout,
                stderr,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line() {
        let spec = CommandSpec::new("npm", ["install", "-D", "tailwindcss@3"], ".");
        assert_eq!(spec.display_line(), "npm install -D tailwindcss@3");
        assert_eq!(CommandSpec::new("npm", Vec::<String>::new(), ".").to_string(), "npm");
    }

    #[tokio::test]
    async fn test_missing_executable_is_command_failed() {
        let spec = CommandSpec::new("rewrap-no-such-binary-9f2c", ["--version"], ".");
        let err = ProcessRunner.run(&spec).await.unwrap_err();

        match err {
            ScaffoldError::CommandFailed {
                command,
                status,
                reason,
                ..
            } => {
                assert_eq!(command, "rewrap-no-such-binary-9f2c --version");
                assert_eq!(status, None);
                assert!(reason.is_some());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_captures_output_on_success() {
        let spec = CommandSpec::new("sh", ["-c", "echo out; echo err >&2"], ".");
        let output = ProcessRunner.run(&spec).await.unwrap();
        assert_eq!(output.stdout.trim(), "out");
        assert_eq!(output.stderr.trim(), "err");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_keeps_captured_output() {
        let spec = CommandSpec::new("sh", ["-c", "echo partial; echo broken >&2; exit 3"], ".");
        let err = ProcessRunner.run(&spec).await.unwrap_err();

        match err {
            ScaffoldError::CommandFailed {
                status,
                stdout,
                stderr,
                ..
            } => {
                assert_eq!(status, Some(3));
                assert_eq!(stdout.trim(), "partial");
                assert_eq!(stderr.trim(), "broken");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_env_and_cwd_are_applied() {
        let dir = tempfile::tempdir().unwrap();
        let spec = CommandSpec::new("sh", ["-c", "echo $REWRAP_MARKER; pwd"], dir.path())
            .env("REWRAP_MARKER", "marker-value");
        let output = ProcessRunner.run(&spec).await.unwrap();

        let mut lines = output.stdout.lines();
        assert_eq!(lines.next(), Some("marker-value"));
        let pwd = std::fs::canonicalize(lines.next().unwrap()).unwrap();
        assert_eq!(pwd, std::fs::canonicalize(dir.path()).unwrap());
    }
}
