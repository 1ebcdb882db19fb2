//! Errors raised by the command runner and the file writer

use std::path::PathBuf;
use thiserror::Error;

/// The two ways a generation step can fail
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// An external process exited non-zero or could not be started
    #[error("command `{command}` {}", describe_status(.status, .reason))]
    CommandFailed {
        command: String,
        /// Exit code, or `None` when the process never ran or was killed by a signal
        status: Option<i32>,
        /// Why the process could not be spawned, if it wasn't
        reason: Option<String>,
        stdout: String,
        stderr: String,
    },

    /// A generated file could not be written
    #[error("failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// Captured output worth showing to the user, if any
    pub fn diagnostics(&self) -> Vec<(&'static str, &str)> {
        match self {
            ScaffoldError::CommandFailed { stdout, stderr, .. } => {
                let mut out = Vec::new();
                if !stdout.trim().is_empty() {
                    out.push(("stdout", stdout.trim_end()));
                }
                if !stderr.trim().is_empty() {
                    out.push(("stderr", stderr.trim_end()));
                }
                out
            }
            ScaffoldError::WriteFailed { .. } => Vec::new(),
        }
    }
}

fn describe_status(status: &Option<i32>, reason: &Option<String>) -> String {
    match (status, reason) {
        (_, Some(reason)) => format!("could not be started: {}", reason),
        (Some(code), None) => format!("exited with status {}", code),
        (None, None) => "was terminated by a signal".to_string(),
    }
}
