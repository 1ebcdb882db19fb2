//! Spinner-backed command runner and progress log

use crate::error::ScaffoldError;
use crate::install::{InstallObserver, Stage};
use crate::runtime::{CommandOutput, CommandRunner, CommandSpec};
use std::path::Path;

/// Shows a cliclack spinner while the wrapped runner works
#[derive(Debug, Clone, Default)]
pub struct SpinnerRunner<R> {
    inner: R,
}

impl<R: CommandRunner> SpinnerRunner<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: CommandRunner> CommandRunner for SpinnerRunner<R> {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ScaffoldError> {
        let spinner = cliclack::spinner();
        spinner.start(spec.display_line());

        let result = self.inner.run(spec).await;
        match &result {
            Ok(_) => spinner.stop(spec.display_line()),
            Err(_) => spinner.error(spec.display_line()),
        }
        result
    }
}

/// Logs stage headings and a file count through cliclack
#[derive(Debug, Default)]
pub struct TuiObserver {
    current: Option<Stage>,
    written: usize,
}

impl InstallObserver for TuiObserver {
    fn command_started(&mut self, stage: Stage, _command: &CommandSpec) {
        if self.current != Some(stage) {
            self.current = Some(stage);
            let _ = cliclack::log::step(stage.activity());
        }
    }

    fn stage_reached(&mut self, stage: Stage) {
        match stage {
            Stage::FilesComposed => {
                let _ = cliclack::log::step(stage.activity());
            }
            Stage::FilesWritten => {
                let _ = cliclack::log::success(format!("Wrote {} files", self.written));
            }
            _ => {}
        }
    }

    fn file_written(&mut self, path: &Path) {
        self.written += 1;
        let _ = cliclack::log::remark(path.display());
    }
}
