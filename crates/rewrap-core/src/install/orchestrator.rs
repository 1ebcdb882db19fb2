//! Runs an [`InstallPlan`]: commands first, then the composed files

use super::plan::{InstallPlan, Stage, Tools};
use super::writer::FileWriter;
use crate::config::ProjectConfiguration;
use crate::error::ScaffoldError;
use crate::runtime::{CommandRunner, CommandSpec};
use std::path::{Path, PathBuf};

/// How a run ended when nothing went wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed { project_dir: PathBuf },
    /// The user chose not to proceed; nothing was run or written
    Declined,
    /// Only the plan was shown (`--dry-run`)
    Planned,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        0
    }
}

/// Process exit code for the result of a run
pub fn exit_code(result: &Result<Outcome, ScaffoldError>) -> i32 {
    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(_) => 1,
    }
}

/// Progress callbacks; every method defaults to doing nothing
pub trait InstallObserver {
    /// A command is about to run
    fn command_started(&mut self, _stage: Stage, _command: &CommandSpec) {}

    /// A stage has been reached
    fn stage_reached(&mut self, _stage: Stage) {}

    /// A generated file was written
    fn file_written(&mut self, _path: &Path) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl InstallObserver for NoopObserver {}

/// Drives one installation with the given runner and writer
pub struct Installer<R, W> {
    runner: R,
    writer: W,
    tools: Tools,
    overwrite: bool,
}

impl<R: CommandRunner, W: FileWriter> Installer<R, W> {
    pub fn new(runner: R, writer: W) -> Self {
        Self {
            runner,
            writer,
            tools: Tools::default(),
            overwrite: false,
        }
    }

    pub fn with_tools(mut self, tools: Tools) -> Self {
        self.tools = tools;
        self
    }

    /// Allow the scaffold to replace a non-empty project directory
    pub fn overwrite_existing(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// The plan [`Installer::run`] would execute
    pub fn plan(&self, config: &ProjectConfiguration, base_dir: &Path) -> InstallPlan {
        let plan = InstallPlan::new(config, base_dir, &self.tools);
        if self.overwrite {
            plan.overwriting()
        } else {
            plan
        }
    }

    pub async fn run(
        &self,
        config: &ProjectConfiguration,
        base_dir: &Path,
    ) -> Result<Outcome, ScaffoldError> {
        self.run_with(config, base_dir, &mut NoopObserver).await
    }

    /// Run every step in order, stopping at the first error
    ///
    /// Nothing already done is rolled back on failure.
    pub async fn run_with<O: InstallObserver>(
        &self,
        config: &ProjectConfiguration,
        base_dir: &Path,
        observer: &mut O,
    ) -> Result<Outcome, ScaffoldError> {
        if !config.proceed {
            return Ok(Outcome::Declined);
        }

        observer.stage_reached(Stage::Init);
        let plan = self.plan(config, base_dir);

        match self.execute(&plan, observer).await {
            Ok(()) => {
                observer.stage_reached(Stage::Done);
                Ok(Outcome::Completed {
                    project_dir: plan.project_dir,
                })
            }
            Err(e) => {
                observer.stage_reached(Stage::Failed);
                Err(e)
            }
        }
    }

    async fn execute<O: InstallObserver>(
        &self,
        plan: &InstallPlan,
        observer: &mut O,
    ) -> Result<(), ScaffoldError> {
        for step in &plan.steps {
            for command in &step.commands {
                observer.command_started(step.stage, command);
                self.runner.run(command).await?;
            }
            observer.stage_reached(step.stage);
        }

        observer.stage_reached(Stage::FilesComposed);

        for file in &plan.files {
            let path = plan.project_dir.join(&file.path);
            self.writer.write(&path, &file.content).await?;
            observer.file_written(&file.path);
        }
        observer.stage_reached(Stage::FilesWritten);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Feature, Framework};
    use crate::install::writer::DiskWriter;
    use crate::runtime::{CommandOutput, ProcessRunner};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingRunner {
        calls: RefCell<Vec<CommandSpec>>,
        fail_on: Option<&'static str>,
    }

    impl RecordingRunner {
        fn lines(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|c| c.display_line()).collect()
        }
    }

    impl CommandRunner for RecordingRunner {
        async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ScaffoldError> {
            self.calls.borrow_mut().push(spec.clone());
            match self.fail_on {
                Some(needle) if spec.display_line().contains(needle) => {
                    Err(ScaffoldError::CommandFailed {
                        command: spec.display_line(),
                        status: Some(1),
                        reason: None,
                        stdout: String::new(),
                        stderr: "npm ERR! code E404".to_string(),
                    })
                }
                _ => Ok(CommandOutput::default()),
            }
        }
    }

    #[derive(Default)]
    struct RecordingWriter {
        files: RefCell<Vec<(PathBuf, String)>>,
    }

    impl FileWriter for RecordingWriter {
        async fn write(&self, path: &Path, content: &str) -> Result<(), ScaffoldError> {
            self.files
                .borrow_mut()
                .push((path.to_path_buf(), content.to_string()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct StageLog {
        stages: Vec<Stage>,
        written: Vec<PathBuf>,
    }

    impl InstallObserver for StageLog {
        fn stage_reached(&mut self, stage: Stage) {
            self.stages.push(stage);
        }

        fn file_written(&mut self, path: &Path) {
            self.written.push(path.to_path_buf());
        }
    }

    fn dark_mode_form() -> ProjectConfiguration {
        let mut config = ProjectConfiguration {
            project_name: "demo".to_string(),
            framework: Framework::React,
            features: [Feature::DarkMode, Feature::Form].into_iter().collect(),
            ..Default::default()
        };
        config.extra_packages.insert("react-hook-form".to_string());
        config
    }

    #[tokio::test]
    async fn test_dark_mode_form_installs_form_library_once() {
        let runner = RecordingRunner::default();
        let writer = RecordingWriter::default();
        let installer = Installer::new(&runner, &writer);

        let outcome = installer
            .run(&dark_mode_form(), Path::new("/work"))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            Outcome::Completed {
                project_dir: PathBuf::from("/work/demo")
            }
        );
        let lines = runner.lines();
        assert_eq!(lines.iter().filter(|l| l.contains("react-hook-form")).count(), 1);
        assert!(lines.contains(&"npm install lucide-react".to_string()));

        let files = writer.files.borrow();
        let paths: Vec<&PathBuf> = files.iter().map(|(p, _)| p).collect();
        assert!(paths.contains(&&PathBuf::from("/work/demo/src/components/ThemeProvider.tsx")));
        assert!(paths.contains(&&PathBuf::from("/work/demo/src/components/SampleForm.tsx")));
        assert_eq!(paths.last().unwrap(), &&PathBuf::from("/work/demo/src/App.tsx"));
        assert!(files.last().unwrap().1.contains("<ThemeProvider>"));
    }

    #[tokio::test]
    async fn test_stages_are_reported_in_order() {
        let runner = RecordingRunner::default();
        let writer = RecordingWriter::default();
        let mut log = StageLog::default();

        Installer::new(&runner, &writer)
            .run_with(&dark_mode_form(), Path::new("/work"), &mut log)
            .await
            .unwrap();

        assert_eq!(
            log.stages,
            vec![
                Stage::Init,
                Stage::ScaffoldCreated,
                Stage::DependenciesInstalled,
                Stage::StylingInstalled,
                Stage::IconSetInstalled,
                Stage::ExtraPackagesInstalled,
                Stage::FilesComposed,
                Stage::FilesWritten,
                Stage::Done,
            ]
        );
        assert_eq!(log.written.last().unwrap(), &PathBuf::from("src/App.tsx"));
    }

    #[tokio::test]
    async fn test_declined_does_nothing() {
        let runner = RecordingRunner::default();
        let writer = RecordingWriter::default();
        let mut log = StageLog::default();

        let result = Installer::new(&runner, &writer)
            .run_with(&ProjectConfiguration::declined(), Path::new("/work"), &mut log)
            .await;

        assert_eq!(exit_code(&result), 0);
        assert_eq!(result.unwrap(), Outcome::Declined);
        assert!(runner.calls.borrow().is_empty());
        assert!(writer.files.borrow().is_empty());
        assert!(log.stages.is_empty());
    }

    #[tokio::test]
    async fn test_missing_npm_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RecordingWriter::default();
        let installer = Installer::new(ProcessRunner, &writer)
            .with_tools(Tools::with_npm("rewrap-no-such-npm-4e1d"));

        let result = installer.run(&dark_mode_form(), dir.path()).await;

        assert_eq!(exit_code(&result), 1);
        match result {
            Err(ScaffoldError::CommandFailed { command, status, .. }) => {
                assert!(command.starts_with("rewrap-no-such-npm-4e1d create vite@latest demo"));
                assert_eq!(status, None);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(writer.files.borrow().is_empty());
        assert!(!dir.path().join("demo").exists());
    }

    #[tokio::test]
    async fn test_failure_stops_remaining_steps() {
        let runner = RecordingRunner {
            fail_on: Some("tailwindcss@3 init"),
            ..Default::default()
        };
        let writer = RecordingWriter::default();
        let mut log = StageLog::default();

        let result = Installer::new(&runner, &writer)
            .run_with(&dark_mode_form(), Path::new("/work"), &mut log)
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.diagnostics(), vec![("stderr", "npm ERR! code E404")]);
        assert_eq!(runner.lines().last().unwrap(), "npx tailwindcss@3 init -p");
        assert_eq!(log.stages.last(), Some(&Stage::Failed));
        assert!(!log.stages.contains(&Stage::StylingInstalled));
        assert!(writer.files.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_existing_project_writes_into_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let runner = RecordingRunner::default();
        let config = ProjectConfiguration {
            is_new_project: false,
            framework: Framework::Vue,
            features: [Feature::Sidebar].into_iter().collect(),
            ..Default::default()
        };

        Installer::new(&runner, DiskWriter)
            .run(&config, dir.path())
            .await
            .unwrap();

        assert!(!runner.lines().iter().any(|l| l.contains("create vite")));
        assert!(runner
            .calls
            .borrow()
            .iter()
            .all(|c| c.cwd == dir.path()));
        assert!(dir.path().join("src/components/Sidebar.vue").is_file());
        assert!(dir.path().join("src/App.vue").is_file());
        assert!(dir.path().join("tailwind.config.js").is_file());
    }

    #[tokio::test]
    async fn test_confirmed_overwrite_reaches_scaffold_command() {
        let runner = RecordingRunner::default();
        let writer = RecordingWriter::default();

        Installer::new(&runner, &writer)
            .overwrite_existing(true)
            .run(&dark_mode_form(), Path::new("/work"))
            .await
            .unwrap();

        let lines = runner.lines();
        assert_eq!(
            lines[0],
            "npm create vite@latest demo -- --template react-ts --overwrite"
        );
        assert!(lines[1..].iter().all(|l| !l.contains("--overwrite")));
    }
}
