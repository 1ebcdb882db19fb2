//! Charm-style CLI prompts using cliclack

use super::spinner::{SpinnerRunner, TuiObserver};
use crate::config::{
    parse_package_list, Feature, Framework, IconSet, Language, Preset, ProjectConfiguration,
    DEFAULT_COMPONENT_KIT,
};
use crate::error::ScaffoldError;
use crate::install::{DiskWriter, InstallPlan, Installer, Outcome, Tools};
use crate::product::ProductConfig;
use crate::runtime::{check, ProcessRunner};
use anyhow::Result;
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Answers given up front (preset file merged with CLI flags)
    pub preset: Preset,

    /// Directory the project is created in (or the existing project's root)
    pub directory: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,

    /// Print the planned commands and files without running anything
    pub dry_run: bool,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(product: &C, args: CreateArgs) -> Result<Outcome> {
    cliclack::intro(product.display_name())?;

    // Step 1: Collect the configuration
    let base_dir = resolve_directory(args.directory.as_deref());
    let config = collect_in(
        args.preset,
        args.yes,
        product.default_project_name(),
        &base_dir,
    )?;
    if !config.proceed {
        cliclack::outro_cancel("Installation aborted.")?;
        return Ok(Outcome::Declined);
    }

    let tools = Tools::with_npm(product.npm_executable());

    // Step 2: Dry run stops before any side effect
    if args.dry_run {
        let plan = InstallPlan::new(&config, &base_dir, &tools);
        cliclack::note("Dry run", plan.describe().join("\n"))?;
        cliclack::outro("Nothing was changed.")?;
        return Ok(Outcome::Planned);
    }

    // Step 3: Check runtimes
    check_runtimes(&tools, args.yes)?;

    // Step 4: Confirm target directory
    let overwrite = if config.is_new_project {
        confirm_target(&base_dir.join(&config.project_name), args.yes)?
    } else {
        false
    };

    // Step 5: Install and write files
    let installer = Installer::new(SpinnerRunner::new(ProcessRunner), DiskWriter)
        .with_tools(tools)
        .overwrite_existing(overwrite);
    let mut observer = TuiObserver::default();
    let outcome = match installer.run_with(&config, &base_dir, &mut observer).await {
        Ok(outcome) => outcome,
        Err(e) => {
            report_failure(&e)?;
            return Err(e.into());
        }
    };

    // Step 6: Show next steps
    if let Outcome::Completed { project_dir } = &outcome {
        print_next_steps(product, project_dir, &config)?;
    }

    Ok(outcome)
}

/// Ask every question not already answered by `prefilled`
///
/// With `non_interactive`, unanswered questions take their defaults and the run
/// proceeds without confirmation. Cancelling a prompt declines the run.
pub fn collect(prefilled: Preset, non_interactive: bool) -> Result<ProjectConfiguration> {
    collect_in(
        prefilled,
        non_interactive,
        crate::config::DEFAULT_PROJECT_NAME,
        &resolve_directory(None),
    )
}

/// [`collect`] for a run rooted at `base_dir`
///
/// An existing project takes its name from `base_dir` unless one was given.
fn collect_in(
    prefilled: Preset,
    non_interactive: bool,
    default_name: &str,
    base_dir: &Path,
) -> Result<ProjectConfiguration> {
    if non_interactive {
        let fallback_name = match prefilled.new_project {
            Some(false) => dir_name(base_dir).unwrap_or_else(|| default_name.to_string()),
            _ => default_name.to_string(),
        };
        let mut preset = Preset {
            project_name: Some(fallback_name),
            ..Default::default()
        };
        preset.merge(prefilled);
        let config = preset.into_configuration();
        cliclack::note("Configuration", config.summary_lines().join("\n"))?;
        return Ok(config);
    }

    settle(ask(prefilled, default_name, base_dir))
}

/// A cancelled prompt declines the run; any other prompt error is fatal
fn settle(answer: io::Result<ProjectConfiguration>) -> Result<ProjectConfiguration> {
    match answer {
        Ok(config) => Ok(config),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(ProjectConfiguration::declined()),
        Err(e) => Err(e.into()),
    }
}

fn ask(prefilled: Preset, default_name: &str, base_dir: &Path) -> io::Result<ProjectConfiguration> {
    let is_new_project = match prefilled.new_project {
        Some(v) => v,
        None => cliclack::select("Is this a new project or an existing project?")
            .item(true, "New Project", "")
            .item(false, "Existing Project", "current directory")
            .initial_value(true)
            .interact()?,
    };

    let project_name = match prefilled.project_name.filter(|n| !n.trim().is_empty()) {
        Some(name) => name.trim().to_string(),
        None if is_new_project => {
            let name: String = cliclack::input("What is your project name?")
                .placeholder(default_name)
                .default_input(default_name)
                .validate(|input: &String| {
                    if input.trim().is_empty() {
                        Err("Project name cannot be empty")
                    } else {
                        Ok(())
                    }
                })
                .interact()?;
            name.trim().to_string()
        }
        None => dir_name(base_dir).unwrap_or_else(|| default_name.to_string()),
    };

    let framework = match prefilled.framework {
        Some(v) => v,
        None => cliclack::select("Which framework would you like to use?")
            .item(Framework::React, "React", "")
            .item(Framework::Vue, "Vue", "")
            .item(Framework::Svelte, "Svelte", "")
            .initial_value(Framework::React)
            .interact()?,
    };

    let language = match prefilled.language {
        Some(v) => v,
        None => cliclack::select("Which language would you like to use?")
            .item(Language::JavaScript, "JavaScript", "")
            .item(Language::TypeScript, "TypeScript", "")
            .initial_value(Language::TypeScript)
            .interact()?,
    };

    let use_component_kit = match prefilled.component_kit {
        Some(v) => v,
        None if framework == Framework::React => {
            cliclack::confirm("Would you like to include shadcn/ui components?")
                .initial_value(DEFAULT_COMPONENT_KIT)
                .interact()?
        }
        None => false,
    };

    let icon_set = match prefilled.icon_set {
        Some(v) => v,
        None => {
            let mut select = cliclack::select("Which icon set would you like to use?");
            for set in IconSet::ALL {
                select = select.item(set, set.display_name(), "");
            }
            select.initial_value(IconSet::Lucide).interact()?
        }
    };

    let features = match prefilled.features {
        Some(v) => v,
        None => {
            let mut multi = cliclack::multiselect("Select additional features to include");
            for feature in Feature::ALL {
                multi = multi.item(feature, feature.display_name(), "");
            }
            let selected: Vec<Feature> = multi.required(false).interact()?;
            selected.into_iter().collect()
        }
    };

    let extra_packages = match prefilled.packages {
        Some(v) => v,
        None => {
            let mut multi = cliclack::multiselect("Select additional packages to install");
            for (package, label) in package_catalog(framework) {
                multi = multi.item(package.to_string(), *label, *package);
            }
            let selected: Vec<String> = multi.required(false).interact()?;

            let other: String = cliclack::input("Any other packages? (space or comma separated)")
                .placeholder("none")
                .required(false)
                .interact()?;

            let mut packages: BTreeSet<String> = selected.into_iter().collect();
            packages.extend(parse_package_list(&other));
            packages
        }
    };

    let mut config = Preset {
        project_name: Some(project_name),
        new_project: Some(is_new_project),
        framework: Some(framework),
        language: Some(language),
        component_kit: Some(use_component_kit),
        icon_set: Some(icon_set),
        features: Some(features),
        packages: Some(extra_packages),
    }
    .into_configuration();

    cliclack::note("Summary", config.summary_lines().join("\n"))?;

    config.proceed = cliclack::confirm("Do you want to proceed with the installation?")
        .initial_value(true)
        .interact()?;

    Ok(config)
}

/// Popular packages offered per framework: `(package, label)`
fn package_catalog(framework: Framework) -> &'static [(&'static str, &'static str)] {
    match framework {
        Framework::React => &[
            ("react-router-dom", "React Router"),
            ("axios", "Axios"),
            ("@reduxjs/toolkit", "Redux Toolkit"),
            ("@tanstack/react-query", "TanStack Query"),
            ("motion", "Motion (prev Framer Motion)"),
            ("react-hook-form", "React Hook Form"),
        ],
        Framework::Vue => &[
            ("vue-router", "Vue Router"),
            ("axios", "Axios"),
            ("pinia", "Pinia"),
            ("@tanstack/vue-query", "TanStack Query"),
            ("vee-validate", "VeeValidate"),
        ],
        Framework::Svelte => &[
            ("axios", "Axios"),
            ("@tanstack/svelte-query", "TanStack Query"),
            ("zod", "Zod"),
        ],
    }
}

fn dir_name(dir: &Path) -> Option<String> {
    dir.file_name().map(|n| n.to_string_lossy().into_owned())
}

fn resolve_directory(directory: Option<&Path>) -> PathBuf {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match directory {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    }
}

fn check_runtimes(tools: &Tools, yes: bool) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking runtimes...");

    match check::check_runtimes(&tools.npm) {
        Ok(report) => {
            let runtime_info: Vec<String> = report.runtimes.iter().map(|r| r.describe()).collect();
            spinner.stop(format!("Detected runtimes: {}", runtime_info.join(", ")));
            for warning in &report.warnings {
                cliclack::log::warning(warning)?;
            }
            Ok(())
        }
        Err(e) => {
            spinner.error("Missing runtimes");
            cliclack::log::error(format!("{}", e))?;

            if !yes {
                let open_docs: bool = cliclack::confirm("Open the Node.js download page?")
                    .initial_value(true)
                    .interact()?;
                if open_docs {
                    open::that(check::NODE_DOWNLOAD_URL)?;
                }
            }
            anyhow::bail!("Please install npm and try again.");
        }
    }
}

/// Check the directory a new project is scaffolded into
///
/// Returns whether the scaffold may replace existing contents. A non-empty
/// directory is never replaced without an explicit answer.
fn confirm_target(project_dir: &Path, yes: bool) -> Result<bool> {
    if !project_dir.is_dir() {
        return Ok(false);
    }

    let count = std::fs::read_dir(project_dir)?.count();
    if count == 0 {
        return Ok(false);
    }

    cliclack::log::warning(format!(
        "{} already exists and has {} items",
        project_dir.display(),
        count
    ))?;

    if yes {
        anyhow::bail!(
            "{} is not empty; choose another project name or run without --yes",
            project_dir.display()
        );
    }

    let overwrite: bool = cliclack::confirm("Remove its contents and continue?")
        .initial_value(false)
        .interact()?;

    if !overwrite {
        anyhow::bail!("Setup cancelled.");
    }
    Ok(true)
}

fn report_failure(error: &ScaffoldError) -> Result<()> {
    for (stream, output) in error.diagnostics() {
        cliclack::log::remark(format!("{}:\n{}", stream, output))?;
    }
    cliclack::outro_cancel("Installation failed.")?;
    Ok(())
}

fn print_next_steps<C: ProductConfig>(
    product: &C,
    project_dir: &Path,
    config: &ProjectConfiguration,
) -> Result<()> {
    let steps = product.next_steps(project_dir, config);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }
    println!();
    println!("  Docs: {}", product.docs_url());

    cliclack::outro("Happy coding!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contains_form_library_per_framework() {
        let has = |framework, package| {
            package_catalog(framework)
                .iter()
                .any(|(p, _)| *p == package)
        };
        assert!(has(Framework::React, "react-hook-form"));
        assert!(has(Framework::Vue, "vee-validate"));
        assert!(!has(Framework::Svelte, "react-hook-form"));
    }

    #[test]
    fn test_catalogs_have_no_duplicates() {
        for framework in [Framework::React, Framework::Vue, Framework::Svelte] {
            let catalog = package_catalog(framework);
            let unique: BTreeSet<_> = catalog.iter().map(|(p, _)| *p).collect();
            assert_eq!(unique.len(), catalog.len());
        }
    }

    #[test]
    fn test_resolve_directory() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve_directory(None), cwd);
        assert_eq!(resolve_directory(Some(Path::new("apps"))), cwd.join("apps"));
        assert_eq!(
            resolve_directory(Some(Path::new("/tmp/projects"))),
            PathBuf::from("/tmp/projects")
        );
    }

    #[test]
    fn test_confirm_target_allows_missing_or_empty_dirs() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!confirm_target(&dir.path().join("fresh"), false).unwrap());
        assert!(!confirm_target(dir.path(), false).unwrap());
    }

    #[test]
    fn test_confirm_target_refuses_non_empty_dir_with_yes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "keep me").unwrap();

        assert!(confirm_target(dir.path(), true).is_err());
        assert!(dir.path().join("notes.txt").is_file());
    }

    #[test]
    fn test_cancelled_prompt_declines() {
        let config = settle(Err(io::ErrorKind::Interrupted.into())).unwrap();
        assert!(!config.proceed);
    }

    #[test]
    fn test_other_prompt_errors_are_fatal() {
        assert!(settle(Err(io::ErrorKind::BrokenPipe.into())).is_err());
    }

    #[test]
    fn test_answered_prompts_pass_through() {
        let answered = ProjectConfiguration {
            project_name: "shop".to_string(),
            ..Default::default()
        };
        assert_eq!(settle(Ok(answered.clone())).unwrap(), answered);
    }

    #[test]
    fn test_yes_fills_defaults_and_proceeds() {
        let prefilled = Preset {
            framework: Some(Framework::Vue),
            ..Default::default()
        };
        let config = collect(prefilled, true).unwrap();

        assert!(config.proceed);
        assert!(config.is_new_project);
        assert_eq!(config.framework, Framework::Vue);
        assert_eq!(config.project_name, crate::config::DEFAULT_PROJECT_NAME);
        assert_eq!(config.language, Language::default());
        assert_eq!(config.icon_set, IconSet::Lucide);
        assert!(config.features.is_empty());
        assert!(config.extra_packages.is_empty());
    }

    #[test]
    fn test_yes_names_existing_project_after_directory() {
        let dir = tempfile::tempdir().unwrap();
        let base_dir = dir.path().join("client-portal");
        let prefilled = Preset {
            new_project: Some(false),
            ..Default::default()
        };

        let config = collect_in(prefilled, true, "rewrap-app", &base_dir).unwrap();
        assert!(!config.is_new_project);
        assert_eq!(config.project_name, "client-portal");
    }

    #[test]
    fn test_yes_keeps_given_name_for_existing_project() {
        let prefilled = Preset {
            new_project: Some(false),
            project_name: Some("Storefront".to_string()),
            ..Default::default()
        };

        let config = collect_in(prefilled, true, "rewrap-app", Path::new("/srv/app")).unwrap();
        assert_eq!(config.project_name, "Storefront");
    }
}
