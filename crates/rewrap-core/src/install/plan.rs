//! The ordered list of commands and files for one run
//!
//! Building the plan has no side effects, so the same plan drives a real
//! install and a `--dry-run` listing.

use crate::config::{Feature, Framework, Language, ProjectConfiguration};
use crate::runtime::CommandSpec;
use crate::templates::{compose, icons::IconKit, GeneratedFile};
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Progress points of an install, in the order they are reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    ScaffoldCreated,
    DependenciesInstalled,
    StylingInstalled,
    ComponentKitInstalled,
    IconSetInstalled,
    ExtraPackagesInstalled,
    FeaturePackagesInstalled,
    FilesComposed,
    FilesWritten,
    Done,
    Failed,
}

impl Stage {
    /// What the commands leading to this stage are doing, for progress display
    pub fn activity(&self) -> &'static str {
        match self {
            Stage::Init => "Starting",
            Stage::ScaffoldCreated => "Creating project scaffold",
            Stage::DependenciesInstalled => "Installing dependencies",
            Stage::StylingInstalled => "Setting up Tailwind CSS",
            Stage::ComponentKitInstalled => "Installing shadcn/ui dependencies",
            Stage::IconSetInstalled => "Installing icon library",
            Stage::ExtraPackagesInstalled => "Installing additional packages",
            Stage::FeaturePackagesInstalled => "Installing feature packages",
            Stage::FilesComposed => "Composing template files",
            Stage::FilesWritten => "Writing template files",
            Stage::Done => "Done",
            Stage::Failed => "Failed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.activity())
    }
}

/// Commands that together reach one stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub stage: Stage,
    pub commands: Vec<CommandSpec>,
}

/// Executables used for package management
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tools {
    pub npm: String,
    pub npx: String,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            npm: "npm".to_string(),
            npx: "npx".to_string(),
        }
    }
}

impl Tools {
    /// Use a specific npm executable; npx is looked up next to it
    pub fn with_npm(npm: impl Into<String>) -> Self {
        let npm = npm.into();
        let npx = match npm.strip_suffix("npm") {
            Some(prefix) if prefix.is_empty() || prefix.ends_with(['/', '\\']) => {
                format!("{}npx", prefix)
            }
            _ => "npx".to_string(),
        };
        Self { npm, npx }
    }
}

/// Packages pulled in by the component kit
pub const COMPONENT_KIT_PACKAGES: [&str; 4] = [
    "class-variance-authority",
    "clsx",
    "tailwind-merge",
    "tailwindcss-animate",
];

/// Development packages for Tailwind via PostCSS
pub const STYLING_DEV_PACKAGES: [&str; 3] = ["tailwindcss@3", "postcss", "autoprefixer"];

/// Libraries the generated feature components import
pub fn feature_packages(config: &ProjectConfiguration) -> Vec<&'static str> {
    let mut packages = Vec::new();
    for feature in &config.features {
        let package = match (config.framework, *feature) {
            (Framework::React, Feature::Form) => Some("react-hook-form"),
            (Framework::React, Feature::Animations) => Some("motion"),
            (Framework::Vue, Feature::Form) => Some("vee-validate"),
            _ => None,
        };
        packages.extend(package);
    }
    packages
}

/// Packages not already requested explicitly
fn not_requested<'a>(packages: &[&'a str], requested: &BTreeSet<String>) -> Vec<&'a str> {
    packages
        .iter()
        .copied()
        .filter(|p| !requested.contains(*p))
        .collect()
}

fn install<'a>(
    npm: &str,
    dev: bool,
    packages: impl IntoIterator<Item = &'a str>,
    cwd: &Path,
) -> CommandSpec {
    let mut args = vec!["install".to_string()];
    if dev {
        args.push("-D".to_string());
    }
    args.extend(packages.into_iter().map(str::to_string));
    CommandSpec::new(npm, args, cwd)
}

/// Everything a run will do, in order
#[derive(Debug, Clone)]
pub struct InstallPlan {
    /// Directory the scaffold command runs in
    pub base_dir: PathBuf,
    /// Root of the generated project
    pub project_dir: PathBuf,
    pub steps: Vec<Step>,
    /// Files relative to `project_dir`
    pub files: Vec<GeneratedFile>,
}

impl InstallPlan {
    pub fn new(config: &ProjectConfiguration, base_dir: &Path, tools: &Tools) -> Self {
        let project_dir = if config.is_new_project {
            base_dir.join(&config.project_name)
        } else {
            base_dir.to_path_buf()
        };
        let dir = project_dir.as_path();
        let npm = tools.npm.as_str();

        let mut steps = Vec::new();

        if config.is_new_project {
            let template = config.vite_template();
            steps.push(Step {
                stage: Stage::ScaffoldCreated,
                commands: vec![CommandSpec::new(
                    npm,
                    [
                        "create",
                        "vite@latest",
                        config.project_name.as_str(),
                        "--",
                        "--template",
                        template.as_str(),
                    ],
                    base_dir,
                )],
            });
        }

        steps.push(Step {
            stage: Stage::DependenciesInstalled,
            commands: vec![install(npm, false, std::iter::empty(), dir)],
        });

        steps.push(Step {
            stage: Stage::StylingInstalled,
            commands: vec![
                install(npm, true, STYLING_DEV_PACKAGES, dir),
                CommandSpec::new(&tools.npx, ["tailwindcss@3", "init", "-p"], dir),
            ],
        });

        if config.component_kit_enabled() {
            let mut commands = vec![install(npm, false, COMPONENT_KIT_PACKAGES, dir)];
            if config.language == Language::TypeScript {
                commands.push(install(npm, true, ["@types/node"], dir));
            }
            steps.push(Step {
                stage: Stage::ComponentKitInstalled,
                commands,
            });
        }

        if config.needs_icons() {
            let kit = IconKit::new(config.framework, config.icon_set);
            let packages = not_requested(kit.packages(), &config.extra_packages);
            if !packages.is_empty() {
                steps.push(Step {
                    stage: Stage::IconSetInstalled,
                    commands: vec![install(npm, false, packages, dir)],
                });
            }
        }

        if !config.extra_packages.is_empty() {
            steps.push(Step {
                stage: Stage::ExtraPackagesInstalled,
                commands: vec![install(
                    npm,
                    false,
                    config.extra_packages.iter().map(String::as_str),
                    dir,
                )],
            });
        }

        let features = not_requested(&feature_packages(config), &config.extra_packages);
        if !features.is_empty() {
            steps.push(Step {
                stage: Stage::FeaturePackagesInstalled,
                commands: vec![install(npm, false, features, dir)],
            });
        }

        Self {
            base_dir: base_dir.to_path_buf(),
            project_dir,
            steps,
            files: compose(config),
        }
    }

    /// Let the scaffold command replace the contents of a non-empty project directory
    pub fn overwriting(mut self) -> Self {
        let scaffold = self
            .steps
            .iter_mut()
            .filter(|s| s.stage == Stage::ScaffoldCreated)
            .flat_map(|s| s.commands.iter_mut());
        for command in scaffold {
            command.args.push("--overwrite".to_string());
        }
        self
    }

    /// Every command in execution order
    pub fn commands(&self) -> impl Iterator<Item = &CommandSpec> {
        self.steps.iter().flat_map(|s| s.commands.iter())
    }

    /// Human readable listing used by `--dry-run`
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for command in self.commands() {
            lines.push(format!("$ {}  (in {})", command, command.cwd.display()));
        }
        for file in &self.files {
            lines.push(format!("write {}", self.project_dir.join(&file.path).display()));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconSet;

    fn lines(plan: &InstallPlan) -> Vec<String> {
        plan.commands().map(|c| c.display_line()).collect()
    }

    #[test]
    fn test_bare_new_project() {
        let config = ProjectConfiguration {
            project_name: "demo".to_string(),
            ..Default::default()
        };
        let plan = InstallPlan::new(&config, Path::new("/work"), &Tools::default());

        assert_eq!(plan.project_dir, PathBuf::from("/work/demo"));
        assert_eq!(
            lines(&plan),
            vec![
                "npm create vite@latest demo -- --template react-ts",
                "npm install",
                "npm install -D tailwindcss@3 postcss autoprefixer",
                "npx tailwindcss@3 init -p",
            ]
        );

        let first = plan.commands().next().unwrap();
        assert_eq!(first.cwd, PathBuf::from("/work"));
        assert!(plan.commands().skip(1).all(|c| c.cwd == PathBuf::from("/work/demo")));
    }

    #[test]
    fn test_existing_project_skips_scaffold() {
        let config = ProjectConfiguration {
            is_new_project: false,
            framework: Framework::Svelte,
            language: Language::JavaScript,
            ..Default::default()
        };
        let plan = InstallPlan::new(&config, Path::new("/work/app"), &Tools::default());

        assert_eq!(plan.project_dir, PathBuf::from("/work/app"));
        assert_eq!(plan.steps[0].stage, Stage::DependenciesInstalled);
        assert!(!lines(&plan).iter().any(|l| l.contains("create vite")));
    }

    #[test]
    fn test_component_kit_for_typescript_react() {
        let config = ProjectConfiguration {
            use_component_kit: true,
            ..Default::default()
        };
        let plan = InstallPlan::new(&config, Path::new("/w"), &Tools::default());
        let kit = plan
            .steps
            .iter()
            .find(|s| s.stage == Stage::ComponentKitInstalled)
            .unwrap();

        let kit_lines: Vec<String> = kit.commands.iter().map(|c| c.display_line()).collect();
        assert_eq!(
            kit_lines,
            vec![
                "npm install class-variance-authority clsx tailwind-merge tailwindcss-animate",
                "npm install -D @types/node",
            ]
        );
    }

    #[test]
    fn test_component_kit_ignored_for_vue() {
        let config = ProjectConfiguration {
            framework: Framework::Vue,
            use_component_kit: true,
            ..Default::default()
        };
        let plan = InstallPlan::new(&config, Path::new("/w"), &Tools::default());
        assert!(plan.steps.iter().all(|s| s.stage != Stage::ComponentKitInstalled));
    }

    #[test]
    fn test_icons_installed_only_when_rendered() {
        let mut config = ProjectConfiguration {
            icon_set: IconSet::FontAwesome,
            features: [Feature::Form].into_iter().collect(),
            ..Default::default()
        };
        let plan = InstallPlan::new(&config, Path::new("/w"), &Tools::default());
        assert!(plan.steps.iter().all(|s| s.stage != Stage::IconSetInstalled));

        config.features.insert(Feature::Sidebar);
        let plan = InstallPlan::new(&config, Path::new("/w"), &Tools::default());
        assert!(lines(&plan).contains(
            &"npm install @fortawesome/fontawesome-svg-core @fortawesome/free-solid-svg-icons @fortawesome/react-fontawesome"
                .to_string()
        ));
    }

    #[test]
    fn test_feature_packages_skip_requested() {
        let mut config = ProjectConfiguration {
            features: [Feature::DarkMode, Feature::Form].into_iter().collect(),
            ..Default::default()
        };
        config.extra_packages.insert("react-hook-form".to_string());
        let plan = InstallPlan::new(&config, Path::new("/w"), &Tools::default());

        let all = lines(&plan);
        assert_eq!(all.iter().filter(|l| l.contains("react-hook-form")).count(), 1);
        assert!(all.contains(&"npm install react-hook-form".to_string()));
        assert!(plan.steps.iter().all(|s| s.stage != Stage::FeaturePackagesInstalled));
    }

    #[test]
    fn test_feature_packages_per_framework() {
        let features: BTreeSet<Feature> = Feature::ALL.into_iter().collect();
        let packages = |framework| {
            feature_packages(&ProjectConfiguration {
                framework,
                features: features.clone(),
                ..Default::default()
            })
        };

        assert_eq!(packages(Framework::React), vec!["react-hook-form", "motion"]);
        assert_eq!(packages(Framework::Vue), vec!["vee-validate"]);
        assert!(packages(Framework::Svelte).is_empty());
    }

    #[test]
    fn test_npm_override_finds_sibling_npx() {
        let tools = Tools::with_npm("/opt/node/bin/npm");
        assert_eq!(tools.npx, "/opt/node/bin/npx");
        assert_eq!(Tools::with_npm("npm").npx, "npx");
        assert_eq!(Tools::with_npm("/usr/bin/pnpm").npx, "npx");
    }

    #[test]
    fn test_describe_lists_commands_then_files() {
        let config = ProjectConfiguration {
            project_name: "demo".to_string(),
            ..Default::default()
        };
        let plan = InstallPlan::new(&config, Path::new("/w"), &Tools::default());
        let described = plan.describe();

        assert!(described[0].starts_with("$ npm create vite@latest demo"));
        assert_eq!(described.last().unwrap(), "write /w/demo/src/App.tsx");
        assert_eq!(described.len(), plan.commands().count() + plan.files.len());
    }

    #[test]
    fn test_overwriting_only_touches_scaffold() {
        let config = ProjectConfiguration {
            project_name: "demo".to_string(),
            ..Default::default()
        };
        let plan = InstallPlan::new(&config, Path::new("/w"), &Tools::default()).overwriting();

        let all = lines(&plan);
        assert_eq!(
            all[0],
            "npm create vite@latest demo -- --template react-ts --overwrite"
        );
        assert_eq!(all.iter().filter(|l| l.contains("--overwrite")).count(), 1);
    }

    #[test]
    fn test_overwriting_existing_project_is_a_no_op() {
        let config = ProjectConfiguration {
            is_new_project: false,
            ..Default::default()
        };
        let plan = InstallPlan::new(&config, Path::new("/w"), &Tools::default());
        let expected = lines(&plan);
        assert_eq!(lines(&plan.overwriting()), expected);
    }
}
