//! Product configuration trait for CLI binaries
//!
//! The binary describes itself through this trait: its identity, where users
//! are sent for help, which environment variable overrides npm, and what to
//! tell the user once the project exists.

use crate::config::{ProjectConfiguration, DEFAULT_PROJECT_NAME};
use std::path::Path;

/// Configuration trait for the CLI product
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the command name)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Name offered when the user is asked for a project name
    fn default_project_name(&self) -> &'static str {
        DEFAULT_PROJECT_NAME
    }

    /// Environment variable overriding the npm executable
    fn npm_env(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// The npm executable to run, honoring [`ProductConfig::npm_env`]
    fn npm_executable(&self) -> String {
        std::env::var(self.npm_env())
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "npm".to_string())
    }

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, config: &ProjectConfiguration) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }
        if config.component_kit_enabled() {
            steps.push("npx shadcn@latest init".to_string());
        }
        steps.push("npm run dev".to_string());

        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Framework;

    #[derive(Clone)]
    struct TestProduct;

    impl ProductConfig for TestProduct {
        fn name(&self) -> &'static str {
            "rewrap-test"
        }

        fn display_name(&self) -> &'static str {
            "Rewrap Test"
        }

        fn npm_env(&self) -> &'static str {
            "REWRAP_TEST_NPM_UNSET_7c3a"
        }

        fn docs_url(&self) -> &'static str {
            "https://example.invalid/docs"
        }

        fn cli_description(&self) -> &'static str {
            "test product"
        }
    }

    #[test]
    fn test_npm_defaults_without_override() {
        assert_eq!(TestProduct.npm_executable(), "npm");
        assert_eq!(TestProduct.default_project_name(), "rewrap-app");
    }

    #[test]
    fn test_next_steps_for_component_kit() {
        let config = ProjectConfiguration {
            use_component_kit: true,
            ..Default::default()
        };
        let steps = TestProduct.next_steps(Path::new("/nowhere/rewrap-app"), &config);
        assert_eq!(
            steps,
            vec!["cd /nowhere/rewrap-app", "npx shadcn@latest init", "npm run dev"]
        );
    }

    #[test]
    fn test_next_steps_in_current_directory() {
        let config = ProjectConfiguration {
            framework: Framework::Svelte,
            use_component_kit: true,
            ..Default::default()
        };
        let here = std::env::current_dir().unwrap();
        assert_eq!(TestProduct.next_steps(&here, &config), vec!["npm run dev"]);
    }
}
