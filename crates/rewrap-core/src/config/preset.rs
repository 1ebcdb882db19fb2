//! Partially filled configurations from preset files and CLI flags

use super::{
    Feature, Framework, IconSet, Language, ProjectConfiguration, DEFAULT_COMPONENT_KIT,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Pre-answered questions; `None` means "ask" (or use the default with `--yes`)
///
/// A preset file looks like:
///
/// ```yaml
/// project_name: dashboard
/// framework: react
/// language: typescript
/// component_kit: true
/// icon_set: heroicons
/// features: [dark-mode, sidebar]
/// packages: [axios]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    #[serde(default)]
    pub project_name: Option<String>,

    #[serde(default)]
    pub new_project: Option<bool>,

    #[serde(default)]
    pub framework: Option<Framework>,

    #[serde(default)]
    pub language: Option<Language>,

    #[serde(default)]
    pub component_kit: Option<bool>,

    #[serde(default)]
    pub icon_set: Option<IconSet>,

    #[serde(default)]
    pub features: Option<BTreeSet<Feature>>,

    #[serde(default)]
    pub packages: Option<BTreeSet<String>>,
}

impl Preset {
    /// Parse a preset from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse preset")
    }

    /// Load a preset file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read preset {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid preset {}", path.display()))
    }

    /// Merge another preset into this one (other takes precedence where it is set)
    pub fn merge(&mut self, other: Preset) {
        if other.project_name.is_some() {
            self.project_name = other.project_name;
        }
        if other.new_project.is_some() {
            self.new_project = other.new_project;
        }
        if other.framework.is_some() {
            self.framework = other.framework;
        }
        if other.language.is_some() {
            self.language = other.language;
        }
        if other.component_kit.is_some() {
            self.component_kit = other.component_kit;
        }
        if other.icon_set.is_some() {
            self.icon_set = other.icon_set;
        }
        if other.features.is_some() {
            self.features = other.features;
        }
        if other.packages.is_some() {
            self.packages = other.packages;
        }
    }

    /// Fill every unset answer with its default
    pub fn into_configuration(self) -> ProjectConfiguration {
        let defaults = ProjectConfiguration::default();
        let is_new_project = self.new_project.unwrap_or(defaults.is_new_project);
        let project_name = self
            .project_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or(defaults.project_name);

        ProjectConfiguration {
            project_name,
            is_new_project,
            framework: self.framework.unwrap_or(defaults.framework),
            language: self.language.unwrap_or(defaults.language),
            use_component_kit: self.component_kit.unwrap_or(DEFAULT_COMPONENT_KIT),
            icon_set: self.icon_set.unwrap_or(defaults.icon_set),
            features: self.features.unwrap_or_default(),
            extra_packages: normalize_packages(self.packages.unwrap_or_default()),
            proceed: true,
        }
    }
}

/// Split free-form package input on whitespace and commas
pub fn parse_package_list(input: &str) -> BTreeSet<String> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn normalize_packages(packages: BTreeSet<String>) -> BTreeSet<String> {
    packages
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_preset() {
        let preset = Preset::from_yaml(
            r#"
project_name: dashboard
framework: vue
language: js
component_kit: false
icon_set: "@heroicons/react"
features: [dark-mode, sidebar]
packages: [axios, pinia]
"#,
        )
        .unwrap();

        assert_eq!(preset.project_name.as_deref(), Some("dashboard"));
        assert_eq!(preset.framework, Some(Framework::Vue));
        assert_eq!(preset.language, Some(Language::JavaScript));
        assert_eq!(preset.icon_set, Some(IconSet::Heroicons));
        let features = preset.features.unwrap();
        assert!(features.contains(&Feature::DarkMode));
        assert!(features.contains(&Feature::Sidebar));
        assert_eq!(preset.packages.unwrap().len(), 2);
    }

    #[test]
    fn test_camel_case_feature_alias() {
        let preset = Preset::from_yaml("features: [darkMode, form]").unwrap();
        let features = preset.features.unwrap();
        assert!(features.contains(&Feature::DarkMode));
        assert!(features.contains(&Feature::Form));
    }

    #[test]
    fn test_unknown_icon_set_in_preset_uses_default() {
        let preset = Preset::from_yaml("icon_set: material-symbols").unwrap();
        assert_eq!(preset.icon_set, Some(IconSet::Lucide));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Preset::from_yaml("colour: blue").is_err());
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut base = Preset {
            project_name: Some("from-file".to_string()),
            framework: Some(Framework::Svelte),
            ..Default::default()
        };
        base.merge(Preset {
            project_name: Some("from-flag".to_string()),
            ..Default::default()
        });

        assert_eq!(base.project_name.as_deref(), Some("from-flag"));
        assert_eq!(base.framework, Some(Framework::Svelte));
    }

    #[test]
    fn test_defaults_fill_unset_answers() {
        let config = Preset::default().into_configuration();
        assert_eq!(config.project_name, crate::config::DEFAULT_PROJECT_NAME);
        assert!(config.is_new_project);
        assert_eq!(config.framework, Framework::React);
        assert_eq!(config.language, Language::TypeScript);
        assert!(config.use_component_kit);
        assert_eq!(config.icon_set, IconSet::Lucide);
        assert!(config.features.is_empty());
        assert!(config.proceed);
    }

    #[test]
    fn test_blank_project_name_uses_default() {
        let config = Preset {
            project_name: Some("   ".to_string()),
            ..Default::default()
        }
        .into_configuration();
        assert_eq!(config.project_name, crate::config::DEFAULT_PROJECT_NAME);
    }

    #[test]
    fn test_parse_package_list() {
        let packages = parse_package_list("axios, zod  @tanstack/react-query,,");
        let expected: Vec<&str> = vec!["@tanstack/react-query", "axios", "zod"];
        assert_eq!(packages.iter().map(String::as_str).collect::<Vec<_>>(), expected);
    }
}
