//! Project configuration: the choices that drive one generation run
//!
//! A [`ProjectConfiguration`] is assembled once (from prompts, a preset file or
//! CLI flags) and then only read by the composer and the installer.

pub mod preset;

pub use preset::{parse_package_list, Preset};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Default project name offered by the prompts
pub const DEFAULT_PROJECT_NAME: &str = "rewrap-app";

/// Default answer to the component kit question
pub const DEFAULT_COMPONENT_KIT: bool = true;

/// Supported UI frameworks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    #[default]
    React,
    Vue,
    Svelte,
}

impl Framework {
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::React => "React",
            Framework::Vue => "Vue",
            Framework::Svelte => "Svelte",
        }
    }

    /// Base name of the `create-vite` template for this framework
    pub fn vite_template(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
            Framework::Svelte => "svelte",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Source language of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[value(name = "javascript", alias = "js")]
    #[serde(alias = "js")]
    JavaScript,
    #[default]
    #[value(name = "typescript", alias = "ts")]
    #[serde(alias = "ts")]
    TypeScript,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
        }
    }

    pub fn is_typescript(&self) -> bool {
        matches!(self, Language::TypeScript)
    }

    /// Extension for plain modules (`js` / `ts`)
    pub fn script_ext(&self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::TypeScript => "ts",
        }
    }

    /// Extension for React component modules (`jsx` / `tsx`)
    pub fn jsx_ext(&self) -> &'static str {
        match self {
            Language::JavaScript => "jsx",
            Language::TypeScript => "tsx",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Icon library used by generated components
///
/// Parsing never fails: unknown names fall back to [`IconSet::Lucide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IconSet {
    #[default]
    Lucide,
    FontAwesome,
    Heroicons,
}

impl IconSet {
    pub const ALL: [IconSet; 3] = [IconSet::Lucide, IconSet::FontAwesome, IconSet::Heroicons];

    /// Parse a short name or a package identifier, falling back to the default set
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "lucide" | "lucide-react" => IconSet::Lucide,
            "fontawesome" | "font-awesome" | "fa" | "@fortawesome/fontawesome-svg-core" => {
                IconSet::FontAwesome
            }
            "heroicons" | "@heroicons/react" => IconSet::Heroicons,
            _ => IconSet::default(),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            IconSet::Lucide => "lucide",
            IconSet::FontAwesome => "fontawesome",
            IconSet::Heroicons => "heroicons",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IconSet::Lucide => "Lucide",
            IconSet::FontAwesome => "Font Awesome",
            IconSet::Heroicons => "Heroicons",
        }
    }
}

impl From<String> for IconSet {
    fn from(value: String) -> Self {
        IconSet::parse(&value)
    }
}

impl From<IconSet> for String {
    fn from(value: IconSet) -> Self {
        value.key().to_string()
    }
}

impl fmt::Display for IconSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Optional starter features
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    #[serde(alias = "darkMode")]
    #[value(alias = "darkMode")]
    DarkMode,
    Sidebar,
    Form,
    Animations,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::DarkMode,
        Feature::Sidebar,
        Feature::Form,
        Feature::Animations,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Feature::DarkMode => "Dark Mode",
            Feature::Sidebar => "Responsive Sidebar",
            Feature::Form => "Sample Form",
            Feature::Animations => "Animations",
        }
    }

    /// Whether the generated component for this feature renders icons
    pub fn uses_icons(&self) -> bool {
        matches!(self, Feature::DarkMode | Feature::Sidebar)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// All user decisions for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfiguration {
    pub project_name: String,
    pub is_new_project: bool,
    pub framework: Framework,
    pub language: Language,
    pub use_component_kit: bool,
    pub icon_set: IconSet,
    pub features: BTreeSet<Feature>,
    pub extra_packages: BTreeSet<String>,
    pub proceed: bool,
}

impl Default for ProjectConfiguration {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            is_new_project: true,
            framework: Framework::default(),
            language: Language::default(),
            use_component_kit: false,
            icon_set: IconSet::default(),
            features: BTreeSet::new(),
            extra_packages: BTreeSet::new(),
            proceed: true,
        }
    }
}

impl ProjectConfiguration {
    /// A configuration the user walked away from
    pub fn declined() -> Self {
        Self {
            proceed: false,
            ..Self::default()
        }
    }

    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// The component kit only applies to React projects
    pub fn component_kit_enabled(&self) -> bool {
        self.use_component_kit && self.framework == Framework::React
    }

    /// Whether any enabled feature renders icons
    pub fn needs_icons(&self) -> bool {
        self.features.iter().any(Feature::uses_icons)
    }

    /// Full `create-vite` template name, e.g. `react-ts`
    pub fn vite_template(&self) -> String {
        match self.language {
            Language::TypeScript => format!("{}-ts", self.framework.vite_template()),
            Language::JavaScript => self.framework.vite_template().to_string(),
        }
    }

    /// Lines describing the configuration, used by summaries and dry runs
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.is_new_project {
            lines.push(format!("Project:    {} (new)", self.project_name));
        } else {
            lines.push("Project:    existing (current directory)".to_string());
        }
        lines.push(format!("Framework:  {}", self.framework));
        lines.push(format!("Language:   {}", self.language));
        if self.framework == Framework::React {
            let kit = if self.use_component_kit { "yes" } else { "no" };
            lines.push(format!("shadcn/ui:  {}", kit));
        }
        lines.push(format!("Icons:      {}", self.icon_set));
        lines.push(format!("Features:   {}", join_or_none(self.features.iter())));
        lines.push(format!("Packages:   {}", join_or_none(self.extra_packages.iter())));
        lines
    }
}

fn join_or_none<T: fmt::Display>(items: impl Iterator<Item = T>) -> String {
    let names: Vec<String> = items.map(|i| i.to_string()).collect();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
