//! Template composition
//!
//! This module turns a [`ProjectConfiguration`] into the files written on top of
//! the `create-vite` scaffold:
//! - Styling files (Tailwind config, global stylesheet, component kit extras)
//! - One starter component per enabled feature
//! - The root component, assembled last around a fixed welcome section
//!
//! Icons are looked up in a `(framework, icon set, glyph)` fragment table
//! ([`icons`]), and each framework has its own [`Starter`] providing feature
//! fragments. [`compose`] is pure: equal configurations give identical files.

pub mod icons;
pub mod react;
pub mod styling;
pub mod svelte;
pub mod vue;

use crate::config::{Feature, Framework, ProjectConfiguration};
use icons::Glyph;
use std::path::PathBuf;

/// A file to write into the generated project, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Framework-specific starter fragments
pub trait Starter {
    /// Files generated for one enabled feature (may be empty)
    fn feature_files(&self, feature: Feature, config: &ProjectConfiguration) -> Vec<GeneratedFile>;

    /// The root component
    fn root(&self, config: &ProjectConfiguration) -> GeneratedFile;
}

/// The starter for a framework
pub fn starter_for(framework: Framework) -> &'static dyn Starter {
    match framework {
        Framework::React => &react::React,
        Framework::Vue => &vue::Vue,
        Framework::Svelte => &svelte::Svelte,
    }
}

/// Compose every generated file for a configuration, root component last
pub fn compose(config: &ProjectConfiguration) -> Vec<GeneratedFile> {
    let mut files = styling::files(config);
    let starter = starter_for(config.framework);

    for feature in &config.features {
        files.extend(starter.feature_files(*feature, config));
    }

    files.push(starter.root(config));
    files
}

/// Names shared by the theme provider and every component that consumes it
///
/// The provider exposes `{ theme, setTheme, toggleTheme }` through `useTheme`;
/// keeping the names in one place keeps the generated files in agreement.
#[derive(Debug, Clone, Copy)]
pub struct ThemeCapability {
    pub accessor: &'static str,
    pub state: &'static str,
    pub setter: &'static str,
    pub toggle: &'static str,
    /// localStorage key holding the last chosen theme
    pub storage_key: &'static str,
}

pub const THEME: ThemeCapability = ThemeCapability {
    accessor: "useTheme",
    state: "theme",
    setter: "setTheme",
    toggle: "toggleTheme",
    storage_key: "theme",
};

impl ThemeCapability {
    /// Placeholder values for rendering theme fragments
    pub fn vars(&self) -> [(&'static str, &'static str); 5] {
        [
            ("use_theme", self.accessor),
            ("theme", self.state),
            ("set_theme", self.setter),
            ("toggle_theme", self.toggle),
            ("storage_key", self.storage_key),
        ]
    }
}

/// A sidebar navigation entry
#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub glyph: Glyph,
}

/// Static sidebar links
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Home",
        href: "#",
        glyph: Glyph::Home,
    },
    NavLink {
        label: "Settings",
        href: "#settings",
        glyph: Glyph::Settings,
    },
    NavLink {
        label: "Profile",
        href: "#profile",
        glyph: Glyph::User,
    },
];

/// Case-insensitive email shape check used by every sample form
pub const EMAIL_PATTERN: &str = r"/^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$/i";

/// Link shown in the welcome section
pub const REWRAP_URL: &str = "https://github.com/heycalebszn/Rewrap-";

/// Replace `{{key}}` placeholders; unknown placeholders are left untouched
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("{{{{{}}}}}", key), value);
    }
    out
}

/// Indent every non-empty line by `spaces`
pub fn indent(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap markup in an opening and closing tag, indenting the inner part
pub fn wrap(open: &str, inner: &str, close: &str) -> String {
    format!("{}\n{}\n{}", open, indent(inner, 2), close)
}

/// Header title derived from the project name: `my-cool_app` -> `My Cool App`
///
/// Only alphanumeric characters survive, so the title is safe inside any markup.
pub fn display_title(project_name: &str) -> String {
    let words: Vec<String> = project_name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        "Rewrap App".to_string()
    } else {
        words.join(" ")
    }
}
