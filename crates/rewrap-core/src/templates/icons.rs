//! Icon fragment table
//!
//! Every icon set names its glyphs, import paths and markup differently, and
//! differently again per framework. Components ask an [`IconKit`] for the
//! imports and markup of the glyphs they render.

use crate::config::{Framework, IconSet};

/// Glyphs rendered by generated components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Sun,
    Moon,
    Home,
    Settings,
    User,
}

/// Import/markup conventions for one icon set in one framework
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconKit {
    framework: Framework,
    set: IconSet,
}

impl IconKit {
    pub fn new(framework: Framework, set: IconSet) -> Self {
        Self { framework, set }
    }

    /// Identifier a glyph is imported as
    pub fn identifier(&self, glyph: Glyph) -> &'static str {
        match (self.set, self.framework) {
            (IconSet::Lucide, _) => match glyph {
                Glyph::Sun => "Sun",
                Glyph::Moon => "Moon",
                Glyph::Home => "Home",
                Glyph::Settings => "Settings",
                Glyph::User => "User",
            },
            (IconSet::FontAwesome, _) => match glyph {
                Glyph::Sun => "faSun",
                Glyph::Moon => "faMoon",
                Glyph::Home => "faHome",
                Glyph::Settings => "faCog",
                Glyph::User => "faUser",
            },
            (IconSet::Heroicons, Framework::Svelte) => match glyph {
                Glyph::Sun => "Sun",
                Glyph::Moon => "Moon",
                Glyph::Home => "Home",
                Glyph::Settings => "Cog",
                Glyph::User => "User",
            },
            (IconSet::Heroicons, _) => match glyph {
                Glyph::Sun => "SunIcon",
                Glyph::Moon => "MoonIcon",
                Glyph::Home => "HomeIcon",
                Glyph::Settings => "CogIcon",
                Glyph::User => "UserIcon",
            },
        }
    }

    /// Module specifier glyphs are imported from
    fn glyph_source(&self) -> &'static str {
        match (self.set, self.framework) {
            (IconSet::Lucide, Framework::React) => "lucide-react",
            (IconSet::Lucide, Framework::Vue) => "lucide-vue-next",
            (IconSet::Lucide, Framework::Svelte) => "lucide-svelte",
            (IconSet::FontAwesome, _) => "@fortawesome/free-solid-svg-icons",
            (IconSet::Heroicons, Framework::React) => "@heroicons/react/24/solid",
            (IconSet::Heroicons, Framework::Vue) => "@heroicons/vue/24/solid",
            (IconSet::Heroicons, Framework::Svelte) => "@steeze-ui/heroicons",
        }
    }

    /// Wrapper component needed to render glyph data, if any
    fn renderer_import(&self) -> Option<&'static str> {
        match (self.set, self.framework) {
            (IconSet::FontAwesome, Framework::React) => {
                Some("import { FontAwesomeIcon } from '@fortawesome/react-fontawesome'")
            }
            (IconSet::FontAwesome, Framework::Vue) => {
                Some("import { FontAwesomeIcon } from '@fortawesome/vue-fontawesome'")
            }
            (IconSet::FontAwesome, Framework::Svelte) => Some("import Fa from 'svelte-fa'"),
            (IconSet::Heroicons, Framework::Svelte) => {
                Some("import { Icon } from '@steeze-ui/svelte-icon'")
            }
            _ => None,
        }
    }

    /// Every module specifier this kit imports from
    pub fn import_sources(&self) -> Vec<&'static str> {
        let mut sources = Vec::new();
        if let Some(renderer) = self.renderer_import() {
            if let Some(source) = renderer.split('\'').nth(1) {
                sources.push(source);
            }
        }
        sources.push(self.glyph_source());
        sources
    }

    /// Import statements for the given glyphs, one per line
    ///
    /// `semicolons` follows the framework's house style (Vue templates omit them).
    pub fn imports(&self, glyphs: &[Glyph], semicolons: bool) -> String {
        let end = if semicolons { ";" } else { "" };
        let names: Vec<&str> = glyphs.iter().map(|g| self.identifier(*g)).collect();

        let mut lines = Vec::new();
        if let Some(renderer) = self.renderer_import() {
            lines.push(format!("{}{}", renderer, end));
        }
        lines.push(format!(
            "import {{ {} }} from '{}'{}",
            names.join(", "),
            self.glyph_source(),
            end
        ));
        lines.join("\n")
    }

    /// Markup rendering one glyph
    pub fn markup(&self, glyph: Glyph) -> String {
        let name = self.identifier(glyph);
        match (self.set, self.framework) {
            (IconSet::Lucide, Framework::React) | (IconSet::Heroicons, Framework::React) => {
                format!("<{} className=\"w-6 h-6\" />", name)
            }
            (IconSet::Lucide, _) | (IconSet::Heroicons, Framework::Vue) => {
                format!("<{} class=\"w-6 h-6\" />", name)
            }
            (IconSet::FontAwesome, Framework::React) => {
                format!("<FontAwesomeIcon icon={{{}}} size=\"lg\" />", name)
            }
            (IconSet::FontAwesome, Framework::Vue) => {
                format!("<FontAwesomeIcon :icon=\"{}\" size=\"lg\" />", name)
            }
            (IconSet::FontAwesome, Framework::Svelte) => {
                format!("<Fa icon={{{}}} size=\"lg\" />", name)
            }
            (IconSet::Heroicons, Framework::Svelte) => {
                format!("<Icon src={{{}}} theme=\"solid\" class=\"w-6 h-6\" />", name)
            }
        }
    }

    /// npm packages providing this icon set
    pub fn packages(&self) -> &'static [&'static str] {
        match (self.set, self.framework) {
            (IconSet::Lucide, Framework::React) => &["lucide-react"],
            (IconSet::Lucide, Framework::Vue) => &["lucide-vue-next"],
            (IconSet::Lucide, Framework::Svelte) => &["lucide-svelte"],
            (IconSet::FontAwesome, Framework::React) => &[
                "@fortawesome/fontawesome-svg-core",
                "@fortawesome/free-solid-svg-icons",
                "@fortawesome/react-fontawesome",
            ],
            (IconSet::FontAwesome, Framework::Vue) => &[
                "@fortawesome/fontawesome-svg-core",
                "@fortawesome/free-solid-svg-icons",
                "@fortawesome/vue-fontawesome",
            ],
            (IconSet::FontAwesome, Framework::Svelte) => {
                &["svelte-fa", "@fortawesome/free-solid-svg-icons"]
            }
            (IconSet::Heroicons, Framework::React) => &["@heroicons/react"],
            (IconSet::Heroicons, Framework::Vue) => &["@heroicons/vue"],
            (IconSet::Heroicons, Framework::Svelte) => {
                &["@steeze-ui/svelte-icon", "@steeze-ui/heroicons"]
            }
        }
    }
}
