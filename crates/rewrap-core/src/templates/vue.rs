//! Vue starter components (single-file components, `<script setup>`)

use super::icons::{Glyph, IconKit};
use super::{
    display_title, indent, render, wrap, GeneratedFile, Starter, EMAIL_PATTERN, NAV_LINKS,
    REWRAP_URL, THEME,
};
use crate::config::{Feature, Language, ProjectConfiguration};

const USE_THEME_JS: &str = r#"import { inject } from 'vue'

export const themeKey = Symbol('{{storage_key}}')

export function {{use_theme}}() {
  const context = inject(themeKey)
  if (!context) {
    throw new Error('{{use_theme}} must be used inside a ThemeProvider')
  }
  return context
}
"#;

const USE_THEME_TS: &str = r#"import { inject, type InjectionKey, type Ref } from 'vue'

export type Theme = 'light' | 'dark'

export interface ThemeContext {
  {{theme}}: Ref<Theme>
  {{set_theme}}: (theme: Theme) => void
  {{toggle_theme}}: () => void
}

export const themeKey: InjectionKey<ThemeContext> = Symbol('{{storage_key}}')

export function {{use_theme}}(): ThemeContext {
  const context = inject(themeKey)
  if (!context) {
    throw new Error('{{use_theme}} must be used inside a ThemeProvider')
  }
  return context
}
"#;

const THEME_PROVIDER_JS: &str = r#"<script setup>
import { provide, ref, watch } from 'vue'
import { themeKey } from '../composables/useTheme'

function initialTheme() {
  const savedTheme = localStorage.getItem('{{storage_key}}')
  if (savedTheme === 'light' || savedTheme === 'dark') {
    return savedTheme
  }
  return window.matchMedia('(prefers-color-scheme: dark)').matches ? 'dark' : 'light'
}

const {{theme}} = ref(initialTheme())

watch(
  {{theme}},
  (value) => {
    document.documentElement.classList.toggle('dark', value === 'dark')
    localStorage.setItem('{{storage_key}}', value)
  },
  { immediate: true },
)

const {{set_theme}} = (value) => {
  {{theme}}.value = value
}

const {{toggle_theme}} = () => {
  {{theme}}.value = {{theme}}.value === 'light' ? 'dark' : 'light'
}

provide(themeKey, { {{theme}}, {{set_theme}}, {{toggle_theme}} })
</script>

<template>
  <slot />
</template>
"#;

const THEME_PROVIDER_TS: &str = r#"<script setup lang="ts">
import { provide, ref, watch } from 'vue'
import { themeKey, type Theme } from '../composables/useTheme'

function initialTheme(): Theme {
  const savedTheme = localStorage.getItem('{{storage_key}}')
  if (savedTheme === 'light' || savedTheme === 'dark') {
    return savedTheme
  }
  return window.matchMedia('(prefers-color-scheme: dark)').matches ? 'dark' : 'light'
}

const {{theme}} = ref<Theme>(initialTheme())

watch(
  {{theme}},
  (value) => {
    document.documentElement.classList.toggle('dark', value === 'dark')
    localStorage.setItem('{{storage_key}}', value)
  },
  { immediate: true },
)

const {{set_theme}} = (value: Theme) => {
  {{theme}}.value = value
}

const {{toggle_theme}} = () => {
  {{theme}}.value = {{theme}}.value === 'light' ? 'dark' : 'light'
}

provide(themeKey, { {{theme}}, {{set_theme}}, {{toggle_theme}} })
</script>

<template>
  <slot />
</template>
"#;

const THEME_TOGGLE: &str = r#"<script setup{{lang_attr}}>
import { {{use_theme}} } from '../composables/useTheme'
{{icon_imports}}

const { {{theme}}, {{toggle_theme}} } = {{use_theme}}()
</script>

<template>
  <button
    type="button"
    aria-label="Toggle color theme"
    class="p-2 rounded-full hover:bg-primary-foreground/10"
    @click="{{toggle_theme}}"
  >
    <template v-if="{{theme}} === 'dark'">
      {{sun}}
    </template>
    <template v-else>
      {{moon}}
    </template>
  </button>
</template>
"#;

const SIDEBAR: &str = r#"<script setup{{lang_attr}}>
{{icon_imports}}
</script>

<template>
  <aside class="hidden md:block bg-secondary text-secondary-foreground w-64 min-h-screen p-4">
    <nav>
      <ul class="space-y-2">
{{links}}
      </ul>
    </nav>
  </aside>
</template>
"#;

const SIDEBAR_LINK: &str = r#"<li>
  <a href="{{href}}" class="flex items-center space-x-2 p-2 rounded-lg hover:bg-primary/10">
    {{icon}}
    <span>{{label}}</span>
  </a>
</li>"#;

const SAMPLE_FORM: &str = r#"<script setup{{lang_attr}}>
import { useForm } from 'vee-validate'

const emailPattern = {{email_pattern}}

const { defineField, errors, handleSubmit } = useForm({
  validationSchema: {
    name: (value{{value_type}}) => (value ? true : 'Name is required'),
    email: (value{{value_type}}) => {
      if (!value) {
        return 'Email is required'
      }
      return emailPattern.test(value) ? true : 'Invalid email address'
    },
    message: (value{{value_type}}) => (value ? true : 'Message is required'),
  },
})

const [name, nameAttrs] = defineField('name')
const [email, emailAttrs] = defineField('email')
const [message, messageAttrs] = defineField('message')

const onSubmit = handleSubmit((values) => {
  console.log(values)
})
</script>

<template>
  <form class="space-y-4" novalidate @submit="onSubmit">
    <div>
      <label for="name" class="block text-sm font-medium mb-1">Name</label>
      <input
        id="name"
        v-model="name"
        v-bind="nameAttrs"
        type="text"
        class="w-full p-2 border rounded-md bg-background"
      />
      <p v-if="errors.name" class="text-red-500 text-sm mt-1">{{ errors.name }}</p>
    </div>
    <div>
      <label for="email" class="block text-sm font-medium mb-1">Email</label>
      <input
        id="email"
        v-model="email"
        v-bind="emailAttrs"
        type="email"
        class="w-full p-2 border rounded-md bg-background"
      />
      <p v-if="errors.email" class="text-red-500 text-sm mt-1">{{ errors.email }}</p>
    </div>
    <div>
      <label for="message" class="block text-sm font-medium mb-1">Message</label>
      <textarea
        id="message"
        v-model="message"
        v-bind="messageAttrs"
        rows="4"
        class="w-full p-2 border rounded-md bg-background"
      ></textarea>
      <p v-if="errors.message" class="text-red-500 text-sm mt-1">{{ errors.message }}</p>
    </div>
    <button
      type="submit"
      class="bg-primary text-primary-foreground px-4 py-2 rounded-md hover:bg-primary/90"
    >
      Submit
    </button>
  </form>
</template>
"#;

const WELCOME: &str = r#"<h1 class="text-3xl font-bold mb-4">Welcome to Rewrap</h1>
<p class="mb-4">
  This app was created using
  <a
    href="{{rewrap_url}}"
    target="_blank"
    rel="noopener noreferrer"
    class="text-primary hover:underline"
  >
    Rewrap
  </a>
</p>"#;

/// Vue starter: `src/components/*.vue`, `src/composables/` and `src/App.vue`
#[derive(Debug, Clone, Copy)]
pub struct Vue;

fn component_path(name: &str) -> String {
    format!("src/components/{}.vue", name)
}

fn lang_attr(language: Language) -> &'static str {
    match language {
        Language::JavaScript => "",
        Language::TypeScript => " lang=\"ts\"",
    }
}

impl Vue {
    fn theme_files(&self, config: &ProjectConfiguration) -> Vec<GeneratedFile> {
        let theme_vars = THEME.vars();
        let (composable, provider) = match config.language {
            Language::JavaScript => (USE_THEME_JS, THEME_PROVIDER_JS),
            Language::TypeScript => (USE_THEME_TS, THEME_PROVIDER_TS),
        };

        let icons = IconKit::new(config.framework, config.icon_set);
        let icon_imports = icons.imports(&[Glyph::Sun, Glyph::Moon], false);
        let sun = icons.markup(Glyph::Sun);
        let moon = icons.markup(Glyph::Moon);
        let mut toggle_vars: Vec<(&str, &str)> = theme_vars.to_vec();
        toggle_vars.extend([
            ("lang_attr", lang_attr(config.language)),
            ("icon_imports", icon_imports.as_str()),
            ("sun", sun.as_str()),
            ("moon", moon.as_str()),
        ]);

        vec![
            GeneratedFile::new(
                format!("src/composables/useTheme.{}", config.language.script_ext()),
                render(composable, &theme_vars),
            ),
            GeneratedFile::new(component_path("ThemeProvider"), render(provider, &theme_vars)),
            GeneratedFile::new(component_path("ThemeToggle"), render(THEME_TOGGLE, &toggle_vars)),
        ]
    }

    fn sidebar(&self, config: &ProjectConfiguration) -> GeneratedFile {
        let icons = IconKit::new(config.framework, config.icon_set);
        let glyphs: Vec<Glyph> = NAV_LINKS.iter().map(|l| l.glyph).collect();

        let links: Vec<String> = NAV_LINKS
            .iter()
            .map(|link| {
                let icon = icons.markup(link.glyph);
                render(
                    SIDEBAR_LINK,
                    &[("href", link.href), ("icon", icon.as_str()), ("label", link.label)],
                )
            })
            .collect();
        let links = indent(&links.join("\n"), 8);
        let icon_imports = icons.imports(&glyphs, false);

        let content = render(
            SIDEBAR,
            &[
                ("lang_attr", lang_attr(config.language)),
                ("icon_imports", icon_imports.as_str()),
                ("links", links.as_str()),
            ],
        );
        GeneratedFile::new(component_path("Sidebar"), content)
    }

    fn sample_form(&self, config: &ProjectConfiguration) -> GeneratedFile {
        let value_type = match config.language {
            Language::JavaScript => "",
            Language::TypeScript => ": string | undefined",
        };
        let content = render(
            SAMPLE_FORM,
            &[
                ("lang_attr", lang_attr(config.language)),
                ("email_pattern", EMAIL_PATTERN),
                ("value_type", value_type),
            ],
        );
        GeneratedFile::new(component_path("SampleForm"), content)
    }
}

impl Starter for Vue {
    fn feature_files(&self, feature: Feature, config: &ProjectConfiguration) -> Vec<GeneratedFile> {
        match feature {
            Feature::DarkMode => self.theme_files(config),
            Feature::Sidebar => vec![self.sidebar(config)],
            Feature::Form => vec![self.sample_form(config)],
            Feature::Animations => Vec::new(),
        }
    }

    fn root(&self, config: &ProjectConfiguration) -> GeneratedFile {
        let dark_mode = config.has_feature(Feature::DarkMode);
        let sidebar = config.has_feature(Feature::Sidebar);
        let form = config.has_feature(Feature::Form);
        let animations = config.has_feature(Feature::Animations);

        let mut imports = Vec::new();
        if dark_mode {
            imports.push("import ThemeProvider from './components/ThemeProvider.vue'");
            imports.push("import ThemeToggle from './components/ThemeToggle.vue'");
        }
        if sidebar {
            imports.push("import Sidebar from './components/Sidebar.vue'");
        }
        if form {
            imports.push("import SampleForm from './components/SampleForm.vue'");
        }

        let mut welcome = render(WELCOME, &[("rewrap_url", REWRAP_URL)]);
        if form {
            welcome.push_str("\n<SampleForm />");
        }
        let mut content = wrap(r#"<div class="max-w-4xl mx-auto">"#, &welcome, "</div>");

        if animations {
            content = wrap(
                "<Transition\n  appear\n  enter-from-class=\"opacity-0 translate-y-5\"\n  enter-active-class=\"transition duration-500 ease-out\"\n>",
                &content,
                "</Transition>",
            );
        }

        let main = wrap(r#"<main class="flex-1 p-4">"#, &content, "</main>");
        let row = if sidebar {
            format!("<Sidebar />\n{}", main)
        } else {
            main
        };

        let mut header_inner = format!(
            "<h1 class=\"text-2xl font-bold\">{}</h1>",
            display_title(&config.project_name)
        );
        if dark_mode {
            header_inner.push_str("\n<ThemeToggle />");
        }
        let header = wrap(
            r#"<header class="bg-primary text-primary-foreground shadow">"#,
            &wrap(
                r#"<div class="max-w-7xl mx-auto py-4 px-4 sm:px-6 lg:px-8 flex justify-between items-center">"#,
                &header_inner,
                "</div>",
            ),
            "</header>",
        );

        let page = format!("{}\n{}", header, wrap(r#"<div class="flex">"#, &row, "</div>"));
        let mut body = wrap(
            r#"<div class="min-h-screen bg-background text-foreground">"#,
            &page,
            "</div>",
        );
        if dark_mode {
            body = wrap("<ThemeProvider>", &body, "</ThemeProvider>");
        }

        let mut content = String::new();
        if !imports.is_empty() {
            content.push_str(&format!(
                "<script setup{}>\n{}\n</script>\n\n",
                lang_attr(config.language),
                imports.join("\n")
            ));
        }
        content.push_str(&wrap("<template>", &body, "</template>"));
        content.push('\n');

        GeneratedFile::new("src/App.vue", content)
    }
}
