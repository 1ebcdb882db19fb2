//! Svelte 5 starter components (runes mode)

use super::icons::{Glyph, IconKit};
use super::{
    display_title, indent, render, wrap, GeneratedFile, Starter, EMAIL_PATTERN, NAV_LINKS,
    REWRAP_URL, THEME,
};
use crate::config::{Feature, Language, ProjectConfiguration};

const THEME_PROVIDER_JS: &str = r#"<script module>
  import { getContext } from 'svelte';

  const themeKey = Symbol('{{storage_key}}');

  export function {{use_theme}}() {
    const context = getContext(themeKey);
    if (!context) {
      throw new Error('{{use_theme}} must be used inside a ThemeProvider');
    }
    return context;
  }
</script>

<script>
  import { setContext } from 'svelte';

  let { children } = $props();

  function initialTheme() {
    const savedTheme = localStorage.getItem('{{storage_key}}');
    if (savedTheme === 'light' || savedTheme === 'dark') {
      return savedTheme;
    }
    return window.matchMedia('(prefers-color-scheme: dark)').matches ? 'dark' : 'light';
  }

  let {{theme}} = $state(initialTheme());

  $effect(() => {
    document.documentElement.classList.toggle('dark', {{theme}} === 'dark');
    localStorage.setItem('{{storage_key}}', {{theme}});
  });

  setContext(themeKey, {
    get {{theme}}() {
      return {{theme}};
    },
    {{set_theme}}(value) {
      {{theme}} = value;
    },
    {{toggle_theme}}() {
      {{theme}} = {{theme}} === 'light' ? 'dark' : 'light';
    },
  });
</script>

{@render children?.()}
"#;

const THEME_PROVIDER_TS: &str = r#"<script module lang="ts">
  import { getContext } from 'svelte';

  export type Theme = 'light' | 'dark';

  export interface ThemeContext {
    readonly {{theme}}: Theme;
    {{set_theme}}(theme: Theme): void;
    {{toggle_theme}}(): void;
  }

  const themeKey = Symbol('{{storage_key}}');

  export function {{use_theme}}(): ThemeContext {
    const context = getContext<ThemeContext | undefined>(themeKey);
    if (!context) {
      throw new Error('{{use_theme}} must be used inside a ThemeProvider');
    }
    return context;
  }
</script>

<script lang="ts">
  import { setContext, type Snippet } from 'svelte';

  let { children }: { children?: Snippet } = $props();

  function initialTheme(): Theme {
    const savedTheme = localStorage.getItem('{{storage_key}}');
    if (savedTheme === 'light' || savedTheme === 'dark') {
      return savedTheme;
    }
    return window.matchMedia('(prefers-color-scheme: dark)').matches ? 'dark' : 'light';
  }

  let {{theme}} = $state<Theme>(initialTheme());

  $effect(() => {
    document.documentElement.classList.toggle('dark', {{theme}} === 'dark');
    localStorage.setItem('{{storage_key}}', {{theme}});
  });

  setContext<ThemeContext>(themeKey, {
    get {{theme}}() {
      return {{theme}};
    },
    {{set_theme}}(value: Theme) {
      {{theme}} = value;
    },
    {{toggle_theme}}() {
      {{theme}} = {{theme}} === 'light' ? 'dark' : 'light';
    },
  });
</script>

{@render children?.()}
"#;

const THEME_TOGGLE: &str = r#"<script{{lang_attr}}>
  import { {{use_theme}} } from './ThemeProvider.svelte';
{{icon_imports}}

  const themeContext = {{use_theme}}();
</script>

<button
  type="button"
  aria-label="Toggle color theme"
  class="p-2 rounded-full hover:bg-primary-foreground/10"
  onclick={() => themeContext.{{toggle_theme}}()}
>
  {#if themeContext.{{theme}} === 'dark'}
    {{sun}}
  {:else}
    {{moon}}
  {/if}
</button>
"#;

const SIDEBAR: &str = r#"<script{{lang_attr}}>
{{icon_imports}}
</script>

<aside class="hidden md:block bg-secondary text-secondary-foreground w-64 min-h-screen p-4">
  <nav>
    <ul class="space-y-2">
{{links}}
    </ul>
  </nav>
</aside>
"#;

const SIDEBAR_LINK: &str = r#"<li>
  <a href="{{href}}" class="flex items-center space-x-2 p-2 rounded-lg hover:bg-primary/10">
    {{icon}}
    <span>{{label}}</span>
  </a>
</li>"#;

const SAMPLE_FORM: &str = r#"<script{{lang_attr}}>
  const emailPattern = {{email_pattern}};
{{form_types}}
  let values = $state({ name: '', email: '', message: '' });
  let errors = $state{{errors_generic}}({});

  function validate() {
    const next{{errors_annotation}} = {};
    if (!values.name) {
      next.name = 'Name is required';
    }
    if (!values.email) {
      next.email = 'Email is required';
    } else if (!emailPattern.test(values.email)) {
      next.email = 'Invalid email address';
    }
    if (!values.message) {
      next.message = 'Message is required';
    }
    errors = next;
    return Object.keys(next).length === 0;
  }

  function onsubmit(event{{event_type}}) {
    event.preventDefault();
    if (validate()) {
      console.log($state.snapshot(values));
    }
  }
</script>

<form class="space-y-4" novalidate {onsubmit}>
  <div>
    <label for="name" class="block text-sm font-medium mb-1">Name</label>
    <input
      id="name"
      type="text"
      bind:value={values.name}
      class="w-full p-2 border rounded-md bg-background"
    />
    {#if errors.name}
      <p class="text-red-500 text-sm mt-1">{errors.name}</p>
    {/if}
  </div>
  <div>
    <label for="email" class="block text-sm font-medium mb-1">Email</label>
    <input
      id="email"
      type="email"
      bind:value={values.email}
      class="w-full p-2 border rounded-md bg-background"
    />
    {#if errors.email}
      <p class="text-red-500 text-sm mt-1">{errors.email}</p>
    {/if}
  </div>
  <div>
    <label for="message" class="block text-sm font-medium mb-1">Message</label>
    <textarea
      id="message"
      rows="4"
      bind:value={values.message}
      class="w-full p-2 border rounded-md bg-background"
    ></textarea>
    {#if errors.message}
      <p class="text-red-500 text-sm mt-1">{errors.message}</p>
    {/if}
  </div>
  <button
    type="submit"
    class="bg-primary text-primary-foreground px-4 py-2 rounded-md hover:bg-primary/90"
  >
    Submit
  </button>
</form>
"#;

const FORM_TYPES_TS: &str = r#"
  type Field = 'name' | 'email' | 'message';
  type FormErrors = Partial<Record<Field, string>>;
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

/// Svelte starter: `src/lib/*.svelte` and `src/App.svelte`
#[derive(Debug, Clone, Copy)]
pub struct Svelte;

fn component_path(name: &str) -> String {
    format!("src/lib/{}.svelte", name)
}

fn lang_attr(language: Language) -> &'static str {
    match language {
        Language::JavaScript => "",
        Language::TypeScript => " lang=\"ts\"",
    }
}

impl Svelte {
    fn theme_files(&self, config: &ProjectConfiguration) -> Vec<GeneratedFile> {
        let theme_vars = THEME.vars();
        let provider = match config.language {
            Language::JavaScript => THEME_PROVIDER_JS,
            Language::TypeScript => THEME_PROVIDER_TS,
        };

        let icons = IconKit::new(config.framework, config.icon_set);
        let icon_imports = indent(&icons.imports(&[Glyph::Sun, Glyph::Moon], true), 2);
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
        let links = indent(&links.join("\n"), 6);
        let icon_imports = indent(&icons.imports(&glyphs, true), 2);

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
        let (form_types, errors_generic, errors_annotation, event_type) = match config.language {
            Language::JavaScript => ("", "", "", ""),
            Language::TypeScript => (FORM_TYPES_TS, "<FormErrors>", ": FormErrors", ": SubmitEvent"),
        };
        let content = render(
            SAMPLE_FORM,
            &[
                ("lang_attr", lang_attr(config.language)),
                ("email_pattern", EMAIL_PATTERN),
                ("form_types", form_types),
                ("errors_generic", errors_generic),
                ("errors_annotation", errors_annotation),
                ("event_type", event_type),
            ],
        );
        GeneratedFile::new(component_path("SampleForm"), content)
    }
}

impl Starter for Svelte {
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

        let mut script = Vec::new();
        if animations {
            script.push("import { onMount } from 'svelte';");
            script.push("import { fly } from 'svelte/transition';");
        }
        if dark_mode {
            script.push("import ThemeProvider from './lib/ThemeProvider.svelte';");
            script.push("import ThemeToggle from './lib/ThemeToggle.svelte';");
        }
        if sidebar {
            script.push("import Sidebar from './lib/Sidebar.svelte';");
        }
        if form {
            script.push("import SampleForm from './lib/SampleForm.svelte';");
        }
        if animations {
            script.push("");
            script.push("let visible = $state(false);");
            script.push("");
            script.push("onMount(() => {\n  visible = true;\n});");
        }

        let mut welcome = render(WELCOME, &[("rewrap_url", REWRAP_URL)]);
        if form {
            welcome.push_str("\n<SampleForm />");
        }
        let mut content = wrap(r#"<div class="max-w-4xl mx-auto">"#, &welcome, "</div>");

        if animations {
            content = wrap(
                "{#if visible}",
                &wrap("<div in:fly={{ y: 20, duration: 500 }}>", &content, "</div>"),
                "{/if}",
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

        let mut app = String::new();
        if !script.is_empty() {
            app.push_str(&wrap(
                &format!("<script{}>", lang_attr(config.language)),
                &script.join("\n"),
                "</script>",
            ));
            app.push_str("\n\n");
        }
        app.push_str(&body);
        app.push('\n');

        GeneratedFile::new("src/App.svelte", app)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Framework, IconSet};

    fn config(features: &[Feature]) -> ProjectConfiguration {
        ProjectConfiguration {
            framework: Framework::Svelte,
            features: features.iter().copied().collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_bare_root_has_no_script() {
        let root = Svelte.root(&config(&[]));
        assert_eq!(root.path.to_string_lossy(), "src/App.svelte");
        assert!(root
            .content
            .starts_with("<div class=\"min-h-screen bg-background text-foreground\">"));
        assert!(!root.content.contains("<script"));
    }

    #[test]
    fn test_theme_provider_exposes_capability() {
        let files = Svelte.feature_files(Feature::DarkMode, &config(&[Feature::DarkMode]));
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path.to_string_lossy(), "src/lib/ThemeProvider.svelte");

        let provider = &files[0].content;
        assert!(provider.contains("export function useTheme(): ThemeContext"));
        assert!(provider.contains("get theme() {"));
        assert!(provider.contains("toggleTheme() {"));
        assert!(provider.contains("{@render children?.()}"));

        let toggle = &files[1].content;
        assert!(toggle.contains("import { useTheme } from './ThemeProvider.svelte';"));
        assert!(toggle.contains("onclick={() => themeContext.toggleTheme()}"));
        assert!(toggle.contains("  import { Sun, Moon } from 'lucide-svelte';"));
    }

    #[test]
    fn test_javascript_provider_is_untyped() {
        let mut cfg = config(&[Feature::DarkMode]);
        cfg.language = Language::JavaScript;
        let files = Svelte.feature_files(Feature::DarkMode, &cfg);
        assert!(files[0].content.starts_with("<script module>\n"));
        assert!(!files[0].content.contains("ThemeContext"));
        assert!(files[1].content.starts_with("<script>\n"));
    }

    #[test]
    fn test_sidebar_with_steeze_heroicons() {
        let mut cfg = config(&[Feature::Sidebar]);
        cfg.icon_set = IconSet::Heroicons;
        let sidebar = &Svelte.feature_files(Feature::Sidebar, &cfg)[0].content;

        assert!(sidebar.contains("  import { Icon } from '@steeze-ui/svelte-icon';"));
        assert!(sidebar.contains("  import { Home, Cog, User } from '@steeze-ui/heroicons';"));
        assert!(sidebar.contains("<Icon src={Cog} theme=\"solid\" class=\"w-6 h-6\" />"));
        assert!(sidebar.contains("<span>Profile</span>"));
    }

    #[test]
    fn test_form_validates_natively() {
        let form = &Svelte.feature_files(Feature::Form, &config(&[Feature::Form]))[0].content;
        assert!(form.contains("let errors = $state<FormErrors>({});"));
        assert!(form.contains("function onsubmit(event: SubmitEvent)"));
        assert!(form.contains("<form class=\"space-y-4\" novalidate {onsubmit}>"));
        assert!(form.contains("'Invalid email address'"));
    }

    #[test]
    fn test_animated_root_mounts_with_fly() {
        let root = Svelte.root(&config(&[Feature::Animations, Feature::Form]));
        let app = &root.content;

        assert!(app.starts_with("<script lang=\"ts\">\n  import { onMount } from 'svelte';"));
        assert!(app.contains("  let visible = $state(false);"));
        assert!(app.contains("<div in:fly={{ y: 20, duration: 500 }}>"));
        let visible = app.find("{#if visible}").unwrap();
        let form = app.find("<SampleForm />").unwrap();
        assert!(visible < form);
    }
}
