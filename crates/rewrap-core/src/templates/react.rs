//! React starter components

use super::icons::{Glyph, IconKit};
use super::{display_title, render, wrap, GeneratedFile, Starter, NAV_LINKS, REWRAP_URL, THEME};
use crate::config::{Feature, Language, ProjectConfiguration};

const THEME_PROVIDER_JS: &str = r#"import { createContext, useContext, useEffect, useState } from 'react';

const ThemeContext = createContext(null);

function initialTheme() {
  const savedTheme = localStorage.getItem('{{storage_key}}');
  if (savedTheme === 'light' || savedTheme === 'dark') {
    return savedTheme;
  }
  return window.matchMedia('(prefers-color-scheme: dark)').matches ? 'dark' : 'light';
}

export function ThemeProvider({ children }) {
  const [{{theme}}, {{set_theme}}] = useState(initialTheme);

  useEffect(() => {
    document.documentElement.classList.toggle('dark', {{theme}} === 'dark');
    localStorage.setItem('{{storage_key}}', {{theme}});
  }, [{{theme}}]);

  const {{toggle_theme}} = () => {
    {{set_theme}}((current) => (current === 'light' ? 'dark' : 'light'));
  };

  return (
    <ThemeContext.Provider value={{ {{theme}}, {{set_theme}}, {{toggle_theme}} }}>
      {children}
    </ThemeContext.Provider>
  );
}

export function {{use_theme}}() {
  const context = useContext(ThemeContext);
  if (!context) {
    throw new Error('{{use_theme}} must be used inside a ThemeProvider');
  }
  return context;
}
"#;

const THEME_PROVIDER_TS: &str = r#"import { createContext, useContext, useEffect, useState, type ReactNode } from 'react';

export type Theme = 'light' | 'dark';

interface ThemeContextValue {
  {{theme}}: Theme;
  {{set_theme}}: (theme: Theme) => void;
  {{toggle_theme}}: () => void;
}

const ThemeContext = createContext<ThemeContextValue | null>(null);

function initialTheme(): Theme {
  const savedTheme = localStorage.getItem('{{storage_key}}');
  if (savedTheme === 'light' || savedTheme === 'dark') {
    return savedTheme;
  }
  return window.matchMedia('(prefers-color-scheme: dark)').matches ? 'dark' : 'light';
}

export function ThemeProvider({ children }: { children: ReactNode }) {
  const [{{theme}}, {{set_theme}}] = useState<Theme>(initialTheme);

  useEffect(() => {
    document.documentElement.classList.toggle('dark', {{theme}} === 'dark');
    localStorage.setItem('{{storage_key}}', {{theme}});
  }, [{{theme}}]);

  const {{toggle_theme}} = () => {
    {{set_theme}}((current) => (current === 'light' ? 'dark' : 'light'));
  };

  return (
    <ThemeContext.Provider value={{ {{theme}}, {{set_theme}}, {{toggle_theme}} }}>
      {children}
    </ThemeContext.Provider>
  );
}

export function {{use_theme}}(): ThemeContextValue {
  const context = useContext(ThemeContext);
  if (!context) {
    throw new Error('{{use_theme}} must be used inside a ThemeProvider');
  }
  return context;
}
"#;

const THEME_TOGGLE: &str = r#"import { {{use_theme}} } from './ThemeProvider';
{{icon_imports}}

export default function ThemeToggle() {
  const { {{theme}}, {{toggle_theme}} } = {{use_theme}}();

  return (
    <button
      type="button"
      onClick={{{toggle_theme}}}
      aria-label="Toggle color theme"
      className="p-2 rounded-full hover:bg-primary-foreground/10"
    >
      {{{theme}} === 'dark' ? {{sun}} : {{moon}}}
    </button>
  );
}
"#;

const SIDEBAR: &str = r#"{{icon_imports}}

export default function Sidebar() {
  return (
    <aside className="hidden md:block bg-secondary text-secondary-foreground w-64 min-h-screen p-4">
      <nav>
        <ul className="space-y-2">
{{links}}
        </ul>
      </nav>
    </aside>
  );
}
"#;

const SIDEBAR_LINK: &str = r#"<li>
  <a href="{{href}}" className="flex items-center space-x-2 p-2 rounded-lg hover:bg-primary/10">
    {{icon}}
    <span>{{label}}</span>
  </a>
</li>"#;

const SAMPLE_FORM: &str = r#"import { useForm } from 'react-hook-form';
{{form_types}}
export default function SampleForm() {
  const {
    register,
    handleSubmit,
    formState: { errors },
  } = useForm{{form_generic}}();

  const onSubmit = (data{{data_type}}) => {
    console.log(data);
  };

  return (
    <form onSubmit={handleSubmit(onSubmit)} className="space-y-4" noValidate>
      <div>
        <label htmlFor="name" className="block text-sm font-medium mb-1">Name</label>
        <input
          id="name"
          type="text"
          {...register('name', { required: 'Name is required' })}
          className="w-full p-2 border rounded-md bg-background"
        />
        {errors.name && <p className="text-red-500 text-sm mt-1">{errors.name.message}</p>}
      </div>
      <div>
        <label htmlFor="email" className="block text-sm font-medium mb-1">Email</label>
        <input
          id="email"
          type="email"
          {...register('email', {
            required: 'Email is required',
            pattern: {
              value: {{email_pattern}},
              message: 'Invalid email address',
            },
          })}
          className="w-full p-2 border rounded-md bg-background"
        />
        {errors.email && <p className="text-red-500 text-sm mt-1">{errors.email.message}</p>}
      </div>
      <div>
        <label htmlFor="message" className="block text-sm font-medium mb-1">Message</label>
        <textarea
          id="message"
          rows={4}
          {...register('message', { required: 'Message is required' })}
          className="w-full p-2 border rounded-md bg-background"
        />
        {errors.message && <p className="text-red-500 text-sm mt-1">{errors.message.message}</p>}
      </div>
      <button
        type="submit"
        className="bg-primary text-primary-foreground px-4 py-2 rounded-md hover:bg-primary/90"
      >
        Submit
      </button>
    </form>
  );
}
"#;

const FORM_TYPES_TS: &str = r#"
type FormValues = {
  name: string;
  email: string;
  message: string;
};
"#;

const WELCOME: &str = r#"<h1 className="text-3xl font-bold mb-4">Welcome to Rewrap</h1>
<p className="mb-4">
  This app was created using{' '}
  <a
    href="{{rewrap_url}}"
    target="_blank"
    rel="noopener noreferrer"
    className="text-primary hover:underline"
  >
    Rewrap
  </a>
</p>"#;

const ROOT: &str = r#"{{imports}}function App() {
  return (
{{body}}
  );
}

export default App;
"#;

/// React starter: `src/components/*.{jsx,tsx}` and `src/App.{jsx,tsx}`
#[derive(Debug, Clone, Copy)]
pub struct React;

fn component_path(name: &str, language: Language) -> String {
    format!("src/components/{}.{}", name, language.jsx_ext())
}

impl React {
    fn theme_files(&self, config: &ProjectConfiguration) -> Vec<GeneratedFile> {
        let theme_vars = THEME.vars();
        let provider = match config.language {
            Language::JavaScript => THEME_PROVIDER_JS,
            Language::TypeScript => THEME_PROVIDER_TS,
        };

        let icons = IconKit::new(config.framework, config.icon_set);
        let icon_imports = icons.imports(&[Glyph::Sun, Glyph::Moon], true);
        let sun = icons.markup(Glyph::Sun);
        let moon = icons.markup(Glyph::Moon);
        let mut toggle_vars: Vec<(&str, &str)> = theme_vars.to_vec();
        toggle_vars.extend([
            ("icon_imports", icon_imports.as_str()),
            ("sun", sun.as_str()),
            ("moon", moon.as_str()),
        ]);

        vec![
            GeneratedFile::new(
                component_path("ThemeProvider", config.language),
                render(provider, &theme_vars),
            ),
            GeneratedFile::new(
                component_path("ThemeToggle", config.language),
                render(THEME_TOGGLE, &toggle_vars),
            ),
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
        let links = super::indent(&links.join("\n"), 10);
        let icon_imports = icons.imports(&glyphs, true);

        let content = render(
            SIDEBAR,
            &[("icon_imports", icon_imports.as_str()), ("links", links.as_str())],
        );
        GeneratedFile::new(component_path("Sidebar", config.language), content)
    }

    fn sample_form(&self, config: &ProjectConfiguration) -> GeneratedFile {
        let (form_types, form_generic, data_type) = match config.language {
            Language::JavaScript => ("", "", ""),
            Language::TypeScript => (FORM_TYPES_TS, "<FormValues>", ": FormValues"),
        };
        let content = render(
            SAMPLE_FORM,
            &[
                ("form_types", form_types),
                ("form_generic", form_generic),
                ("data_type", data_type),
                ("email_pattern", super::EMAIL_PATTERN),
            ],
        );
        GeneratedFile::new(component_path("SampleForm", config.language), content)
    }
}

impl Starter for React {
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
        if animations {
            imports.push("import { motion } from 'motion/react';");
        }
        if dark_mode {
            imports.push("import { ThemeProvider } from './components/ThemeProvider';");
            imports.push("import ThemeToggle from './components/ThemeToggle';");
        }
        if sidebar {
            imports.push("import Sidebar from './components/Sidebar';");
        }
        if form {
            imports.push("import SampleForm from './components/SampleForm';");
        }
        let imports = if imports.is_empty() {
            String::new()
        } else {
            format!("{}\n\n", imports.join("\n"))
        };

        let mut welcome = render(WELCOME, &[("rewrap_url", REWRAP_URL)]);
        if form {
            welcome.push_str("\n<SampleForm />");
        }
        let mut content = wrap(r#"<div className="max-w-4xl mx-auto">"#, &welcome, "</div>");

        if animations {
            content = wrap(
                "<motion.div\n  initial={{ opacity: 0, y: 20 }}\n  animate={{ opacity: 1, y: 0 }}\n  transition={{ duration: 0.5 }}\n>",
                &content,
                "</motion.div>",
            );
        }

        let main = wrap(r#"<main className="flex-1 p-4">"#, &content, "</main>");
        let row = if sidebar {
            format!("<Sidebar />\n{}", main)
        } else {
            main
        };

        let mut header_inner = format!(
            "<h1 className=\"text-2xl font-bold\">{}</h1>",
            display_title(&config.project_name)
        );
        if dark_mode {
            header_inner.push_str("\n<ThemeToggle />");
        }
        let header = wrap(
            r#"<header className="bg-primary text-primary-foreground shadow">"#,
            &wrap(
                r#"<div className="max-w-7xl mx-auto py-4 px-4 sm:px-6 lg:px-8 flex justify-between items-center">"#,
                &header_inner,
                "</div>",
            ),
            "</header>",
        );

        let page = format!("{}\n{}", header, wrap(r#"<div className="flex">"#, &row, "</div>"));
        let mut body = wrap(
            r#"<div className="min-h-screen bg-background text-foreground">"#,
            &page,
            "</div>",
        );
        if dark_mode {
            body = wrap("<ThemeProvider>", &body, "</ThemeProvider>");
        }

        let body = super::indent(&body, 4);
        let content = render(ROOT, &[("imports", imports.as_str()), ("body", body.as_str())]);
        GeneratedFile::new(format!("src/App.{}", config.language.jsx_ext()), content)
    }
}
