//! Rewrap CLI - Vite + Tailwind project scaffolding

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use colored::Colorize;
use rewrap_core::config::parse_package_list;
use rewrap_core::tui::CreateArgs;
use rewrap_core::{Feature, Framework, IconSet, Language, Outcome, Preset, ProductConfig};
use std::path::PathBuf;

/// Rewrap product configuration
#[derive(Clone)]
pub struct RewrapConfig;

impl ProductConfig for RewrapConfig {
    fn name(&self) -> &'static str {
        "rewrap"
    }

    fn display_name(&self) -> &'static str {
        "Rewrap: Vite + Tailwind CSS installer"
    }

    fn npm_env(&self) -> &'static str {
        "REWRAP_NPM"
    }

    fn docs_url(&self) -> &'static str {
        "https://github.com/heycalebszn/Rewrap-"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding Vite + Tailwind CSS projects with starter components"
    }
}

#[derive(Parser, Debug)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub create: CliCreateArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project, or set up an existing one
    Create(CliCreateArgs),
}

#[derive(Parser, Debug, Default)]
pub struct CliCreateArgs {
    /// Project name (also the directory created for new projects)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Set up the project in --directory (or the current directory) instead of creating one
    #[arg(long)]
    pub existing: bool,

    /// Directory to work in
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// UI framework
    #[arg(short, long, value_enum)]
    pub framework: Option<Framework>,

    /// Source language
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// Include shadcn/ui (React only)
    #[arg(long = "component-kit", value_name = "BOOL")]
    pub component_kit: Option<bool>,

    /// Icon set: lucide, fontawesome or heroicons
    #[arg(long, value_name = "SET")]
    pub icons: Option<String>,

    /// Features to include (comma-separated: dark-mode,sidebar,form,animations)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub features: Option<Vec<Feature>>,

    /// Additional npm packages to install (comma-separated)
    #[arg(long)]
    pub packages: Option<String>,

    /// YAML file with pre-filled answers
    #[arg(long, value_name = "FILE")]
    pub preset: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Show the commands and files without running anything
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl Args {
    /// Command-line definition named and described by the product
    fn cli<C: ProductConfig>(product: &C) -> clap::Command {
        Args::command()
            .name(product.name())
            .bin_name(product.name())
            .about(product.cli_description())
    }

    fn parse_for<C: ProductConfig>(product: &C) -> Args {
        let matches = Self::cli(product).get_matches();
        Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }
}

impl CliCreateArgs {
    /// Answers given as flags
    fn flag_preset(&self) -> Preset {
        Preset {
            project_name: self.name.clone(),
            new_project: self.existing.then_some(false),
            framework: self.framework,
            language: self.language,
            component_kit: self.component_kit,
            icon_set: self.icons.as_deref().map(IconSet::parse),
            features: self.features.as_ref().map(|f| f.iter().copied().collect()),
            packages: self.packages.as_deref().map(parse_package_list),
        }
    }

    /// Preset file first, flags on top
    fn into_create_args(self) -> Result<CreateArgs> {
        let mut preset = match &self.preset {
            Some(path) => Preset::load(path)?,
            None => Preset::default(),
        };
        preset.merge(self.flag_preset());

        Ok(CreateArgs {
            preset,
            directory: self.directory,
            yes: self.yes,
            dry_run: self.dry_run,
        })
    }
}

async fn run(config: &RewrapConfig, args: CliCreateArgs) -> Result<Outcome> {
    let create_args = args.into_create_args()?;
    rewrap_core::run(config, create_args).await
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = RewrapConfig;
    let args = Args::parse_for(&config);

    // No subcommand provided: the top-level flags describe the create run
    let create_args = match args.command {
        Some(Command::Create(create_args)) => create_args,
        None => args.create,
    };

    let result = run(&config, create_args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}
