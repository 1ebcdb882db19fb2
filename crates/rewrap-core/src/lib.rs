//! Rewrap Core - scaffolding for Vite + Tailwind frontend projects
//!
//! This library turns a handful of answers (framework, language, icon set,
//! optional features) into a ready-to-run project: it drives `npm` to create and
//! set up the scaffold, then writes the styling config and starter components.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Command runner, file writer, template composition, runtime detection
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and the `Installer` state machine
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts and spinners (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use rewrap_core::{compose, DiskWriter, Installer, ProcessRunner, ProjectConfiguration};
//!
//! let config = ProjectConfiguration::default();
//! let files = compose(&config);
//!
//! let installer = Installer::new(ProcessRunner, DiskWriter);
//! let outcome = installer.run(&config, std::path::Path::new(".")).await?;
//! ```

pub mod config;
pub mod error;
pub mod install;
pub mod product;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{Feature, Framework, IconSet, Language, Preset, ProjectConfiguration};
pub use error::ScaffoldError;
pub use install::{DiskWriter, FileWriter, InstallObserver, InstallPlan, Installer, Outcome};
pub use product::ProductConfig;
pub use runtime::{check_runtimes, CommandRunner, CommandSpec, ProcessRunner, RuntimeInfo};
pub use templates::{compose, GeneratedFile};

#[cfg(feature = "tui")]
pub use tui::run;
