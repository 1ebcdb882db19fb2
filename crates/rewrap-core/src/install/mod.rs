//! Project installation
//!
//! This module provides:
//! - [`InstallPlan`]: the commands and files for one configuration
//! - [`Installer`]: executes a plan through a [`CommandRunner`](crate::runtime::CommandRunner)
//!   and a [`FileWriter`], reporting progress to an [`InstallObserver`]
//! - [`DiskWriter`]: the filesystem-backed writer

pub mod orchestrator;
pub mod plan;
pub mod writer;

pub use orchestrator::{exit_code, InstallObserver, Installer, NoopObserver, Outcome};
pub use plan::{feature_packages, InstallPlan, Stage, Step, Tools};
pub use writer::{DiskWriter, FileWriter};
