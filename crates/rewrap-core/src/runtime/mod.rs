//! Runtime detection and external command execution
//!
//! This module provides:
//! - npm / Node.js detection and advisory checks
//! - The [`CommandRunner`] abstraction used for every package-manager call

pub mod check;
pub mod command;
pub mod version;

pub use check::{check_node, check_npm, check_runtimes, RuntimeInfo, RuntimeReport};
pub use command::{CommandOutput, CommandRunner, CommandSpec, ProcessRunner};
