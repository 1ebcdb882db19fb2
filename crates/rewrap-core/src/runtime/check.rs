//! Runtime detection for npm and Node.js

use super::version;
use anyhow::Result;
use std::path::PathBuf;
use std::process::Command;

/// Where users are sent when npm is missing
pub const NODE_DOWNLOAD_URL: &str = "https://nodejs.org";

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    /// Human readable `name (version)` line
    pub fn describe(&self) -> String {
        if self.available {
            format!("{} ({})", self.name, self.version.as_deref().unwrap_or("unknown"))
        } else {
            format!("{} (not installed)", self.name)
        }
    }
}

fn check_tool(program: &str, name: &'static str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if npm is available (the executable may be overridden)
pub fn check_npm(npm: &str) -> RuntimeInfo {
    check_tool(npm, "npm")
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    check_tool("node", "Node.js")
}

/// Result of the pre-install checks
#[derive(Debug, Clone)]
pub struct RuntimeReport {
    pub runtimes: Vec<RuntimeInfo>,
    /// Non-fatal problems worth showing before installing
    pub warnings: Vec<String>,
}

/// Check that npm works; Node.js version and npm cache problems are advisory
pub fn check_runtimes(npm: &str) -> Result<RuntimeReport> {
    let npm_info = check_npm(npm);
    if !npm_info.available {
        anyhow::bail!(
            "npm is not installed or not accessible (tried `{}`).\n\
             Install Node.js from {} and try again.",
            npm,
            NODE_DOWNLOAD_URL
        );
    }

    let mut warnings = Vec::new();
    let node_info = check_node();
    if let Some(found) = node_info.version.as_deref() {
        if let Some(warning) = version::check_node_version(found) {
            warnings.push(warning);
        }
    }
    if let Some(warning) = check_npm_cache(npm) {
        warnings.push(warning);
    }

    Ok(RuntimeReport {
        runtimes: vec![npm_info, node_info],
        warnings,
    })
}

/// Probe whether the npm cache folder is writable
///
/// A cache owned by root (after a `sudo npm install`) makes every later install fail
/// with EACCES, so the problem is reported up front.
pub fn check_npm_cache(npm: &str) -> Option<String> {
    let output = Command::new(npm).args(["config", "get", "cache"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let cache_dir = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());
    if cache_dir.as_os_str().is_empty() || !cache_dir.exists() {
        return None;
    }

    cache_write_warning(&cache_dir)
}

fn cache_write_warning(cache_dir: &std::path::Path) -> Option<String> {
    let probe = cache_dir.join("_rewrap_write_test");
    match std::fs::write(&probe, "test") {
        Ok(()) => {
            let _ = std::fs::remove_file(&probe);
            None
        }
        Err(_) => Some(format!(
            "Your npm cache folder ({}) has incorrect permissions.\n\
             To fix this, run: sudo chown -R $(whoami) ~/.npm",
            cache_dir.display()
        )),
    }
}
