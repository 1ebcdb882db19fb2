//! Node.js version comparison

use anyhow::Result;
use semver::Version;

/// Oldest Node.js release supported by the current `create-vite`
pub const MIN_NODE_VERSION: &str = "20.19.0";

/// Compare an installed Node.js version against [`MIN_NODE_VERSION`]
/// Returns a warning message if the installed version is older
pub fn check_node_version(installed: &str) -> Option<String> {
    check_minimum(installed, MIN_NODE_VERSION)
}

/// Compare `installed` against `minimum`, skipping the warning when either can't be parsed
pub fn check_minimum(installed: &str, minimum: &str) -> Option<String> {
    let installed_ver = parse_version(installed).ok()?;
    let minimum_ver = parse_version(minimum).ok()?;

    if installed_ver < minimum_ver {
        Some(format!(
            "Node.js {} is older than {}.\n\
             Vite may refuse to run. Consider upgrading: https://nodejs.org",
            installed_ver, minimum_ver
        ))
    } else {
        None
    }
}

/// Parse version string, handling a leading `v` as printed by `node --version`
pub fn parse_version(version_str: &str) -> Result<Version> {
    let trimmed = version_str.trim();
    let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_old_node_warns() {
        let warning = check_node_version("v18.19.1");
        assert!(warning.is_some());
        assert!(warning.unwrap().contains("20.19.0"));
    }

    #[test]
    fn test_minimum_node_is_fine() {
        assert!(check_node_version("v20.19.0").is_none());
    }

    #[test]
    fn test_newer_node_is_fine() {
        assert!(check_node_version("v22.12.0\n").is_none());
    }

    #[test]
    fn test_invalid_versions() {
        // Should return None (no warning) for invalid versions
        assert!(check_node_version("not-a-version").is_none());
        assert!(parse_version("v1.2").is_err());
    }
}
