//! Config file location.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Application directory under the user config root.
const APP_DIR: &str = "cinedex";

/// Config file name.
const CONFIG_FILE: &str = "config.toml";

/// Resolves the config file path.
///
/// - `Some(dir)`: `{dir}/config.toml`.
/// - `$XDG_CONFIG_HOME/cinedex/config.toml` when that variable is set.
/// - `$HOME/.config/cinedex/config.toml` otherwise.
///
/// # Errors
///
/// Returns an error if `dir` is `None` and neither variable is set.
pub fn resolve_config_path(dir: Option<&Path>) -> Result<PathBuf> {
    resolve_with(dir, |key| std::env::var_os(key))
}

fn resolve_with<F>(dir: Option<&Path>, lookup: F) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    if let Some(d) = dir {
        return Ok(d.join(CONFIG_FILE));
    }

    let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);
    let root = if let Some(xdg) = non_empty("XDG_CONFIG_HOME") {
        xdg
    } else if let Some(home) = non_empty("HOME") {
        home.join(".config")
    } else {
        bail!("cannot locate config directory: neither XDG_CONFIG_HOME nor HOME is set");
    };
    Ok(root.join(APP_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_resolve_with_dir() {
        // Arrange
        let dir = PathBuf::from("/tmp/cinedex-project");

        // Act
        let path = resolve_with(Some(&dir), |_| None).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/tmp/cinedex-project/config.toml"));
    }

    #[test]
    fn test_resolve_prefers_xdg_config_home() {
        // Arrange
        let lookup = |key: &str| match key {
            "XDG_CONFIG_HOME" => Some(OsString::from("/xdg")),
            "HOME" => Some(OsString::from("/home/me")),
            _ => None,
        };

        // Act
        let path = resolve_with(None, lookup).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/xdg/cinedex/config.toml"));
    }

    #[test]
    fn test_resolve_falls_back_to_home() {
        // Arrange
        let lookup = |key: &str| match key {
            "XDG_CONFIG_HOME" => Some(OsString::new()),
            "HOME" => Some(OsString::from("/home/me")),
            _ => None,
        };

        // Act
        let path = resolve_with(None, lookup).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/home/me/.config/cinedex/config.toml"));
    }

    #[test]
    fn test_resolve_without_any_root_fails() {
        // Arrange & Act
        let result = resolve_with(None, |_| None);

        // Assert
        assert!(result.is_err());
    }
}
