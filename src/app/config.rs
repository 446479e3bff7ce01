//! Application configuration for daykit.

use std::path::PathBuf;

use crate::domain::AppError;

/// Environment variable overriding the directory that receives day directories.
pub const ROOT_ENV_VAR: &str = "DAYKIT_ROOT";

/// Application-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory under which `dayNN/` directories are created.
    pub root: PathBuf,
}

impl Config {
    /// Create a new configuration with a custom root.
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    /// Resolve configuration from a requested root or the current directory.
    ///
    /// The CLI fills `root` from `--root` or `DAYKIT_ROOT`.
    pub fn resolve(root: Option<PathBuf>) -> Result<Self, AppError> {
        let root = match root {
            Some(root) => root,
            None => std::env::current_dir()?,
        };

        if root.exists() && !root.is_dir() {
            return Err(AppError::config_error(format!(
                "Root '{}' exists but is not a directory",
                root.display()
            )));
        }

        Ok(Self::with_root(root))
    }
}
