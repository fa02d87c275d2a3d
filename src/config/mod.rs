//! Resolver settings, optionally loaded from a TOML file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the project root when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "graphcool-project.toml";

pub const DEFAULT_MANIFEST_FILE: &str = "graphcool.yml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Root manifest file name inside the project directory
    pub manifest_file: String,
    /// Label for the root module in error messages
    pub root_module_name: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            manifest_file: DEFAULT_MANIFEST_FILE.to_string(),
            root_module_name: "root".to_string(),
        }
    }
}

impl ResolverConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: ResolverConfig = toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Explicit path if given, else `graphcool-project.toml` in the project
    /// root if present, else defaults.
    pub fn discover(explicit: Option<&Path>, project_root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let local: PathBuf = project_root.join(CONFIG_FILE_NAME);
        if local.is_file() {
            return Self::load(&local);
        }

        Ok(Self::default())
    }
}
