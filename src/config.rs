//! # Project Configuration
//!
//! Loads `autoroute.toml`, the project-level description the assembler needs
//! to turn directories into controller names:
//!
//! ```toml
//! controller_suffix = "Controller"
//! file_extension = "rs"
//! injected_types = ["Request"]
//! catalog = "routes.yaml"
//!
//! [source_roots]
//! "App" = "app"
//! ```
//!
//! Relative paths (`project_root`, `catalog`, source roots) are resolved
//! against the directory containing the configuration file.

use crate::descriptor::{self, ControllerCatalog, CONTROLLER_SUFFIX};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "autoroute.toml";

/// Controller source extension when none is configured
pub const DEFAULT_EXTENSION: &str = "rs";

fn default_suffix() -> String {
    CONTROLLER_SUFFIX.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_injected() -> Vec<String> {
    vec!["Request".to_string()]
}

/// Project-wide settings for controller discovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Root that source roots and the catalog are relative to
    #[serde(default)]
    pub project_root: PathBuf,

    /// Namespace prefix → source directory (relative to `project_root`)
    #[serde(default)]
    pub source_roots: BTreeMap<String, PathBuf>,

    /// File-name ending that marks a controller
    #[serde(default = "default_suffix")]
    pub controller_suffix: String,

    /// Extension of controller source files, without the dot
    #[serde(default = "default_extension")]
    pub file_extension: String,

    /// Parameter types injected by the framework, never URL placeholders
    #[serde(default = "default_injected")]
    pub injected_types: Vec<String>,

    /// Optional descriptor manifest (YAML or JSON)
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            source_roots: BTreeMap::new(),
            controller_suffix: default_suffix(),
            file_extension: default_extension(),
            injected_types: default_injected(),
            catalog: None,
        }
    }
}

impl ProjectConfig {
    /// Load `path`; see [`load_config`].
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        load_config(path)
    }

    /// Builder-style source root declaration.
    pub fn with_source_root(mut self, namespace: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        self.source_roots.insert(namespace.into(), dir.into());
        self
    }

    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = root.into();
        self
    }

    /// Resolve a project-relative path.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }

    /// Semantic checks serde cannot express. Returns every problem found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut issues = Vec::new();
        if self.controller_suffix.trim().is_empty() {
            issues.push("controller_suffix must not be empty".to_string());
        }
        if self.file_extension.trim().is_empty() || self.file_extension.starts_with('.') {
            issues.push("file_extension must be a bare extension such as \"rs\"".to_string());
        }
        for ns in self.source_roots.keys() {
            if ns.trim_matches(':').is_empty() {
                issues.push("source_roots contains an empty namespace".to_string());
            }
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }

    /// Load the catalog named by `catalog`, or an empty one.
    pub fn load_catalog(&self) -> anyhow::Result<ControllerCatalog> {
        match &self.catalog {
            Some(path) => {
                let path = self.resolve(path);
                descriptor::load_catalog(&path)
                    .with_context(|| format!("Failed to load catalog: {}", path.display()))
            }
            None => Ok(ControllerCatalog::new()),
        }
    }
}

/// Load and validate a configuration file.
pub fn load_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let mut config: ProjectConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    config.project_root = if config.project_root.as_os_str().is_empty() {
        base.to_path_buf()
    } else if config.project_root.is_relative() {
        base.join(&config.project_root)
    } else {
        config.project_root
    };

    if let Err(issues) = config.validate() {
        anyhow::bail!("Invalid config {}: {}", path.display(), issues.join(", "));
    }

    tracing::info!(
        path = %path.display(),
        source_roots = config.source_roots.len(),
        "Configuration loaded"
    );
    Ok(config)
}
