use super::types::ControllerDescriptor;
use crate::error::{Result, RouteError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

/// File-name ending of per-controller descriptor sidecars.
pub const SIDECAR_SUFFIXES: [&str; 3] = [".routes.yaml", ".routes.yml", ".routes.json"];

/// On-disk shape of a descriptor manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogManifest {
    #[serde(default)]
    pub controllers: Vec<ControllerDescriptor>,
}

/// Every controller the assembler can register, keyed by fully-qualified name.
#[derive(Debug, Clone, Default)]
pub struct ControllerCatalog {
    controllers: BTreeMap<String, ControllerDescriptor>,
}

impl ControllerCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor, replacing any previous one with the same name.
    pub fn insert(&mut self, controller: ControllerDescriptor) {
        self.controllers.insert(controller.name.clone(), controller);
    }

    pub fn with(mut self, controller: ControllerDescriptor) -> Self {
        self.insert(controller);
        self
    }

    pub fn get(&self, class: &str) -> Option<&ControllerDescriptor> {
        self.controllers.get(class)
    }

    /// Look a controller up, failing with [`RouteError::ControllerNotFound`].
    pub fn require(&self, class: &str) -> Result<&ControllerDescriptor> {
        self.get(class).ok_or_else(|| RouteError::ControllerNotFound {
            class: class.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    pub fn extend(&mut self, other: ControllerCatalog) {
        self.controllers.extend(other.controllers);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ControllerDescriptor> {
        self.controllers.values()
    }
}

impl From<CatalogManifest> for ControllerCatalog {
    fn from(manifest: CatalogManifest) -> Self {
        let mut catalog = ControllerCatalog::new();
        for c in manifest.controllers {
            catalog.insert(c);
        }
        catalog
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false)
}

/// Parse a manifest from a string. `yaml` selects the format.
pub fn parse_manifest(content: &str, yaml: bool) -> std::result::Result<CatalogManifest, String> {
    if yaml {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }
}

/// Load a catalog manifest. YAML for `.yaml`/`.yml`, JSON otherwise.
pub fn load_catalog(path: &Path) -> Result<ControllerCatalog> {
    let content = std::fs::read_to_string(path).map_err(|e| RouteError::io(path, e))?;
    let manifest = parse_manifest(&content, is_yaml(path)).map_err(|message| {
        RouteError::Catalog {
            path: path.to_path_buf(),
            message,
        }
    })?;
    tracing::debug!(
        path = %path.display(),
        controllers = manifest.controllers.len(),
        "Loaded controller manifest"
    );
    Ok(manifest.into())
}

/// Collect every `*.routes.yaml` / `*.routes.json` sidecar under `dir`.
///
/// Sidecars are read in path order; a later sidecar describing the same
/// controller replaces the earlier one.
pub fn load_sidecars(dir: &Path) -> Result<ControllerCatalog> {
    let mut catalog = ControllerCatalog::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            RouteError::io(path, e.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if SIDECAR_SUFFIXES.iter().any(|s| name.ends_with(s)) {
            catalog.extend(load_catalog(entry.path())?);
        }
    }
    Ok(catalog)
}
