//! # Discovery Module
//!
//! Finds controller files below a directory and works out, for each one, the
//! fully-qualified controller name, the URL sub-prefix its sub-directories
//! contribute and whether an exclusion rule removes it.
//!
//! ```text
//! app/Http/Controllers/            (namespace App::Http::Controllers)
//! ├── PostController.rs            → App::Http::Controllers::PostController, sub-prefix ""
//! └── Admin/UserSettingsController.rs
//!                                  → App::Http::Controllers::Admin::UserSettingsController,
//!                                    sub-prefix "admin"
//! ```

mod exclusion;
mod path;

pub use exclusion::*;
pub use path::*;

use crate::config::ProjectConfig;
use crate::descriptor::short_name;
use crate::error::{Result, RouteError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A controller file found during a directory walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredController {
    /// Fully-qualified controller name
    pub class: String,
    /// Basename with the configured controller suffix removed
    pub short_name: String,
    pub path: PathBuf,
    /// Path relative to the walked directory, `/`-separated
    pub relative_path: String,
    /// Kebab-cased directory part of `relative_path`
    pub sub_prefix: String,
}

/// Walk `dir` and describe every controller file, in path order.
pub fn discover_controllers(
    dir: &Path,
    namespace: &str,
    config: &ProjectConfig,
) -> Result<Vec<DiscoveredController>> {
    let file_suffix = format!("{}.{}", config.controller_suffix, config.file_extension);
    let mut found = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            RouteError::io(path, e.into())
        })?;
        if !entry.file_type().is_file() || !entry.file_name().to_string_lossy().ends_with(&file_suffix) {
            continue;
        }

        let relative = relative_path(entry.path(), dir);
        let class = controller_class(namespace, &relative, &config.file_extension);
        found.push(DiscoveredController {
            short_name: short_name(&class, &config.controller_suffix),
            class,
            path: entry.path().to_path_buf(),
            sub_prefix: sub_prefix(&relative),
            relative_path: relative,
        });
    }

    tracing::debug!(dir = %dir.display(), count = found.len(), "Discovered controllers");
    Ok(found)
}
