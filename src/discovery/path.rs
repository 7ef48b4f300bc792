use crate::config::ProjectConfig;
use crate::error::{Result, RouteError};
use crate::naming::to_kebab_case;
use std::path::{Component, Path, PathBuf};

/// Namespace separator used in fully-qualified controller names.
pub const NAMESPACE_SEPARATOR: &str = "::";

fn path_segments(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

/// Map a directory onto a namespace through the declared source roots.
///
/// When several roots contain the directory the deepest one wins. The
/// directory's remaining path segments are appended to the root's namespace.
pub fn resolve_namespace(dir: &Path, config: &ProjectConfig) -> Result<String> {
    if !dir.is_dir() {
        return Err(RouteError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let canonical = dir.canonicalize().map_err(|e| RouteError::io(dir, e))?;

    let mut best: Option<(usize, &str, PathBuf)> = None;
    for (namespace, root) in &config.source_roots {
        let Ok(root) = config.resolve(root).canonicalize() else {
            continue;
        };
        let Ok(rest) = canonical.strip_prefix(&root) else {
            continue;
        };
        let depth = root.components().count();
        if best.as_ref().map_or(true, |(d, _, _)| depth > *d) {
            best = Some((depth, namespace.as_str(), rest.to_path_buf()));
        }
    }

    let (_, namespace, rest) = best.ok_or(RouteError::NamespaceResolution { path: canonical })?;
    let mut parts = vec![namespace.trim_end_matches(':').to_string()];
    parts.extend(path_segments(&rest));
    Ok(parts.join(NAMESPACE_SEPARATOR))
}

/// `file` relative to `base`, forward-slash separated, no leading separator.
pub fn relative_path(file: &Path, base: &Path) -> String {
    match file.strip_prefix(base) {
        Ok(rest) => path_segments(rest).join("/"),
        Err(_) => file
            .to_string_lossy()
            .replace('\\', "/")
            .trim_start_matches('/')
            .to_string(),
    }
}

/// Directory part of a relative path with each segment kebab-cased.
///
/// `Admin/UserSettings/ProfileController.rs` → `admin/user-settings`
pub fn sub_prefix(relative_path: &str) -> String {
    let mut parts: Vec<&str> = relative_path.split('/').collect();
    parts.pop();
    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .map(to_kebab_case)
        .collect::<Vec<_>>()
        .join("/")
}

/// Fully-qualified controller name for a file found under the namespace root.
pub fn controller_class(namespace: &str, relative_path: &str, extension: &str) -> String {
    let dotted = format!(".{extension}");
    let without_ext = relative_path.strip_suffix(&dotted).unwrap_or(relative_path);
    let sub = without_ext
        .split('/')
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(NAMESPACE_SEPARATOR);
    match (namespace.is_empty(), sub.is_empty()) {
        (_, true) => namespace.to_string(),
        (true, false) => sub,
        (false, false) => format!("{namespace}{NAMESPACE_SEPARATOR}{sub}"),
    }
}
