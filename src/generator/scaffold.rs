use super::templates::{
    write_template, AutoControllerTemplateData, ControllerTemplateData, ResourceControllerTemplateData,
    RoutesYamlTemplateData, StubMethod, StubParam,
};
use crate::config::DEFAULT_EXTENSION;
use crate::descriptor::{HttpVerb, CONTROLLER_SUFFIX};
use crate::discovery::NAMESPACE_SEPARATOR;
use crate::naming::{to_kebab_case, upper_first};
use crate::params::{build_url, PathParameter};
use crate::router::join_uri;
use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

/// One path segment of a controller name, after case normalisation
static SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("controller name regex should be valid")
});

/// How `make-controller` lays out and fills the new controller.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Directory the controller (and its sub-directories) go under
    pub dir: PathBuf,
    /// Namespace of `dir`, used for the descriptor's controller name
    pub namespace: Option<String>,
    /// Write a route descriptor sidecar and route-ready stubs
    pub auto: bool,
    /// Generate the seven resource methods
    pub resource: bool,
    pub force: bool,
    /// Extension of the controller source file, without the dot
    pub extension: String,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::new(),
            namespace: None,
            auto: false,
            resource: false,
            force: false,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// A controller name split into its directory part and class name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerName {
    /// Sub-directory segments (`Admin/User` → `["Admin"]`)
    pub segments: Vec<String>,
    /// Class name ending in `Controller`
    pub class: String,
}

impl ControllerName {
    /// Parse `Admin/User`, `admin/user-profile` or `PostController`.
    pub fn parse(name: &str) -> Result<Self> {
        let parts: Vec<String> = name
            .split(['/', '\\'])
            .filter(|p| !p.is_empty())
            .map(|p| p.split(['-', '_']).map(upper_first).collect::<String>())
            .collect();
        let Some((last, dirs)) = parts.split_last() else {
            bail!("Controller name must not be empty");
        };
        if let Some(bad) = parts.iter().find(|p| !SEGMENT.is_match(p)) {
            bail!("Invalid controller name segment {bad:?} in {name:?}");
        }
        let class = if last.ends_with(CONTROLLER_SUFFIX) {
            last.clone()
        } else {
            format!("{last}{CONTROLLER_SUFFIX}")
        };
        Ok(Self {
            segments: dirs.to_vec(),
            class,
        })
    }

    /// Class name with the `Controller` suffix removed.
    pub fn short_name(&self) -> &str {
        self.class.strip_suffix(CONTROLLER_SUFFIX).unwrap_or(&self.class)
    }

    /// Fully-qualified name below `namespace`.
    pub fn qualified(&self, namespace: Option<&str>) -> String {
        namespace
            .filter(|ns| !ns.is_empty())
            .into_iter()
            .map(str::to_string)
            .chain(self.segments.iter().cloned())
            .chain(std::iter::once(self.class.clone()))
            .collect::<Vec<_>>()
            .join(NAMESPACE_SEPARATOR)
    }

    fn directory(&self, base: &Path) -> PathBuf {
        self.segments.iter().fold(base.to_path_buf(), |dir, s| dir.join(s))
    }

    /// URL the controller is mounted under in directory mode, relative to
    /// the registration prefix.
    fn base_url(&self) -> String {
        self.segments
            .iter()
            .map(|s| to_kebab_case(s))
            .chain(std::iter::once(to_kebab_case(self.short_name())))
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn request_param() -> StubParam {
    StubParam {
        name: "request".to_string(),
        ty: "Request".to_string(),
        rust_ty: "&Request<Vec<u8>>".to_string(),
    }
}

fn id_param() -> StubParam {
    StubParam {
        name: "id".to_string(),
        ty: "String".to_string(),
        rust_ty: "&str".to_string(),
    }
}

fn stub(name: &str, verb: HttpVerb, params: Vec<StubParam>, base_url: &str) -> StubMethod {
    let placeholders: Vec<PathParameter> = params
        .iter()
        .filter(|p| p.ty != "Request")
        .map(|p| PathParameter {
            name: p.name.clone(),
            optional: false,
        })
        .collect();
    let own = if name == "index" {
        String::new()
    } else {
        build_url(&to_kebab_case(name), &placeholders)
    };
    StubMethod {
        name: name.to_string(),
        verb: verb.as_str().to_string(),
        verb_upper: verb.to_string(),
        url: format!("/{}", join_uri(base_url, &own)),
        params,
    }
}

fn index_methods(base_url: &str) -> Vec<StubMethod> {
    vec![stub("index", HttpVerb::Get, vec![request_param()], base_url)]
}

fn resource_methods(base_url: &str) -> Vec<StubMethod> {
    vec![
        stub("index", HttpVerb::Get, vec![request_param()], base_url),
        stub("create", HttpVerb::Get, vec![request_param()], base_url),
        stub("store", HttpVerb::Post, vec![request_param()], base_url),
        stub("show", HttpVerb::Get, vec![request_param(), id_param()], base_url),
        stub("edit", HttpVerb::Get, vec![request_param(), id_param()], base_url),
        stub("update", HttpVerb::Put, vec![request_param(), id_param()], base_url),
        stub("destroy", HttpVerb::Delete, vec![request_param(), id_param()], base_url),
    ]
}

/// Scaffold a controller. Returns the files written.
///
/// `--auto` adds a `<Name>.routes.yaml` sidecar so the new controller is
/// picked up by directory registration straight away.
pub fn make_controller(name: &str, options: &ScaffoldOptions) -> Result<Vec<PathBuf>> {
    let parsed = ControllerName::parse(name)?;
    let dir = parsed.directory(&options.dir);
    let source = dir.join(format!("{}.{}", parsed.class, options.extension));
    let base_url = parsed.base_url();
    let mut written = Vec::new();

    let created = if options.resource {
        let data = ResourceControllerTemplateData {
            name: parsed.class.clone(),
            methods: resource_methods(&base_url),
            sidecar: options.auto,
        };
        write_template(&source, &data, "controller", options.force)?
    } else if options.auto {
        let data = AutoControllerTemplateData {
            name: parsed.class.clone(),
            base_url: format!("/{base_url}"),
        };
        write_template(&source, &data, "controller", options.force)?
    } else {
        let data = ControllerTemplateData {
            name: parsed.class.clone(),
        };
        write_template(&source, &data, "controller", options.force)?
    };
    if created {
        written.push(source);
    }

    if options.auto {
        let sidecar = dir.join(format!("{}.routes.yaml", parsed.class));
        let data = RoutesYamlTemplateData {
            class: parsed.qualified(options.namespace.as_deref()),
            methods: if options.resource {
                resource_methods(&base_url)
            } else {
                index_methods(&base_url)
            },
        };
        if write_template(&sidecar, &data, "route descriptor", options.force)? {
            written.push(sidecar);
        }
    }

    tracing::info!(controller = %parsed.class, files = written.len(), "Controller scaffolded");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        let n = ControllerName::parse("Admin/user-profile").unwrap();
        assert_eq!(n.segments, vec!["Admin"]);
        assert_eq!(n.class, "UserProfileController");
        assert_eq!(n.qualified(Some("App")), "App::Admin::UserProfileController");
        assert_eq!(n.base_url(), "admin/user-profile");

        let n = ControllerName::parse("PostController").unwrap();
        assert_eq!(n.class, "PostController");
        assert_eq!(n.qualified(None), "PostController");
    }

    #[test]
    fn test_parse_rejects_bad_names() {
        assert!(ControllerName::parse("").is_err());
        assert!(ControllerName::parse("9Lives").is_err());
        assert!(ControllerName::parse("Post Controller").is_err());
    }

    #[test]
    fn test_resource_urls() {
        let methods = resource_methods("post");
        let urls: Vec<_> = methods.iter().map(|m| m.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "/post",
                "/post/create",
                "/post/store",
                "/post/show/{id}",
                "/post/edit/{id}",
                "/post/update/{id}",
                "/post/destroy/{id}"
            ]
        );
    }

    #[test]
    fn test_make_controller_skips_existing() {
        let dir = tempfile::tempdir().unwrap();
        let options = ScaffoldOptions {
            dir: dir.path().to_path_buf(),
            namespace: Some("App".to_string()),
            auto: true,
            ..ScaffoldOptions::default()
        };
        let first = make_controller("Blog/Post", &options).unwrap();
        assert_eq!(first.len(), 2);
        assert!(dir.path().join("Blog/PostController.rs").is_file());
        assert!(dir.path().join("Blog/PostController.routes.yaml").is_file());

        let second = make_controller("Blog/Post", &options).unwrap();
        assert!(second.is_empty());

        let forced = make_controller("Blog/Post", &ScaffoldOptions { force: true, ..options }).unwrap();
        assert_eq!(forced.len(), 2);
    }

    #[test]
    fn test_make_controller_uses_configured_extension() {
        let dir = tempfile::tempdir().unwrap();
        let options = ScaffoldOptions {
            dir: dir.path().to_path_buf(),
            extension: "php".to_string(),
            ..ScaffoldOptions::default()
        };
        let written = make_controller("Post", &options).unwrap();
        assert_eq!(written, vec![dir.path().join("PostController.php")]);
        assert!(!dir.path().join("PostController.rs").exists());
    }
}
