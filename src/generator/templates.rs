use askama::Template;
use std::fs;
use std::path::Path;

/// One parameter of a scaffolded controller method.
#[derive(Debug, Clone)]
pub struct StubParam {
    pub name: String,
    /// Type name written to the route descriptor (`Request`, `String`)
    pub ty: String,
    /// Rust type used in the generated signature
    pub rust_ty: String,
}

/// One method of a scaffolded controller.
#[derive(Debug, Clone)]
pub struct StubMethod {
    pub name: String,
    /// Lowercase verb, as written in route descriptors
    pub verb: String,
    pub verb_upper: String,
    /// URL the method is registered under, relative to the controller group
    pub url: String,
    pub params: Vec<StubParam>,
}

/// Template data for a controller without route stubs
#[derive(Template)]
#[template(path = "controller.rs.txt", escape = "none")]
pub struct ControllerTemplateData {
    pub name: String,
}

/// Template data for an auto-routed controller with an `index` stub
#[derive(Template)]
#[template(path = "controller.auto.rs.txt", escape = "none")]
pub struct AutoControllerTemplateData {
    pub name: String,
    pub base_url: String,
}

/// Template data for a resource controller
#[derive(Template)]
#[template(path = "controller.auto.resource.rs.txt", escape = "none")]
pub struct ResourceControllerTemplateData {
    pub name: String,
    pub methods: Vec<StubMethod>,
    /// Whether a sidecar descriptor is written next to the controller
    pub sidecar: bool,
}

/// Template data for a `*.routes.yaml` sidecar descriptor
#[derive(Template)]
#[template(path = "controller.routes.yaml.txt", escape = "none")]
pub struct RoutesYamlTemplateData {
    /// Fully-qualified controller name
    pub class: String,
    pub methods: Vec<StubMethod>,
}

/// Render `template` to `path`, leaving an existing file alone unless `force`.
///
/// Returns whether the file was written.
pub fn write_template<T: Template>(path: &Path, template: &T, kind: &str, force: bool) -> anyhow::Result<bool> {
    if path.exists() && !force {
        println!("⚠️  Skipping existing {kind} file: {path:?}");
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, template.render()?)?;
    println!("✅ Generated {kind}: {path:?}");
    Ok(true)
}
