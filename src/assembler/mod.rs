//! # Route Assembler
//!
//! Turns controller descriptors into registered routes.
//!
//! [`AutoRoute::register`] takes a mount prefix and either one controller or a
//! directory of controller files. In directory mode every `*Controller.<ext>`
//! file below the directory is mapped to a fully-qualified controller name
//! through the project's source roots, filtered by the active exclusion rules
//! and registered under `mount/sub-dir/controller-name`.
//!
//! ## Option layers
//!
//! Each controller is registered inside one router group whose options are
//! built from, lowest precedence first:
//!
//! 1. the mount prefix (or directory-derived prefix)
//! 2. class-level group metadata
//! 3. the caller's `options`
//!
//! Method-level options then decide each route's URL, name, middleware and
//! extra settings. Class and method `middleware` accumulate; everything else
//! is overridden by the later layer.
//!
//! ## Example
//!
//! ```rust,ignore
//! let auto = AutoRoute::new(config, catalog);
//! let mut table = RouteTable::new();
//! auto.except(["Admin"])
//!     .register(&mut table, "/blog", RouteTarget::Directory(dir), &Options::new())?;
//! assert!(table.by_name("blog.post.show").is_some());
//! ```

mod controller;

use crate::config::ProjectConfig;
use crate::descriptor::{load_sidecars, ControllerCatalog, GroupOptions};
use crate::discovery::{discover_controllers, is_excluded, normalize_rules, resolve_namespace};
use crate::error::Result;
use crate::router::RouteRegistrar;
use anyhow::Context;
use controller::ControllerRegistration;
use std::path::Path;

/// What a [`AutoRoute::register`] call registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget<'a> {
    /// One controller, by fully-qualified name
    Controller(&'a str),
    /// Every controller file below a directory
    Directory(&'a Path),
}

impl<'a> RouteTarget<'a> {
    /// Directory when `target` names an existing directory, controller otherwise.
    pub fn infer(target: &'a str) -> Self {
        let path = Path::new(target);
        if path.is_dir() {
            RouteTarget::Directory(path)
        } else {
            RouteTarget::Controller(target)
        }
    }
}

/// Summary of one `register` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    /// Controllers registered, in registration order
    pub controllers: Vec<String>,
    /// Controllers skipped by an exclusion rule
    pub excluded: Vec<String>,
    /// Number of routes added
    pub routes: usize,
}

/// Convention-based route registration over a controller catalog.
#[derive(Debug, Clone)]
pub struct AutoRoute {
    config: ProjectConfig,
    catalog: ControllerCatalog,
}

impl AutoRoute {
    pub fn new(config: ProjectConfig, catalog: ControllerCatalog) -> Self {
        Self { config, catalog }
    }

    /// Build from configuration: the `catalog` manifest first, then any
    /// sidecar descriptors found under the source roots.
    pub fn from_config(config: ProjectConfig) -> anyhow::Result<Self> {
        let mut catalog = config.load_catalog()?;
        for root in config.source_roots.values() {
            let dir = config.resolve(root);
            if !dir.is_dir() {
                tracing::warn!(dir = %dir.display(), "Source root does not exist");
                continue;
            }
            let sidecars = load_sidecars(&dir)
                .with_context(|| format!("Failed to load sidecar descriptors under {}", dir.display()))?;
            catalog.extend(sidecars);
        }
        tracing::info!(controllers = catalog.len(), "Controller catalog ready");
        Ok(Self::new(config, catalog))
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ControllerCatalog {
        &self.catalog
    }

    /// Exclusion rules for the next registration only.
    ///
    /// The rules live in the returned builder, so they cannot affect any other
    /// `register` call.
    pub fn except<I, S>(&self, rules: I) -> ScopedRegistration<'_>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScopedRegistration {
            auto: self,
            rules: rules.into_iter().map(Into::into).collect(),
        }
    }

    /// Register routes for `target` under `prefix`.
    ///
    /// `options` are merged into every controller's group. An `except` key
    /// supplies exclusion rules for a directory walk and is never forwarded
    /// to the router.
    pub fn register<R: RouteRegistrar>(
        &self,
        router: &mut R,
        prefix: &str,
        target: RouteTarget<'_>,
        options: &GroupOptions,
    ) -> Result<Registration> {
        self.register_scoped(router, prefix, target, options, Vec::new())
    }

    fn register_scoped<R: RouteRegistrar>(
        &self,
        router: &mut R,
        prefix: &str,
        target: RouteTarget<'_>,
        options: &GroupOptions,
        rules: Vec<String>,
    ) -> Result<Registration> {
        let rules = match options.get("except") {
            Some(value) => normalize_rules(value)?,
            None => rules,
        };
        let mut options = options.clone();
        options.remove("except");

        match target {
            RouteTarget::Directory(dir) => self.register_directory(router, prefix, dir, options, &rules),
            RouteTarget::Controller(class) => {
                let controller = self.catalog.require(class)?;
                let routes = ControllerRegistration::new(controller, &self.config, false)
                    .register(router, prefix, &options);
                Ok(Registration {
                    controllers: vec![controller.name.clone()],
                    excluded: Vec::new(),
                    routes,
                })
            }
        }
    }

    fn register_directory<R: RouteRegistrar>(
        &self,
        router: &mut R,
        prefix: &str,
        dir: &Path,
        mut options: GroupOptions,
        rules: &[String],
    ) -> Result<Registration> {
        let namespace = resolve_namespace(dir, &self.config)?;
        let discovered = discover_controllers(dir, &namespace, &self.config)?;
        let file_suffix = format!("{}.{}", self.config.controller_suffix, self.config.file_extension);

        let global_prefix = options.string("prefix");
        if global_prefix.is_some() {
            options.remove("prefix");
        }

        let mut registration = Registration::default();
        for found in &discovered {
            if is_excluded(&found.relative_path, &found.short_name, rules, &file_suffix) {
                tracing::debug!(controller = %found.class, "Controller excluded");
                registration.excluded.push(found.class.clone());
                continue;
            }

            let mut full_prefix = if found.sub_prefix.is_empty() {
                prefix.to_string()
            } else {
                format!("{prefix}/{}", found.sub_prefix)
            };
            if let Some(global) = &global_prefix {
                full_prefix = format!("/{global}/{}", full_prefix.trim_matches('/'));
            }

            let controller = self.catalog.require(&found.class)?;
            registration.routes += ControllerRegistration::new(controller, &self.config, true)
                .register(router, &full_prefix, &options);
            registration.controllers.push(found.class.clone());
        }

        tracing::info!(
            dir = %dir.display(),
            namespace = %namespace,
            controllers = registration.controllers.len(),
            excluded = registration.excluded.len(),
            routes = registration.routes,
            "Directory registered"
        );
        Ok(registration)
    }
}

/// A registration carrying exclusion rules, from [`AutoRoute::except`].
#[derive(Debug, Clone)]
pub struct ScopedRegistration<'a> {
    auto: &'a AutoRoute,
    rules: Vec<String>,
}

impl ScopedRegistration<'_> {
    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    /// Same as [`AutoRoute::register`] with this builder's rules. An `except`
    /// key in `options` replaces them.
    pub fn register<R: RouteRegistrar>(
        self,
        router: &mut R,
        prefix: &str,
        target: RouteTarget<'_>,
        options: &GroupOptions,
    ) -> Result<Registration> {
        self.auto.register_scoped(router, prefix, target, options, self.rules)
    }
}
