//! # autoroute
//!
//! **autoroute** derives HTTP routes from controllers by convention instead of
//! explicit route declarations.
//!
//! ## Overview
//!
//! Point it at a controller, or at a directory of controllers, with a mount
//! prefix. Every public method carrying an HTTP verb marker becomes a route:
//!
//! ```text
//! app/Http/Controllers/PostController.rs
//!     fn show(request: Request, id)   #[get]
//!
//! register("/blog", app/Http/Controllers)
//!     GET /blog/post/show/{id}   name: blog.post.show
//! ```
//!
//! Controllers are described by static descriptors ([`descriptor`]) loaded
//! from a YAML/JSON catalog or from `*.routes.yaml` sidecar files, so nothing
//! is introspected at runtime.
//!
//! ## Architecture
//!
//! - **[`naming`]** - kebab-case and snake_case conversion
//! - **[`params`]** - URL placeholders from method parameters
//! - **[`metadata`]** - class-level group options and method verb markers
//! - **[`discovery`]** - namespace resolution, controller file discovery, exclusion rules
//! - **[`assembler`]** - option merging and per-method registration
//! - **[`router`]** - the [`RouteRegistrar`] / [`RouteHandle`] seam and the in-memory [`RouteTable`]
//! - **[`config`]** - `autoroute.toml` project configuration
//! - **[`generator`]** - Askama controller scaffolding
//! - **[`cli`]** - the `autoroute-gen` binary
//!
//! ## Conventions
//!
//! | Input                                   | Route                       | Name                |
//! |-----------------------------------------|-----------------------------|---------------------|
//! | `index()`                               | group root                  | `prefix.index`      |
//! | `show(request: Request, id)`            | `show/{id}`                 | `prefix.show`       |
//! | `editAvatar(id, size?)`                 | `edit-avatar/{id}/{size?}`  | `prefix.edit_avatar`|
//! | class `name: "api_"`, method `list()`   | `list`                      | `api_list`          |
//! | marker `url: "feed.xml"`                | `feed.xml` verbatim         | unchanged           |
//!
//! In directory mode each controller is additionally prefixed with its
//! sub-directory and its kebab-cased short name, unless the class declares
//! its own `prefix`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use autoroute::{AutoRoute, Options, ProjectConfig, RouteTable, RouteTarget};
//!
//! let config = ProjectConfig::load("autoroute.toml".as_ref())?;
//! let auto = AutoRoute::from_config(config)?;
//! let mut table = RouteTable::new();
//! auto.except(["Admin"]).register(
//!     &mut table,
//!     "/blog",
//!     RouteTarget::Directory("app/Http/Controllers".as_ref()),
//!     &Options::new(),
//! )?;
//! for route in table.routes() {
//!     println!("{} {} {:?}", route.method, route.uri, route.name);
//! }
//! ```

pub mod assembler;
pub mod cli;
pub mod config;
pub mod descriptor;
pub mod discovery;
pub mod error;
pub mod generator;
pub mod logging;
pub mod metadata;
pub mod naming;
pub mod params;
pub mod router;

pub use assembler::{AutoRoute, Registration, RouteTarget, ScopedRegistration};
pub use config::{load_config, ProjectConfig};
pub use descriptor::{
    ControllerCatalog, ControllerDescriptor, GroupOptions, HttpRouteMarker, HttpVerb, MethodDescriptor, Options,
    ParameterDescriptor, RouteOptions,
};
pub use error::{Result, RouteError};
pub use router::{ControllerAction, RouteHandle, RouteRegistrar, RouteSpec, RouteTable};
