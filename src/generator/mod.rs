//! # Generator Module
//!
//! Controller scaffolding for `autoroute-gen make-controller`.
//!
//! Templates are Askama files under `templates/`:
//!
//! | Template                          | Used for                                  |
//! |-----------------------------------|-------------------------------------------|
//! | `controller.rs.txt`               | plain controller                          |
//! | `controller.auto.rs.txt`          | `--auto`: controller with an `index` stub |
//! | `controller.auto.resource.rs.txt` | `--resource`: the seven resource methods  |
//! | `controller.routes.yaml.txt`      | `--auto`: route descriptor sidecar        |
//!
//! Existing files are never overwritten unless `force` is set.
//!
//! ```text
//! autoroute-gen make-controller Admin/User --dir app --auto --resource
//!
//! app/Admin/UserController.rs
//! app/Admin/UserController.routes.yaml
//! ```

mod scaffold;
mod templates;

pub use scaffold::{make_controller, ControllerName, ScaffoldOptions};
pub use templates::*;
