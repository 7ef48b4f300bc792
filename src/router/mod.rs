//! # Router Module
//!
//! The seam between route derivation and whatever router dispatches requests.
//!
//! The assembler never talks to a concrete router. It drives a
//! [`RouteRegistrar`]: open a group with merged options, add one route per
//! eligible method, then name it, attach middleware and apply any extra
//! options through the [`RouteHandle`] the registrar hands back.
//!
//! [`RouteTable`] is the registrar shipped with the crate. It applies group
//! attributes the way a conventional router does and records the result as
//! an ordered list of [`RouteSpec`] values, which is what the CLI prints and
//! the tests assert on.
//!
//! ## Route options
//!
//! Method-level options other than `url`, `name` and `middleware` are applied
//! through an explicit table ([`ROUTE_OPTION_KEYS`] / [`apply_route_option`]).
//! A key outside the table, or one the handle does not support, is ignored.

mod handle;
mod table;

pub use handle::*;
pub use table::*;

use crate::descriptor::{GroupOptions, HttpVerb};
use serde::Serialize;

/// The controller method a route dispatches to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ControllerAction {
    /// Fully-qualified controller name
    pub controller: String,
    /// Method name
    pub action: String,
}

impl ControllerAction {
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            action: action.into(),
        }
    }
}

impl std::fmt::Display for ControllerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.controller, self.action)
    }
}

/// A router that routes can be registered on.
pub trait RouteRegistrar {
    type Handle: RouteHandle;

    /// Apply `options` (prefix, middleware, domain, `as`) to every route
    /// registered inside `routes`.
    fn group(&mut self, options: &GroupOptions, routes: &mut dyn FnMut(&mut Self));

    /// Register one route and return its handle for further configuration.
    fn add_route(&mut self, verb: HttpVerb, uri: &str, action: ControllerAction) -> &mut Self::Handle;
}
