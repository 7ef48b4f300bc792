use crate::descriptor::{value_to_list, value_to_string};
use serde_json::Value;
use std::collections::BTreeMap;

/// Route option keys with a setter on [`RouteHandle`].
///
/// camelCase spellings are accepted for manifests written against routers
/// that use them.
pub const ROUTE_OPTION_KEYS: [&str; 9] = [
    "where",
    "domain",
    "can",
    "without_middleware",
    "withoutMiddleware",
    "scope_bindings",
    "scopeBindings",
    "with_trashed",
    "withTrashed",
];

/// Option keys the assembler consumes itself and never forwards.
pub const RESERVED_ROUTE_OPTIONS: [&str; 3] = ["url", "name", "middleware"];

/// A registered route that can still be configured.
///
/// Only `name` and `middleware` are required. The optional setters return
/// `false` when the router does not support them, which makes the option a
/// no-op.
pub trait RouteHandle {
    /// Append `name` to the route's name.
    fn name(&mut self, name: &str);

    /// Attach middleware, after any the route already has.
    fn middleware(&mut self, middleware: &[String]);

    /// Regex constraints for path parameters.
    fn where_constraints(&mut self, _constraints: &BTreeMap<String, String>) -> bool {
        false
    }

    fn domain(&mut self, _domain: &str) -> bool {
        false
    }

    /// Authorization ability required for the route.
    fn can(&mut self, _ability: &str) -> bool {
        false
    }

    /// Middleware removed from the route even when a group adds it.
    fn without_middleware(&mut self, _middleware: &[String]) -> bool {
        false
    }

    fn scope_bindings(&mut self, _enabled: bool) -> bool {
        false
    }

    fn with_trashed(&mut self, _enabled: bool) -> bool {
        false
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0" && !s.eq_ignore_ascii_case("false"),
        _ => true,
    }
}

/// Apply one method-level option through the capability table.
///
/// Returns `true` when the handle accepted it. Unknown keys, values of the
/// wrong shape and setters the handle does not support all return `false`.
pub fn apply_route_option<H: RouteHandle + ?Sized>(handle: &mut H, key: &str, value: &Value) -> bool {
    match key {
        "where" => match value {
            Value::Object(map) => {
                let constraints = map
                    .iter()
                    .filter_map(|(k, v)| value_to_string(v).map(|v| (k.clone(), v)))
                    .collect();
                handle.where_constraints(&constraints)
            }
            _ => false,
        },
        "domain" => value_to_string(value).is_some_and(|d| handle.domain(&d)),
        "can" => value_to_string(value).is_some_and(|a| handle.can(&a)),
        "without_middleware" | "withoutMiddleware" => handle.without_middleware(&value_to_list(value)),
        "scope_bindings" | "scopeBindings" => handle.scope_bindings(truthy(value)),
        "with_trashed" | "withTrashed" => handle.with_trashed(truthy(value)),
        _ => false,
    }
}
