use super::{ControllerAction, RouteHandle, RouteRegistrar};
use crate::descriptor::{GroupOptions, HttpVerb};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// One registered route, as handed to a dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSpec {
    pub method: HttpVerb,
    /// URL pattern with a leading `/`, e.g. `/blog/post/show/{id}`
    pub uri: String,
    pub name: Option<String>,
    pub middleware: Vec<String>,
    pub controller: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub without_middleware: Vec<String>,
    /// Remaining options applied through the handle (`where`, `can`, ...)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

impl RouteSpec {
    fn push_middleware(&mut self, middleware: &[String]) {
        for m in middleware {
            if !self.middleware.contains(m) && !self.without_middleware.contains(m) {
                self.middleware.push(m.clone());
            }
        }
    }
}

impl RouteHandle for RouteSpec {
    fn name(&mut self, name: &str) {
        let mut full = self.name.take().unwrap_or_default();
        full.push_str(name);
        self.name = Some(full);
    }

    fn middleware(&mut self, middleware: &[String]) {
        self.push_middleware(middleware);
    }

    fn where_constraints(&mut self, constraints: &BTreeMap<String, String>) -> bool {
        let entry = self
            .extra
            .entry("where".to_string())
            .or_insert_with(|| Value::Object(Default::default()));
        if let Value::Object(map) = entry {
            for (k, v) in constraints {
                map.insert(k.clone(), Value::String(v.clone()));
            }
        }
        true
    }

    fn domain(&mut self, domain: &str) -> bool {
        self.domain = Some(domain.to_string());
        true
    }

    fn can(&mut self, ability: &str) -> bool {
        self.extra.insert("can".to_string(), Value::String(ability.to_string()));
        true
    }

    fn without_middleware(&mut self, middleware: &[String]) -> bool {
        for m in middleware {
            if !self.without_middleware.contains(m) {
                self.without_middleware.push(m.clone());
            }
        }
        self.middleware.retain(|m| !middleware.contains(m));
        true
    }

    fn scope_bindings(&mut self, enabled: bool) -> bool {
        self.extra.insert("scope_bindings".to_string(), Value::Bool(enabled));
        true
    }

    fn with_trashed(&mut self, enabled: bool) -> bool {
        self.extra.insert("with_trashed".to_string(), Value::Bool(enabled));
        true
    }
}

/// Attributes of the innermost open group, already merged with its parents.
#[derive(Debug, Clone, Default)]
struct GroupScope {
    prefix: String,
    middleware: Vec<String>,
    name_prefix: String,
    domain: Option<String>,
}

impl GroupScope {
    fn nest(&self, options: &GroupOptions) -> GroupScope {
        let mut middleware = self.middleware.clone();
        middleware.extend(options.list("middleware"));
        GroupScope {
            prefix: join_uri(&self.prefix, &options.string("prefix").unwrap_or_default()),
            middleware,
            name_prefix: format!("{}{}", self.name_prefix, options.string("as").unwrap_or_default()),
            domain: options.string("domain").or_else(|| self.domain.clone()),
        }
    }
}

/// Join two URI fragments with a single `/`, dropping empty ones.
pub fn join_uri(left: &str, right: &str) -> String {
    [left.trim_matches('/'), right.trim_matches('/')]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/")
}

/// In-memory registrar that records routes in registration order.
///
/// Group handling:
/// - prefixes are joined with `/`
/// - group middleware comes before route middleware, duplicates dropped
/// - `as` name prefixes concatenate and are prepended to route names
/// - the innermost `domain` wins
///
/// A `name` key in group options is not a group attribute here; class-level
/// names are applied per route by the assembler.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<RouteSpec>,
    scopes: Vec<GroupScope>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> &[RouteSpec] {
        &self.routes
    }

    pub fn into_routes(self) -> Vec<RouteSpec> {
        self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// First route carrying `name`.
    pub fn by_name(&self, name: &str) -> Option<&RouteSpec> {
        self.routes.iter().find(|r| r.name.as_deref() == Some(name))
    }

    /// First route registered for `method` and `uri`.
    pub fn find(&self, method: HttpVerb, uri: &str) -> Option<&RouteSpec> {
        self.routes.iter().find(|r| r.method == method && r.uri == uri)
    }

    fn current(&self) -> GroupScope {
        self.scopes.last().cloned().unwrap_or_default()
    }
}

impl RouteRegistrar for RouteTable {
    type Handle = RouteSpec;

    fn group(&mut self, options: &GroupOptions, routes: &mut dyn FnMut(&mut Self)) {
        let scope = self.current().nest(options);
        self.scopes.push(scope);
        routes(self);
        self.scopes.pop();
    }

    fn add_route(&mut self, verb: HttpVerb, uri: &str, action: ControllerAction) -> &mut RouteSpec {
        let scope = self.current();
        let name = if scope.name_prefix.is_empty() {
            None
        } else {
            Some(scope.name_prefix.clone())
        };
        let mut route = RouteSpec {
            method: verb,
            uri: format!("/{}", join_uri(&scope.prefix, uri)),
            name,
            middleware: Vec::new(),
            controller: action.controller,
            action: action.action,
            domain: scope.domain.clone(),
            without_middleware: Vec::new(),
            extra: BTreeMap::new(),
        };
        route.push_middleware(&scope.middleware);
        self.routes.push(route);
        let last = self.routes.len() - 1;
        &mut self.routes[last]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Options;
    use crate::router::apply_route_option;
    use serde_json::json;

    fn action(a: &str) -> ControllerAction {
        ControllerAction::new("App::PostController", a)
    }

    #[test]
    fn test_nested_groups_merge() {
        let mut table = RouteTable::new();
        let outer = Options::new()
            .with("prefix", "/api/")
            .with("middleware", "api")
            .with("as", "api.");
        let inner = Options::new()
            .with("prefix", "posts")
            .with("middleware", json!(["auth", "api"]))
            .with("domain", "example.test");
        table.group(&outer, &mut |t| {
            t.group(&inner, &mut |t| {
                t.add_route(HttpVerb::Get, "show/{id}", action("show")).name("show");
            });
            t.add_route(HttpVerb::Get, "", action("index"));
        });

        let show = &table.routes()[0];
        assert_eq!(show.uri, "/api/posts/show/{id}");
        assert_eq!(show.name.as_deref(), Some("api.show"));
        assert_eq!(show.middleware, vec!["api", "auth"]);
        assert_eq!(show.domain.as_deref(), Some("example.test"));

        let index = &table.routes()[1];
        assert_eq!(index.uri, "/api");
        assert_eq!(index.name.as_deref(), Some("api."));
        assert!(index.domain.is_none());
    }

    #[test]
    fn test_root_route() {
        let mut table = RouteTable::new();
        table.add_route(HttpVerb::Get, "", action("index"));
        assert_eq!(table.routes()[0].uri, "/");
        assert!(table.routes()[0].name.is_none());
    }

    #[test]
    fn test_without_middleware_drops_group_middleware() {
        let mut table = RouteTable::new();
        table.group(&Options::new().with("middleware", json!(["auth", "web"])), &mut |t| {
            let r = t.add_route(HttpVerb::Post, "store", action("store"));
            assert!(apply_route_option(r, "without_middleware", &json!("auth")));
            r.middleware(&["auth".to_string(), "throttle".to_string()]);
        });
        assert_eq!(table.routes()[0].middleware, vec!["web", "throttle"]);
    }

    #[test]
    fn test_where_and_flags() {
        let mut table = RouteTable::new();
        let r = table.add_route(HttpVerb::Get, "show/{id}", action("show"));
        assert!(apply_route_option(r, "where", &json!({"id": "[0-9]+"})));
        assert!(apply_route_option(r, "scopeBindings", &json!(true)));
        assert!(apply_route_option(r, "can", &json!("view")));
        let r = &table.routes()[0];
        assert_eq!(r.extra["where"], json!({"id": "[0-9]+"}));
        assert_eq!(r.extra["scope_bindings"], json!(true));
        assert_eq!(r.extra["can"], json!("view"));
    }

    #[test]
    fn test_join_uri() {
        assert_eq!(join_uri("/blog/", "/post"), "blog/post");
        assert_eq!(join_uri("", "show"), "show");
        assert_eq!(join_uri("", ""), "");
    }
}
