use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Conventional ending of controller class names.
pub const CONTROLLER_SUFFIX: &str = "Controller";

/// The five HTTP verbs a method can be exposed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpVerb {
    /// Order in which method markers are looked up.
    pub const PRIORITY: [HttpVerb; 5] = [
        HttpVerb::Get,
        HttpVerb::Post,
        HttpVerb::Put,
        HttpVerb::Patch,
        HttpVerb::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "get",
            HttpVerb::Post => "post",
            HttpVerb::Put => "put",
            HttpVerb::Patch => "patch",
            HttpVerb::Delete => "delete",
        }
    }

    /// The matching [`http::Method`].
    pub fn method(&self) -> http::Method {
        match self {
            HttpVerb::Get => http::Method::GET,
            HttpVerb::Post => http::Method::POST,
            HttpVerb::Put => http::Method::PUT,
            HttpVerb::Patch => http::Method::PATCH,
            HttpVerb::Delete => http::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.method())
    }
}

/// Free-form option mapping: one layer of route configuration.
///
/// Keys keep their declaration order. Values are JSON values so manifests can
/// carry strings, lists (`middleware`) and maps (`where`) alike.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(Map<String, Value>);

/// Options applied to a whole route group (class level or caller supplied).
pub type GroupOptions = Options;
/// Options attached to a single HTTP marker.
pub type RouteOptions = Options;

impl Options {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Scalar option rendered as a string. `null` counts as absent.
    pub fn string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(value_to_string)
    }

    /// Option coerced to a list of strings: a scalar becomes a one-element
    /// list, `null` an empty one.
    pub fn list(&self, key: &str) -> Vec<String> {
        self.get(key).map(value_to_list).unwrap_or_default()
    }

    /// Overlay `other` on top of `self`; keys in `other` win.
    pub fn merge(&mut self, other: &Options) {
        for (k, v) in other.iter() {
            self.0.insert(k.clone(), v.clone());
        }
    }
}

impl FromIterator<(String, Value)> for Options {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

pub(crate) fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

pub(crate) fn value_to_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(value_to_string).collect(),
        other => value_to_string(other).into_iter().collect(),
    }
}

/// An HTTP verb marker on a controller method, carrying its route options
/// (`url`, `name`, `middleware` and free-form extras).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpRouteMarker {
    Get(RouteOptions),
    Post(RouteOptions),
    Put(RouteOptions),
    Patch(RouteOptions),
    Delete(RouteOptions),
}

impl HttpRouteMarker {
    pub fn new(verb: HttpVerb, options: RouteOptions) -> Self {
        match verb {
            HttpVerb::Get => HttpRouteMarker::Get(options),
            HttpVerb::Post => HttpRouteMarker::Post(options),
            HttpVerb::Put => HttpRouteMarker::Put(options),
            HttpVerb::Patch => HttpRouteMarker::Patch(options),
            HttpVerb::Delete => HttpRouteMarker::Delete(options),
        }
    }

    pub fn verb(&self) -> HttpVerb {
        match self {
            HttpRouteMarker::Get(_) => HttpVerb::Get,
            HttpRouteMarker::Post(_) => HttpVerb::Post,
            HttpRouteMarker::Put(_) => HttpVerb::Put,
            HttpRouteMarker::Patch(_) => HttpVerb::Patch,
            HttpRouteMarker::Delete(_) => HttpVerb::Delete,
        }
    }

    pub fn options(&self) -> &RouteOptions {
        match self {
            HttpRouteMarker::Get(o)
            | HttpRouteMarker::Post(o)
            | HttpRouteMarker::Put(o)
            | HttpRouteMarker::Patch(o)
            | HttpRouteMarker::Delete(o) => o,
        }
    }
}

/// A declared method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    /// Declared type name, if any (e.g. `Request`, `i64`)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    /// Parameter has a default value or is otherwise optional
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            optional: false,
        }
    }

    pub fn typed(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

fn default_public() -> bool {
    true
}

/// A controller method as seen by the route assembler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default = "default_public")]
    pub public: bool,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    #[serde(default)]
    pub markers: Vec<HttpRouteMarker>,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            public: true,
            parameters: Vec::new(),
            markers: Vec::new(),
        }
    }

    pub fn private(mut self) -> Self {
        self.public = false;
        self
    }

    pub fn param(mut self, param: ParameterDescriptor) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn marker(mut self, marker: HttpRouteMarker) -> Self {
        self.markers.push(marker);
        self
    }

    /// Shorthand for a marker without options.
    pub fn verb(self, verb: HttpVerb) -> Self {
        self.marker(HttpRouteMarker::new(verb, RouteOptions::new()))
    }
}

/// A controller class: its fully-qualified name, optional class-level group
/// metadata and its methods in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerDescriptor {
    /// Fully-qualified, `::`-separated name (`App::Http::Controllers::PostController`)
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<GroupOptions>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl ControllerDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            route: None,
            methods: Vec::new(),
        }
    }

    pub fn route(mut self, options: GroupOptions) -> Self {
        self.route = Some(options);
        self
    }

    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    /// Last path segment of the name.
    pub fn class_basename(&self) -> &str {
        class_basename(&self.name)
    }

    /// Basename with the controller `suffix` text removed.
    pub fn short_name(&self, suffix: &str) -> String {
        short_name(&self.name, suffix)
    }
}

pub fn class_basename(class: &str) -> &str {
    class.rsplit("::").next().unwrap_or(class)
}

pub fn short_name(class: &str, suffix: &str) -> String {
    let basename = class_basename(class);
    if suffix.is_empty() {
        return basename.to_string();
    }
    basename.replace(suffix, "")
}
