//! Path-parameter extraction from method signatures.

use crate::descriptor::{MethodDescriptor, ParameterDescriptor};

/// One URL placeholder derived from a method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParameter {
    pub name: String,
    pub optional: bool,
}

impl PathParameter {
    /// `{name}` or `{name?}`.
    pub fn placeholder(&self) -> String {
        if self.optional {
            format!("{{{}?}}", self.name)
        } else {
            format!("{{{}}}", self.name)
        }
    }
}

/// Whether a parameter's type is one of the framework-injected request types.
///
/// Matches the full type name or its last `::` segment, so `Request` also
/// covers `http::Request`.
pub fn is_injected(param: &ParameterDescriptor, injected_types: &[String]) -> bool {
    let Some(ty) = param.ty.as_deref() else {
        return false;
    };
    let base = ty.rsplit("::").next().unwrap_or(ty);
    injected_types.iter().any(|t| {
        let t_base = t.rsplit("::").next().unwrap_or(t);
        t == ty || t_base == base
    })
}

/// Ordered URL placeholders for `method`, injected request parameters removed.
pub fn extract(method: &MethodDescriptor, injected_types: &[String]) -> Vec<PathParameter> {
    method
        .parameters
        .iter()
        .filter(|p| !is_injected(p, injected_types))
        .map(|p| PathParameter {
            name: p.name.clone(),
            optional: p.optional,
        })
        .collect()
}

/// Append placeholders to `base` with `/`, trimming slashes from the result.
pub fn build_url(base: &str, params: &[PathParameter]) -> String {
    let placeholders = params
        .iter()
        .map(PathParameter::placeholder)
        .collect::<Vec<_>>()
        .join("/");
    format!("{base}/{placeholders}").trim_matches('/').to_string()
}
