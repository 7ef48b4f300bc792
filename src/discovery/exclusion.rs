use crate::error::{Result, RouteError};
use crate::naming::to_kebab_case;
use serde_json::Value;

/// Coerce an `except` option into a rule list.
///
/// A string is one rule, an array of strings or numbers is many, `null` is
/// none. Anything else cannot be read as a rule.
pub fn normalize_rules(value: &Value) -> Result<Vec<String>> {
    fn scalar(v: &Value) -> Option<String> {
        match v {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .map(|v| {
                scalar(v).ok_or_else(|| {
                    RouteError::config("except", format!("expected a string rule, got {v}"))
                })
            })
            .collect(),
        other => scalar(other)
            .map(|s| vec![s])
            .ok_or_else(|| RouteError::config("except", format!("expected a string or list, got {other}"))),
    }
}

/// Whether a discovered controller is excluded by any rule.
///
/// A rule matches when the relative path starts with it (directory
/// exclusion), or when it equals the controller's short name, its kebab-case
/// form, the controller file name or the whole relative path. Comparisons
/// ignore ASCII case; surrounding slashes are ignored on both sides.
pub fn is_excluded(relative_path: &str, short_name: &str, rules: &[String], file_suffix: &str) -> bool {
    let path = relative_path.trim_matches('/').to_ascii_lowercase();
    let kebab = to_kebab_case(short_name);
    let names = [
        short_name.to_string(),
        kebab.clone(),
        format!("{short_name}{file_suffix}"),
        format!("{kebab}{file_suffix}"),
    ];

    rules.iter().any(|rule| {
        let rule = rule.trim_matches('/');
        if rule.is_empty() {
            return false;
        }
        path.starts_with(&rule.to_ascii_lowercase())
            || names.iter().any(|n| n.eq_ignore_ascii_case(rule))
            || path.eq_ignore_ascii_case(rule)
    })
}
