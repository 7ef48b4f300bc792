//! Case conversions used for URL segments and route names.

/// Convert an identifier to kebab-case.
///
/// Whitespace-separated words are capitalised and joined first, then a `-` is
/// inserted before every uppercase character that follows another character.
/// Already-kebab input comes back unchanged.
///
/// ```
/// use autoroute::naming::to_kebab_case;
///
/// assert_eq!(to_kebab_case("UserProfile"), "user-profile");
/// assert_eq!(to_kebab_case("user-profile"), "user-profile");
/// ```
pub fn to_kebab_case(s: &str) -> String {
    delimit(&join_words(s), '-')
}

/// Convert an identifier to snake_case.
///
/// An `_` goes before every uppercase character except the first one.
pub fn to_snake_case(s: &str) -> String {
    delimit(s, '_')
}

/// Upper-case the first character, leaving the rest untouched.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn join_words(s: &str) -> String {
    if !s.chars().any(char::is_whitespace) {
        return s.to_string();
    }
    s.split_whitespace().map(upper_first).collect()
}

fn delimit(s: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            out.push(delimiter);
        }
        out.extend(c.to_lowercase());
    }
    out
}
