//! Small string helpers used when rendering identifiers that may be unset.

/// Return `s` if it is non-empty, otherwise `fallback`.
pub fn or_fallback<'a>(s: &'a str, fallback: &'a str) -> &'a str {
    if s.is_empty() { fallback } else { s }
}

/// Return the pointed-to string if it is present and non-empty, otherwise `fallback`.
pub fn pointer_or_fallback<'a>(s: Option<&'a str>, fallback: &'a str) -> &'a str {
    match s {
        Some(s) => or_fallback(s, fallback),
        None => fallback,
    }
}
