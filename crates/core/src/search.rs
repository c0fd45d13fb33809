//! Free-text search helpers for `ILIKE` queries.

/// Escape `ILIKE` metacharacters so user input matches literally.
///
/// The escaped string is meant to be used with Postgres' default escape
/// character (`\`).
pub fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Build a `%...%` substring pattern, or `None` when the query is blank.
pub fn contains_pattern(query: Option<&str>) -> Option<String> {
    let query = query?.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!("%{}%", escape_like(query)))
}
