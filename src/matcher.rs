//! Wildcard permission matching with SQL LIKE semantics
//!
//! Store backends that filter granted permissions themselves (e.g. with an
//! `OR name LIKE ?` clause) should match these semantics: `*` and `%` match
//! any run of characters, `_` matches exactly one, everything else is
//! literal. Matching is case-sensitive and anchored to the full name.

use regex::Regex;

/// Check a permission name against a wildcard pattern.
pub fn like_match(pattern: &str, value: &str) -> bool {
    if !pattern.contains(['*', '%', '_']) {
        return pattern == value;
    }

    let mut expr = String::with_capacity(pattern.len() + 2);
    expr.push('^');

    let mut buf = [0u8; 4];
    for ch in pattern.chars() {
        match ch {
            '*' | '%' => expr.push_str(".*"),
            '_' => expr.push('.'),
            ch => expr.push_str(&regex::escape(ch.encode_utf8(&mut buf))),
        }
    }

    expr.push('$');

    match Regex::new(&expr) {
        Ok(regex) => regex.is_match(value),
        // Unreachable for escaped input; fall back to equality
        Err(_) => pattern == value,
    }
}
