// file: src/api/soql.rs
// version: 1.0.0
// guid: d1a74f92-8c35-4e60-b8f1-2a96c05d3e18

//! SOQL string literal escaping
//!
//! Flag values are interpolated into query text, so quote characters in
//! them must be escaped to keep the query well-formed.

/// Escape a value for use inside a single-quoted SOQL string literal
pub fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\'' => escaped.push_str("\\'"),
            '\\' => escaped.push_str("\\\\"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
