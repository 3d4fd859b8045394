/*
 * parse.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Path tokenizer.
//!
//! A path string is split into segments by the delimiters `.`, `[` and `]`.
//! An empty segment is emitted where the input contains `[]` or `..` (the
//! "append" positions of the path syntax). Each segment is trimmed and one
//! matching pair of surrounding quotes is stripped.

/// Split a path string into its ordered segments.
///
/// The tokenizer is deliberately permissive: any input produces a segment
/// list, and malformed paths yield best-effort segments rather than errors.
/// Note that quoting is stripped per segment but does not protect the
/// delimiters themselves; a dot inside a quoted name still splits.
///
/// ```
/// use unterpolate_path::parse_path;
///
/// assert_eq!(parse_path("a.b"), vec!["a", "b"]);
/// assert_eq!(parse_path("items[2].name"), vec!["items", "2", "name"]);
/// assert_eq!(parse_path("\"quoted\".x"), vec!["quoted", "x"]);
/// ```
pub fn parse_path(path: &str) -> Vec<String> {
    let bytes = path.as_bytes();
    let mut segments = Vec::new();
    let mut start: Option<usize> = None;

    for (i, byte) in bytes.iter().enumerate() {
        match byte {
            b'.' | b'[' | b']' => {
                if let Some(s) = start.take() {
                    segments.push(clean_segment(&path[s..i]));
                }
                // `[]` and `..` mark an empty, append-style segment
                if bytes[i..].starts_with(b"[]") || bytes[i..].starts_with(b"..") {
                    segments.push(String::new());
                }
            }
            _ => {
                if start.is_none() {
                    start = Some(i);
                }
            }
        }
    }
    if let Some(s) = start {
        segments.push(clean_segment(&path[s..]));
    }
    segments
}

/// Trim a raw segment and strip one matching pair of surrounding quotes.
fn clean_segment(raw: &str) -> String {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();
    if bytes.len() >= 2
        && (bytes[0] == b'\'' || bytes[0] == b'"')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}
