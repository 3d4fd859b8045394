/*
 * access.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Nested `get`/`set` over `serde_json` values.

use serde_json::{Map, Value};

use crate::parse::parse_path;

/// Falsiness as used by path traversal: `Null`, `false`, numeric zero and
/// the empty string are falsy. Arrays and objects, even empty ones, are
/// truthy.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Walk `path` through `container`.
///
/// A missing key or index yields `None`. A present but falsy intermediate
/// short-circuits and is returned as-is: `get(&json!({"a": 0}), "a.b")` is
/// `Some(&json!(0))`, not `None`. KNOWN QUIRK: a falsy-but-present
/// intermediate is indistinguishable from a missing one as far as further
/// descent goes; [`set_in_place`] recreates such intermediates on write.
pub fn get<'a>(container: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = container;
    for segment in parse_path(path) {
        if is_falsy(current) {
            return Some(current);
        }
        current = step(current, &segment)?;
    }
    Some(current)
}

/// [`get`] with a default for missing paths.
pub fn get_or<'a>(container: &'a Value, path: &str, default: &'a Value) -> &'a Value {
    get(container, path).unwrap_or(default)
}

fn step<'a>(container: &'a Value, segment: &str) -> Option<&'a Value> {
    match container {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => items.get(segment.parse::<usize>().ok()?),
        _ => None,
    }
}

/// Copy-on-write set: clones `container`, writes `value` at `path` in the
/// clone and returns it. The original is left untouched.
pub fn set(container: &Value, path: &str, value: Value) -> Value {
    let mut result = container.clone();
    set_in_place(&mut result, path, value);
    result
}

/// In-place set: writes `value` at `path`, creating missing intermediates.
///
/// A missing (or falsy, see [`get`]) intermediate is created as an array
/// when the segment indexing into it is all digits, and as an object
/// otherwise. Array writes past the end fill the gap with `Null`. A truthy
/// non-container in the middle of the path silently swallows the write, as
/// does a non-numeric segment applied to an array.
pub fn set_in_place(container: &mut Value, path: &str, value: Value) {
    let segments = parse_path(path);
    let Some((last, walk)) = segments.split_last() else {
        return;
    };

    let mut current = container;
    for segment in walk {
        if !ensure_container(current, is_index(segment)) {
            return;
        }
        current = match slot(current, segment) {
            Some(next) => next,
            None => return,
        };
    }
    if ensure_container(current, is_index(last)) {
        write(current, last, value);
    }
}

fn is_index(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Make `value` usable as a container addressed by a segment of the given
/// kind; returns `false` when a truthy non-container is in the way.
fn ensure_container(value: &mut Value, numeric_segment: bool) -> bool {
    match value {
        Value::Object(_) | Value::Array(_) => true,
        v if is_falsy(v) => {
            *v = if numeric_segment {
                Value::Array(Vec::new())
            } else {
                Value::Object(Map::new())
            };
            true
        }
        _ => false,
    }
}

/// The mutable child slot addressed by `segment`, created as `Null` when
/// missing.
fn slot<'a>(container: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match container {
        Value::Object(map) => Some(map.entry(segment.to_string()).or_insert(Value::Null)),
        Value::Array(items) => {
            let index = segment.parse::<usize>().ok()?;
            if index >= items.len() {
                items.resize(index + 1, Value::Null);
            }
            items.get_mut(index)
        }
        _ => None,
    }
}

fn write(container: &mut Value, segment: &str, value: Value) {
    match container {
        Value::Object(map) => {
            map.insert(segment.to_string(), value);
        }
        Value::Array(items) => {
            if let Ok(index) = segment.parse::<usize>() {
                if index >= items.len() {
                    items.resize(index + 1, Value::Null);
                }
                items[index] = value;
            }
        }
        _ => {}
    }
}
