/*
 * flatten.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Unflattening of dotted-key maps.

use serde_json::{Map, Value};

use crate::access::set_in_place;

/// Fold a map keyed by path strings into a nested value.
///
/// Entries are applied in iteration order; on a path collision, later
/// entries overwrite earlier ones.
///
/// ```
/// use serde_json::json;
/// use unterpolate_path::unflatten;
///
/// let mut flat = serde_json::Map::new();
/// flat.insert("a.b".to_string(), json!(1));
/// flat.insert("a.c[0]".to_string(), json!(2));
/// assert_eq!(unflatten(&flat), json!({"a": {"b": 1, "c": [2]}}));
/// ```
pub fn unflatten(entries: &Map<String, Value>) -> Value {
    let mut nested = Value::Object(Map::new());
    for (path, value) in entries {
        set_in_place(&mut nested, path, value.clone());
    }
    nested
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn flat(entries: &[(&str, Value)]) -> Map<String, Value> {
        entries
            .iter()
            .map(|(path, value)| (path.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn nests_dotted_keys() {
        let entries = flat(&[
            ("first.second", json!("joe")),
            ("second", json!("bill")),
            ("fourth.fifth", json!("jim")),
        ]);
        assert_eq!(
            unflatten(&entries),
            json!({
                "first": {"second": "joe"},
                "second": "bill",
                "fourth": {"fifth": "jim"},
            })
        );
    }

    #[test]
    fn numeric_segments_build_arrays() {
        let entries = flat(&[("a[0]", json!(1)), ("a[1]", json!(2))]);
        assert_eq!(unflatten(&entries), json!({"a": [1, 2]}));
    }

    #[test]
    fn later_entries_win_on_collision() {
        // two spellings of the same path; map iteration is key-ordered, so
        // the quoted spelling is applied first and the plain one wins
        let entries = flat(&[("'a'.b", json!(1)), ("a.b", json!(2))]);
        assert_eq!(unflatten(&entries), json!({"a": {"b": 2}}));
    }

    #[test]
    fn empty_input_is_an_empty_object() {
        assert_eq!(unflatten(&Map::new()), json!({}));
    }
}
