/*
 * mapper.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Array element correspondence for the reverse direction.

use serde_json::Value;
use unterpolate_path::get;

use crate::options::Mapper;
use crate::template::Template;

/// Select the data element corresponding to the template element at
/// `index`.
///
/// Without a mapper the correspondence is positional. A key-based mapper
/// makes it order-independent: the data element whose value at the key
/// matches the template element's literal at that key wins. A function
/// mapper has full control. A per-field mapper has no meaning at an array
/// position and falls back to positional.
pub fn map_element(
    data: Option<&Value>,
    mapper: Option<&Mapper>,
    index: usize,
    template_element: &Template,
) -> Option<Value> {
    match mapper {
        None | Some(Mapper::ByField(_)) => positional(data, index),
        Some(Mapper::ByKey { key, comparator }) => {
            let Some(Value::Array(items)) = data else {
                return None;
            };
            let wanted = template_element.literal_at(key)?;
            items
                .iter()
                .find(|candidate| match (get(candidate, key), comparator) {
                    (Some(actual), Some(compare)) => compare(actual, &wanted),
                    (Some(actual), None) => *actual == wanted,
                    (None, _) => false,
                })
                .cloned()
        }
        Some(Mapper::ByFunction(select)) => select(template_element, data, index),
    }
}

fn positional(data: Option<&Value>, index: usize) -> Option<Value> {
    match data {
        Some(Value::Array(items)) => items.get(index).cloned(),
        _ => None,
    }
}
