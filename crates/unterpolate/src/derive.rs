/*
 * derive.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Reverse dispatch: rendered value back to data.

use serde_json::{Map, Value};
use unterpolate_path::unflatten;

use crate::error::TemplateResult;
use crate::mapper::map_element;
use crate::matcher::unmatch;
use crate::options::{Direction, Options};
use crate::template::Template;

/// Derive the data object that `template` would have rendered `value`
/// from.
///
/// The recursion collects dotted-key bindings from every string leaf (and
/// from object-valued transform results), merging them into one flat map;
/// later bindings overwrite earlier ones on collision. The flat map is
/// unflattened into a nested value exactly once, here at the top level,
/// after the whole template tree has contributed its fragments.
pub fn derive(template: &Template, value: &Value, options: &Options) -> TemplateResult<Value> {
    let mut options = options.clone();
    options.how.get_or_insert(Direction::Derive);
    let flat = derive_node(template, Some(value), &options)?;
    Ok(unflatten(&flat))
}

fn derive_node(
    template: &Template,
    value: Option<&Value>,
    options: &Options,
) -> TemplateResult<Map<String, Value>> {
    match template {
        Template::Transform(apply) => {
            // only an object result carries dotted-key bindings
            match apply(value.unwrap_or(&Value::Null), options) {
                Value::Object(bindings) => Ok(bindings),
                _ => Ok(Map::new()),
            }
        }

        Template::Literal(text) => unmatch(text, value.unwrap_or(&Value::Null), options),

        Template::Sequence(elements) => {
            let mut merged = Map::new();
            for (index, element) in elements.iter().enumerate() {
                let matched = map_element(value, options.mapper.as_ref(), index, element);
                merged.extend(derive_node(element, matched.as_ref(), options)?);
            }
            Ok(merged)
        }

        Template::Mapping(fields) => {
            let mut merged = Map::new();
            for (name, sub) in fields {
                let child = value.and_then(|v| field_value(v, name));
                let narrowed = Options {
                    mapper: options.mapper.as_ref().and_then(|m| m.narrow(name)).cloned(),
                    ..options.clone()
                };
                merged.extend(derive_node(sub, child, &narrowed)?);
            }
            Ok(merged)
        }
    }
}

/// Field access at a mapping descent. Numeric field names index into
/// array values, so a mapping can describe positions of a sequence.
fn field_value<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    match value {
        Value::Array(items) => items.get(name.parse::<usize>().ok()?),
        _ => value.get(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn opts() -> Options {
        Options::default()
    }

    #[test]
    fn derives_a_string_template() {
        let template = Template::from(json!("{year}-{month}-{day}"));
        assert_eq!(
            derive(&template, &json!("2019-10-01"), &opts()).unwrap(),
            json!({"year": "2019", "month": "10", "day": "01"})
        );
    }

    #[test]
    fn dotted_tokens_nest_only_at_the_top_level() {
        let template = Template::from(json!({"inner": "{a.b}-{a.c}"}));
        assert_eq!(
            derive(&template, &json!({"inner": "1-2"}), &opts()).unwrap(),
            json!({"a": {"b": "1", "c": "2"}})
        );
    }

    #[test]
    fn later_fragments_overwrite_on_collision() {
        let template = Template::from(json!(["{x}", "{x}"]));
        assert_eq!(
            derive(&template, &json!(["first", "second"]), &opts()).unwrap(),
            json!({"x": "second"})
        );
    }

    #[test]
    fn transforms_contribute_object_results() {
        let template = Template::transform(|value, options| match options.how {
            Some(Direction::Derive) => json!({"seen": value}),
            _ => Value::Null,
        });
        assert_eq!(
            derive(&template, &json!(42), &opts()).unwrap(),
            json!({"seen": 42})
        );
    }

    #[test]
    fn caller_supplied_direction_reaches_transforms() {
        let template = Template::transform(|_, options| match options.how {
            Some(Direction::Render) => json!({"tag": "overridden"}),
            _ => json!({"tag": "defaulted"}),
        });
        assert_eq!(
            derive(&template, &Value::Null, &opts()).unwrap(),
            json!({"tag": "defaulted"})
        );
        assert_eq!(
            derive(&template, &Value::Null, &opts().with_how(Direction::Render)).unwrap(),
            json!({"tag": "overridden"})
        );
    }

    #[test]
    fn numeric_field_names_index_into_arrays() {
        let template = Template::from(json!({"0": "{a}", "1": "{b}"}));
        assert_eq!(
            derive(&template, &json!(["x", "y"]), &opts()).unwrap(),
            json!({"a": "x", "b": "y"})
        );
    }

    #[test]
    fn non_object_transform_results_contribute_nothing() {
        let template = Template::transform(|_, _| json!("scalar"));
        assert_eq!(derive(&template, &json!(1), &opts()).unwrap(), json!({}));
    }
}
