/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Forward dispatch: data to rendered value.

use serde_json::{Map, Value};

use crate::matcher::{Source, interpolate};
use crate::options::{Direction, Options};
use crate::template::Template;

/// Render `template` against `value`.
///
/// The dispatcher recurses structurally over the template: literals go
/// through the placeholder matcher, sequences and mappings recurse with
/// the same top-level value (elements are not indexed into), transforms
/// are invoked with `options.how` defaulted to [`Direction::Render`]. A
/// caller that sets `how` keeps its value.
pub fn render(template: &Template, value: &Value, options: &Options) -> Value {
    let mut options = options.clone();
    options.how.get_or_insert(Direction::Render);
    render_node(template, value, &options)
}

fn render_node(template: &Template, value: &Value, options: &Options) -> Value {
    match template {
        Template::Transform(apply) => apply(value, options),

        Template::Literal(text) => interpolate(text, Source::Value(value), options),

        Template::Sequence(elements) => Value::Array(
            elements
                .iter()
                .map(|element| render_node(element, value, options))
                .collect(),
        ),

        Template::Mapping(fields) => {
            let mut rendered = Map::new();
            for (name, sub) in fields {
                rendered.insert(name.clone(), render_node(sub, value, options));
            }
            Value::Object(rendered)
        }
    }
}
