/*
 * template.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Template shape types.
//!
//! A template is a structural pattern describing where placeholders live
//! and how a value's shape should mirror it. The same template drives both
//! directions: rendering substitutes placeholders with data, deriving
//! pattern-matches data back out of a rendered value.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;
use unterpolate_path::parse_path;

use crate::matcher::display_value;
use crate::options::Options;

/// A caller-supplied transform node: invoked with the value at the node's
/// position and the options of the call. `options.how` tells the callback
/// which direction is running.
pub type TransformFn = Rc<dyn Fn(&Value, &Options) -> Value>;

/// A node in a template tree.
#[derive(Clone)]
pub enum Template {
    /// A literal string containing zero or more `{path}` placeholders.
    Literal(String),

    /// An ordered sequence of sub-templates.
    Sequence(Vec<Template>),

    /// A mapping from field name to sub-template.
    Mapping(BTreeMap<String, Template>),

    /// An opaque transform callback.
    Transform(TransformFn),
}

impl Template {
    /// A literal string template.
    pub fn literal(text: impl Into<String>) -> Self {
        Template::Literal(text.into())
    }

    /// A sequence template.
    pub fn sequence(elements: impl IntoIterator<Item = Template>) -> Self {
        Template::Sequence(elements.into_iter().collect())
    }

    /// A mapping template.
    pub fn mapping<K: Into<String>>(fields: impl IntoIterator<Item = (K, Template)>) -> Self {
        Template::Mapping(
            fields
                .into_iter()
                .map(|(name, template)| (name.into(), template))
                .collect(),
        )
    }

    /// A transform template wrapping a caller-supplied callback.
    pub fn transform(apply: impl Fn(&Value, &Options) -> Value + 'static) -> Self {
        Template::Transform(Rc::new(apply))
    }

    /// Read the literal leaf at `path` inside this template, as a value.
    ///
    /// Key-based array mappers use this to compare a template element's key
    /// field against data elements. Non-literal leaves have no value form.
    /// The result is always a string: non-string scalars in a data-shaped
    /// template were already stored in display form by `From<&Value>`, so a
    /// key field written as `5` reads back as `"5"` here.
    pub(crate) fn literal_at(&self, path: &str) -> Option<Value> {
        let mut current = self;
        for segment in parse_path(path) {
            current = match current {
                Template::Mapping(fields) => fields.get(&segment)?,
                Template::Sequence(elements) => elements.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        match current {
            Template::Literal(text) => Some(Value::String(text.clone())),
            _ => None,
        }
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Template::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Template::Sequence(elements) => f.debug_tuple("Sequence").field(elements).finish(),
            Template::Mapping(fields) => f.debug_tuple("Mapping").field(fields).finish(),
            Template::Transform(_) => f.write_str("Transform(..)"),
        }
    }
}

/// Data-shaped templates: strings become literals, arrays sequences and
/// objects mappings, so a template can be written with `serde_json::json!`.
/// Other scalars become literals of their display form.
impl From<&Value> for Template {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(text) => Template::Literal(text.clone()),
            Value::Array(items) => Template::Sequence(items.iter().map(Template::from).collect()),
            Value::Object(fields) => Template::Mapping(
                fields
                    .iter()
                    .map(|(name, child)| (name.clone(), Template::from(child)))
                    .collect(),
            ),
            other => Template::Literal(display_value(other)),
        }
    }
}

impl From<Value> for Template {
    fn from(value: Value) -> Self {
        Template::from(&value)
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Template::Literal(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_from_json_shapes() {
        let template = Template::from(json!({"a": ["{x}", "b"], "c": "{y}"}));
        let Template::Mapping(fields) = template else {
            panic!("expected a mapping template");
        };
        assert!(matches!(fields.get("c"), Some(Template::Literal(t)) if t == "{y}"));
        assert!(matches!(fields.get("a"), Some(Template::Sequence(e)) if e.len() == 2));
    }

    #[test]
    fn literal_at_walks_mappings_and_sequences() {
        let template = Template::from(json!({"options": [{"k": "a"}, {"k": "b"}]}));
        assert_eq!(template.literal_at("options[1].k"), Some(json!("b")));
        assert_eq!(template.literal_at("options[2].k"), None);
        assert_eq!(template.literal_at("options"), None); // not a literal leaf
    }
}
