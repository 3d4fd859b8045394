/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Call options: placeholder pattern, array mapper and direction tag.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::template::Template;

/// Default placeholder pattern: `{token}`, with the token text in the
/// single capture group.
static DEFAULT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(.+?)\}").unwrap());

/// Which direction a dispatch is running. Passed to [`Template::Transform`]
/// callbacks through [`Options::how`] so a single callback can branch on
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Forward: data to rendered value.
    Render,
    /// Reverse: rendered value back to data.
    Derive,
}

/// Equality check between a data element's key field and a template
/// element's key field.
pub type Comparator = Rc<dyn Fn(&Value, &Value) -> bool>;

/// Custom element selection: `(template_element, data, index)` to the data
/// element corresponding to the template element, if any.
pub type MapperFn = Rc<dyn Fn(&Template, Option<&Value>, usize) -> Option<Value>>;

/// Strategy for pairing template-array elements with data-array elements
/// in the reverse direction.
#[derive(Clone)]
pub enum Mapper {
    /// Key-based, order-independent: pick the data element whose value at
    /// `key` compares equal to the template element's literal at `key`.
    ///
    /// Template-side key fields carry their literal string form: a template
    /// built from `json!({"k": 5, ..})` holds the literal `"5"`, which never
    /// equals a data-side `Number(5)` under plain value equality. Supply a
    /// comparator via [`Mapper::by_key_with`] when data key fields are not
    /// strings.
    ByKey {
        key: String,
        /// `None` means plain value equality.
        comparator: Option<Comparator>,
    },

    /// Full custom control over element selection.
    ByFunction(MapperFn),

    /// Per-field mappers, consumed one mapping descent further down.
    ByField(BTreeMap<String, Mapper>),
}

impl Mapper {
    /// Key-based mapper with value equality.
    pub fn by_key(key: impl Into<String>) -> Self {
        Mapper::ByKey {
            key: key.into(),
            comparator: None,
        }
    }

    /// Key-based mapper with a custom comparator.
    pub fn by_key_with(
        key: impl Into<String>,
        comparator: impl Fn(&Value, &Value) -> bool + 'static,
    ) -> Self {
        Mapper::ByKey {
            key: key.into(),
            comparator: Some(Rc::new(comparator)),
        }
    }

    /// Custom mapper function.
    pub fn by_function(
        select: impl Fn(&Template, Option<&Value>, usize) -> Option<Value> + 'static,
    ) -> Self {
        Mapper::ByFunction(Rc::new(select))
    }

    /// Per-field mapper map.
    pub fn by_field<K: Into<String>>(fields: impl IntoIterator<Item = (K, Mapper)>) -> Self {
        Mapper::ByField(
            fields
                .into_iter()
                .map(|(name, mapper)| (name.into(), mapper))
                .collect(),
        )
    }

    /// The sub-mapper for `field`, when this is a per-field mapper.
    pub(crate) fn narrow(&self, field: &str) -> Option<&Mapper> {
        match self {
            Mapper::ByField(fields) => fields.get(field),
            _ => None,
        }
    }
}

impl fmt::Debug for Mapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mapper::ByKey { key, .. } => f
                .debug_struct("ByKey")
                .field("key", key)
                .finish_non_exhaustive(),
            Mapper::ByFunction(_) => f.write_str("ByFunction(..)"),
            Mapper::ByField(fields) => f.debug_tuple("ByField").field(fields).finish(),
        }
    }
}

/// Options threaded through a full dispatch call.
///
/// Everything propagates by value down the recursion except `mapper`,
/// which narrows to the sub-mapper for the current field at each mapping
/// descent.
#[derive(Debug, Clone)]
pub struct Options {
    /// Placeholder detection pattern; must contain exactly one capture
    /// group holding the token text.
    pub pattern: Regex,

    /// Array correspondence strategy for the reverse direction.
    pub mapper: Option<Mapper>,

    /// Direction tag seen by transform callbacks. The dispatch entry
    /// points fill it in when unset; a caller-supplied value wins for the
    /// top-level call context.
    pub how: Option<Direction>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            pattern: DEFAULT_PATTERN.clone(),
            mapper: None,
            how: None,
        }
    }
}

impl Options {
    /// Options with the default `{token}` pattern and no mapper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the placeholder pattern.
    pub fn with_pattern(mut self, pattern: Regex) -> Self {
        self.pattern = pattern;
        self
    }

    /// Set the array mapper.
    pub fn with_mapper(mut self, mapper: Mapper) -> Self {
        self.mapper = Some(mapper);
        self
    }

    /// Override the direction tag transform callbacks will see, instead of
    /// the one the dispatch entry point would fill in.
    pub fn with_how(mut self, how: Direction) -> Self {
        self.how = Some(how);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern_captures_token_text() {
        let options = Options::default();
        let caps = options.pattern.captures("x{a.b}y").unwrap();
        assert_eq!(&caps[1], "a.b");
    }

    #[test]
    fn narrow_only_applies_to_by_field() {
        let mapper = Mapper::by_field([("options", Mapper::by_key("k"))]);
        assert!(matches!(
            mapper.narrow("options"),
            Some(Mapper::ByKey { key, .. }) if key == "k"
        ));
        assert!(mapper.narrow("other").is_none());
        assert!(Mapper::by_key("k").narrow("options").is_none());
    }
}
