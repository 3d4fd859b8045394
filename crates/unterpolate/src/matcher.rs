/*
 * matcher.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The placeholder matcher: string-leaf operations for both directions.
//!
//! [`interpolate`] substitutes `{token}` occurrences in a string template
//! with values looked up from a data source. [`unmatch`] compiles the same
//! placeholder syntax into a positional-capture pattern and extracts
//! bindings back out of a concrete string.

use regex::Regex;
use serde_json::{Map, Value};
use unterpolate_path::{get, is_falsy};

use crate::error::{TemplateError, TemplateResult};
use crate::options::Options;

/// Where placeholder lookups read from during interpolation.
pub enum Source<'a> {
    /// A data value; tokens resolve as paths into it.
    Value(&'a Value),
    /// A resolver callback invoked with the bare token text.
    Resolver(&'a dyn Fn(&str) -> Option<Value>),
}

impl<'a> From<&'a Value> for Source<'a> {
    fn from(value: &'a Value) -> Self {
        Source::Value(value)
    }
}

impl Source<'_> {
    fn lookup(&self, token: &str) -> Option<Value> {
        match self {
            Source::Value(value) => get(value, token).cloned(),
            Source::Resolver(resolve) => resolve(token),
        }
    }
}

/// Substitute every placeholder in `template` with data from `source`.
///
/// A template without placeholders is returned unchanged. A template that
/// is exactly one placeholder is a full replacement: the looked-up value
/// is returned as-is, whatever its type. Otherwise each placeholder is
/// replaced with the display form of its value, with falsy and missing
/// lookups contributing the empty string.
pub fn interpolate(template: &str, source: Source<'_>, options: &Options) -> Value {
    let occurrences: Vec<regex::Captures<'_>> =
        options.pattern.captures_iter(template).collect();

    if occurrences.is_empty() {
        return Value::String(template.to_string());
    }

    if let [only] = occurrences.as_slice() {
        if let Some(whole) = only.get(0) {
            if whole.start() == 0 && whole.end() == template.len() {
                let token = only.get(1).map_or("", |m| m.as_str());
                return source.lookup(token).unwrap_or(Value::Null);
            }
        }
    }

    let mut rendered = String::new();
    let mut cursor = 0;
    for occurrence in &occurrences {
        let Some(whole) = occurrence.get(0) else { continue };
        rendered.push_str(&template[cursor..whole.start()]);
        let token = occurrence.get(1).map_or("", |m| m.as_str());
        if let Some(found) = source.lookup(token) {
            if !is_falsy(&found) {
                rendered.push_str(&display_value(&found));
            }
        }
        cursor = whole.end();
    }
    rendered.push_str(&template[cursor..]);
    Value::String(rendered)
}

/// The string form of a value spliced into surrounding text: strings
/// as-is, numbers and booleans via `to_string`, arrays comma-joined,
/// objects as compact JSON, null empty.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Reverse-match `value` against `template`, producing dotted-key bindings.
///
/// The template is compiled into a positional-capture pattern: each
/// placeholder becomes a `(.*)` group, recorded left-to-right. A
/// non-string value can only bind a single-placeholder template, in which
/// case the whole value is bound; more than one placeholder is
/// [`TemplateError::AmbiguousUnmatch`]. For a string value each token is
/// bound to its captured substring, or `Null` when the pattern does not
/// match.
///
/// Bindings are keyed by raw token text ("dotted keys"); nesting them into
/// a value is the top-level dispatcher's job.
pub fn unmatch(
    template: &str,
    value: &Value,
    options: &Options,
) -> TemplateResult<Map<String, Value>> {
    let mut tokens = Vec::new();
    let mut compiled = String::new();
    let mut cursor = 0;
    for occurrence in options.pattern.captures_iter(template) {
        let Some(whole) = occurrence.get(0) else { continue };
        compiled.push_str(&template[cursor..whole.start()]);
        compiled.push_str("(.*)");
        tokens.push(occurrence.get(1).map_or("", |m| m.as_str()).to_string());
        cursor = whole.end();
    }
    compiled.push_str(&template[cursor..]);

    let mut bindings = Map::new();

    let Value::String(text) = value else {
        if tokens.len() > 1 {
            return Err(TemplateError::AmbiguousUnmatch {
                placeholders: tokens.len(),
            });
        }
        if let Some(token) = tokens.into_iter().next() {
            bindings.insert(token, value.clone());
        }
        return Ok(bindings);
    };

    // literal text is carried over unescaped; a template that compiles to
    // an invalid pattern degrades to unmatched, all-Null bindings
    let matched = Regex::new(&compiled).ok().and_then(|re| re.captures(text));
    for (index, token) in tokens.into_iter().enumerate() {
        let bound = matched
            .as_ref()
            .and_then(|caps| caps.get(index + 1))
            .map_or(Value::Null, |m| Value::String(m.as_str().to_string()));
        bindings.insert(token, bound);
    }
    Ok(bindings)
}
