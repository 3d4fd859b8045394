/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Bidirectional template interpolation over `serde_json` values.
//!
//! Given a template (string, sequence, mapping or transform callback) and
//! a data value, [`render`] substitutes `{path}` placeholders with values
//! drawn from the data; [`derive`] runs the same template the other way,
//! reconstructing a data object by matching a concrete rendered value
//! against the template's placeholder structure.
//!
//! ```
//! use serde_json::json;
//! use unterpolate::{Options, Template, derive, render};
//!
//! let template = Template::from(json!("{year}-{month}-{day}"));
//! let options = Options::default();
//!
//! let date = json!({"year": "2019", "month": "10", "day": "01"});
//! assert_eq!(render(&template, &date, &options), json!("2019-10-01"));
//!
//! let recovered = derive(&template, &json!("2019-10-01"), &options).unwrap();
//! assert_eq!(recovered, date);
//! ```
//!
//! Templates compose structurally: a mapping template recovers nested data
//! from several rendered fields at once, a sequence template walks arrays,
//! and an [`Options::mapper`] pairs template-array elements with
//! data-array elements that are not simply positional. Placeholder tokens
//! are dotted/bracketed paths handled by the `unterpolate-path` crate,
//! whose API is re-exported here.
//!
//! The engine is synchronous and pure: no I/O, no shared state, and the
//! only failure mode is [`TemplateError::AmbiguousUnmatch`]. Missing data
//! degrades to `Null` bindings and empty substitutions by design.

pub mod derive;
pub mod error;
pub mod mapper;
pub mod matcher;
pub mod options;
pub mod render;
pub mod template;

// Re-export main types and operations at crate root
pub use derive::derive;
pub use error::{TemplateError, TemplateResult};
pub use mapper::map_element;
pub use matcher::{Source, interpolate, unmatch};
pub use options::{Comparator, Direction, Mapper, MapperFn, Options};
pub use render::render;
pub use template::{Template, TransformFn};

// The path layer is part of the public surface
pub use unterpolate_path::{get, get_or, is_falsy, parse_path, set, set_in_place, unflatten};
