/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Dotted/bracket path access over `serde_json` values.
//!
//! This crate is the path layer used by the `unterpolate` template engine:
//! a tokenizer for dotted/bracketed path strings, nested [`get`]/[`set`]
//! over [`serde_json::Value`] trees, and [`unflatten`] for turning a map
//! keyed by path strings into a nested value.
//!
//! Paths use `.` for object member access and `[n]` (or a bare digit
//! segment) for array index access. Segment names may be wrapped in single
//! or double quotes; the quotes are stripped and never change the number of
//! segments.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use unterpolate_path::{get, set};
//!
//! let data = json!({"employee": {"salary": 50000}});
//! assert_eq!(get(&data, "employee.salary"), Some(&json!(50000)));
//!
//! let updated = set(&data, "employee.title", json!("engineer"));
//! assert_eq!(
//!     updated,
//!     json!({"employee": {"salary": 50000, "title": "engineer"}})
//! );
//! // the original is untouched
//! assert_eq!(data, json!({"employee": {"salary": 50000}}));
//! ```

pub mod access;
pub mod flatten;
pub mod parse;

pub use access::{get, get_or, is_falsy, set, set_in_place};
pub use flatten::unflatten;
pub use parse::parse_path;
