/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for template operations.

use thiserror::Error;

/// Errors that can occur during template operations.
///
/// The engine is deliberately permissive: missing data and malformed
/// placeholder syntax produce best-effort results, never errors. The one
/// failure mode is the genuinely ambiguous case below.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Reverse-matching a string template with more than one placeholder
    /// against a non-string value: there is no way to split one value
    /// across several capture groups.
    #[error("cannot unterpolate a string template against a non-string value")]
    AmbiguousUnmatch {
        /// Number of placeholders in the offending template.
        placeholders: usize,
    },
}

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;
