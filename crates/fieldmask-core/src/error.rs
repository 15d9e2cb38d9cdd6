// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for field mask operations

use serde_json::Value as J;
use thiserror::Error;

/// Result type alias for field mask operations
pub type Result<T> = std::result::Result<T, FieldMaskError>;

/// Errors surfaced at the API boundary.
///
/// Unresolvable paths are never errors: extraction writes a `null`
/// placeholder, merging skips the path and lookups return `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldMaskError {
    #[error("invalid path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

impl FieldMaskError {
    pub(crate) fn invalid_path(path: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

/// Short name of a JSON value's kind, used in error messages
pub(crate) fn kind_of(v: &J) -> &'static str {
    match v {
        J::Null => "null",
        J::Bool(_) => "boolean",
        J::Number(_) => "number",
        J::String(_) => "string",
        J::Array(_) => "array",
        J::Object(_) => "object",
    }
}
