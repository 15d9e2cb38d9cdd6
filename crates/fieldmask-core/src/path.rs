// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Dot-separated path parsing

use crate::error::{FieldMaskError, Result};
use std::fmt;

/// Separator between path segments
pub const SEPARATOR: char = '.';

/// A parsed dot-separated path such as `address.city`.
///
/// The empty string parses to the root path, which has no segments and
/// stands for the entire document rather than a location inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<'a> {
    raw: &'a str,
    segments: Vec<&'a str>,
}

impl<'a> Path<'a> {
    /// Parse a dotted path, rejecting empty segments (`a..b`, `.a`, `a.`)
    pub fn parse(raw: &'a str) -> Result<Self> {
        if raw.is_empty() {
            return Ok(Path::root());
        }

        let segments: Vec<&str> = raw.split(SEPARATOR).collect();
        if let Some(pos) = segments.iter().position(|s| s.is_empty()) {
            return Err(FieldMaskError::invalid_path(
                raw,
                format!("empty segment at position {pos}"),
            ));
        }

        Ok(Self { raw, segments })
    }

    /// The sentinel path that selects the whole document
    pub fn root() -> Path<'static> {
        Path {
            raw: "",
            segments: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Terminal segment and the prefix leading to it; `None` for the root path
    pub fn split_last(&self) -> Option<(&'a str, &[&'a str])> {
        self.segments.split_last().map(|(last, prefix)| (*last, prefix))
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

/// Parse a batch of paths for extraction or merging.
///
/// Inside a non-empty batch every entry must address a location, so the
/// root sentinel is rejected here. Nothing is returned unless every entry
/// parses.
pub(crate) fn parse_all<S: AsRef<str>>(paths: &[S]) -> Result<Vec<Path<'_>>> {
    paths
        .iter()
        .map(|p| {
            let raw = p.as_ref();
            if raw.is_empty() {
                return Err(FieldMaskError::invalid_path(
                    raw,
                    "empty path is only allowed as an empty path list",
                ));
            }
            Path::parse(raw)
        })
        .collect()
}

/// Split a comma-separated field list such as `"name, address.city"`.
///
/// Entries are trimmed and blank entries are dropped, so an empty or
/// whitespace-only list yields no paths (which selects everything).
pub fn split_field_list(list: &str) -> Vec<&str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty()).collect()
}
