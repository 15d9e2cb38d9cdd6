// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! The `FieldMask` document type and path lookups

use crate::error::{kind_of, FieldMaskError, Result};
use crate::path::{Path, SEPARATOR};
use crate::tree;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as J};
use std::borrow::Cow;
use std::ops::Deref;

/// A nested JSON object used both as a document and as a selection over one.
///
/// Leaves mark selected values (`null` meaning "selected, but unknown or
/// unset") and nested objects mark selected sub-trees. Serializes as a plain
/// JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMask(Map<String, J>);

impl FieldMask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_inner(self) -> Map<String, J> {
        self.0
    }

    pub(crate) fn map_mut(&mut self) -> &mut Map<String, J> {
        &mut self.0
    }

    /// Build a mask holding only the values at `paths`, with `null` for paths
    /// that do not resolve. See [`crate::extract`].
    pub fn from_paths<'a, S: AsRef<str>>(
        src: &'a FieldMask,
        paths: &[S],
    ) -> Result<Cow<'a, FieldMask>> {
        crate::extract::extract(src, paths)
    }

    /// Copy the values at `paths` from `src` into this mask, skipping paths
    /// that do not resolve. See [`crate::copy_present`].
    pub fn copy_from<S: AsRef<str>>(&mut self, src: &FieldMask, paths: &[S]) -> Result<()> {
        crate::merge::copy_present(self, src, paths)
    }

    /// Look up a dotted path.
    ///
    /// A present `null` is found like any other value. The root path and
    /// malformed paths never resolve.
    pub fn get(&self, path: &str) -> Option<&J> {
        let path = Path::parse(path).ok()?;
        tree::resolve(&self.0, path.segments())
    }

    pub fn has(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// The nested mask at `path`.
    ///
    /// A `null` leaf yields an empty mask since there is nothing more specific
    /// to select; a non-null scalar yields `None` as it cannot be drilled into.
    /// The root path yields the whole mask.
    pub fn field_mask(&self, path: &str) -> Option<FieldMask> {
        if path.is_empty() {
            return Some(self.clone());
        }
        match self.get(path)? {
            J::Null => Some(FieldMask::new()),
            J::Object(map) => Some(FieldMask(map.clone())),
            _ => None,
        }
    }

    /// Dotted paths of every leaf in the mask.
    ///
    /// Scalars, `null` and empty objects are leaves. Keys that themselves
    /// contain a `.` produce paths that do not round-trip.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_leaf_paths(&self.0, "", &mut out);
        out
    }
}

fn collect_leaf_paths(map: &Map<String, J>, prefix: &str, out: &mut Vec<String>) {
    for (k, v) in map {
        let pfx = if prefix.is_empty() {
            k.clone()
        } else {
            format!("{prefix}{SEPARATOR}{k}")
        };
        match v {
            J::Object(child) if !child.is_empty() => collect_leaf_paths(child, &pfx, out),
            _ => out.push(pfx),
        }
    }
}

impl Deref for FieldMask {
    type Target = Map<String, J>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Map<String, J>> for FieldMask {
    fn from(map: Map<String, J>) -> Self {
        Self(map)
    }
}

impl TryFrom<J> for FieldMask {
    type Error = FieldMaskError;

    fn try_from(value: J) -> Result<Self> {
        match value {
            J::Object(map) => Ok(Self(map)),
            other => Err(FieldMaskError::NotAnObject {
                found: kind_of(&other),
            }),
        }
    }
}

impl From<FieldMask> for J {
    fn from(mask: FieldMask) -> Self {
        J::Object(mask.0)
    }
}

impl FromIterator<(String, J)> for FieldMask {
    fn from_iter<T: IntoIterator<Item = (String, J)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
