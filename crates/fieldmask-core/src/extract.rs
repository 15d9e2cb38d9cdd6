// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Selective extraction for partial reads

use crate::error::Result;
use crate::mask::FieldMask;
use crate::path::{parse_all, Path};
use crate::tree::child_node;
use serde_json::{Map, Value as J};
use std::borrow::Cow;

/// Build a new mask holding only the values at `paths` in `src`.
///
/// Every requested path ends up in the result: the source value when it
/// resolves, `null` otherwise. Overlapping paths share intermediate objects.
///
/// An empty path list selects everything and borrows `src` instead of
/// copying it. Call `into_owned` on the result before mutating it
/// independently of the source.
pub fn extract<'a, S: AsRef<str>>(
    src: &'a FieldMask,
    paths: &[S],
) -> Result<Cow<'a, FieldMask>> {
    if paths.is_empty() {
        tracing::trace!("no paths requested, selecting the whole document");
        return Ok(Cow::Borrowed(src));
    }

    let parsed = parse_all(paths)?;
    let mut out = Map::new();
    for path in &parsed {
        copy_with_placeholder(&mut out, src, path);
    }
    Ok(Cow::Owned(FieldMask::from(out)))
}

fn copy_with_placeholder(dst: &mut Map<String, J>, src: &Map<String, J>, path: &Path<'_>) {
    let Some((last, prefix)) = path.split_last() else {
        return;
    };

    // The source pointer becomes None once it leaves the object tree; the
    // destination keeps descending so the placeholder lands at the full path.
    let mut src_node = Some(src);
    let mut dst_node = dst;
    for seg in prefix {
        src_node = src_node.and_then(|m| m.get(*seg)).and_then(J::as_object);
        dst_node = child_node(dst_node, seg);
    }

    let value = match src_node.and_then(|m| m.get(last)) {
        Some(v) => v.clone(),
        None => {
            tracing::debug!(path = %path, "path not found in source, selecting null placeholder");
            J::Null
        }
    };
    dst_node.insert(last.to_string(), value);
}
