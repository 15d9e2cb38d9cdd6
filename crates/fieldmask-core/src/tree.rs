// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Traversal primitives shared by extraction and merging

use serde_json::{Map, Value as J};

/// Follow `segments` from `doc`, requiring an object at every non-terminal step
pub(crate) fn resolve<'v>(doc: &'v Map<String, J>, segments: &[&str]) -> Option<&'v J> {
    let (first, rest) = segments.split_first()?;
    let mut cur = doc.get(*first)?;
    for seg in rest {
        cur = cur.as_object()?.get(*seg)?;
    }
    Some(cur)
}

/// Descend into `parent[key]`, replacing anything that is not an object with an empty one
pub(crate) fn child_node<'m>(parent: &'m mut Map<String, J>, key: &str) -> &'m mut Map<String, J> {
    let slot = parent.entry(key).or_insert(J::Null);
    if !slot.is_object() {
        *slot = J::Object(Map::new());
    }
    match slot {
        J::Object(map) => map,
        _ => unreachable!("slot was just replaced with an object"),
    }
}

/// Write `value` at the end of `prefix` + `last`, creating intermediate objects
pub(crate) fn write_at(root: &mut Map<String, J>, prefix: &[&str], last: &str, value: J) {
    let mut cur = root;
    for seg in prefix {
        cur = child_node(cur, seg);
    }
    cur.insert(last.to_string(), value);
}
