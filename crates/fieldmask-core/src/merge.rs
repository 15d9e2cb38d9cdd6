// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Selective merging for partial updates

use crate::error::Result;
use crate::mask::FieldMask;
use crate::path::parse_all;
use crate::tree::{child_node, resolve, write_at};
use serde_json::{Map, Value as J};

/// Copy the values at `paths` from `src` into `dst`.
///
/// `dst` acts as an accumulator and may be reused across several calls.
/// Paths that do not fully resolve in `src` are skipped and leave `dst`
/// exactly as it was, with no placeholder and no intermediate objects.
/// All paths are validated before `dst` is touched.
pub fn copy_present<S: AsRef<str>>(
    dst: &mut FieldMask,
    src: &FieldMask,
    paths: &[S],
) -> Result<()> {
    let parsed = parse_all(paths)?;
    for path in &parsed {
        let Some((last, prefix)) = path.split_last() else {
            continue;
        };
        let Some(value) = resolve(src, path.segments()) else {
            tracing::debug!(path = %path, "path not present in source, skipping");
            continue;
        };
        write_at(dst.map_mut(), prefix, last, value.clone());
    }
    Ok(())
}

/// Overwrite `target` at every leaf of `mask`.
///
/// Non-empty objects in the mask are merged key by key; scalars, `null`
/// and empty objects replace the target value. Keys are matched as-is, so
/// keys containing `.` or empty keys are applied like any other. Values
/// outside the mask are left untouched and an empty mask changes nothing.
pub fn apply(target: &mut FieldMask, mask: &FieldMask) {
    tracing::trace!(keys = mask.len(), "applying field mask");
    apply_map(target.map_mut(), mask);
}

fn apply_map(target: &mut Map<String, J>, mask: &Map<String, J>) {
    for (k, v) in mask {
        match v {
            J::Object(child) if !child.is_empty() => apply_map(child_node(target, k), child),
            leaf => {
                target.insert(k.clone(), leaf.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldMaskError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn mask(v: J) -> FieldMask {
        FieldMask::try_from(v).unwrap()
    }

    #[test]
    fn copies_present_paths() {
        let src = mask(json!({"age": 10, "address": {"city": "ZZ"}}));
        let mut fm = FieldMask::new();
        copy_present(&mut fm, &src, &["age", "address.city"]).unwrap();
        assert_eq!(J::from(fm), json!({"age": 10, "address": {"city": "ZZ"}}));
    }

    #[test]
    fn skips_absent_paths_without_side_effects() {
        let src = mask(json!({"age": 10, "name": "foo"}));
        let mut fm = mask(json!({"keep": 1}));
        copy_present(&mut fm, &src, &["address.city", "name.first", "missing"]).unwrap();
        assert_eq!(J::from(fm), json!({"keep": 1}));
    }

    #[test]
    fn accumulates_across_calls() {
        let src = mask(json!({"a": {"b": 1, "c": 2}, "d": 3}));
        let mut fm = FieldMask::new();
        fm.copy_from(&src, &["a.b"]).unwrap();
        fm.copy_from(&src, &["a.c", "d"]).unwrap();
        assert_eq!(J::from(fm), json!({"a": {"b": 1, "c": 2}, "d": 3}));
    }

    #[test]
    fn replaces_scalar_intermediate_in_destination() {
        let src = mask(json!({"a": {"b": 1}}));
        let mut fm = mask(json!({"a": "old"}));
        copy_present(&mut fm, &src, &["a.b"]).unwrap();
        assert_eq!(J::from(fm), json!({"a": {"b": 1}}));
    }

    #[test]
    fn copies_null_source_values() {
        let src = mask(json!({"a": null}));
        let mut fm = FieldMask::new();
        copy_present(&mut fm, &src, &["a"]).unwrap();
        assert_eq!(J::from(fm), json!({"a": null}));
    }

    #[test]
    fn invalid_path_leaves_destination_untouched() {
        let src = mask(json!({"a": 1, "b": 2}));
        let mut fm = FieldMask::new();
        let err = copy_present(&mut fm, &src, &["a", "b."]).unwrap_err();
        assert!(matches!(err, FieldMaskError::InvalidPath { .. }));
        assert!(fm.is_empty());
    }

    #[test]
    fn apply_overwrites_only_masked_leaves() {
        let mut target = mask(json!({
            "name": "foo",
            "age": 20,
            "address": {"country": "X", "province": "Y", "city": "Z"}
        }));
        let patch = mask(json!({"age": 10, "address": {"city": "ZZ"}}));
        apply(&mut target, &patch);
        assert_eq!(
            J::from(target),
            json!({
                "name": "foo",
                "age": 10,
                "address": {"country": "X", "province": "Y", "city": "ZZ"}
            })
        );
    }

    #[test]
    fn apply_empty_mask_is_noop() {
        let mut target = mask(json!({"a": 1}));
        apply(&mut target, &FieldMask::new());
        assert_eq!(J::from(target), json!({"a": 1}));
    }

    #[test]
    fn apply_keeps_keys_containing_separator() {
        let mut target = mask(json!({"a": 1, "x": {"y": 0}}));
        apply(&mut target, &mask(json!({"x.y": 2, "a": 3})));
        assert_eq!(J::from(target), json!({"a": 3, "x": {"y": 0}, "x.y": 2}));
    }

    #[test]
    fn apply_handles_empty_keys() {
        let mut target = mask(json!({"a": 1, "x": {"keep": true}}));
        apply(&mut target, &mask(json!({"": 2, "a": 3, "x": {"": 1}})));
        assert_eq!(
            J::from(target),
            json!({"": 2, "a": 3, "x": {"keep": true, "": 1}})
        );
    }

    #[test]
    fn apply_replaces_scalar_with_nested_patch() {
        let mut target = mask(json!({"a": "old", "b": {"c": 1}}));
        apply(&mut target, &mask(json!({"a": {"b": 1}, "b": {}})));
        assert_eq!(J::from(target), json!({"a": {"b": 1}, "b": {}}));
    }
}
