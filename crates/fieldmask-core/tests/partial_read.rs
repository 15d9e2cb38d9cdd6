// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Partial read of a typed record: flatten it with serde, select the
//! requested fields and serialize only those.

use fieldmask_core::{extract, split_field_list, FieldMask};
use pretty_assertions::assert_eq;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
struct Address {
    country: String,
    province: String,
    city: String,
}

#[derive(Debug, Clone, Serialize)]
struct Person {
    name: String,
    age: u32,
    address: Address,
}

/// Response wrapper that serializes only the selected fields
struct GetPersonResponse {
    person: Person,
    field_mask: Vec<String>,
}

impl GetPersonResponse {
    fn to_json(&self) -> anyhow::Result<String> {
        let doc = FieldMask::try_from(serde_json::to_value(&self.person)?)?;
        let fm = extract(&doc, &self.field_mask)?;
        Ok(serde_json::to_string(&*fm)?)
    }
}

fn person() -> Person {
    Person {
        name: "foo".into(),
        age: 20,
        address: Address {
            country: "X".into(),
            province: "Y".into(),
            city: "Z".into(),
        },
    }
}

#[test]
fn partial_read_serializes_selected_fields() {
    let resp = GetPersonResponse {
        person: person(),
        field_mask: vec!["name".into(), "address.city".into()],
    };
    assert_eq!(resp.to_json().unwrap(), r#"{"address":{"city":"Z"},"name":"foo"}"#);
}

#[test]
fn empty_field_mask_serializes_everything() {
    let resp = GetPersonResponse {
        person: person(),
        field_mask: Vec::new(),
    };
    let full = serde_json::to_string(&serde_json::to_value(person()).unwrap()).unwrap();
    assert_eq!(resp.to_json().unwrap(), full);
}

#[test]
fn field_list_parameter_drives_selection() {
    let doc = FieldMask::try_from(serde_json::to_value(person()).unwrap()).unwrap();
    let fields = split_field_list("age, address.country, address.zip");
    let fm = extract(&doc, &fields).unwrap();
    assert_eq!(
        serde_json::Value::from(fm.into_owned()),
        serde_json::json!({"age": 20, "address": {"country": "X", "zip": null}})
    );
}
