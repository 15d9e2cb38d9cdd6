// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Field masks: sparse, path-addressed selections over nested JSON documents.
//!
//! A [`FieldMask`] is an ordinary JSON object whose shape records which
//! fields of some other document were selected. The same type serves as the
//! source document and as the mask. Paths are dot-separated keys such as
//! `address.city`; there is no array indexing, wildcard or escaping.
//!
//! Two operations build masks, with deliberately different policies:
//!
//! - [`extract`] (read side) returns a new mask with every requested path
//!   present, writing `null` for paths that do not resolve in the source.
//! - [`copy_present`] (write side) accumulates values into an existing mask
//!   and silently skips paths that do not resolve.
//!
//! ```
//! use fieldmask_core::{copy_present, extract, FieldMask};
//! use serde_json::json;
//!
//! let person = FieldMask::try_from(json!({
//!     "name": "foo",
//!     "age": 20,
//!     "address": {"country": "X", "city": "Z"}
//! }))?;
//!
//! let view = extract(&person, &["name", "address.city", "nickname"])?;
//! assert_eq!(
//!     serde_json::to_value(&*view)?,
//!     json!({"name": "foo", "address": {"city": "Z"}, "nickname": null})
//! );
//!
//! let patch = FieldMask::try_from(json!({"age": 10}))?;
//! let mut update = FieldMask::new();
//! copy_present(&mut update, &patch, &["age", "address.city"])?;
//! assert!(update.has("age"));
//! assert!(!update.has("address"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod extract;
pub mod mask;
pub mod merge;
pub mod path;
mod tree;

pub use error::{FieldMaskError, Result};
pub use extract::extract;
pub use mask::FieldMask;
pub use merge::{apply, copy_present};
pub use path::{split_field_list, Path};
