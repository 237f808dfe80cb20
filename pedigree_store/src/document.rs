// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `{ persons, relations }` document shape and its codec.

use pedigree_model::{FamilyStore, Person, Relation};
use serde::{Deserialize, Serialize};

/// Rejection reasons for an incoming document.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The document is not an object with both top-level keys.
    #[error("document must contain top-level `persons` and `relations` keys")]
    MissingKeys,
    /// The document is not valid JSON, or a field has the wrong shape.
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
}

/// The wire shape of a family data set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilyDocument {
    /// People, in collection order.
    pub persons: Vec<Person>,
    /// Relations, in collection order.
    pub relations: Vec<Relation>,
}

/// Optional metadata stamped onto an export.
///
/// The caller supplies the date string; this crate reads no clock.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExportOptions {
    /// ISO-8601 timestamp written as `exportDate`, if present.
    pub export_date: Option<String>,
    /// Format version written as `version`, if present.
    pub version: Option<String>,
}

#[derive(Serialize)]
struct ExportEnvelope<'a> {
    persons: &'a [Person],
    relations: &'a [Relation],
    #[serde(rename = "exportDate", skip_serializing_if = "Option::is_none")]
    export_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
}

/// Parses a document, requiring both top-level keys.
///
/// The key check runs before typed deserialization so a document that is
/// valid JSON but not a family document reports [`FormatError::MissingKeys`]
/// rather than a field error.
pub fn parse_document(json: &str) -> Result<FamilyDocument, FormatError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let object = value.as_object().ok_or(FormatError::MissingKeys)?;
    if !object.contains_key("persons") || !object.contains_key("relations") {
        return Err(FormatError::MissingKeys);
    }
    Ok(serde_json::from_value(value)?)
}

/// Parses `json` and replaces the store's contents wholesale.
///
/// No merging: the incoming collections are the new truth. On error the
/// store keeps its previous contents.
pub fn import_into(store: &mut FamilyStore, json: &str) -> Result<(), FormatError> {
    let document = parse_document(json)?;
    store.replace_all(document.persons, document.relations);
    Ok(())
}

/// Serializes the store as a pretty-printed document, with any requested
/// metadata appended after the collections.
pub fn export_json(store: &FamilyStore, options: &ExportOptions) -> Result<String, FormatError> {
    let envelope = ExportEnvelope {
        persons: store.persons(),
        relations: store.relations(),
        export_date: options.export_date.as_deref(),
        version: options.version.as_deref(),
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// The conventional download name for an export made on `date`
/// (`YYYY-MM-DD`).
#[must_use]
pub fn export_file_name(date: &str) -> String {
    format!("family-data_{date}.json")
}
