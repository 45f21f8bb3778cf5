//! Catalog document parsing
//!
//! The remote document is an array of component objects:
//!
//! ```json
//! [{ "Title": "Button", "Category": "General",
//!    "DemoList": [{ "Title": "Icon", "Description": "...", "Code": "<Button ... />" }] }]
//! ```
//!
//! Only a non-array top level is fatal. Every other irregularity degrades to
//! empty fields so that one bad entry never poisons the whole load.

use super::{Catalog, ComponentRecord, DemoRecord};
use crate::{DocsError, Result};
use serde_json::Value;

/// Parse raw catalog bytes into components and their flattened demos
pub fn parse_catalog(bytes: &[u8]) -> Result<Catalog> {
    let root: Value = serde_json::from_slice(bytes)
        .map_err(|e| DocsError::MalformedCatalog(format!("invalid JSON: {}", e)))?;

    let entries = match root {
        Value::Array(entries) => entries,
        other => {
            return Err(DocsError::MalformedCatalog(format!(
                "expected a top-level array of components, found {}",
                json_kind(&other)
            )));
        }
    };

    let mut catalog = Catalog::new();

    for (position, entry) in entries.iter().enumerate() {
        if !entry.is_object() {
            tracing::warn!(position, "catalog entry is not an object, keeping it with empty fields");
        }

        let title = string_field(entry, &["Title"]);
        let first_demo = catalog.demos.len();

        match entry.get("DemoList") {
            None | Some(Value::Null) => {}
            Some(Value::Array(demos)) => {
                for demo in demos {
                    catalog.demos.push(DemoRecord {
                        component: title.clone(),
                        scenario: string_field(demo, &["Title"]),
                        description: string_field(demo, &["Description"]),
                        source: string_field(demo, &["Code"]),
                    });
                }
            }
            Some(_) => {
                tracing::warn!(component = %title, "DemoList is not an array, skipping its demos");
            }
        }

        catalog.components.push(ComponentRecord {
            sub_title: string_field(entry, &["SubTitle"]),
            category: string_field(entry, &["Category", "Type"]),
            description: string_field(entry, &["Desc", "Description"]),
            demos: first_demo..catalog.demos.len(),
            title,
        });
    }

    Ok(catalog)
}

/// First non-empty string among `keys`, or an empty string
fn string_field(value: &Value, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| value.get(key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
