//! Forward migration of persisted documents.
//!
//! # Responsibility
//! - Turn any previously persisted document shape into the current
//!   `UserDocument`.
//!
//! # Invariants
//! - Migration is a pure value transformation, independent of storage.
//! - Missing top-level collections become empty mappings.
//! - A missing `version` is stamped with [`SCHEMA_VERSION`]; a newer
//!   version than this binary supports is rejected.

use serde_json::{Map, Value};

use crate::model::document::{UserDocument, SCHEMA_VERSION};

use super::{StoreError, StoreResult};

const COLLECTION_KEYS: &[&str] = &["regulations", "links", "notes", "themes"];

/// Migrates a raw persisted JSON value to the current document shape.
pub fn migrate_document(value: Value) -> StoreResult<UserDocument> {
    let Value::Object(mut fields) = value else {
        return Err(StoreError::InvalidData(
            "persisted document is not a JSON object".to_string(),
        ));
    };

    let version = stamp_version(&mut fields)?;
    if version > SCHEMA_VERSION {
        return Err(StoreError::UnsupportedSchemaVersion {
            document_version: version,
            latest_supported: SCHEMA_VERSION,
        });
    }

    for key in COLLECTION_KEYS {
        let missing = matches!(fields.get(*key), None | Some(Value::Null));
        if missing {
            fields.insert((*key).to_string(), Value::Object(Map::new()));
        }
    }

    let document = serde_json::from_value(Value::Object(fields))?;
    Ok(document)
}

fn stamp_version(fields: &mut Map<String, Value>) -> StoreResult<u32> {
    match fields.get("version") {
        None | Some(Value::Null) => {
            fields.insert("version".to_string(), Value::from(SCHEMA_VERSION));
            Ok(SCHEMA_VERSION)
        }
        Some(value) => {
            let version = value.as_u64().ok_or_else(|| {
                StoreError::InvalidData(format!("invalid version field `{value}`"))
            })?;
            u32::try_from(version).map_err(|_| {
                StoreError::InvalidData(format!("invalid version field `{value}`"))
            })
        }
    }
}

impl UserDocument {
    /// Parses and migrates a serialized document in one step.
    pub fn from_json(payload: &str) -> StoreResult<Self> {
        let value: Value = serde_json::from_str(payload)?;
        migrate_document(value)
    }
}
