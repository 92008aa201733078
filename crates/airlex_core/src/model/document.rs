//! The persisted user-data document.
//!
//! # Responsibility
//! - Define the single JSON document holding all user-created data.
//! - Provide the empty default every load/import path falls back to.
//!
//! # Invariants
//! - `version` tracks the storage schema, currently [`SCHEMA_VERSION`].
//! - Collections are plain id-to-record mappings; insertion order is
//!   irrelevant.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::records::{Link, Note, Regulation, Theme};

/// Current storage schema version stamped into new and migrated documents.
pub const SCHEMA_VERSION: u32 = 1;

/// The whole user-data document, persisted as one JSON value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    pub version: u32,
    /// Set on export, `None` for live documents.
    #[serde(default)]
    pub exported_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub regulations: BTreeMap<String, Regulation>,
    #[serde(default)]
    pub links: BTreeMap<String, Link>,
    #[serde(default)]
    pub notes: BTreeMap<String, Note>,
    #[serde(default)]
    pub themes: BTreeMap<String, Theme>,
}

impl UserDocument {
    /// Returns the empty document stamped with the current schema version.
    pub fn empty() -> Self {
        Self {
            version: SCHEMA_VERSION,
            exported_at: None,
            regulations: BTreeMap::new(),
            links: BTreeMap::new(),
            notes: BTreeMap::new(),
            themes: BTreeMap::new(),
        }
    }
}

impl Default for UserDocument {
    fn default() -> Self {
        Self::empty()
    }
}
