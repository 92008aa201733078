//! Backup export and import with merge strategies.
//!
//! # Responsibility
//! - Serialize the user-data document to a portable backup payload.
//! - Parse an uploaded payload and combine it with current state under an
//!   explicit strategy.
//!
//! # Invariants
//! - Import never mutates current state on failure; the caller swaps in
//!   the returned document only on success.
//! - A payload without a `version` field is rejected as a format error.
//! - `append` re-keys every incoming record, so id collisions are
//!   impossible and duplicates are expected on repeat imports.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::model::document::UserDocument;
use crate::store::{generate_id, migrate::migrate_document, StoreError};

pub type ImportResult<T> = Result<T, ImportError>;

/// Format-level import failure, surfaced to the user as an alert.
#[derive(Debug)]
pub enum ImportError {
    /// The payload is not valid JSON.
    Parse(serde_json::Error),
    /// The payload has no `version` marker, so it is not a backup file.
    MissingVersion,
    /// The payload was produced by a newer schema than this binary.
    Store(StoreError),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid import file: {err}"),
            Self::MissingVersion => write!(f, "invalid import file format: missing version"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::MissingVersion => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<StoreError> for ImportError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// How an imported document is combined with current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportStrategy {
    /// The imported document entirely supersedes current state.
    Replace,
    /// Per-record newer-wins on matching ids for the timestamped
    /// collections. Literal id matching; colliding ids from independent
    /// datasets resolve last-writer-wins.
    #[default]
    Merge,
    /// Every incoming record gets a fresh id and is unioned with current
    /// records. No data loss, no deduplication.
    Append,
}

/// Serializes the document as a formatted backup payload with the export
/// moment stamped into `exportedAt`.
pub fn export_payload(
    document: &UserDocument,
    exported_at: DateTime<Utc>,
) -> Result<String, StoreError> {
    let mut snapshot = document.clone();
    snapshot.exported_at = Some(exported_at);
    let payload = serde_json::to_string_pretty(&snapshot)?;
    Ok(payload)
}

/// Backup file name following `airlex_backup_<ISO-date>.json`.
pub fn export_file_name(exported_at: DateTime<Utc>) -> String {
    format!("airlex_backup_{}.json", exported_at.format("%Y-%m-%d"))
}

/// Parses `payload` and combines it with `current` under `strategy`.
///
/// Returns the merged document; `current` is left untouched so a failed
/// import has no effect.
pub fn import_document(
    current: &UserDocument,
    payload: &str,
    strategy: ImportStrategy,
) -> ImportResult<UserDocument> {
    let raw: Value = serde_json::from_str(payload)?;
    let has_version = raw
        .as_object()
        .map(|fields| matches!(fields.get("version"), Some(value) if !value.is_null()))
        .unwrap_or(false);
    if !has_version {
        return Err(ImportError::MissingVersion);
    }

    let incoming = migrate_document(raw)?;

    let merged = match strategy {
        ImportStrategy::Replace => {
            let mut document = incoming;
            document.exported_at = None;
            document
        }
        ImportStrategy::Merge => {
            let mut document = current.clone();
            merge_newer(&mut document.regulations, incoming.regulations, |record| {
                record.updated_at
            });
            merge_newer(&mut document.links, incoming.links, |record| {
                record.updated_at
            });
            merge_newer(&mut document.notes, incoming.notes, |record| {
                record.updated_at
            });
            document
        }
        ImportStrategy::Append => {
            let mut document = current.clone();
            for mut regulation in incoming.regulations.into_values() {
                let id = generate_id("reg");
                regulation.id = id.clone();
                document.regulations.insert(id, regulation);
            }
            for mut link in incoming.links.into_values() {
                let id = generate_id("link");
                link.id = id.clone();
                document.links.insert(id, link);
            }
            for mut note in incoming.notes.into_values() {
                let id = generate_id("note");
                note.id = id.clone();
                document.notes.insert(id, note);
            }
            document
        }
    };

    Ok(merged)
}

fn merge_newer<T>(
    current: &mut std::collections::BTreeMap<String, T>,
    incoming: std::collections::BTreeMap<String, T>,
    updated_at: impl Fn(&T) -> DateTime<Utc>,
) {
    for (id, record) in incoming {
        match current.get(&id) {
            Some(existing) if updated_at(existing) >= updated_at(&record) => {}
            _ => {
                current.insert(id, record);
            }
        }
    }
}
