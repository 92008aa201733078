//! Storage backends for the user-data document.
//!
//! # Responsibility
//! - Read and write the whole document against a persistence target.
//! - Keep file-format details out of the CRUD layer.
//!
//! # Invariants
//! - `load` applies forward migration before returning a document.
//! - A missing persistence target is an empty document, not an error.
//! - Writes replace the full document synchronously; there is no
//!   partial-write protection.

use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;

use crate::model::document::UserDocument;

use super::migrate::migrate_document;
use super::StoreResult;

/// Fixed file name for the persisted document inside the data directory.
pub const DATA_FILE_NAME: &str = "airlex_userdata.json";

/// Persistence seam for the user-data document.
pub trait StorageBackend {
    /// Loads and migrates the current document.
    fn load(&self) -> StoreResult<UserDocument>;
    /// Writes the full document synchronously.
    fn save(&mut self, document: &UserDocument) -> StoreResult<()>;
}

/// File-backed storage writing formatted JSON to a fixed file name.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Creates a backend storing the document under `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(DATA_FILE_NAME),
        }
    }

    /// The full path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonFileBackend {
    fn load(&self) -> StoreResult<UserDocument> {
        let started_at = Instant::now();
        if !self.path.exists() {
            info!("event=store_load module=store status=ok mode=empty");
            return Ok(UserDocument::empty());
        }

        let raw = std::fs::read_to_string(&self.path)?;
        let document = migrate_document(serde_json::from_str(&raw)?)?;
        info!(
            "event=store_load module=store status=ok mode=file duration_ms={}",
            started_at.elapsed().as_millis()
        );
        Ok(document)
    }

    fn save(&mut self, document: &UserDocument) -> StoreResult<()> {
        let payload = serde_json::to_string_pretty(document)?;
        std::fs::write(&self.path, payload)?;
        Ok(())
    }
}

/// In-memory backend for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    document: Option<UserDocument>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend that loads the given document.
    pub fn with_document(document: UserDocument) -> Self {
        Self {
            document: Some(document),
        }
    }

    /// The last saved document, if any save happened.
    pub fn saved(&self) -> Option<&UserDocument> {
        self.document.as_ref()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self) -> StoreResult<UserDocument> {
        Ok(self.document.clone().unwrap_or_else(UserDocument::empty))
    }

    fn save(&mut self, document: &UserDocument) -> StoreResult<()> {
        self.document = Some(document.clone());
        Ok(())
    }
}
