//! Local store: persistence bootstrap, CRUD surface and derived views.
//!
//! # Responsibility
//! - Own the single in-memory `UserDocument` and its storage backend.
//! - Define store-level error semantics shared by persistence and CRUD.
//!
//! # Invariants
//! - The in-memory document is the session source of truth; a failed write
//!   is logged and dropped, never surfaced as a blocking error.
//! - Every mutation is a whole-document transition applied before any
//!   subsequent read can observe partial state.

use std::error::Error;
use std::fmt::{Display, Formatter};

use uuid::Uuid;

pub mod backend;
pub mod migrate;
mod user_store;
pub mod views;

pub use backend::{JsonFileBackend, MemoryBackend, StorageBackend};
pub use user_store::{
    LinkPatch, NewLink, NewNote, NewRegulation, NewTheme, NotePatch, RegulationPatch, ThemePatch,
    UserStore,
};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for persistence and CRUD operations.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serde(serde_json::Error),
    /// The persisted document was written by a newer schema than this
    /// binary understands. Refusing to load avoids clobbering it.
    UnsupportedSchemaVersion {
        document_version: u32,
        latest_supported: u32,
    },
    NotFound {
        kind: &'static str,
        id: String,
    },
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Serde(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                document_version,
                latest_supported,
            } => write!(
                f,
                "document schema version {document_version} is newer than supported {latest_supported}"
            ),
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid stored data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
            Self::NotFound { .. } => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Generates a fresh record id with a readable kind prefix, e.g.
/// `reg_9f1c…`.
///
/// Ids are locally unique. Two independently created documents can in
/// principle collide, but the embedded UUIDv4 makes that negligible.
pub fn generate_id(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::new_v4().simple())
}
