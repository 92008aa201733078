//! Core domain logic for AirLex.
//! This crate is the single source of truth for business invariants.

pub mod corpus;
pub mod graph;
pub mod highlight;
pub mod logging;
pub mod model;
pub mod search;
pub mod store;
pub mod transfer;

pub use highlight::{highlight_segments, TextSegment};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, Category};
pub use model::document::{UserDocument, SCHEMA_VERSION};
pub use model::records::{Link, Note, Regulation, Theme, ThemeSection};
pub use search::{filter_articles, ArticleFilter};
pub use store::{
    JsonFileBackend, LinkPatch, MemoryBackend, NewLink, NewNote, NewRegulation, NewTheme,
    NotePatch, RegulationPatch, StorageBackend, StoreError, StoreResult, ThemePatch, UserStore,
};
pub use transfer::{
    export_file_name, export_payload, import_document, ImportError, ImportResult, ImportStrategy,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
