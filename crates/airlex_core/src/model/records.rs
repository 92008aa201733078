//! User-owned annotation records.
//!
//! # Responsibility
//! - Define the four persisted record kinds: regulation, link, note, theme.
//! - Keep field naming aligned with the camelCase storage schema.
//!
//! # Invariants
//! - Record ids are generated once and never reused within a document.
//! - `updated_at >= created_at` for records mutated through the store.
//! - Foreign keys (`source_article_id`, `target_regulation_id`,
//!   `article_id`) are NOT enforced at write time; readers must tolerate
//!   dangling references.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-entered internal-company rule record, distinct from law articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Regulation {
    pub id: String,
    /// Free-text manual/category label, e.g. `OM Vol.1`. Not a corpus
    /// category id.
    pub category: String,
    /// Free-text reference number, e.g. `5.7.10`.
    pub reference_number: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Association from an article (optionally a text excerpt within it) to a
/// regulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub source_article_id: String,
    /// Verbatim excerpt of the article's official text, when the link was
    /// created from a selection.
    #[serde(default)]
    pub highlighted_text: Option<String>,
    pub target_regulation_id: String,
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Free-text study note attached to one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub article_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Named sub-division of a theme.
///
/// Section membership is a set; ordering of `article_ids` carries no
/// meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSection {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub article_ids: Vec<String>,
}

/// User-defined collection of articles for personal study organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: String,
    pub name: String,
    /// Display color as a hex string.
    pub color: String,
    #[serde(default)]
    pub sections: Vec<ThemeSection>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Theme {
    /// Iterates every article id across all sections, duplicates included.
    pub fn article_ids(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|section| section.article_ids.iter().map(String::as_str))
    }

    /// Returns whether any section of this theme contains `article_id`.
    pub fn contains_article(&self, article_id: &str) -> bool {
        self.article_ids().any(|id| id == article_id)
    }
}
