//! CRUD surface over the user-data document.
//!
//! # Responsibility
//! - Provide add/update/delete entry points for the four collections.
//! - Apply cascade rules as single whole-document transitions.
//! - Persist best-effort after every successful mutation.
//!
//! # Invariants
//! - `add_*` stamps `created_at == updated_at == now` and returns the id.
//! - `update_*`/`delete_*` on an absent id return `StoreError::NotFound`.
//! - Deleting a regulation removes every link targeting it in the same
//!   transition.
//! - A failed save is logged and swallowed; the in-memory document stays
//!   authoritative for the session.

use chrono::Utc;
use log::{error, warn};

use crate::model::document::UserDocument;
use crate::model::records::{Link, Note, Regulation, Theme, ThemeSection};

use super::{generate_id, StorageBackend, StoreError, StoreResult};

/// Input for creating a regulation record.
#[derive(Debug, Clone, Default)]
pub struct NewRegulation {
    pub category: String,
    pub reference_number: String,
    pub title: String,
    pub description: String,
}

/// Partial update for a regulation; `None` fields keep the current value.
#[derive(Debug, Clone, Default)]
pub struct RegulationPatch {
    pub category: Option<String>,
    pub reference_number: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Input for creating a link record.
#[derive(Debug, Clone, Default)]
pub struct NewLink {
    pub source_article_id: String,
    pub highlighted_text: Option<String>,
    pub target_regulation_id: String,
    pub note: Option<String>,
}

/// Partial update for a link.
#[derive(Debug, Clone, Default)]
pub struct LinkPatch {
    pub highlighted_text: Option<Option<String>>,
    pub note: Option<Option<String>>,
}

/// Input for creating a note record.
#[derive(Debug, Clone, Default)]
pub struct NewNote {
    pub article_id: String,
    pub content: String,
}

/// Partial update for a note.
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub content: Option<String>,
}

/// Input for creating a theme.
#[derive(Debug, Clone, Default)]
pub struct NewTheme {
    pub name: String,
    pub color: String,
}

/// Partial update for a theme.
#[derive(Debug, Clone, Default)]
pub struct ThemePatch {
    pub name: Option<String>,
    pub color: Option<String>,
}

/// The single owned store instance, injected by handle into consumers.
pub struct UserStore {
    backend: Box<dyn StorageBackend>,
    document: UserDocument,
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore")
            .field("document", &self.document)
            .finish_non_exhaustive()
    }
}

impl UserStore {
    /// Opens the store, loading the persisted document through `backend`.
    ///
    /// Read failures fall back to the empty default document after logging.
    /// The one exception is a document written by a newer schema version,
    /// which is propagated so a stale binary cannot clobber newer data.
    pub fn open(backend: Box<dyn StorageBackend>) -> StoreResult<Self> {
        let document = match backend.load() {
            Ok(document) => document,
            Err(err @ StoreError::UnsupportedSchemaVersion { .. }) => return Err(err),
            Err(err) => {
                warn!("event=store_load module=store status=fallback error={err}");
                UserDocument::empty()
            }
        };
        Ok(Self { backend, document })
    }

    /// Read access to the current document.
    pub fn document(&self) -> &UserDocument {
        &self.document
    }

    /// Replaces the whole document, e.g. after an import, and persists.
    pub fn replace_document(&mut self, document: UserDocument) {
        self.document = document;
        self.persist();
    }

    // -- regulations ------------------------------------------------------

    pub fn add_regulation(&mut self, new: NewRegulation) -> String {
        let id = generate_id("reg");
        let now = Utc::now();
        self.document.regulations.insert(
            id.clone(),
            Regulation {
                id: id.clone(),
                category: new.category,
                reference_number: new.reference_number,
                title: new.title,
                description: new.description,
                created_at: now,
                updated_at: now,
            },
        );
        self.persist();
        id
    }

    pub fn update_regulation(&mut self, id: &str, patch: RegulationPatch) -> StoreResult<()> {
        let regulation = self
            .document
            .regulations
            .get_mut(id)
            .ok_or_else(|| not_found("regulation", id))?;
        if let Some(category) = patch.category {
            regulation.category = category;
        }
        if let Some(reference_number) = patch.reference_number {
            regulation.reference_number = reference_number;
        }
        if let Some(title) = patch.title {
            regulation.title = title;
        }
        if let Some(description) = patch.description {
            regulation.description = description;
        }
        regulation.updated_at = Utc::now();
        self.persist();
        Ok(())
    }

    /// Deletes a regulation and cascades to every link targeting it.
    ///
    /// Both removals happen in one transition; no caller can observe the
    /// regulation gone while its links remain.
    pub fn delete_regulation(&mut self, id: &str) -> StoreResult<()> {
        if self.document.regulations.remove(id).is_none() {
            return Err(not_found("regulation", id));
        }
        self.document
            .links
            .retain(|_, link| link.target_regulation_id != id);
        self.persist();
        Ok(())
    }

    // -- links ------------------------------------------------------------

    pub fn add_link(&mut self, new: NewLink) -> String {
        let id = generate_id("link");
        let now = Utc::now();
        self.document.links.insert(
            id.clone(),
            Link {
                id: id.clone(),
                source_article_id: new.source_article_id,
                highlighted_text: new.highlighted_text,
                target_regulation_id: new.target_regulation_id,
                note: new.note,
                created_at: now,
                updated_at: now,
            },
        );
        self.persist();
        id
    }

    pub fn update_link(&mut self, id: &str, patch: LinkPatch) -> StoreResult<()> {
        let link = self
            .document
            .links
            .get_mut(id)
            .ok_or_else(|| not_found("link", id))?;
        if let Some(highlighted_text) = patch.highlighted_text {
            link.highlighted_text = highlighted_text;
        }
        if let Some(note) = patch.note {
            link.note = note;
        }
        link.updated_at = Utc::now();
        self.persist();
        Ok(())
    }

    pub fn delete_link(&mut self, id: &str) -> StoreResult<()> {
        if self.document.links.remove(id).is_none() {
            return Err(not_found("link", id));
        }
        self.persist();
        Ok(())
    }

    // -- notes ------------------------------------------------------------

    pub fn add_note(&mut self, new: NewNote) -> String {
        let id = generate_id("note");
        let now = Utc::now();
        self.document.notes.insert(
            id.clone(),
            Note {
                id: id.clone(),
                article_id: new.article_id,
                content: new.content,
                created_at: now,
                updated_at: now,
            },
        );
        self.persist();
        id
    }

    pub fn update_note(&mut self, id: &str, patch: NotePatch) -> StoreResult<()> {
        let note = self
            .document
            .notes
            .get_mut(id)
            .ok_or_else(|| not_found("note", id))?;
        if let Some(content) = patch.content {
            note.content = content;
        }
        note.updated_at = Utc::now();
        self.persist();
        Ok(())
    }

    pub fn delete_note(&mut self, id: &str) -> StoreResult<()> {
        if self.document.notes.remove(id).is_none() {
            return Err(not_found("note", id));
        }
        self.persist();
        Ok(())
    }

    // -- themes -----------------------------------------------------------

    pub fn add_theme(&mut self, new: NewTheme) -> String {
        let id = generate_id("theme");
        let now = Utc::now();
        self.document.themes.insert(
            id.clone(),
            Theme {
                id: id.clone(),
                name: new.name,
                color: new.color,
                sections: Vec::new(),
                created_at: now,
                updated_at: now,
            },
        );
        self.persist();
        id
    }

    pub fn update_theme(&mut self, id: &str, patch: ThemePatch) -> StoreResult<()> {
        let theme = self
            .document
            .themes
            .get_mut(id)
            .ok_or_else(|| not_found("theme", id))?;
        if let Some(name) = patch.name {
            theme.name = name;
        }
        if let Some(color) = patch.color {
            theme.color = color;
        }
        theme.updated_at = Utc::now();
        self.persist();
        Ok(())
    }

    pub fn delete_theme(&mut self, id: &str) -> StoreResult<()> {
        if self.document.themes.remove(id).is_none() {
            return Err(not_found("theme", id));
        }
        self.persist();
        Ok(())
    }

    /// Adds a section to a theme and returns the section id.
    pub fn add_theme_section(
        &mut self,
        theme_id: &str,
        name: Option<String>,
    ) -> StoreResult<String> {
        let theme = self
            .document
            .themes
            .get_mut(theme_id)
            .ok_or_else(|| not_found("theme", theme_id))?;
        let section_id = generate_id("sec");
        theme.sections.push(ThemeSection {
            id: section_id.clone(),
            name,
            article_ids: Vec::new(),
        });
        theme.updated_at = Utc::now();
        self.persist();
        Ok(section_id)
    }

    /// Removes a section; its article assignments are dropped with it.
    pub fn delete_theme_section(&mut self, theme_id: &str, section_id: &str) -> StoreResult<()> {
        let theme = self
            .document
            .themes
            .get_mut(theme_id)
            .ok_or_else(|| not_found("theme", theme_id))?;
        let before = theme.sections.len();
        theme.sections.retain(|section| section.id != section_id);
        if theme.sections.len() == before {
            return Err(not_found("theme section", section_id));
        }
        theme.updated_at = Utc::now();
        self.persist();
        Ok(())
    }

    /// Assigns an article to a section with move semantics: the article is
    /// removed from every other section of the SAME theme first. Membership
    /// across different themes is not exclusive.
    pub fn assign_article(
        &mut self,
        theme_id: &str,
        section_id: &str,
        article_id: &str,
    ) -> StoreResult<()> {
        let theme = self
            .document
            .themes
            .get_mut(theme_id)
            .ok_or_else(|| not_found("theme", theme_id))?;
        let target = theme
            .sections
            .iter()
            .position(|section| section.id == section_id)
            .ok_or_else(|| not_found("theme section", section_id))?;

        for section in &mut theme.sections {
            section.article_ids.retain(|id| id != article_id);
        }
        theme.sections[target].article_ids.push(article_id.to_string());
        theme.updated_at = Utc::now();
        self.persist();
        Ok(())
    }

    /// Removes an article from every section of the theme.
    pub fn remove_article(&mut self, theme_id: &str, article_id: &str) -> StoreResult<()> {
        let theme = self
            .document
            .themes
            .get_mut(theme_id)
            .ok_or_else(|| not_found("theme", theme_id))?;
        for section in &mut theme.sections {
            section.article_ids.retain(|id| id != article_id);
        }
        theme.updated_at = Utc::now();
        self.persist();
        Ok(())
    }

    fn persist(&mut self) {
        if let Err(err) = self.backend.save(&self.document) {
            // Best effort only: the in-memory document remains the source
            // of truth for this session.
            error!("event=store_save module=store status=error error={err}");
        }
    }
}

fn not_found(kind: &'static str, id: &str) -> StoreError {
    StoreError::NotFound {
        kind,
        id: id.to_string(),
    }
}
