//! Derived read-views over the user-data document.
//!
//! # Responsibility
//! - Compute per-article counts, groupings and resolved lookups that the
//!   view layer renders as badges, lists and relationship panels.
//!
//! # Invariants
//! - Every function is a pure read of the current document.
//! - Dangling foreign keys are skipped or surfaced as `None`, never an
//!   error.

use std::collections::BTreeMap;

use crate::corpus;
use crate::model::article::Article;
use crate::model::document::UserDocument;
use crate::model::records::{Link, Note, Regulation, Theme};

/// Number of links per source article id.
pub fn link_count_by_article(document: &UserDocument) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for link in document.links.values() {
        *counts.entry(link.source_article_id.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Number of notes per article id.
pub fn note_count_by_article(document: &UserDocument) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for note in document.notes.values() {
        *counts.entry(note.article_id.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Distinct regulations linked per article, deduplicated by regulation id
/// in first-occurrence order. Links to deleted regulations are skipped.
pub fn linked_regulations_by_article(
    document: &UserDocument,
) -> BTreeMap<&str, Vec<&Regulation>> {
    let mut result: BTreeMap<&str, Vec<&Regulation>> = BTreeMap::new();
    for link in document.links.values() {
        let Some(regulation) = document.regulations.get(&link.target_regulation_id) else {
            continue;
        };
        let entry = result.entry(link.source_article_id.as_str()).or_default();
        if !entry.iter().any(|existing| existing.id == regulation.id) {
            entry.push(regulation);
        }
    }
    result
}

/// Links grouped by target regulation id. Dangling targets keep their
/// group; resolution happens at render time.
pub fn links_by_regulation(document: &UserDocument) -> BTreeMap<&str, Vec<&Link>> {
    let mut result: BTreeMap<&str, Vec<&Link>> = BTreeMap::new();
    for link in document.links.values() {
        result
            .entry(link.target_regulation_id.as_str())
            .or_default()
            .push(link);
    }
    result
}

/// Themes grouped by member article id. An article may appear under
/// multiple themes; within one theme it is listed once even when the
/// persisted data violates the one-section invariant.
pub fn themes_by_article(document: &UserDocument) -> BTreeMap<&str, Vec<&Theme>> {
    let mut result: BTreeMap<&str, Vec<&Theme>> = BTreeMap::new();
    for theme in document.themes.values() {
        for article_id in theme.article_ids() {
            let entry = result.entry(article_id).or_default();
            if !entry.iter().any(|existing| existing.id == theme.id) {
                entry.push(theme);
            }
        }
    }
    result
}

/// Links originating from one article.
pub fn links_for_article<'a>(document: &'a UserDocument, article_id: &str) -> Vec<&'a Link> {
    document
        .links
        .values()
        .filter(|link| link.source_article_id == article_id)
        .collect()
}

/// Links targeting one regulation.
pub fn links_for_regulation<'a>(
    document: &'a UserDocument,
    regulation_id: &str,
) -> Vec<&'a Link> {
    document
        .links
        .values()
        .filter(|link| link.target_regulation_id == regulation_id)
        .collect()
}

/// Notes attached to one article.
pub fn notes_for_article<'a>(document: &'a UserDocument, article_id: &str) -> Vec<&'a Note> {
    document
        .notes
        .values()
        .filter(|note| note.article_id == article_id)
        .collect()
}

/// Sorted distinct regulation category labels, for the filter chips.
pub fn regulation_category_labels(document: &UserDocument) -> Vec<&str> {
    let mut labels: Vec<&str> = document
        .regulations
        .values()
        .map(|regulation| regulation.category.as_str())
        .collect();
    labels.sort_unstable();
    labels.dedup();
    labels
}

/// Regulations filtered by exact category label and case-insensitive
/// free-text query, sorted by category label then reference number.
pub fn filter_regulations<'a>(
    document: &'a UserDocument,
    category: Option<&str>,
    query: &str,
) -> Vec<&'a Regulation> {
    let needle = query.trim().to_lowercase();
    let mut matches: Vec<&Regulation> = document
        .regulations
        .values()
        .filter(|regulation| category.map_or(true, |label| regulation.category == label))
        .filter(|regulation| {
            needle.is_empty()
                || regulation.category.to_lowercase().contains(&needle)
                || regulation.reference_number.to_lowercase().contains(&needle)
                || regulation.title.to_lowercase().contains(&needle)
                || regulation.description.to_lowercase().contains(&needle)
        })
        .collect();
    matches.sort_by(|a, b| {
        (a.category.as_str(), a.reference_number.as_str())
            .cmp(&(b.category.as_str(), b.reference_number.as_str()))
    });
    matches
}

/// A link with its foreign keys resolved for rendering. `None` means the
/// target was deleted or never existed; views render a placeholder.
#[derive(Debug, Clone)]
pub struct ResolvedLink<'a> {
    pub link: &'a Link,
    pub article: Option<&'static Article>,
    pub regulation: Option<&'a Regulation>,
}

/// All links with article/regulation lookups resolved, newest first.
pub fn resolved_links(document: &UserDocument) -> Vec<ResolvedLink<'_>> {
    let mut resolved: Vec<ResolvedLink<'_>> = document
        .links
        .values()
        .map(|link| ResolvedLink {
            link,
            article: corpus::article_by_id(&link.source_article_id),
            regulation: document.regulations.get(&link.target_regulation_id),
        })
        .collect();
    resolved.sort_by(|a, b| b.link.created_at.cmp(&a.link.created_at));
    resolved
}

/// Corpus articles not assigned to any theme, in corpus order.
pub fn unassigned_articles(document: &UserDocument) -> Vec<&'static Article> {
    corpus::all_articles()
        .iter()
        .copied()
        .filter(|article| {
            !document
                .themes
                .values()
                .any(|theme| theme.contains_article(article.id))
        })
        .collect()
}
