//! Immutable corpus types.
//!
//! # Responsibility
//! - Describe one legal provision (`Article`) and its owning `Category`.
//!
//! # Invariants
//! - An article belongs to exactly one category.
//! - `related_to` may be declared one-directionally; readers surface the
//!   relation symmetrically (see `corpus::related_articles`).

/// One static legal provision entry in the reference corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Article {
    /// Stable corpus-wide id, e.g. `law67`.
    pub id: &'static str,
    /// Governing law or document name, e.g. 航空法, OM Supplement.
    pub law: &'static str,
    /// Citation string, e.g. 第67条.
    pub citation: &'static str,
    /// Short display title.
    pub title: &'static str,
    /// Hand-written summary of the provision.
    pub summary: &'static str,
    /// Full official text when transcribed; used for inline highlighting.
    pub official_text: Option<&'static str>,
    /// External reference URL when one exists.
    pub reference_url: Option<&'static str>,
    /// Keyword tags used by free-text search.
    pub keywords: &'static [&'static str],
    /// Declared related article ids. Possibly one-directional.
    pub related_to: &'static [&'static str],
}

/// A thematic grouping of articles, e.g. licensing or captain's duties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Stable category id, e.g. `captain`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Display color as a hex string, e.g. `#ef4444`.
    pub color: &'static str,
    /// Articles owned by this category, in authored order.
    pub articles: &'static [Article],
}

impl Article {
    /// Returns whether `needle` matches this article case-insensitively in
    /// any of title, citation, summary, keywords or official text.
    pub fn matches(&self, needle_lower: &str) -> bool {
        if self.title.to_lowercase().contains(needle_lower)
            || self.citation.to_lowercase().contains(needle_lower)
            || self.summary.to_lowercase().contains(needle_lower)
        {
            return true;
        }
        if self
            .keywords
            .iter()
            .any(|kw| kw.to_lowercase().contains(needle_lower))
        {
            return true;
        }
        self.official_text
            .map(|text| text.to_lowercase().contains(needle_lower))
            .unwrap_or(false)
    }
}
