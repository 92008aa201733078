//! Pure category/query filter over the article corpus.
//!
//! # Responsibility
//! - Produce the filtered article subsequence for the current selector.
//!
//! # Invariants
//! - Corpus order is preserved; there is no ranking.
//! - An empty query and an absent category are each identity.
//! - Matching is case-insensitive substring over title, citation, summary,
//!   keywords and official text.

use crate::corpus;
use crate::model::article::Article;

/// Filter selector for the article list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    /// Restrict to one category id, `None` for all.
    pub category: Option<String>,
    /// Free-text query; blank means no text filtering.
    pub query: String,
}

impl ArticleFilter {
    /// Creates a filter matching everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts the filter to one category.
    pub fn in_category(mut self, category_id: impl Into<String>) -> Self {
        self.category = Some(category_id.into());
        self
    }

    /// Sets the free-text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }
}

/// Applies the filter to the full corpus, returning the matching
/// subsequence in corpus order.
pub fn filter_articles(filter: &ArticleFilter) -> Vec<&'static Article> {
    let needle = filter.query.trim().to_lowercase();

    corpus::all_articles()
        .iter()
        .copied()
        .filter(|article| match &filter.category {
            Some(category_id) => corpus::category_of(article.id)
                .map(|category| category.id == category_id.as_str())
                .unwrap_or(false),
            None => true,
        })
        .filter(|article| needle.is_empty() || article.matches(&needle))
        .collect()
}
