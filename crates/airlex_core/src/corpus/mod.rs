//! Static reference corpus and read-only lookups over it.
//!
//! # Responsibility
//! - Expose the hand-authored article/category data as process-wide
//!   immutable state.
//! - Provide id lookups and the symmetric related-article view.
//!
//! # Invariants
//! - Corpus data never changes at runtime; all lookups return `'static`
//!   references.
//! - `related_articles` surfaces a relation even when only the reverse
//!   direction is declared.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::model::article::{Article, Category};

mod data;

static ARTICLES: Lazy<Vec<&'static Article>> = Lazy::new(|| {
    data::CATEGORIES
        .iter()
        .flat_map(|category| category.articles.iter())
        .collect()
});

static INDEX: Lazy<BTreeMap<&'static str, (&'static Category, &'static Article)>> =
    Lazy::new(|| {
        let mut index = BTreeMap::new();
        for category in data::CATEGORIES {
            for article in category.articles {
                index.insert(article.id, (category, article));
            }
        }
        index
    });

/// All categories in authored display order.
pub fn categories() -> &'static [Category] {
    data::CATEGORIES
}

/// All articles flattened in corpus order (category order, then authored
/// article order within each category).
pub fn all_articles() -> &'static [&'static Article] {
    &ARTICLES
}

/// Looks up one article by id.
pub fn article_by_id(id: &str) -> Option<&'static Article> {
    INDEX.get(id).map(|(_, article)| *article)
}

/// Returns the category owning the given article id.
pub fn category_of(article_id: &str) -> Option<&'static Category> {
    INDEX.get(article_id).map(|(category, _)| *category)
}

/// Looks up one category by id.
pub fn category_by_id(id: &str) -> Option<&'static Category> {
    data::CATEGORIES.iter().find(|category| category.id == id)
}

/// Articles related to `article_id`, in corpus order.
///
/// The declared `related_to` relation may be one-directional; this unions
/// declared and reverse-declared neighbors so both sides surface the link.
pub fn related_articles(article_id: &str) -> Vec<&'static Article> {
    let Some(article) = article_by_id(article_id) else {
        return Vec::new();
    };

    all_articles()
        .iter()
        .copied()
        .filter(|candidate| {
            candidate.id != article_id
                && (article.related_to.contains(&candidate.id)
                    || candidate.related_to.iter().any(|&rel| rel == article_id))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_article_id_is_unique() {
        assert_eq!(all_articles().len(), INDEX.len());
    }

    #[test]
    fn lookups_resolve_known_ids() {
        assert_eq!(article_by_id("law73").map(|a| a.citation), Some("第73条"));
        assert_eq!(category_by_id("captain").map(|c| c.name), Some("機長の責務・権限"));
        assert!(article_by_id("law999").is_none());
        assert!(category_by_id("nope").is_none());
    }

    #[test]
    fn each_article_belongs_to_exactly_one_category() {
        for article in all_articles() {
            let category = category_of(article.id).expect("owning category");
            assert!(category.articles.iter().any(|a| a.id == article.id));
        }
    }

    #[test]
    fn related_articles_is_symmetric() {
        // om5710 declares law67; law67 declares om5710. Both directions must
        // also hold for pairs declared on one side only.
        for article in all_articles() {
            for related in related_articles(article.id) {
                let back = related_articles(related.id);
                assert!(
                    back.iter().any(|a| a.id == article.id),
                    "{} -> {} not surfaced in reverse",
                    article.id,
                    related.id
                );
            }
        }
    }
}
