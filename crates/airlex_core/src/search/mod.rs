//! Corpus filtering and free-text search entry points.
//!
//! # Responsibility
//! - Expose the pure category + query filter over the static corpus.
//! - Keep match semantics in one place for list, tree and graph views.

mod filter;

pub use filter::{filter_articles, ArticleFilter};
