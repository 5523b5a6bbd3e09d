//! Public-site article use-cases.
//!
//! # Responsibility
//! - Serve the listing, detail and related-article views from a catalog.
//! - Wrap the pure query functions with metadata-only diagnostics.
//!
//! # Invariants
//! - Service APIs never mutate the catalog.
//! - Search text is logged by length only.

use crate::catalog::ArticleCatalog;
use crate::model::article::Article;
use crate::query::engine::{query_articles, QueryParams};
use crate::query::related::related_articles;
use crate::view::ArticleDetailView;
use log::debug;

/// Listing result envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleListResult<'a> {
    /// Filtered and ordered articles.
    pub items: Vec<&'a Article>,
    /// Size of the unfiltered catalog.
    pub total: usize,
}

impl ArticleListResult<'_> {
    /// Count shown as "Found N articles".
    pub fn found(&self) -> usize {
        self.items.len()
    }
}

/// Read-only service over the published catalog.
pub struct ArticleService<'a> {
    catalog: &'a ArticleCatalog,
}

impl<'a> ArticleService<'a> {
    pub fn new(catalog: &'a ArticleCatalog) -> Self {
        Self { catalog }
    }

    /// Runs the listing query.
    pub fn list(&self, params: &QueryParams) -> ArticleListResult<'a> {
        let items = query_articles(self.catalog.articles(), params);
        debug!(
            "event=article_query module=service status=ok category={} sort={} search_len={} hits={}",
            params.category.as_str(),
            params.sort.as_str(),
            params.search_text.trim().chars().count(),
            items.len()
        );
        ArticleListResult {
            items,
            total: self.catalog.len(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&'a Article> {
        self.catalog.get(id)
    }

    /// Returns related articles for `id`; empty when `id` is unknown.
    pub fn related(&self, id: &str) -> Vec<&'a Article> {
        match self.catalog.get(id) {
            Some(reference) => related_articles(self.catalog.articles(), reference),
            None => Vec::new(),
        }
    }

    /// Builds the detail page projection, or `None` for an unknown id.
    pub fn detail(&self, id: &str) -> Option<ArticleDetailView> {
        let Some(article) = self.catalog.get(id) else {
            debug!("event=article_detail module=service status=not_found id={id}");
            return None;
        };
        let related = related_articles(self.catalog.articles(), article);
        Some(ArticleDetailView::new(article, related))
    }
}
