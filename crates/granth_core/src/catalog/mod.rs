//! Read-only article record store.
//!
//! # Responsibility
//! - Hold the ordered article collection served by the public site.
//! - Reject collections that break identity or field invariants up front.
//!
//! # Invariants
//! - Article ids are unique across the catalog.
//! - Input order is preserved; it is the "store order" used by related
//!   article selection.
//! - A built catalog is never mutated.

mod sample;

use crate::model::article::{Article, ArticleValidationError};
use crate::model::category::{Category, CategoryFilter};
use log::info;
use serde::Serialize;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Catalog construction error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// One article failed field validation.
    Validation {
        id: String,
        source: ArticleValidationError,
    },
    DuplicateId(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { id, source } => write!(f, "invalid article `{id}`: {source}"),
            Self::DuplicateId(id) => write!(f, "duplicate article id `{id}`"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation { source, .. } => Some(source),
            Self::DuplicateId(_) => None,
        }
    }
}

/// One entry of the listing page category selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    /// Selector value: `"all"` or the category enumeration value.
    pub id: &'static str,
    pub name: &'static str,
}

/// Immutable, ordered article collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCatalog {
    articles: Vec<Article>,
}

impl ArticleCatalog {
    /// Builds a catalog after validating every article and id uniqueness.
    ///
    /// # Errors
    /// - `CatalogError::Validation` for the first article failing `validate()`.
    /// - `CatalogError::DuplicateId` when an id repeats.
    pub fn new(articles: Vec<Article>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(articles.len());
        for article in &articles {
            article
                .validate()
                .map_err(|source| CatalogError::Validation {
                    id: article.id.clone(),
                    source,
                })?;
            if !seen.insert(article.id.clone()) {
                return Err(CatalogError::DuplicateId(article.id.clone()));
            }
        }

        info!(
            "event=catalog_load module=catalog status=ok count={}",
            articles.len()
        );
        Ok(Self { articles })
    }

    /// Returns the compiled-in sample catalog.
    ///
    /// Skips `new`: the literal data is checked by `sample_catalog_is_valid`
    /// and its dates are const-evaluated.
    pub fn sample() -> Self {
        Self {
            articles: sample::sample_articles(),
        }
    }

    /// All articles in store order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Looks up one article by exact id.
    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn into_articles(self) -> Vec<Article> {
        self.articles
    }
}

/// Returns the compiled-in dashboard seed: two published rows and one draft.
pub fn dashboard_seed() -> Vec<Article> {
    sample::dashboard_articles()
}

/// Returns the category selector entries in display order.
pub fn category_options() -> Vec<CategoryOption> {
    std::iter::once(CategoryFilter::All)
        .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
        .map(|filter| CategoryOption {
            id: filter.as_str(),
            name: filter.label(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{category_options, dashboard_seed, sample, ArticleCatalog};
    use crate::model::article::ArticleStatus;

    #[test]
    fn sample_catalog_is_valid() {
        let articles = sample::sample_articles();
        let catalog = ArticleCatalog::new(articles).expect("sample data must validate");
        assert_eq!(catalog, ArticleCatalog::sample());
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn dashboard_seed_is_valid_and_holds_one_draft() {
        let seed = dashboard_seed();
        ArticleCatalog::new(seed.clone()).expect("dashboard seed must validate");

        let drafts: Vec<_> = seed
            .iter()
            .filter(|article| article.status == ArticleStatus::Draft)
            .collect();
        assert_eq!(seed.len(), 3);
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].id, "krishnas-divine-play");
        assert_eq!(drafts[0].views, 0);
    }

    #[test]
    fn category_options_start_with_all_topics() {
        let options = category_options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0].id, "all");
        assert_eq!(options[0].name, "All Topics");
        assert_eq!(options[3].id, "Vedic");
        assert_eq!(options[3].name, "Vedic Wisdom");
        assert_eq!(options[4].id, "Bhagavad Gita");
    }
}
