//! Category/search/sort projection over an article slice.
//!
//! # Responsibility
//! - Apply the listing page controls to the article collection.
//!
//! # Invariants
//! - Stages run in order: category, then search, then sort.
//! - Sorting is stable; ties keep their input order.
//! - Blank search text filters nothing.

use crate::model::article::Article;
use crate::model::category::CategoryFilter;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Ordering applied by the sort stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Newest `published_at` first.
    #[default]
    Recent,
    /// Highest `views` first.
    Popular,
}

impl SortKey {
    /// Parses selector input, falling back to `Recent` for anything unknown.
    pub fn parse_or_recent(value: &str) -> Self {
        match value {
            "popular" => Self::Popular,
            _ => Self::Recent,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Popular => "popular",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Recent => "Most Recent",
            Self::Popular => "Most Popular",
        }
    }
}

/// Listing controls consumed by [`query_articles`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub category: CategoryFilter,
    /// Raw search box text; surrounding whitespace is ignored.
    pub search_text: String,
    pub sort: SortKey,
}

impl QueryParams {
    pub fn new(category: CategoryFilter, search_text: impl Into<String>, sort: SortKey) -> Self {
        Self {
            category,
            search_text: search_text.into(),
            sort,
        }
    }

    /// Builds params from raw selector strings.
    ///
    /// Unknown category values become `all`; unknown sort values become
    /// `recent`.
    pub fn from_raw(category: &str, search_text: &str, sort: &str) -> Self {
        Self::new(
            CategoryFilter::parse_or_all(category),
            search_text,
            SortKey::parse_or_recent(sort),
        )
    }

    /// Returns the case-folded search needle, or `None` when blank.
    pub fn folded_search(&self) -> Option<String> {
        let trimmed = self.search_text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(fold(trimmed))
        }
    }
}

/// Filters and orders `articles` according to `params`.
///
/// Returns references into `articles`; the result may be empty.
pub fn query_articles<'a>(articles: &'a [Article], params: &QueryParams) -> Vec<&'a Article> {
    let needle = params.folded_search();

    let mut matched: Vec<&Article> = articles
        .iter()
        .filter(|article| params.category.accepts(article.category))
        .filter(|article| {
            needle
                .as_deref()
                .map_or(true, |needle| matches_search(article, needle))
        })
        .collect();

    // `sort_by_key` is stable, which the tie-order contract relies on.
    match params.sort {
        SortKey::Popular => matched.sort_by_key(|article| Reverse(article.views)),
        SortKey::Recent => matched.sort_by_key(|article| Reverse(article.published_at)),
    }

    matched
}

/// Returns whether a folded needle occurs in the title, description or any tag.
///
/// `folded_needle` must already be case-folded (see [`QueryParams::folded_search`]).
pub fn matches_search(article: &Article, folded_needle: &str) -> bool {
    fold(&article.title).contains(folded_needle)
        || fold(&article.description).contains(folded_needle)
        || article
            .tags
            .iter()
            .any(|tag| fold(tag).contains(folded_needle))
}

fn fold(value: &str) -> String {
    value.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{QueryParams, SortKey};
    use crate::model::category::{Category, CategoryFilter};

    #[test]
    fn unknown_sort_value_degrades_to_recent() {
        assert_eq!(SortKey::parse_or_recent("popular"), SortKey::Popular);
        assert_eq!(SortKey::parse_or_recent("Popular"), SortKey::Recent);
        assert_eq!(SortKey::parse_or_recent("oldest"), SortKey::Recent);
    }

    #[test]
    fn from_raw_applies_defensive_defaults() {
        let params = QueryParams::from_raw("Upanishads", "  Gita ", "trending");
        assert_eq!(params.category, CategoryFilter::All);
        assert_eq!(params.sort, SortKey::Recent);
        assert_eq!(params.folded_search().as_deref(), Some("gita"));

        let params = QueryParams::from_raw("Ramayana", "", "popular");
        assert_eq!(params.category, CategoryFilter::Only(Category::Ramayana));
        assert_eq!(params.sort, SortKey::Popular);
    }

    #[test]
    fn whitespace_only_search_is_no_filter() {
        let params = QueryParams::from_raw("all", " \t\n ", "recent");
        assert_eq!(params.folded_search(), None);
    }
}
