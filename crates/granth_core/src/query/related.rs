//! Related-article selection for detail pages.

use crate::model::article::Article;

/// Maximum number of related articles shown under a detail page.
pub const RELATED_ARTICLES_LIMIT: usize = 3;

/// Returns up to [`RELATED_ARTICLES_LIMIT`] articles sharing the reference
/// article's category, excluding the reference itself.
///
/// Results keep store order; nothing is re-sorted.
pub fn related_articles<'a>(articles: &'a [Article], reference: &Article) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|article| article.category == reference.category && article.id != reference.id)
        .take(RELATED_ARTICLES_LIMIT)
        .collect()
}
