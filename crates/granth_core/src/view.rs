//! Display projections for cards, detail pages and dashboard rows.
//!
//! # Responsibility
//! - Pre-compute display strings (dates, counts, tag previews) so callers
//!   only lay them out.
//!
//! # Invariants
//! - Projections never change article data; they only derive from it.
//! - Drafts carry no display date on dashboard rows.

use crate::model::article::{Article, ArticleStatus, VerseReference};
use crate::model::category::Category;
use chrono::NaiveDate;
use serde::Serialize;

/// Number of tags shown on a card before collapsing into `+N`.
pub const CARD_TAG_PREVIEW: usize = 3;

/// Formats a date for cards, e.g. `Jan 15, 2025`.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Formats a date for detail pages, e.g. `January 15, 2025`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Formats a counter with thousands separators, e.g. `12,580`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Listing card projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleCardView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub published: String,
    pub views: u64,
    /// At most [`CARD_TAG_PREVIEW`] tags, in article order.
    pub preview_tags: Vec<String>,
    /// Tags not shown in `preview_tags`.
    pub hidden_tag_count: usize,
    pub shloka_count: usize,
}

impl ArticleCardView {
    pub fn from_article(article: &Article) -> Self {
        let preview_tags = article
            .tags
            .iter()
            .take(CARD_TAG_PREVIEW)
            .cloned()
            .collect::<Vec<_>>();
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            description: article.description.clone(),
            category: article.category,
            published: format_short_date(article.published_at),
            views: article.views,
            hidden_tag_count: article.tags.len() - preview_tags.len(),
            preview_tags,
            shloka_count: article.shlokas.len(),
        }
    }
}

/// Detail page projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleDetailView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: Category,
    pub published: String,
    pub views: u64,
    pub tags: Vec<String>,
    pub shlokas: Vec<VerseReference>,
    pub related: Vec<ArticleCardView>,
}

impl ArticleDetailView {
    pub fn new<'a>(article: &Article, related: impl IntoIterator<Item = &'a Article>) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            description: article.description.clone(),
            content: article.content.clone(),
            category: article.category,
            published: format_long_date(article.published_at),
            views: article.views,
            tags: article.tags.clone(),
            shlokas: article.shlokas.clone(),
            related: related
                .into_iter()
                .map(ArticleCardView::from_article)
                .collect(),
        }
    }

    /// Number of quoted verses, shown as "N references".
    pub fn reference_count(&self) -> usize {
        self.shlokas.len()
    }
}

/// Dashboard table row projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardRow {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub status: ArticleStatus,
    pub views: u64,
    /// `None` for drafts.
    pub published_at: Option<NaiveDate>,
}

impl DashboardRow {
    pub fn from_article(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            category: article.category,
            status: article.status,
            views: article.views,
            published_at: article.is_published().then_some(article.published_at),
        }
    }
}
