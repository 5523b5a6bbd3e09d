//! Article domain model.
//!
//! # Responsibility
//! - Define the canonical essay record rendered by listing, detail and
//!   dashboard views.
//! - Own field-level validation shared by catalog, repository and editor.
//!
//! # Invariants
//! - `id` is a non-empty lowercase slug and never changes after creation.
//! - `title` is never blank.
//! - `tags` contain no blank or exactly-duplicated entries; order is
//!   insertion order.
//! - `shlokas` may be empty; order is display order.

use crate::model::category::Category;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable article identifier (URL slug such as `kurukshetra-dharma`).
pub type ArticleId = String;

/// Quoted verse attached to an article.
///
/// Has no identity beyond its position inside the parent article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseReference {
    /// Quoted source-language text (usually Devanagari).
    pub text: String,
    /// Citation, e.g. `Bhagavad Gita 4.7`.
    pub reference: String,
    pub translation: String,
}

impl VerseReference {
    pub fn new(
        text: impl Into<String>,
        reference: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            reference: reference.into(),
            translation: translation.into(),
        }
    }

    /// Returns whether every field is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
            && self.reference.trim().is_empty()
            && self.translation.trim().is_empty()
    }
}

/// Editorial lifecycle state of an article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleStatus {
    #[default]
    Published,
    Draft,
}

impl ArticleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
        }
    }

    /// Parses `published` / `draft` exactly.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "published" => Some(Self::Published),
            "draft" => Some(Self::Draft),
            _ => None,
        }
    }
}

/// Field-level validation failures for [`Article`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleValidationError {
    EmptyId,
    /// Id is not a lowercase hyphen-separated slug.
    InvalidId(String),
    BlankTitle,
    /// Tag at the given position is empty after trimming.
    BlankTag { index: usize },
    DuplicateTag(String),
}

impl Display for ArticleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "article id cannot be empty"),
            Self::InvalidId(id) => write!(
                f,
                "article id `{id}` must be lowercase letters/digits separated by single hyphens"
            ),
            Self::BlankTitle => write!(f, "article title cannot be blank"),
            Self::BlankTag { index } => write!(f, "tag at position {index} is blank"),
            Self::DuplicateTag(tag) => write!(f, "tag `{tag}` appears more than once"),
        }
    }
}

impl Error for ArticleValidationError {}

/// Canonical essay record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ArticleWire")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    /// One-paragraph summary shown on cards.
    pub description: String,
    pub content: String,
    pub category: Category,
    pub tags: Vec<String>,
    /// Calendar publication date; drives recency sort and display only.
    pub published_at: NaiveDate,
    /// Popularity counter; drives popularity sort only.
    pub views: u64,
    pub shlokas: Vec<VerseReference>,
    pub status: ArticleStatus,
}

impl Article {
    /// Creates a published article with empty text, tags and verses.
    pub fn new(
        id: impl Into<ArticleId>,
        title: impl Into<String>,
        category: Category,
        published_at: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            content: String::new(),
            category,
            tags: Vec::new(),
            published_at,
            views: 0,
            shlokas: Vec::new(),
            status: ArticleStatus::Published,
        }
    }

    /// Validates identity, title and tag invariants.
    ///
    /// # Errors
    /// - Returns the first violated invariant, checked in field order.
    pub fn validate(&self) -> Result<(), ArticleValidationError> {
        validate_article_id(&self.id)?;

        if self.title.trim().is_empty() {
            return Err(ArticleValidationError::BlankTitle);
        }

        for (index, tag) in self.tags.iter().enumerate() {
            if tag.trim().is_empty() {
                return Err(ArticleValidationError::BlankTag { index });
            }
            if self.tags[..index].contains(tag) {
                return Err(ArticleValidationError::DuplicateTag(tag.clone()));
            }
        }

        Ok(())
    }

    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Published
    }
}

/// Checks that `id` is a non-empty lowercase slug.
pub fn validate_article_id(id: &str) -> Result<(), ArticleValidationError> {
    if id.is_empty() {
        return Err(ArticleValidationError::EmptyId);
    }

    let is_slug = id.split('-').all(|part| {
        !part.is_empty()
            && part
                .chars()
                .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
    });
    if !is_slug {
        return Err(ArticleValidationError::InvalidId(id.to_string()));
    }

    Ok(())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArticleWire {
    id: ArticleId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    content: String,
    category: Category,
    #[serde(default)]
    tags: Vec<String>,
    published_at: NaiveDate,
    #[serde(default)]
    views: u64,
    #[serde(default)]
    shlokas: Vec<VerseReference>,
    #[serde(default)]
    status: ArticleStatus,
}

impl TryFrom<ArticleWire> for Article {
    type Error = ArticleValidationError;

    fn try_from(wire: ArticleWire) -> Result<Self, Self::Error> {
        let article = Self {
            id: wire.id,
            title: wire.title,
            description: wire.description,
            content: wire.content,
            category: wire.category,
            tags: wire.tags,
            published_at: wire.published_at,
            views: wire.views,
            shlokas: wire.shlokas,
            status: wire.status,
        };
        article.validate()?;
        Ok(article)
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_article_id, ArticleValidationError, VerseReference};

    #[test]
    fn slug_ids_are_accepted() {
        assert!(validate_article_id("kurukshetra-dharma").is_ok());
        assert!(validate_article_id("gita-2-50").is_ok());
    }

    #[test]
    fn non_slug_ids_are_rejected() {
        assert_eq!(validate_article_id(""), Err(ArticleValidationError::EmptyId));
        for bad in ["Kurukshetra", "a--b", "-lead", "trail-", "with space"] {
            assert!(
                matches!(
                    validate_article_id(bad),
                    Err(ArticleValidationError::InvalidId(_))
                ),
                "`{bad}` should be rejected"
            );
        }
    }

    #[test]
    fn whitespace_only_verse_is_blank() {
        assert!(VerseReference::new(" ", "", "\n").is_blank());
        assert!(!VerseReference::new("", "Ramayana", "").is_blank());
    }
}
