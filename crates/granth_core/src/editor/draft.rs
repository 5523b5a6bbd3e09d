//! In-progress article input.
//!
//! # Responsibility
//! - Apply create-form edits: tag add/remove, verse add/update/remove.
//! - Enforce required fields before a draft becomes an `Article`.
//!
//! # Invariants
//! - Tags are trimmed, non-blank and unique (exact match), in insertion order.
//! - Verse rows keep positional identity; indexes are checked, never clamped.
//! - Entirely blank verse rows are dropped on conversion.

use crate::model::article::{Article, ArticleStatus, ArticleValidationError, VerseReference};
use crate::model::category::Category;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DraftResult<T> = Result<T, DraftError>;

/// Editor-level failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Required form field is blank.
    MissingField(&'static str),
    ShlokaIndexOutOfRange { index: usize, len: usize },
    Validation(ArticleValidationError),
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field `{field}` is blank"),
            Self::ShlokaIndexOutOfRange { index, len } => {
                write!(f, "shloka index {index} out of range for {len} rows")
            }
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DraftError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ArticleValidationError> for DraftError {
    fn from(value: ArticleValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Editable field of one verse row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShlokaField {
    Text,
    Reference,
    Translation,
}

/// Create-form state for a new article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: Category,
    pub status: ArticleStatus,
    tags: Vec<String>,
    shlokas: Vec<VerseReference>,
}

impl Default for ArticleDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            content: String::new(),
            category: Category::Mahabharata,
            status: ArticleStatus::Draft,
            tags: Vec::new(),
            shlokas: Vec::new(),
        }
    }
}

impl ArticleDraft {
    /// Creates an empty draft (category Mahabharata, status draft).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn shlokas(&self) -> &[VerseReference] {
        &self.shlokas
    }

    /// Adds one tag from raw input.
    ///
    /// Returns `false` (and changes nothing) for blank input or a tag that is
    /// already present.
    pub fn add_tag(&mut self, input: &str) -> bool {
        let tag = input.trim();
        if tag.is_empty() || self.tags.iter().any(|existing| existing == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Removes a tag by exact value. Returns whether anything was removed.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|existing| existing != tag);
        self.tags.len() != before
    }

    /// Appends a blank verse row and returns its index.
    pub fn add_shloka(&mut self) -> usize {
        self.shlokas.push(VerseReference::default());
        self.shlokas.len() - 1
    }

    /// Replaces one field of the verse row at `index`.
    pub fn update_shloka(
        &mut self,
        index: usize,
        field: ShlokaField,
        value: impl Into<String>,
    ) -> DraftResult<()> {
        let len = self.shlokas.len();
        let row = self
            .shlokas
            .get_mut(index)
            .ok_or(DraftError::ShlokaIndexOutOfRange { index, len })?;

        let slot = match field {
            ShlokaField::Text => &mut row.text,
            ShlokaField::Reference => &mut row.reference,
            ShlokaField::Translation => &mut row.translation,
        };
        *slot = value.into();
        Ok(())
    }

    /// Removes the verse row at `index`; later rows shift down by one.
    pub fn remove_shloka(&mut self, index: usize) -> DraftResult<VerseReference> {
        let len = self.shlokas.len();
        if index >= len {
            return Err(DraftError::ShlokaIndexOutOfRange { index, len });
        }
        Ok(self.shlokas.remove(index))
    }

    /// Checks the form's required fields: title, description, content.
    pub fn check_required(&self) -> DraftResult<()> {
        let required = [
            ("title", &self.title),
            ("description", &self.description),
            ("content", &self.content),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(DraftError::MissingField(name));
            }
        }
        Ok(())
    }

    /// Converts this draft into a validated article.
    ///
    /// Text fields are trimmed, blank verse rows dropped and `views` starts
    /// at zero.
    pub fn into_article(
        self,
        id: impl Into<String>,
        published_at: NaiveDate,
    ) -> DraftResult<Article> {
        self.check_required()?;

        let mut article = Article::new(id, self.title.trim(), self.category, published_at);
        article.description = self.description.trim().to_string();
        article.content = self.content.trim().to_string();
        article.status = self.status;
        article.tags = self.tags;
        article.shlokas = self
            .shlokas
            .into_iter()
            .filter(|verse| !verse.is_blank())
            .collect();

        article.validate()?;
        Ok(article)
    }
}

#[cfg(test)]
mod tests {
    use super::{ArticleDraft, DraftError, ShlokaField};

    #[test]
    fn add_tag_trims_and_ignores_duplicates() {
        let mut draft = ArticleDraft::new();
        assert!(draft.add_tag("  Dharma "));
        assert!(!draft.add_tag("Dharma"));
        assert!(!draft.add_tag("   "));
        assert!(draft.add_tag("dharma"));
        assert_eq!(draft.tags(), ["Dharma", "dharma"]);
    }

    #[test]
    fn update_shloka_rejects_unknown_row() {
        let mut draft = ArticleDraft::new();
        let err = draft
            .update_shloka(0, ShlokaField::Text, "धर्मो रक्षति रक्षितः।")
            .unwrap_err();
        assert_eq!(err, DraftError::ShlokaIndexOutOfRange { index: 0, len: 0 });
    }
}
