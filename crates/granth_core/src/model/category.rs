//! Article category taxonomy.
//!
//! # Responsibility
//! - Define the closed set of source-text traditions an article belongs to.
//! - Parse selector input into a category filter without ever failing.
//!
//! # Invariants
//! - `Category` values match the stored enumeration exactly (case-sensitive).
//! - Unrecognized filter input degrades to `CategoryFilter::All`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Sentinel selector value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// Source-text tradition that classifies an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Mahabharata,
    Ramayana,
    Vedic,
    /// Serialized with its space, matching the stored value.
    #[serde(rename = "Bhagavad Gita")]
    BhagavadGita,
}

impl Category {
    /// Every category in selector display order.
    pub const ALL: [Category; 4] = [
        Category::Mahabharata,
        Category::Ramayana,
        Category::Vedic,
        Category::BhagavadGita,
    ];

    /// Returns the canonical enumeration value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mahabharata => "Mahabharata",
            Self::Ramayana => "Ramayana",
            Self::Vedic => "Vedic",
            Self::BhagavadGita => "Bhagavad Gita",
        }
    }

    /// Returns the human label used by category selectors.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Vedic => "Vedic Wisdom",
            other => other.as_str(),
        }
    }

    /// Parses an exact enumeration value.
    ///
    /// Matching is case-sensitive: `"ramayana"` is not a category.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == value)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category stage input for the article query engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Pass every article through.
    #[default]
    All,
    /// Keep only articles of exactly this category.
    Only(Category),
}

impl CategoryFilter {
    /// Parses selector input, falling back to `All` for anything unknown.
    pub fn parse_or_all(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            return Self::All;
        }
        Category::parse(value).map_or(Self::All, Self::Only)
    }

    /// Returns whether `category` passes this filter.
    pub fn accepts(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == category,
        }
    }

    /// Returns the selector value (`"all"` or the enumeration value).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Topics",
            Self::Only(category) => category.display_name(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        Self::Only(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, CategoryFilter};

    #[test]
    fn parse_is_exact_and_case_sensitive() {
        assert_eq!(Category::parse("Bhagavad Gita"), Some(Category::BhagavadGita));
        assert_eq!(Category::parse("Ramayana"), Some(Category::Ramayana));
        assert_eq!(Category::parse("ramayana"), None);
        assert_eq!(Category::parse("BhagavadGita"), None);
    }

    #[test]
    fn unknown_filter_value_degrades_to_all() {
        assert_eq!(CategoryFilter::parse_or_all("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse_or_all("Puranas"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse_or_all(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse_or_all("Vedic"),
            CategoryFilter::Only(Category::Vedic)
        );
    }

    #[test]
    fn vedic_uses_long_display_name() {
        assert_eq!(Category::Vedic.display_name(), "Vedic Wisdom");
        assert_eq!(Category::Vedic.as_str(), "Vedic");
        assert_eq!(CategoryFilter::All.label(), "All Topics");
    }
}
