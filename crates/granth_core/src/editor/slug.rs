//! Title-to-id slug derivation.

use once_cell::sync::Lazy;
use regex::Regex;

static APOSTROPHE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"['\x{2019}]").expect("valid apostrophe regex"));
static NON_SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug separator regex"));

/// Derives a lowercase ASCII slug from a title.
///
/// Rules:
/// - apostrophes are dropped (`Krishna's` -> `krishnas`);
/// - every other run of non `[a-z0-9]` characters becomes one hyphen;
/// - leading/trailing hyphens are removed.
///
/// Returns an empty string when no ASCII letter or digit survives, e.g. for
/// a Devanagari-only title.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let without_apostrophes = APOSTROPHE_RE.replace_all(&lowered, "");
    let hyphenated = NON_SLUG_RE.replace_all(&without_apostrophes, "-");
    hyphenated.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::slugify;
    use crate::model::article::validate_article_id;

    #[test]
    fn slugify_matches_catalog_id_style() {
        assert_eq!(
            slugify("The Dharma of Kurukshetra: Arjuna's Divine Dilemma"),
            "the-dharma-of-kurukshetra-arjunas-divine-dilemma"
        );
        assert_eq!(slugify("  Karma Yoga -- 2.50 "), "karma-yoga-2-50");
    }

    #[test]
    fn slugify_output_is_a_valid_id() {
        let slug = slugify("Hanuman: Symbol of Pure Devotion!");
        assert!(validate_article_id(&slug).is_ok());
    }

    #[test]
    fn devanagari_only_title_yields_empty_slug() {
        assert_eq!(slugify("योगः कर्मसु कौशलम्"), "");
    }
}
