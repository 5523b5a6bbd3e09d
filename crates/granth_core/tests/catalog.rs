use chrono::NaiveDate;
use granth_core::{
    category_options, Article, ArticleCatalog, ArticleValidationError, CatalogError, Category,
};

fn article(id: &str) -> Article {
    let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    Article::new(id, format!("Title of {id}"), Category::Ramayana, date)
}

#[test]
fn sample_catalog_has_eight_unique_articles_in_source_order() {
    let catalog = ArticleCatalog::sample();
    let ids: Vec<_> = catalog.articles().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "kurukshetra-dharma",
            "sita-swayamvar",
            "krishna-childhood",
            "vedic-sciences",
            "hanuman-devotion",
            "pandavas-suffering",
            "gita-karma-yoga",
            "lakshman-loyalty",
        ]
    );
    assert!(catalog
        .articles()
        .iter()
        .all(|article| article.shlokas.len() == 1 && article.tags.len() == 4));
}

#[test]
fn get_finds_by_exact_id() {
    let catalog = ArticleCatalog::sample();
    let article = catalog.get("vedic-sciences").unwrap();
    assert_eq!(article.views, 2670);
    assert_eq!(article.shlokas[0].reference, "Upanishad");

    assert!(catalog.get("Vedic-Sciences").is_none());
}

#[test]
fn new_rejects_duplicate_ids() {
    let err = ArticleCatalog::new(vec![article("rama"), article("sita"), article("rama")])
        .unwrap_err();
    assert_eq!(err, CatalogError::DuplicateId("rama".to_string()));
}

#[test]
fn new_reports_which_article_failed_validation() {
    let mut broken = article("ravana");
    broken.title = String::new();

    let err = ArticleCatalog::new(vec![article("rama"), broken]).unwrap_err();
    assert_eq!(
        err,
        CatalogError::Validation {
            id: "ravana".to_string(),
            source: ArticleValidationError::BlankTitle,
        }
    );
    assert!(err.to_string().contains("ravana"));
}

#[test]
fn empty_catalog_is_allowed() {
    let catalog = ArticleCatalog::new(Vec::new()).unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
}

#[test]
fn category_options_follow_selector_order() {
    let names: Vec<_> = category_options().iter().map(|option| option.name).collect();
    assert_eq!(
        names,
        ["All Topics", "Mahabharata", "Ramayana", "Vedic Wisdom", "Bhagavad Gita"]
    );
}
