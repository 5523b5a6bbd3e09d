use granth_core::view::{format_count, CARD_TAG_PREVIEW};
use granth_core::{
    ArticleCardView, ArticleCatalog, ArticleService, ArticleStatus, Category, DashboardRow,
    QueryParams,
};

#[test]
fn card_shows_first_three_tags_and_overflow_count() {
    let catalog = ArticleCatalog::sample();
    let card = ArticleCardView::from_article(catalog.get("kurukshetra-dharma").unwrap());

    assert_eq!(card.published, "Jan 15, 2025");
    assert_eq!(card.preview_tags.len(), CARD_TAG_PREVIEW);
    assert_eq!(card.preview_tags, ["Bhagavad Gita", "Dharma", "Kurukshetra"]);
    assert_eq!(card.hidden_tag_count, 1);
    assert_eq!(card.shloka_count, 1);
    assert_eq!(card.category, Category::BhagavadGita);
}

#[test]
fn detail_view_includes_long_date_and_related_cards() {
    let catalog = ArticleCatalog::sample();
    let service = ArticleService::new(&catalog);

    let detail = service.detail("sita-swayamvar").unwrap();
    assert_eq!(detail.published, "January 10, 2025");
    assert_eq!(detail.reference_count(), 1);
    let related: Vec<_> = detail.related.iter().map(|card| card.id.as_str()).collect();
    assert_eq!(related, ["hanuman-devotion", "lakshman-loyalty"]);
}

#[test]
fn detail_view_is_none_for_unknown_article() {
    let catalog = ArticleCatalog::sample();
    let service = ArticleService::new(&catalog);
    assert!(service.detail("ravana-redemption").is_none());
}

#[test]
fn list_result_reports_found_and_total() {
    let catalog = ArticleCatalog::sample();
    let service = ArticleService::new(&catalog);

    let result = service.list(&QueryParams::from_raw("Bhagavad Gita", "", "popular"));
    assert_eq!(result.total, 8);
    assert_eq!(result.found(), 2);
    assert_eq!(result.items[0].id, "gita-karma-yoga");
}

#[test]
fn dashboard_row_hides_date_for_drafts() {
    let catalog = ArticleCatalog::sample();
    let mut article = catalog.get("hanuman-devotion").unwrap().clone();

    let row = DashboardRow::from_article(&article);
    assert_eq!(row.published_at, Some(article.published_at));

    article.status = ArticleStatus::Draft;
    let row = DashboardRow::from_article(&article);
    assert_eq!(row.published_at, None);
    assert_eq!(format_count(row.views), "4,230");
}
