use chrono::NaiveDate;
use granth_core::{
    query_articles, Article, ArticleCatalog, Category, CategoryFilter, QueryParams, SortKey,
};

fn ids<'a>(articles: &[&'a Article]) -> Vec<&'a str> {
    articles.iter().map(|article| article.id.as_str()).collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn ramayana_filter_orders_by_most_recent() {
    let catalog = ArticleCatalog::sample();
    let params = QueryParams::from_raw("Ramayana", "", "recent");

    let result = query_articles(catalog.articles(), &params);
    assert_eq!(
        ids(&result),
        ["sita-swayamvar", "hanuman-devotion", "lakshman-loyalty"]
    );
}

#[test]
fn search_is_case_insensitive_over_title_and_tags() {
    let catalog = ArticleCatalog::sample();
    let params = QueryParams::from_raw("all", "krishna", "recent");

    let result = query_articles(catalog.articles(), &params);
    assert_eq!(ids(&result), ["krishna-childhood"]);

    let shouted = QueryParams::from_raw("all", "  KRISHNA  ", "recent");
    assert_eq!(query_articles(catalog.articles(), &shouted), result);
}

#[test]
fn popular_sort_orders_every_article_by_views() {
    let catalog = ArticleCatalog::sample();
    let params = QueryParams::from_raw("all", "", "popular");

    let result = query_articles(catalog.articles(), &params);
    assert_eq!(
        ids(&result),
        [
            "hanuman-devotion",
            "gita-karma-yoga",
            "krishna-childhood",
            "vedic-sciences",
            "kurukshetra-dharma",
            "lakshman-loyalty",
            "sita-swayamvar",
            "pandavas-suffering",
        ]
    );
    assert!(result.windows(2).all(|pair| pair[0].views >= pair[1].views));
}

#[test]
fn category_and_search_stages_combine() {
    let catalog = ArticleCatalog::sample();
    let params = QueryParams::new(CategoryFilter::Only(Category::Vedic), "astronomy", SortKey::Recent);

    let result = query_articles(catalog.articles(), &params);
    assert_eq!(ids(&result), ["vedic-sciences"]);
}

#[test]
fn search_matches_description_text() {
    let catalog = ArticleCatalog::sample();
    let params = QueryParams::from_raw("all", "thirteen years", "recent");

    let result = query_articles(catalog.articles(), &params);
    assert_eq!(ids(&result), ["pandavas-suffering"]);
}

#[test]
fn search_does_not_look_at_content_or_shlokas() {
    let catalog = ArticleCatalog::sample();

    let content_only = QueryParams::from_raw("all", "detailed content", "recent");
    assert!(query_articles(catalog.articles(), &content_only).is_empty());

    let verse_only = QueryParams::from_raw("all", "skill in action", "recent");
    assert!(query_articles(catalog.articles(), &verse_only).is_empty());
}

#[test]
fn unknown_selector_values_fall_back_to_all_and_recent() {
    let catalog = ArticleCatalog::sample();
    let params = QueryParams::from_raw("Puranas", "   ", "alphabetical");

    let result = query_articles(catalog.articles(), &params);
    assert_eq!(result.len(), catalog.len());
    assert!(result
        .windows(2)
        .all(|pair| pair[0].published_at >= pair[1].published_at));
    assert_eq!(result[0].id, "kurukshetra-dharma");
    assert_eq!(result[7].id, "lakshman-loyalty");
}

#[test]
fn no_match_is_an_empty_result() {
    let catalog = ArticleCatalog::sample();
    let params = QueryParams::from_raw("Vedic", "hanuman", "popular");

    assert!(query_articles(catalog.articles(), &params).is_empty());
}

#[test]
fn every_result_satisfies_category_and_search_predicates() {
    let catalog = ArticleCatalog::sample();
    for category in Category::ALL {
        for needle in ["", "dharma", "DIVINE", "ramayana", "zzz"] {
            for sort in [SortKey::Recent, SortKey::Popular] {
                let params = QueryParams::new(category.into(), needle, sort);
                let result = query_articles(catalog.articles(), &params);

                for article in &result {
                    assert_eq!(article.category, category);
                    if !needle.trim().is_empty() {
                        let folded = needle.to_lowercase();
                        assert!(
                            article.title.to_lowercase().contains(&folded)
                                || article.description.to_lowercase().contains(&folded)
                                || article
                                    .tags
                                    .iter()
                                    .any(|tag| tag.to_lowercase().contains(&folded)),
                            "{} should not match `{needle}`",
                            article.id
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn query_is_idempotent() {
    let catalog = ArticleCatalog::sample();
    for params in [
        QueryParams::from_raw("all", "", "popular"),
        QueryParams::from_raw("Ramayana", "a", "recent"),
        QueryParams::from_raw("Bhagavad Gita", "gita", "popular"),
    ] {
        let once: Vec<Article> = query_articles(catalog.articles(), &params)
            .into_iter()
            .cloned()
            .collect();
        let twice = query_articles(&once, &params);
        assert_eq!(twice, once.iter().collect::<Vec<_>>());
    }
}

#[test]
fn ties_keep_input_order_for_both_sort_keys() {
    let same_day = date(2025, 2, 1);
    let mut articles = Vec::new();
    for (id, views) in [("first", 10), ("second", 50), ("third", 10), ("fourth", 50)] {
        let mut article = Article::new(id, id.to_uppercase(), Category::Vedic, same_day);
        article.views = views;
        articles.push(article);
    }

    let recent = query_articles(&articles, &QueryParams::from_raw("all", "", "recent"));
    assert_eq!(ids(&recent), ["first", "second", "third", "fourth"]);

    let popular = query_articles(&articles, &QueryParams::from_raw("all", "", "popular"));
    assert_eq!(ids(&popular), ["second", "fourth", "first", "third"]);
}

#[test]
fn recent_sort_compares_calendar_dates_across_years() {
    let mut older = Article::new("older", "Older", Category::Ramayana, date(2024, 12, 31));
    older.views = 1;
    let newer = Article::new("newer", "Newer", Category::Ramayana, date(2025, 1, 1));
    let articles = vec![older, newer];

    let result = query_articles(&articles, &QueryParams::default());
    assert_eq!(ids(&result), ["newer", "older"]);
}

#[test]
fn devanagari_search_text_matches_tags() {
    let mut article = Article::new("shloka-tag", "Verse study", Category::Vedic, date(2025, 1, 1));
    article.tags = vec!["ॐ".to_string(), "Upanishad".to_string()];
    let articles = vec![article];

    let result = query_articles(&articles, &QueryParams::from_raw("all", "ॐ", "recent"));
    assert_eq!(ids(&result), ["shloka-tag"]);
}
