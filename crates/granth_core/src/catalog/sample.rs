//! Compiled-in sample articles served by the public site.

use crate::model::article::{Article, ArticleStatus, VerseReference};
use crate::model::category::Category;
use chrono::NaiveDate;

struct SampleArticle {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: Category,
    content: &'static str,
    tags: [&'static str; 4],
    published_at: NaiveDate,
    views: u64,
    shloka: (&'static str, &'static str, &'static str),
}

const SAMPLE_ARTICLES: [SampleArticle; 8] = [
    SampleArticle {
        id: "kurukshetra-dharma",
        title: "The Dharma of Kurukshetra: Arjuna's Divine Dilemma",
        description: "Understanding the spiritual significance of the Kurukshetra war and how the Bhagavad Gita addresses Arjuna's moral conflict.",
        category: Category::BhagavadGita,
        content: "Detailed content about the Kurukshetra dharma...",
        tags: ["Bhagavad Gita", "Dharma", "Kurukshetra", "Arjuna"],
        published_at: date(2025, 1, 15),
        views: 2450,
        shloka: (
            "यदा यदा हि धर्मस्य ग्लानिर्भवति भारत। अभ्युत्थानं अधर्मस्य तदात्मानं सृजाम्यहम्॥",
            "Bhagavad Gita 4.7",
            "Whenever there is a decline in dharma and rise of adharma, I manifest Myself.",
        ),
    },
    SampleArticle {
        id: "sita-swayamvar",
        title: "Sita's Swayamvara: Divine Choice and Destiny",
        description: "Exploring the significance of Sita's choice in the Ramayana and how it reflects divine will and human agency.",
        category: Category::Ramayana,
        content: "Detailed content about Sita's swayamvara...",
        tags: ["Ramayana", "Sita", "Swayamvara", "Divine Will"],
        published_at: date(2025, 1, 10),
        views: 1890,
        shloka: (
            "मातुः शतं मातृगुणानां भूयांसि।",
            "Ramayana",
            "The qualities of the mother are hundred-fold.",
        ),
    },
    SampleArticle {
        id: "krishna-childhood",
        title: "Krishna's Childhood: Divine Play and Protection",
        description: "Understanding the spiritual significance of Krishna's divine play (leelas) and how they protected Bharat Varsh.",
        category: Category::Mahabharata,
        content: "Detailed content about Krishna's childhood...",
        tags: ["Krishna", "Divine Play", "Makhan Chor", "Mahabharata"],
        published_at: date(2025, 1, 8),
        views: 3120,
        shloka: (
            "अहं सर्वस्य प्रभवो मत्तः सर्वं प्रवर्तते।",
            "Bhagavad Gita 10.8",
            "I am the source of all spiritual and material worlds.",
        ),
    },
    SampleArticle {
        id: "vedic-sciences",
        title: "Vedic Mathematics and Astronomy: Ancient Wisdom",
        description: "Examining how the Vedas contain precise mathematical and astronomical knowledge that predates modern discoveries.",
        category: Category::Vedic,
        content: "Detailed content about Vedic sciences...",
        tags: ["Vedas", "Mathematics", "Astronomy", "Ancient Science"],
        published_at: date(2025, 1, 5),
        views: 2670,
        shloka: (
            "ॐ असतो मा सद्गमय। तमसो मा ज्योतिर्गमय।",
            "Upanishad",
            "Lead me from untruth to truth; from darkness to light.",
        ),
    },
    SampleArticle {
        id: "hanuman-devotion",
        title: "Hanuman: Symbol of Pure Devotion",
        description: "Analyzing Hanuman's character as the ultimate embodiment of bhakti and seva in the Ramayana.",
        category: Category::Ramayana,
        content: "Detailed content about Hanuman...",
        tags: ["Hanuman", "Bhakti", "Ramayana", "Devotion"],
        published_at: date(2025, 1, 3),
        views: 4230,
        shloka: ("भगवान के भजन बिना।", "Ramayana", "Without devotion to God..."),
    },
    SampleArticle {
        id: "pandavas-suffering",
        title: "The Pandavas' Exile: Testing of Character",
        description: "Understanding how the thirteen years of exile tested the Pandavas' dharma and prepared them for dharmic victory.",
        category: Category::Mahabharata,
        content: "Detailed content about Pandavas...",
        tags: ["Mahabharata", "Pandavas", "Dharma", "Exile"],
        published_at: date(2025, 1, 1),
        views: 1560,
        shloka: (
            "धर्मो रक्षति रक्षितः।",
            "Mahabharata",
            "Dharma protects those who protect it.",
        ),
    },
    SampleArticle {
        id: "gita-karma-yoga",
        title: "Karma Yoga: The Path of Selfless Action",
        description: "Deep dive into the Bhagavad Gita's teachings on karma yoga and how to perform actions without attachment.",
        category: Category::BhagavadGita,
        content: "Detailed content about karma yoga...",
        tags: ["Karma Yoga", "Bhagavad Gita", "Action", "Detachment"],
        published_at: date(2024, 12, 28),
        views: 3890,
        shloka: (
            "योगः कर्मसु कौशलम्।",
            "Bhagavad Gita 2.50",
            "Yoga is skill in action.",
        ),
    },
    SampleArticle {
        id: "lakshman-loyalty",
        title: "Lakshman's Loyalty: Brother and Servant",
        description: "Exploring Lakshman's character as the ideal balance of familial loyalty, devotion, and dharmic duty in the Ramayana.",
        category: Category::Ramayana,
        content: "Detailed content about Lakshman...",
        tags: ["Lakshman", "Loyalty", "Ramayana", "Duty"],
        published_at: date(2024, 12, 25),
        views: 2340,
        shloka: (
            "राम के नाम पर निछावर हूँ।",
            "Ramayana",
            "I am sacrificed at the name of Ram.",
        ),
    },
];

pub(super) fn sample_articles() -> Vec<Article> {
    SAMPLE_ARTICLES.iter().map(to_article).collect()
}

fn to_article(sample: &SampleArticle) -> Article {
    let (text, reference, translation) = sample.shloka;

    let mut article = Article::new(sample.id, sample.title, sample.category, sample.published_at);
    article.description = sample.description.to_string();
    article.content = sample.content.to_string();
    article.tags = sample.tags.iter().map(|tag| tag.to_string()).collect();
    article.views = sample.views;
    article.shlokas = vec![VerseReference::new(text, reference, translation)];
    article
}

/// Dashboard table row seeded into the content-management store.
struct DashboardSample {
    id: &'static str,
    title: &'static str,
    category: Category,
    status: ArticleStatus,
    views: u64,
    // Creation date for drafts; drafts show no publication date.
    published_at: NaiveDate,
}

const DASHBOARD_ARTICLES: [DashboardSample; 3] = [
    DashboardSample {
        id: "dharma-of-kurukshetra",
        title: "The Dharma of Kurukshetra",
        category: Category::BhagavadGita,
        status: ArticleStatus::Published,
        views: 2450,
        published_at: date(2025, 1, 15),
    },
    DashboardSample {
        id: "sitas-swayamvara",
        title: "Sita's Swayamvara",
        category: Category::Ramayana,
        status: ArticleStatus::Published,
        views: 1890,
        published_at: date(2025, 1, 10),
    },
    DashboardSample {
        id: "krishnas-divine-play",
        title: "Krishna's Divine Play",
        category: Category::Mahabharata,
        status: ArticleStatus::Draft,
        views: 0,
        published_at: date(2025, 1, 20),
    },
];

pub(super) fn dashboard_articles() -> Vec<Article> {
    DASHBOARD_ARTICLES
        .iter()
        .map(|sample| {
            let mut article =
                Article::new(sample.id, sample.title, sample.category, sample.published_at);
            article.status = sample.status;
            article.views = sample.views;
            article
        })
        .collect()
}

// Evaluated in const context, so a bad literal fails the build.
const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid sample date"),
    }
}
