//! Core domain logic for the Granth scripture-article site.
//! This crate is the single source of truth for article invariants and the
//! listing query semantics.

pub mod catalog;
pub mod editor;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod view;

pub use catalog::{category_options, dashboard_seed, ArticleCatalog, CatalogError, CategoryOption};
pub use editor::draft::{ArticleDraft, DraftError, DraftResult, ShlokaField};
pub use editor::slug::slugify;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::article::{
    Article, ArticleId, ArticleStatus, ArticleValidationError, VerseReference,
};
pub use model::category::{Category, CategoryFilter};
pub use query::engine::{matches_search, query_articles, QueryParams, SortKey};
pub use query::related::{related_articles, RELATED_ARTICLES_LIMIT};
pub use repo::article_repo::{ArticleRepository, InMemoryArticleRepository, RepoError, RepoResult};
pub use service::article_service::{ArticleListResult, ArticleService};
pub use service::dashboard_service::{
    DashboardError, DashboardFilter, DashboardService, DashboardStats, StatusFilter, SubmitReceipt,
};
pub use view::{ArticleCardView, ArticleDetailView, DashboardRow};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
