//! Content-management dashboard use-cases.
//!
//! # Responsibility
//! - Summarize repository contents (totals, drafts, views).
//! - Filter dashboard rows by status and title.
//! - Delete entries and submit editor drafts.
//!
//! # Invariants
//! - Submitted ids are unique within the repository.
//! - Submission stores into the injected repository only; with
//!   `InMemoryArticleRepository` nothing outlives the process.

use crate::editor::draft::{ArticleDraft, DraftError};
use crate::editor::slug::slugify;
use crate::model::article::{ArticleId, ArticleStatus};
use crate::repo::article_repo::{ArticleRepository, RepoError};
use crate::view::DashboardRow;
use chrono::NaiveDate;
use log::info;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const FALLBACK_ID_PREFIX: &str = "article";
const FALLBACK_ID_HEX_CHARS: usize = 8;

/// Service error for dashboard use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    Draft(DraftError),
    ArticleNotFound(ArticleId),
    Repo(RepoError),
}

impl Display for DashboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft(err) => write!(f, "{err}"),
            Self::ArticleNotFound(id) => write!(f, "article not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DashboardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Draft(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::ArticleNotFound(_) => None,
        }
    }
}

impl From<DraftError> for DashboardError {
    fn from(value: DraftError) -> Self {
        Self::Draft(value)
    }
}

impl From<RepoError> for DashboardError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::ArticleNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Status selector for dashboard rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ArticleStatus),
}

impl StatusFilter {
    /// Parses `all|published|draft`; anything else means `All`.
    pub fn parse_or_all(value: &str) -> Self {
        ArticleStatus::parse(value).map_or(Self::All, Self::Only)
    }

    pub fn accepts(self, status: ArticleStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == status,
        }
    }
}

/// Dashboard table controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardFilter {
    /// Case-insensitive title substring; empty matches everything.
    pub title_search: String,
    pub status: StatusFilter,
}

/// Summary tiles shown above the dashboard table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub published: usize,
    pub draft: usize,
    pub total_views: u64,
}

/// Outcome of a draft submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub article_id: ArticleId,
    pub status: ArticleStatus,
    /// User-facing confirmation text.
    pub message: String,
}

/// Dashboard facade over a repository implementation.
pub struct DashboardService<R: ArticleRepository> {
    repo: R,
}

impl<R: ArticleRepository> DashboardService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Computes totals over every stored article.
    pub fn stats(&self) -> Result<DashboardStats, DashboardError> {
        let articles = self.repo.list_articles()?;
        let published = articles
            .iter()
            .filter(|article| article.status == ArticleStatus::Published)
            .count();

        Ok(DashboardStats {
            total: articles.len(),
            published,
            draft: articles.len() - published,
            total_views: articles.iter().map(|article| article.views).sum(),
        })
    }

    /// Lists rows matching both the status filter and the title search.
    pub fn list(&self, filter: &DashboardFilter) -> Result<Vec<DashboardRow>, DashboardError> {
        let needle = filter.title_search.to_lowercase();
        let rows = self
            .repo
            .list_articles()?
            .iter()
            .filter(|article| filter.status.accepts(article.status))
            .filter(|article| article.title.to_lowercase().contains(&needle))
            .map(DashboardRow::from_article)
            .collect();
        Ok(rows)
    }

    /// Deletes one article by id.
    pub fn delete(&mut self, id: &str) -> Result<(), DashboardError> {
        self.repo.delete_article(id)?;
        info!("event=article_delete module=dashboard status=ok id={id}");
        Ok(())
    }

    /// Validates `draft`, assigns it a unique id and stores it.
    ///
    /// `today` becomes the article's publication date.
    ///
    /// # Errors
    /// - `DashboardError::Draft` when a required field is blank or the
    ///   resulting article fails validation.
    pub fn submit(
        &mut self,
        draft: ArticleDraft,
        today: NaiveDate,
    ) -> Result<SubmitReceipt, DashboardError> {
        draft.check_required()?;

        let article_id = self.unique_id_for(&draft.title)?;
        let article = draft.into_article(article_id, today)?;
        let status = article.status;
        let article_id = self.repo.create_article(article)?;

        info!(
            "event=article_submit module=dashboard status=ok id={} article_status={}",
            article_id,
            status.as_str()
        );

        let message = match status {
            ArticleStatus::Published => "Article published successfully!",
            ArticleStatus::Draft => "Article saved as draft successfully!",
        };
        Ok(SubmitReceipt {
            article_id,
            status,
            message: message.to_string(),
        })
    }

    fn unique_id_for(&self, title: &str) -> Result<ArticleId, DashboardError> {
        let mut base = slugify(title);
        if base.is_empty() {
            let hex = Uuid::new_v4().simple().to_string();
            base = format!("{FALLBACK_ID_PREFIX}-{}", &hex[..FALLBACK_ID_HEX_CHARS]);
        }

        let mut candidate = base.clone();
        let mut suffix = 2_u32;
        while self.repo.get_article(&candidate)?.is_some() {
            candidate = format!("{base}-{suffix}");
            suffix += 1;
        }
        Ok(candidate)
    }
}
