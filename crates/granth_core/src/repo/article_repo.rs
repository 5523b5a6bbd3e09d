//! Article repository contract and in-process implementation.
//!
//! # Responsibility
//! - Provide CRUD entry points used by the dashboard and editor flows.
//! - Keep the storage choice behind a trait so a real backing store can be
//!   introduced later without touching services.
//!
//! # Invariants
//! - Write paths must call `Article::validate()` before mutating state.
//! - `InMemoryArticleRepository` lives only as long as the process; nothing
//!   is written to disk.
//! - Listing returns insertion order.

use crate::model::article::{Article, ArticleId, ArticleValidationError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for article write and lookup operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ArticleValidationError),
    NotFound(ArticleId),
    AlreadyExists(ArticleId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "article not found: {id}"),
            Self::AlreadyExists(id) => write!(f, "article already exists: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::AlreadyExists(_) => None,
        }
    }
}

impl From<ArticleValidationError> for RepoError {
    fn from(value: ArticleValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for article CRUD operations.
pub trait ArticleRepository {
    fn create_article(&mut self, article: Article) -> RepoResult<ArticleId>;
    fn update_article(&mut self, article: Article) -> RepoResult<()>;
    fn get_article(&self, id: &str) -> RepoResult<Option<Article>>;
    fn list_articles(&self) -> RepoResult<Vec<Article>>;
    fn delete_article(&mut self, id: &str) -> RepoResult<()>;
}

/// Process-memory article repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryArticleRepository {
    articles: Vec<Article>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `articles`.
    ///
    /// # Errors
    /// - Returns the first validation or duplicate-id failure.
    pub fn seeded(articles: impl IntoIterator<Item = Article>) -> RepoResult<Self> {
        let mut repo = Self::new();
        for article in articles {
            repo.create_article(article)?;
        }
        Ok(repo)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.articles.iter().position(|article| article.id == id)
    }
}

impl ArticleRepository for InMemoryArticleRepository {
    fn create_article(&mut self, article: Article) -> RepoResult<ArticleId> {
        article.validate()?;
        if self.position(&article.id).is_some() {
            return Err(RepoError::AlreadyExists(article.id));
        }

        let id = article.id.clone();
        self.articles.push(article);
        debug!("event=article_create module=repo status=ok id={id}");
        Ok(id)
    }

    fn update_article(&mut self, article: Article) -> RepoResult<()> {
        article.validate()?;
        let Some(index) = self.position(&article.id) else {
            return Err(RepoError::NotFound(article.id));
        };

        self.articles[index] = article;
        Ok(())
    }

    fn get_article(&self, id: &str) -> RepoResult<Option<Article>> {
        Ok(self.position(id).map(|index| self.articles[index].clone()))
    }

    fn list_articles(&self) -> RepoResult<Vec<Article>> {
        Ok(self.articles.clone())
    }

    fn delete_article(&mut self, id: &str) -> RepoResult<()> {
        let Some(index) = self.position(id) else {
            return Err(RepoError::NotFound(id.to_string()));
        };

        self.articles.remove(index);
        debug!("event=article_delete module=repo status=ok id={id}");
        Ok(())
    }
}
