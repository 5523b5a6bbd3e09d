//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate catalog, query and repository calls into use-case APIs.
//! - Keep CLI/UI layers decoupled from storage and query details.

pub mod article_service;
pub mod dashboard_service;
