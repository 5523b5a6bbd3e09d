//! Domain model for scripture articles.
//!
//! # Responsibility
//! - Define canonical data structures used by the catalog, query engine,
//!   editor and dashboard.
//! - Keep one article shape for listing cards, detail pages and dashboard rows.
//!
//! # Invariants
//! - Every article is identified by a stable slug `ArticleId`.
//! - `Category` is a closed enumeration; there is no "other" bucket.

pub mod article;
pub mod category;
