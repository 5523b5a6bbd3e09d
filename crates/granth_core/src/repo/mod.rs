//! Repository layer for article authoring flows.
//!
//! # Responsibility
//! - Define the data access contract used by dashboard/editor services.
//! - Isolate storage details from use-case orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Article::validate()` first.
//! - Repository APIs return semantic errors (`NotFound`, `AlreadyExists`)
//!   rather than panicking.
//! - The only implementation keeps state in process memory; persistence is
//!   deliberately absent.

pub mod article_repo;
