//! Article query entry points.
//!
//! # Responsibility
//! - Project the full article collection into filtered, ordered views.
//! - Select related articles for a detail page.
//!
//! # Invariants
//! - Every function here is pure: no logging, no ambient state, no I/O.
//! - Functions never fail; bad selector input degrades to defaults.

pub mod engine;
pub mod related;
