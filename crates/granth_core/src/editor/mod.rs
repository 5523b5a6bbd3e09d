//! Article authoring logic behind the create form.
//!
//! # Responsibility
//! - Hold in-progress article input and its tag/verse list edits.
//! - Turn a finished draft into a validated `Article`.
//!
//! # See also
//! - `service::dashboard_service` for where drafts are submitted.

pub mod draft;
pub mod slug;
