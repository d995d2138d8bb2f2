//! Error types for the folio page engine
//!
//! Every variant here is a configuration or programming error: a card whose
//! id is missing from the catalog, a malformed catalog, a required element
//! absent from the document. Redundant clicks are not errors and never surface.

use crate::catalog::ProjectId;

/// Errors raised while building or driving the page.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// A card or completion payload names a project the catalog lacks.
    #[error("unknown project: {0}")]
    UnknownProject(ProjectId),

    /// The catalog lists the same project id twice.
    #[error("duplicate project in catalog: {0}")]
    DuplicateProject(ProjectId),

    /// A required DOM element was not found.
    #[error("missing element: {0}")]
    MissingElement(String),

    /// The catalog JSON could not be parsed.
    #[error("catalog parse error: {0}")]
    Catalog(#[source] serde_json::Error),

    /// The site config JSON could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[source] serde_json::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = core::result::Result<T, FolioError>;
