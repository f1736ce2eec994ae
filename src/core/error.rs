//! Custom error types for the application.
//!
//! - [`CatalogError`] - Loading and validating the entry catalog
//! - [`NavigationError`] - Folder navigation against a catalog

use thiserror::Error;

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog document is not valid JSON or has the wrong shape
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two entries share an id
    #[error("duplicate entry id '{0}'")]
    DuplicateId(String),
    /// Entry with an empty display name
    #[error("entry '{0}' has an empty name")]
    EmptyName(String),
}

/// Errors raised when entering a folder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Target entry is a file
    #[error("'{0}' is not a folder")]
    NotAFolder(String),
    /// Catalog has no folder with this id
    #[error("unknown folder id '{0}'")]
    UnknownFolder(String),
}
