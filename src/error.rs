use std::path::PathBuf;

use thiserror::Error;

use crate::element::ElementId;
use crate::page::PageId;

/// Reasons an editor command leaves the document untouched.
///
/// None of these are fatal. The app logs them and keeps running, so to the
/// user a rejected command simply does nothing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("page {0} not found")]
    PageNotFound(PageId),

    #[error("element {0} not found")]
    ElementNotFound(ElementId),

    #[error("cannot delete the last remaining page")]
    LastPage,

    #[error("page name is empty")]
    EmptyPageName,

    #[error("no page rename in progress")]
    NoRenameInProgress,
}

/// Result type for editor commands
pub type EditorResult<T = ()> = Result<T, EditorError>;

/// Errors raised while loading an [`EditorConfig`](crate::config::EditorConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
