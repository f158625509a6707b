use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while locating a file
#[derive(Debug, Error)]
pub enum FinderError {
    /// The query fragment was empty
    #[error("Query must not be empty")]
    EmptyQuery,

    /// The search root is missing or not a directory
    #[error("Search root is not a directory: {}", path.display())]
    InvalidRoot { path: PathBuf },

    /// The fuzzy pattern could not be compiled
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Nothing under the root scored above zero
    #[error("No file found matching '{query}'")]
    NoMatch { query: String },

    /// Input ended or was cancelled before a choice was made
    #[error("Interrupted")]
    Interrupted,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FinderError>;
