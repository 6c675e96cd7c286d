//! Error types for loading, navigating and rendering a listing

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every way a listing run can fail.
///
/// None of these are recoverable: the CLI prints the message and exits
/// non-zero without writing any listing.
#[derive(Debug, Error)]
pub enum LsError {
    /// The tree document could not be opened or read.
    #[error("cannot read '{}': {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The tree document is not valid JSON (or not a node object).
    #[error("cannot parse '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A path segment matched no child. Carries the full requested path.
    #[error("cannot access '{path}': No such file or directory")]
    NotFound { path: String },

    #[error(
        "'{value}' is not a valid filter criteria. Available filters are 'dir' and 'file'"
    )]
    InvalidFilter { value: String },

    /// Long format needs a usable `time_modified` on every entry.
    #[error("cannot format entry '{name}': missing or invalid time_modified")]
    Format { name: String },

    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, LsError>;
