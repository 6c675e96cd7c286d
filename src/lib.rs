//! jls - ls for directory trees described in a JSON document

pub mod error;
pub mod listing;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{LsError, Result};
pub use listing::{FilterKind, ListingConfig, list_entries};
pub use output::{ListingFormatter, OutputConfig};
pub use tree::{Node, NodeKind, Timestamp, load_tree, navigate, parse_tree};
