//! The synthetic directory tree
//!
//! - `node` - `Node`, `NodeKind` and `Timestamp`, resolved once at load time
//! - `loader` - reading the JSON document
//! - `navigate` - following a slash-delimited path from the root

mod loader;
mod navigate;
mod node;

pub use loader::{load_tree, parse_tree};
pub use navigate::{CURRENT_DIR, navigate};
pub use node::{Node, NodeKind, Timestamp};
