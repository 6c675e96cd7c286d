//! Selecting and ordering the entries of a node
//!
//! The pipeline order is fixed: kind filter, hidden filter, time sort,
//! reverse. Results borrow from the tree, which is never modified.

mod config;
mod filter;

pub use config::ListingConfig;
pub use filter::FilterKind;

use log::debug;

use crate::tree::Node;

/// Children of `node` to display, in display order.
pub fn list_entries<'a>(node: &'a Node, config: &ListingConfig) -> Vec<&'a Node> {
    let mut entries: Vec<&Node> = node
        .children()
        .iter()
        .filter(|child| config.filter.accepts(child))
        .filter(|child| config.show_hidden || !child.is_hidden())
        .collect();

    if config.sort_by_time {
        // sort_by is stable, so equal times keep document order
        entries.sort_by(|a, b| a.time_modified.cmp(&b.time_modified));
    }

    if config.reverse {
        entries.reverse();
    }

    debug!(
        "'{}': {} of {} entries selected (filter={})",
        node.name(),
        entries.len(),
        node.children().len(),
        config.filter
    );
    entries
}
