//! Configuration for entry processing

use super::filter::FilterKind;

/// Which children to show and in what order.
#[derive(Debug, Clone, Default)]
pub struct ListingConfig {
    /// Include dot-prefixed names (`-A`)
    pub show_hidden: bool,
    pub filter: FilterKind,
    /// Stable ascending sort on `time_modified` (`-t`)
    pub sort_by_time: bool,
    /// Reverse whatever order precedes it (`-r`)
    pub reverse: bool,
}
