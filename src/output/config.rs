//! Output configuration types

/// Configuration for rendering a listing.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// One line per entry with permissions, size and time (`-l`)
    pub long_format: bool,
    /// Sizes as `2.0K` instead of bytes; only used with `long_format`
    pub human_readable: bool,
    pub use_color: bool,
}
