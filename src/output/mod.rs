//! Listing output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Size and time column formatting
//! - `listing` - Short and long listing formatter

mod config;
mod listing;
mod utils;

pub use config::OutputConfig;
pub use listing::ListingFormatter;
pub use utils::{TIME_FORMAT, format_human_size, format_size, format_time};
