//! Shared formatting helpers for listing output

use crate::error::{LsError, Result};
use crate::tree::Node;

/// Units for human-readable sizes. Division stops at the last one.
const SIZE_UNITS: [&str; 4] = ["B", "K", "M", "G"];

/// Layout of the time column, e.g. `Mar 05 10:00`.
pub const TIME_FORMAT: &str = "%b %d %H:%M";

/// Format a byte count with one decimal and a unit letter.
pub fn format_human_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = SIZE_UNITS[0];
    for &next in &SIZE_UNITS[1..] {
        if size < 1024.0 {
            break;
        }
        size /= 1024.0;
        unit = next;
    }
    format!("{:.1}{}", size, unit)
}

/// The size column: human-readable or plain bytes.
pub fn format_size(bytes: u64, human_readable: bool) -> String {
    if human_readable {
        format_human_size(bytes)
    } else {
        bytes.to_string()
    }
}

/// The time column in local time. Fails if the entry has no usable time.
pub fn format_time(node: &Node) -> Result<String> {
    node.time_modified
        .as_ref()
        .and_then(|ts| ts.to_local())
        .map(|dt| dt.format(TIME_FORMAT).to_string())
        .ok_or_else(|| LsError::Format {
            name: node.name().to_string(),
        })
}
