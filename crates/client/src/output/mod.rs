//! Output formatting functions.

pub mod pretty;

use itemtable_core::items::Item;

use crate::cli::OutputFormat;

/// Format a list of items for output.
pub fn format_output(items: &[Item], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(items).unwrap_or_default(),
        OutputFormat::Pretty => pretty::format_items(items),
    }
}
