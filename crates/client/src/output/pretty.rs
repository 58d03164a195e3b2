//! Pretty output formatting.

use itemtable_core::items::Item;

/// Format an item for display.
pub fn format_item(item: &Item) -> String {
    let data = item
        .data
        .as_ref()
        .map(|data| data.to_string())
        .unwrap_or_else(|| "(none)".to_string());

    let mut output = format!("{}\n  Data: {}", item.item_id, data);
    for (name, value) in &item.attributes {
        output.push_str(&format!("\n  {}: {}", name, value));
    }
    output
}

/// Format items for display.
pub fn format_items(items: &[Item]) -> String {
    if items.is_empty() {
        return "No items found.".to_string();
    }
    let mut output = format!("ITEMS ({})\n", items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push_str(&format!("\n{}", format_item(item)));
        output.push('\n');
    }
    output
}
