//! Shared utilities for CLI commands

use tabled::{Table, settings::Style};

/// Truncate a string with ellipsis if it exceeds max length
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Placeholder for missing or blank values
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// One label per page, the current one bracketed (it is the disabled button).
pub fn format_page_buttons(current: usize, pages: impl IntoIterator<Item = usize>) -> String {
    pages
        .into_iter()
        .map(|page| {
            if page == current {
                format!("[{}]", page)
            } else {
                page.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Apply consistent table styling
pub fn apply_table_style(table: &mut Table) {
    table.with(Style::rounded());
}
