// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lg_core::{SortKey, SortSpec, TimelineEntry};

/// Width of the ID column: the longest ID in the batch.
pub fn id_width(entries: &[TimelineEntry]) -> usize {
    entries.iter().map(|e| e.id.len()).max().unwrap_or(0)
}

/// Format one timeline entry as a single line.
///
/// Format: `#{id} {start} .. {end} {progress}% {days}d  {title}`
pub fn format_entry_line(entry: &TimelineEntry, id_width: usize) -> String {
    format!(
        "#{:<width$} {} .. {} {:>4}% {:>4}d  {}",
        entry.id,
        entry.start,
        entry.end,
        entry.progress,
        entry.duration_days(),
        entry.title,
        width = id_width
    )
}

/// Format the sort menu: every key with its direction and priority when active.
pub fn format_sort_spec(spec: &SortSpec) -> String {
    let label_width = SortKey::ALL
        .iter()
        .map(|k| k.label().len())
        .max()
        .unwrap_or(0);
    let mut lines = Vec::new();
    for key in SortKey::ALL {
        let state = match spec.get(key) {
            Some(field) => format!(
                "{:<4} (priority: {})",
                field.direction.as_str(),
                field.priority
            ),
            None => "-".to_string(),
        };
        lines.push(format!(
            "{:<lw$}  {:<5}  {}",
            key.label(),
            key.as_str(),
            state,
            lw = label_width
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
