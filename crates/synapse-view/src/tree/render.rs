//! Plain-text rendering of explorer rows.

use super::row::TreeRow;

/// Marker prefixed to the selected row.
const SELECTED_MARKER: char = '▌';

/// Render rows one per line: selection marker, two spaces per depth level,
/// chevron, icon, then label, count and badge when present.
pub fn render_rows(rows: &[TreeRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let marker = if row.selected { SELECTED_MARKER } else { ' ' };
        let chevron = row.chevron.map_or(" ", |c| c.glyph());
        out.push_str(&format!(
            "{marker}{}{chevron} {}",
            "  ".repeat(row.depth),
            row.icon.glyph()
        ));
        if let Some(label) = &row.label {
            out.push_str(&format!(" {label}"));
        }
        if let Some(count) = row.document_count {
            out.push_str(&format!(" ({count})"));
        }
        if let Some(badge) = &row.badge {
            out.push_str(&format!(" [{}]", badge.glyph));
        }
        out.push('\n');
    }
    out
}
