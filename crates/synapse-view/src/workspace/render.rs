//! Plain-text rendering of workspace views.

use tabled::builder::Builder;
use tabled::settings::Style;

use super::detail::{BomTable, DocumentDetail, MetadataView, NO_METADATA};
use super::{DocumentCard, NO_DOCUMENTS, WorkspaceView};

/// Render a workspace view as text.
pub fn render_view(view: &WorkspaceView) -> String {
    match view {
        WorkspaceView::Empty { message } => format!("{message}\n"),
        WorkspaceView::EmptyFolder { .. } => format!("{NO_DOCUMENTS}\n"),
        WorkspaceView::DocumentGrid { cards, .. } => {
            cards.iter().map(render_card).collect::<Vec<_>>().join("\n")
        }
        WorkspaceView::Detail(detail) => render_detail(detail),
    }
}

fn render_card(card: &DocumentCard) -> String {
    let mut out = String::new();
    let marker = if card.selected { "▌" } else { "" };
    out.push_str(&format!("{marker}{} {}\n", card.icon.glyph(), card.name));
    out.push_str(&format!("   {}\n", card.date));
    if let Some((customer, object)) = &card.preview {
        out.push_str(&format!("   Customer: {customer}\n"));
        out.push_str(&format!("   Object: {object}\n"));
    }
    out.push_str(&format!("   [{}]", card.status.text));
    if card.is_template {
        out.push_str(" Template");
    }
    out.push('\n');
    out
}

fn render_detail(detail: &DocumentDetail) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", detail.name));
    out.push_str(&format!("{}  [{}]\n", detail.uploaded, detail.status.text));
    out.push('\n');

    match &detail.metadata {
        Some(meta) => render_metadata(&mut out, meta),
        None => {
            out.push_str(&format!("{NO_METADATA}\n"));
        }
    }
    out
}

fn render_metadata(out: &mut String, meta: &MetadataView) {
    out.push_str("Project Information\n");
    out.push_str(&format!("  Customer: {}\n", meta.customer));
    out.push_str(&format!("  Object: {}\n", meta.object));
    out.push_str(&format!("  Address: {}\n", meta.address));
    out.push('\n');

    out.push_str("Technical Data\n");
    out.push_str("  Grid Axes\n");
    out.push_str(&format!("    Horizontal: {}\n", meta.horizontal_axes));
    out.push_str(&format!("    Vertical: {}\n", meta.vertical_axes));
    out.push_str(&format!("  Elevation Marks: {}\n", meta.elevation_marks));

    if let Some(bom) = &meta.bill_of_materials {
        out.push('\n');
        out.push_str("Bill of Materials\n");
        out.push_str(&format!("{}\n", bom_table(bom)));
    }
}

fn bom_table(bom: &BomTable) -> String {
    let mut builder = Builder::default();
    builder.push_record(["#", "Name", "Weight (kg)", "Qty", "Total (kg)"]);
    for row in &bom.rows {
        builder.push_record([
            row.position.clone(),
            row.name.clone(),
            row.weight.clone(),
            row.quantity.to_string(),
            row.total.clone(),
        ]);
    }
    builder.push_record([
        String::new(),
        String::new(),
        String::new(),
        "Total Weight:".to_string(),
        format!("{} kg", bom.total_weight),
    ]);

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}
