//! Row rendering for the records table.

use egui_extras::TableRow;
use shipview_business::Shipment;

use super::cells::{render_id_cell, render_status_cell, render_text_cell};

/// Renders one record, cells in [`SortColumn::ALL`](shipview_business::SortColumn::ALL)
/// order.
#[inline]
pub fn render_record_row(row: &mut TableRow<'_, '_>, record: &Shipment) {
    row.col(|ui| render_id_cell(ui, &record.id));
    row.col(|ui| render_text_cell(ui, &record.mode));
    row.col(|ui| render_text_cell(ui, &record.name));
    row.col(|ui| render_text_cell(ui, &record.origin));
    row.col(|ui| render_status_cell(ui, &record.status));
    row.col(|ui| render_text_cell(ui, &record.total));
    row.col(|ui| render_text_cell(ui, &record.kind));
    row.col(|ui| render_id_cell(ui, &record.user_id));
}
