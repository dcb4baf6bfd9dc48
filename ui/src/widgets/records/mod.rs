//! Records table widget.
//!
//! - `columns`: column widths and row heights
//! - `header`: sortable header row
//! - `row` / `cells`: one record per row
//! - `panel`: controls, body and pagination wired to [`StateCtx`](shipview_states::StateCtx)

mod cells;
pub mod columns;
pub mod header;
mod panel;
pub mod row;

use egui::{Align, Frame, Layout, Margin, Stroke, Ui};
use egui_extras::TableBuilder;
use shipview_business::{Shipment, Sort, SortColumn};

use crate::utils::colors::TABLE_BORDER_COLOR;
use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_record_row;

pub use panel::{RecordsEvent, records_panel};

/// Renders `records` as a striped table. Returns the header the user clicked.
pub fn records_table(ui: &mut Ui, records: &[Shipment], sort: Option<Sort>) -> Option<SortColumn> {
    let mut clicked = None;

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::same(4))
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .id_salt("records_table")
                .striped(true)
                .vscroll(false)
                .cell_layout(Layout::left_to_right(Align::Center));
            for column in table_columns() {
                builder = builder.column(column);
            }

            builder
                .header(HEADER_HEIGHT, |mut header| {
                    clicked = render_table_header(&mut header, sort);
                })
                .body(|mut body| {
                    for record in records {
                        body.row(ROW_HEIGHT, |mut row| {
                            render_record_row(&mut row, record);
                        });
                    }
                });
        });

    clicked
}
