//! Clickable, sort-aware header row.

use egui::{Button, RichText, Ui};
use egui_extras::TableRow;
use shipview_business::{Sort, SortColumn, SortOrder};

/// Header text for `column`, with an arrow when it is the active sort.
pub fn header_label(column: SortColumn, sort: Option<Sort>) -> String {
    match sort {
        Some(sort) if sort.column == column => {
            let arrow = match sort.order {
                SortOrder::Asc => "▲",
                SortOrder::Desc => "▼",
            };
            format!("{} {arrow}", column.label())
        }
        _ => column.label().to_owned(),
    }
}

/// Renders the header. Returns the column whose header was clicked.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>, sort: Option<Sort>) -> Option<SortColumn> {
    let mut clicked = None;
    for column in SortColumn::ALL {
        header.col(|ui| {
            if render_header_cell(ui, &header_label(column, sort)) {
                clicked = Some(column);
            }
        });
    }
    clicked
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) -> bool {
    ui.add(Button::new(RichText::new(label).strong()).frame(false))
        .on_hover_text("Sort")
        .clicked()
}
