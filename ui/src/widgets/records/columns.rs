//! Column definitions for the records table.

use egui_extras::Column;

pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// One column per [`SortColumn::ALL`](shipview_business::SortColumn::ALL)
/// entry, same order. Name takes whatever width is left.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(70.0),                   // ID
        Column::exact(60.0),                   // Mode
        Column::remainder().at_least(160.0),   // Name
        Column::initial(140.0).at_least(80.0), // Origin
        Column::exact(90.0),                   // Status
        Column::exact(70.0),                   // Total
        Column::exact(60.0),                   // Type
        Column::exact(80.0),                   // User ID
    ]
}
