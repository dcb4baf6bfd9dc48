//! Search box and page-size selector above the table.

use egui::{ComboBox, Key, TextEdit, Ui};
use shipview_business::{LIMIT_OPTIONS, RecordsView};

pub const SEARCH_HINT: &str = "Search";

const SEARCH_WIDTH: f32 = 220.0;

/// Renders the controls row. Returns `true` when the view changed in a way
/// that needs a fetch (Enter in the search box, a new page size).
///
/// Typing alone only edits `search_input`; nothing is fetched until Enter.
pub fn records_controls(ui: &mut Ui, view: &mut RecordsView) -> bool {
    let mut fetch = false;

    ui.horizontal(|ui| {
        let search = ui.add(
            TextEdit::singleline(&mut view.search_input)
                .hint_text(SEARCH_HINT)
                .desired_width(SEARCH_WIDTH),
        );
        if search.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            fetch |= view.submit_search();
        }

        let mut limit = view.limit;
        ComboBox::from_id_salt("records_limit")
            .selected_text(limit.to_string())
            .width(48.0)
            .show_ui(ui, |ui| {
                for option in LIMIT_OPTIONS {
                    ui.selectable_value(&mut limit, option, option.to_string());
                }
            })
            .response
            .on_hover_text("Pagination limit");
        if limit != view.limit {
            fetch |= view.set_limit(limit);
        }
    });

    fetch
}
