//! Cell rendering for the records table.

use egui::{Color32, RichText, Ui};

use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN};

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}

/// Identifiers in monospace so columns of ids line up.
#[inline]
pub fn render_id_cell(ui: &mut Ui, id: &str) {
    ui.label(RichText::new(id).monospace());
}

#[inline]
pub fn render_status_cell(ui: &mut Ui, status: &str) {
    let text = RichText::new(status);
    ui.label(match status_color(status) {
        Some(color) => text.color(color),
        None => text,
    });
}

/// Highlight for known statuses; others use the theme's text color.
fn status_color(status: &str) -> Option<Color32> {
    if status.eq_ignore_ascii_case("active") {
        Some(COLOR_GREEN)
    } else if status.eq_ignore_ascii_case("new") {
        Some(COLOR_AMBER)
    } else {
        None
    }
}
