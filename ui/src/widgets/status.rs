//! Non-table bodies: loading, empty and the error banner.

use egui::{Frame, Margin, RichText, Ui};

use crate::utils::colors::{COLOR_RED, COLOR_RED_BG};

pub const LOADING_LABEL: &str = "Loading...";
pub const EMPTY_LABEL: &str = "No record found";

pub fn loading_indicator(ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label(LOADING_LABEL);
    });
}

pub fn empty_state(ui: &mut Ui) {
    ui.heading(EMPTY_LABEL);
}

pub fn error_banner(ui: &mut Ui, message: &str) {
    Frame::NONE
        .fill(COLOR_RED_BG)
        .inner_margin(Margin::symmetric(8, 6))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.label(RichText::new(message).color(COLOR_RED));
        });
}
