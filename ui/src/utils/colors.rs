//! Shared color constants for the UI.

use egui::Color32;

/// Error banner text.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Error banner background.
pub const COLOR_RED_BG: Color32 = Color32::from_rgb(253, 236, 238);

/// Status cell for active records.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Status cell for records still pending.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Table border, a subtle gray.
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);
