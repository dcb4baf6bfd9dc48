//! Page links under the table.

use egui::{Button, Ui};
use shipview_business::pagination::{BREAK_LABEL, NEXT_LABEL, PREVIOUS_LABEL};
use shipview_business::{PageItem, Pagination};

/// Renders `previous`, the page links and `next`.
///
/// Returns the page the user picked; clicking the current page is not a
/// change and returns `None`.
pub fn pagination_control(ui: &mut Ui, pagination: &Pagination) -> Option<u32> {
    let current = pagination.current();
    let mut target = None;

    ui.horizontal(|ui| {
        let previous = pagination.previous();
        if ui
            .add_enabled(previous.is_some(), Button::new(PREVIOUS_LABEL))
            .clicked()
        {
            target = previous;
        }

        for item in pagination.items() {
            match item {
                PageItem::Page(page) => {
                    if ui
                        .selectable_label(page == current, page.to_string())
                        .clicked()
                        && page != current
                    {
                        target = Some(page);
                    }
                }
                PageItem::Break => {
                    ui.label(BREAK_LABEL);
                }
            }
        }

        let next = pagination.next();
        if ui
            .add_enabled(next.is_some(), Button::new(NEXT_LABEL))
            .clicked()
        {
            target = next;
        }
    });

    target
}
