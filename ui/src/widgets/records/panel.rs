//! The records widget: controls, error banner, body and pagination.

use egui::{Response, Ui};
use log::debug;
use shipview_business::{
    FetchRecordsCommand, Pagination, RecordsList, RecordsView, RenderMode, SortColumn,
};
use shipview_states::StateCtx;

use super::records_table;
use crate::widgets::controls::records_controls;
use crate::widgets::pagination::pagination_control;
use crate::widgets::status::{empty_state, error_banner, loading_indicator};

/// User interaction collected while the states are borrowed for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordsEvent {
    SortBy(SortColumn),
    GoToPage(u32),
}

impl RecordsEvent {
    /// Returns `true` when the view changed and a fetch is due.
    pub fn apply(self, view: &mut RecordsView) -> bool {
        match self {
            Self::SortBy(column) => view.toggle_sort(column),
            Self::GoToPage(page) => view.set_page(page),
        }
    }
}

/// Displays the records widget and queues a fetch when the view changes.
pub fn records_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        let mut fetch = records_controls(ui, state_ctx.state_mut::<RecordsView>());
        ui.add_space(8.0);

        let event = records_body(
            ui,
            state_ctx.state::<RecordsList>(),
            state_ctx.state::<RecordsView>(),
        );

        if let Some(event) = event {
            debug!("records event: {event:?}");
            fetch |= event.apply(state_ctx.state_mut::<RecordsView>());
        }

        if fetch {
            state_ctx.enqueue_command::<FetchRecordsCommand>();
        }
    })
    .response
}

fn records_body(ui: &mut Ui, list: &RecordsList, view: &RecordsView) -> Option<RecordsEvent> {
    let mut event = None;

    if let Some(message) = list.error_message() {
        error_banner(ui, message);
        ui.add_space(8.0);
    }

    match list.render_mode() {
        RenderMode::Loading => loading_indicator(ui),
        RenderMode::Empty => empty_state(ui),
        RenderMode::Table => {
            event = records_table(ui, &list.records, view.sort).map(RecordsEvent::SortBy);
        }
    }

    let pagination = Pagination::new(list.total_records, view.limit, view.page);
    if pagination.is_visible() {
        ui.add_space(8.0);
        if let Some(page) = pagination_control(ui, &pagination) {
            event = Some(RecordsEvent::GoToPage(page));
        }
    }

    event
}
