//! Records listing: API client, view/list states and the fetch command.
//!
//! UI reads [`RecordsView`] and [`RecordsList`], mutates the view, and
//! enqueues [`FetchRecordsCommand`] whenever the view asks for a fetch.

pub mod api;
mod command;
mod state;

pub use api::{RecordsApiError, RecordsPage, TOTAL_COUNT_HEADER, list_records};
pub use command::FetchRecordsCommand;
pub use state::{
    DEFAULT_LIMIT, FALLBACK_ERROR_MESSAGE, LIMIT_OPTIONS, RecordsList, RecordsView, RenderMode,
};
