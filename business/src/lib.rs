//! Business layer for shipview: backend config, HTTP helper, record model,
//! list queries, pagination and the records fetch cycle.

mod config;
pub mod http;
pub mod pagination;
pub mod query;
pub mod records;
mod service;
mod shipment;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_utils;

pub use config::{BusinessConfig, DEFAULT_API_BASE_URL, DEFAULT_RESOURCE};
pub use pagination::{PageItem, Pagination};
pub use query::{ListQuery, Sort, SortColumn, SortOrder};
pub use records::{
    DEFAULT_LIMIT, FALLBACK_ERROR_MESSAGE, FetchRecordsCommand, LIMIT_OPTIONS, RecordsApiError,
    RecordsList, RecordsPage, RecordsView, RenderMode,
};
pub use service::service;
pub use shipment::Shipment;

use shipview_states::{StateCtx, Time};

/// Register every state the records widget needs.
pub fn register_records_states(ctx: &mut StateCtx, config: BusinessConfig) {
    ctx.add_state(Time::default());
    ctx.add_state(config);
    ctx.add_state(RecordsView::default());
    ctx.add_state(RecordsList::default());
}
