mod controls;
mod pagination;
pub mod records;
mod status;

pub use controls::{SEARCH_HINT, records_controls};
pub use pagination::pagination_control;
pub use records::{RecordsEvent, records_panel, records_table};
pub use status::{EMPTY_LABEL, LOADING_LABEL, empty_state, error_banner, loading_indicator};
