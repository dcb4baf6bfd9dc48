//! States behind the records table.
//!
//! [`RecordsView`] is what the user controls (page, page size, search, sort)
//! and is only written by the UI. [`RecordsList`] is what the backend
//! returned and is only written by `FetchRecordsCommand`.

use std::any::Any;

use chrono::{DateTime, Utc};
use shipview_states::{State, state_assign_impl};

use crate::query::{ListQuery, Sort, SortColumn};
use crate::shipment::Shipment;

/// Page sizes offered by the limit selector.
pub const LIMIT_OPTIONS: [u32; 2] = [5, 10];

pub const DEFAULT_LIMIT: u32 = LIMIT_OPTIONS[0];

/// Shown when a failure carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong, try again later";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordsView {
    /// 1-based.
    pub page: u32,
    pub limit: u32,
    /// Text currently in the search box.
    pub search_input: String,
    /// Search term of the last submitted search.
    pub query: String,
    pub sort: Option<Sort>,
}

impl Default for RecordsView {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
            search_input: String::new(),
            query: String::new(),
            sort: None,
        }
    }
}

impl RecordsView {
    /// Returns `true` when the page changed and a fetch is due.
    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        if page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Returns `true` when the limit changed. Resets to the first page.
    pub fn set_limit(&mut self, limit: u32) -> bool {
        let limit = limit.max(1);
        if limit == self.limit {
            return false;
        }
        self.limit = limit;
        self.page = 1;
        true
    }

    /// Commit the search box. Always warrants a fetch, even for an unchanged
    /// term, so Enter doubles as a refresh.
    pub fn submit_search(&mut self) -> bool {
        self.query.clone_from(&self.search_input);
        self.page = 1;
        true
    }

    /// Click on a column header.
    pub fn toggle_sort(&mut self, column: SortColumn) -> bool {
        self.sort = Some(Sort::toggled(self.sort, column));
        self.page = 1;
        true
    }

    pub fn list_query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            limit: self.limit,
            q: self.query.clone(),
            sort: self.sort,
        }
    }
}

impl State for RecordsView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// What the body of the widget shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Loading,
    Table,
    Empty,
}

/// Latest fetch outcome.
///
/// A failed fetch keeps the previous records and total so the table does not
/// blank out under the error banner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordsList {
    pub records: Vec<Shipment>,
    pub total_records: u64,
    pub is_loading: bool,
    pub error: Option<String>,
    pub last_fetch: Option<DateTime<Utc>>,
}

impl RecordsList {
    pub fn loading(mut self) -> Self {
        self.is_loading = true;
        self
    }

    pub fn loaded(records: Vec<Shipment>, total_records: u64, now: DateTime<Utc>) -> Self {
        Self {
            records,
            total_records,
            is_loading: false,
            error: None,
            last_fetch: Some(now),
        }
    }

    pub fn failed(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.is_loading = false;
        self.error = Some(if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_owned()
        } else {
            message
        });
        self
    }

    pub fn render_mode(&self) -> RenderMode {
        if self.is_loading {
            RenderMode::Loading
        } else if self.records.is_empty() {
            RenderMode::Empty
        } else {
            RenderMode::Table
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl State for RecordsList {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
