//! List endpoint client.
//!
//! Network IO only; mapping results into state happens in the command.

use log::warn;
use thiserror::Error;

use crate::BusinessConfig;
use crate::http::{Method, Response};
use crate::query::ListQuery;
use crate::service::service;
use crate::shipment::Shipment;

/// Header carrying the unpaginated record count.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordsApiError {
    #[error("{0}")]
    Transport(String),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("Failed to parse records: {0}")]
    Parse(String),
}

pub type ApiResult<T> = Result<T, RecordsApiError>;

/// One page of records plus the backend's total count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordsPage {
    pub records: Vec<Shipment>,
    pub total: u64,
}

/// GET `/{resource}?_page=..&_limit=..&q=..[&_sort=..&_order=..]`
pub async fn list_records(config: &BusinessConfig, query: &ListQuery) -> ApiResult<RecordsPage> {
    let path = query.path(config.resource.as_str());

    let response = service(config, &path, Method::Get)
        .send()
        .await
        .map_err(|e| RecordsApiError::Transport(e.message))?;

    if !response.is_success() {
        return Err(RecordsApiError::Status(response.status));
    }

    let records: Vec<Shipment> = response
        .json()
        .map_err(|e| RecordsApiError::Parse(e.to_string()))?;
    let total = total_count(&response, query, records.len());

    Ok(RecordsPage { records, total })
}

/// Total from [`TOTAL_COUNT_HEADER`].
///
/// Without a usable header, assume every earlier page was full. A short page
/// is the last one; a full page may have more behind it, so one extra record
/// is counted to keep `next` reachable.
fn total_count(response: &Response, query: &ListQuery, received: usize) -> u64 {
    if let Some(total) = response
        .header(TOTAL_COUNT_HEADER)
        .and_then(|value| value.trim().parse::<u64>().ok())
    {
        return total;
    }

    let limit = u64::from(query.limit.max(1));
    let earlier = u64::from(query.page.max(1) - 1) * limit;
    let received = received as u64;
    let total = earlier + received + u64::from(received >= limit);
    warn!("Missing or invalid {TOTAL_COUNT_HEADER} header, assuming {total} records");
    total
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::Pagination;

    fn response_with(headers: &[(&str, &str)]) -> Response {
        Response {
            status: 200,
            headers: headers
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect::<HashMap<_, _>>(),
            body: Vec::new(),
        }
    }

    #[test]
    fn total_from_header() {
        let response = response_with(&[("x-total-count", "42")]);
        assert_eq!(total_count(&response, &ListQuery::default(), 5), 42);
    }

    #[test]
    fn total_falls_back_to_received_records() {
        let query = ListQuery {
            page: 3,
            limit: 10,
            ..ListQuery::default()
        };

        let missing = response_with(&[]);
        assert_eq!(total_count(&missing, &query, 4), 24);

        let garbage = response_with(&[("x-total-count", "NaN")]);
        assert_eq!(total_count(&garbage, &query, 0), 20);
    }

    #[test]
    fn full_page_without_total_keeps_next_page_reachable() {
        let query = ListQuery {
            page: 3,
            limit: 10,
            ..ListQuery::default()
        };

        let total = total_count(&response_with(&[]), &query, 10);
        assert_eq!(total, 31);

        let pagination = Pagination::new(total, query.limit, query.page);
        assert_eq!(pagination.page_count(), 4);
        assert_eq!(pagination.next(), Some(4));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            RecordsApiError::Status(503).to_string(),
            "API returned status: 503"
        );
        assert_eq!(
            RecordsApiError::Transport("connection refused".to_owned()).to_string(),
            "connection refused"
        );
    }
}
