//! Request helper bound to the configured backend.

use crate::BusinessConfig;
use crate::http::{Client, Method, RequestBuilder};

/// Prepare a JSON request for `{api_base_url}/{path}`.
///
/// `path` may carry a query string. Callers can still override or add
/// headers on the returned builder.
pub fn service(config: &BusinessConfig, path: &str, method: Method) -> RequestBuilder {
    let url = format!(
        "{}/{}",
        config.api_base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Client::request(method, url).header("content-type", "application/json")
}
