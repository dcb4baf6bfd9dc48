use std::any::Any;

use log::info;
use serde::Deserialize;
use shipview_states::{State, state_assign_impl};
use ustr::Ustr;

/// Backend served by `json-server` during development.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Collection listed by the records table.
pub const DEFAULT_RESOURCE: &str = "shipments";

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    /// Origin of the REST backend, without a trailing `/`.
    ///
    /// Empty on the web build: requests go to the page's own origin.
    pub api_base_url: String,
    /// Path segment of the listed collection.
    pub resource: Ustr,
}

/// Environment overrides, read with `serde-env`
/// (`SHIPVIEW_API_BASE_URL`, `SHIPVIEW_RESOURCE`).
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    shipview_api_base_url: Option<String>,
    shipview_resource: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url.trim_end_matches('/').to_owned(),
            resource: Ustr::from(DEFAULT_RESOURCE),
        }
    }

    pub fn with_resource(mut self, resource: &str) -> Self {
        self.resource = Ustr::from(resource.trim_matches('/'));
        self
    }

    /// Defaults overridden by whatever the process environment sets.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let raw: RawConfig = match serde_env::from_iter(vars) {
            Ok(raw) => raw,
            Err(err) => {
                info!("Ignoring malformed shipview environment: {err}");
                RawConfig::default()
            }
        };

        let mut config = Self::default();
        if let Some(base_url) = raw.shipview_api_base_url {
            info!("Using SHIPVIEW_API_BASE_URL: {base_url}");
            config = Self::new(base_url).with_resource(config.resource.as_str());
        }
        if let Some(resource) = raw.shipview_resource {
            info!("Using SHIPVIEW_RESOURCE: {resource}");
            config = config.with_resource(&resource);
        }
        config
    }

    /// URL of the listed collection, e.g. `http://localhost:3000/shipments`.
    pub fn resource_url(&self) -> String {
        format!("{}/{}", self.api_base_url, self.resource)
    }
}

/// On the web the base is empty: requests go to the page origin, see
/// [`crate::http::page_origin`].
impl Default for BusinessConfig {
    fn default() -> Self {
        let base_url = if cfg!(target_arch = "wasm32") {
            ""
        } else {
            DEFAULT_API_BASE_URL
        };
        Self::new(base_url.to_owned())
    }
}

impl State for BusinessConfig {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_default_urls() {
        let config = BusinessConfig::default();

        if cfg!(target_arch = "wasm32") {
            assert_eq!(config.api_base_url, "");
            assert_eq!(config.resource_url(), "/shipments");
        } else {
            assert_eq!(config.api_base_url, "http://localhost:3000");
            assert_eq!(config.resource_url(), "http://localhost:3000/shipments");
        }
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = BusinessConfig::new("http://example.com/".to_owned());
        assert_eq!(config.resource_url(), "http://example.com/shipments");
    }

    #[test]
    fn test_env_overrides() {
        let config = BusinessConfig::from_vars(vars(&[
            ("SHIPVIEW_API_BASE_URL", "http://records.internal:8080"),
            ("SHIPVIEW_RESOURCE", "/orders/"),
            ("UNRELATED", "1"),
        ]));

        assert_eq!(config.api_base_url, "http://records.internal:8080");
        assert_eq!(config.resource, Ustr::from("orders"));
    }

    #[test]
    fn test_env_without_overrides_keeps_defaults() {
        let config = BusinessConfig::from_vars(vars(&[("PATH", "/usr/bin")]));
        let default = BusinessConfig::default();

        assert_eq!(config.api_base_url, default.api_base_url);
        assert_eq!(config.resource, default.resource);
    }
}
