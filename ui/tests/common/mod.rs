//! Shared harness for the UI integration tests.
//!
//! Each [`TestCtx`] owns a mock backend serving `/shipments` and an
//! [`egui_kittest::Harness`] running the full app against it.

use std::time::Duration;

use egui_kittest::Harness;
use shipview_business::Shipment;
use shipview_ui::ShipviewApp;
use shipview_ui::state::State;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(unused)]
pub const DEFAULT_NETWORK_WAIT_MS: u64 = 50;

const MAX_SETTLE_ROUNDS: usize = 100;

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, ShipviewApp>,
}

impl<'a> TestCtx<'a> {
    /// App against a backend that answers every list request with `records`.
    pub async fn new_app(records: Vec<Shipment>, total: u64) -> Self {
        let mock_server = MockServer::start().await;
        mount_list(&mock_server, records, total).await;
        Self::with_server(mock_server)
    }

    /// App against a backend whose list endpoint fails with `status_code`.
    #[allow(unused)]
    pub async fn new_app_with_status(status_code: u16) -> Self {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shipments"))
            .respond_with(ResponseTemplate::new(status_code))
            .mount(&mock_server)
            .await;
        Self::with_server(mock_server)
    }

    /// App against a server the caller has already mounted mocks on.
    pub fn with_server(mock_server: MockServer) -> Self {
        let state = State::test(mock_server.uri());
        let app = ShipviewApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, ShipviewApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, ShipviewApp> {
        &self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Step frames until no command is queued or running.
    ///
    /// # Panics
    /// Panics when commands are still busy after a hundred rounds.
    pub async fn settle(&mut self) {
        for _ in 0..MAX_SETTLE_ROUNDS {
            self.harness.step();
            let ctx = &self.harness.state().state.ctx;
            if ctx.task_count() == 0 && ctx.queued_commands() == 0 {
                self.harness.step();
                return;
            }
            yield_wait_for_network(DEFAULT_NETWORK_WAIT_MS).await;
        }
        panic!("commands still running after {MAX_SETTLE_ROUNDS} rounds");
    }

    /// Query strings of every list request the backend has seen.
    #[allow(unused)]
    pub async fn list_queries(&self) -> Vec<String> {
        self.mock_server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path() == "/shipments")
            .map(|request| request.url.query().unwrap_or_default().to_owned())
            .collect()
    }
}

/// `GET /shipments` answers `records` with `X-Total-Count: total`.
pub async fn mount_list(mock_server: &MockServer, records: Vec<Shipment>, total: u64) {
    Mock::given(method("GET"))
        .and(path("/shipments"))
        .respond_with(list_response(records, total))
        .mount(mock_server)
        .await;
}

/// Like [`mount_list`] but only for requests carrying `key=value`, and
/// preferred over catch-all mocks.
#[allow(unused)]
pub async fn mount_list_for(
    mock_server: &MockServer,
    key: &str,
    value: &str,
    records: Vec<Shipment>,
    total: u64,
) {
    Mock::given(method("GET"))
        .and(path("/shipments"))
        .and(query_param(key, value))
        .respond_with(list_response(records, total))
        .with_priority(1)
        .mount(mock_server)
        .await;
}

fn list_response(records: Vec<Shipment>, total: u64) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("X-Total-Count", total.to_string().as_str())
        .set_body_json(records)
}

pub fn shipment(id: &str, name: &str) -> Shipment {
    Shipment {
        id: id.to_owned(),
        mode: "sea".to_owned(),
        name: name.to_owned(),
        origin: "Shanghai Port".to_owned(),
        status: "ACTIVE".to_owned(),
        total: "1000".to_owned(),
        kind: "FCL".to_owned(),
        user_id: "U1000".to_owned(),
    }
}

/// Page of `count` shipments numbered from `first`.
#[allow(unused)]
pub fn shipments(first: u32, count: u32) -> Vec<Shipment> {
    (first..first + count)
        .map(|n| shipment(&format!("S{n}"), &format!("Cargo {n}")))
        .collect()
}

pub async fn yield_wait_for_network(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
