//! Mock-server harness for the business layer.
//!
//! ```ignore
//! let mut test_ctx = TestContext::new().await;
//! test_ctx.mock_list(vec![sample_shipment("S1000")], 1).await;
//!
//! test_ctx.ctx.enqueue_command::<FetchRecordsCommand>();
//! test_ctx.flush_and_wait().await;
//!
//! assert_eq!(test_ctx.ctx.state::<RecordsList>().records.len(), 1);
//! ```

use std::time::Duration;

use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use crate::{BusinessConfig, Shipment, register_records_states};
use shipview_states::StateCtx;

pub struct TestContext {
    pub mock_server: MockServer,
    pub ctx: StateCtx,
}

impl TestContext {
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let mut ctx = StateCtx::new();
        register_records_states(&mut ctx, BusinessConfig::new(mock_server.uri()));

        Self { mock_server, ctx }
    }

    /// Spawn queued commands and apply everything they send.
    ///
    /// # Panics
    /// Panics if tasks are still running after five seconds.
    pub async fn flush_and_wait(&mut self) {
        self.ctx.sync_computes();
        self.ctx.flush_commands();

        let timeout = Duration::from_secs(5);
        let start = std::time::Instant::now();

        while self.ctx.task_count() > 0 {
            assert!(
                start.elapsed() <= timeout,
                "Timed out waiting for {} pending tasks",
                self.ctx.task_count()
            );
            if self.ctx.task_set_mut().join_next().await.is_some() {
                self.ctx.sync_computes();
            }
        }

        self.ctx.sync_computes();
    }

    /// `GET /shipments` answers `records` with `X-Total-Count: total`.
    pub async fn mock_list(&self, records: Vec<Shipment>, total: u64) {
        Mock::given(method("GET"))
            .and(path("/shipments"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-Total-Count", total.to_string().as_str())
                    .set_body_json(records),
            )
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_list_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/shipments"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.mock_server)
            .await;
    }
}

pub fn sample_shipment(id: &str) -> Shipment {
    Shipment {
        id: id.to_owned(),
        mode: "sea".to_owned(),
        name: format!("Shipment {id}"),
        origin: "Shanghai Port".to_owned(),
        status: "ACTIVE".to_owned(),
        total: "1000".to_owned(),
        kind: "FCL".to_owned(),
        user_id: "U1000".to_owned(),
    }
}
