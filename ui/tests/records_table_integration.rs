//! The records widget renders table, empty and error bodies from the backend.

mod common;

use crate::common::{TestCtx, shipment, shipments};
use kittest::Queryable;
use shipview_business::{FALLBACK_ERROR_MESSAGE, RecordsList, RenderMode};
use shipview_ui::widgets::{EMPTY_LABEL, LOADING_LABEL};

#[tokio::test]
async fn test_first_frame_shows_loading() {
    let mut ctx = TestCtx::new_app(shipments(1, 5), 5).await;
    let harness = ctx.harness_mut();

    harness.step();

    assert!(
        harness.query_by_label(LOADING_LABEL).is_some(),
        "Spinner label should show before the first fetch lands"
    );
}

#[tokio::test]
async fn test_records_rendered_in_table() {
    let mut ctx = TestCtx::new_app(
        vec![shipment("S1000", "Kitchen chairs"), shipment("S1001", "Garden hoses")],
        2,
    )
    .await;
    ctx.settle().await;
    let harness = ctx.harness_mut();

    for header in ["ID", "Mode", "Name", "Origin", "Status", "Total", "Type", "User ID"] {
        assert!(
            harness.query_by_label(header).is_some(),
            "Header {header} should be rendered"
        );
    }
    assert!(harness.query_by_label("Kitchen chairs").is_some());
    assert!(harness.query_by_label("Garden hoses").is_some());
    assert!(harness.query_by_label("S1001").is_some());
    assert!(harness.query_by_label(LOADING_LABEL).is_none());
    assert!(harness.query_by_label(EMPTY_LABEL).is_none());

    let list = harness.state().state.ctx.state::<RecordsList>();
    assert_eq!(list.render_mode(), RenderMode::Table);
    assert_eq!(list.total_records, 2);
}

#[tokio::test]
async fn test_empty_result_shows_no_record_found() {
    let mut ctx = TestCtx::new_app(Vec::new(), 0).await;
    ctx.settle().await;
    let harness = ctx.harness_mut();

    assert!(harness.query_by_label(EMPTY_LABEL).is_some());
    // Nothing to page through.
    assert!(harness.query_by_label("next").is_none());
    assert!(harness.query_by_label("previous").is_none());
}

#[tokio::test]
async fn test_server_error_shows_banner() {
    let mut ctx = TestCtx::new_app_with_status(500).await;
    ctx.settle().await;
    let harness = ctx.harness_mut();

    assert!(
        harness
            .query_by_label("API returned status: 500")
            .is_some(),
        "Status error should be shown in the banner"
    );
    assert!(harness.query_by_label(EMPTY_LABEL).is_some());
}

#[tokio::test]
async fn test_unmatched_route_reports_status() {
    // Nothing mounted: the mock server answers 404.
    let mut ctx = TestCtx::with_server(wiremock::MockServer::start().await);
    ctx.settle().await;
    let harness = ctx.harness_mut();

    let list = harness.state().state.ctx.state::<RecordsList>();
    assert_eq!(list.error_message(), Some("API returned status: 404"));
    assert_ne!(list.error_message(), Some(FALLBACK_ERROR_MESSAGE));
    assert!(harness.query_by_label("API returned status: 404").is_some());
}
