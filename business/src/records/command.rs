//! Fetch cycle for the records table.

use log::{error, info};
use shipview_states::{Command, CommandFuture, CommandSnapshot, LatestOnlyUpdater, Time};
use tokio_util::sync::CancellationToken;

use super::api::list_records;
use super::state::{RecordsList, RecordsView};
use crate::BusinessConfig;

/// Fetches the page described by [`RecordsView`] into [`RecordsList`].
///
/// Enqueue it with `ctx.enqueue_command::<FetchRecordsCommand>()` after any
/// view change. A newer dispatch cancels an older one still in flight, and
/// results of the older one are dropped.
#[derive(Default, Debug)]
pub struct FetchRecordsCommand;

impl Command for FetchRecordsCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let config = snap.state::<BusinessConfig>().clone();
        let query = snap.state::<RecordsView>().list_query();
        let previous = snap.state::<RecordsList>().clone();
        let now = *snap.state::<Time>().as_ref();

        Box::pin(async move {
            updater.set(previous.clone().loading());

            info!(
                "Fetching {} page {} (limit {}, q {:?})",
                config.resource, query.page, query.limit, query.q
            );
            match list_records(&config, &query).await {
                Ok(page) => {
                    info!(
                        "Fetched {} of {} {}",
                        page.records.len(),
                        page.total,
                        config.resource
                    );
                    updater.set(RecordsList::loaded(page.records, page.total, now));
                }
                Err(err) => {
                    error!("Fetching {} failed: {err}", config.resource);
                    updater.set(previous.failed(err.to_string()));
                }
            }
        })
    }
}
