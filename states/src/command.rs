use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, LatestOnlyUpdater};

/// Future returned by [`Command::run`].
///
/// It is `Send` on every target; on wasm32 the HTTP layer keeps JS values on
/// the JS thread and only moves plain data across.
pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// An explicitly dispatched side effect (network IO, timers).
///
/// Commands are enqueued with `StateCtx::enqueue_command`, spawned on
/// `StateCtx::flush_commands`, read inputs from the snapshot and publish
/// results through the updater.
pub trait Command: Default + Send + Sync + 'static {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> CommandFuture;
}
