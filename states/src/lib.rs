//! State container for shipview.
//!
//! UI code owns a [`StateCtx`], reads states from it every frame, and enqueues
//! [`Command`]s for anything that needs IO. Commands run asynchronously and
//! report back through updaters; [`StateCtx::sync_computes`] applies the
//! results on the UI thread.

mod basic_state;
mod command;
mod ctx;
mod error;
mod runtime;
mod snapshot;
mod state;
mod task;

pub use basic_state::Time;
pub use command::{Command, CommandFuture};
pub use ctx::StateCtx;
pub use error::Error;
pub use runtime::{LatestOnlyUpdater, StateRuntime, StateUpdate, Updater};
pub use snapshot::CommandSnapshot;
pub use state::{State, state_assign_impl};
pub use task::{TaskHandle, TaskId};
