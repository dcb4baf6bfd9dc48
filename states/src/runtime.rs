//! Channel plumbing between async commands and the UI thread.
//!
//! Commands run off the UI thread (a Tokio task natively, a JS microtask on
//! the web) and can't borrow `StateCtx`. They send boxed replacement values
//! through a `flume` channel instead; `StateCtx::sync_computes` drains it.
//! An optional waker (typically `egui::Context::request_repaint`) is called
//! after every send so an idle UI wakes up to apply the result.

use std::any::{Any, TypeId, type_name};
use std::fmt::Debug;
use std::sync::{Arc, OnceLock};

use flume::{Receiver, Sender};
use log::debug;

use crate::{State, TaskId};

/// A replacement value for one state, produced off the UI thread.
pub struct StateUpdate {
    pub(crate) origin: Option<TaskId>,
    pub(crate) target: TypeId,
    pub(crate) target_name: &'static str,
    pub(crate) value: Box<dyn Any + Send>,
}

impl StateUpdate {
    fn new<T: State>(origin: Option<TaskId>, value: T) -> Self {
        Self {
            origin,
            target: TypeId::of::<T>(),
            target_name: type_name::<T>(),
            value: Box::new(value),
        }
    }
}

impl Debug for StateUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateUpdate")
            .field("origin", &self.origin)
            .field("target", &self.target_name)
            .finish()
    }
}

type Waker = Box<dyn Fn() + Send + Sync>;

#[derive(Clone, Default)]
struct SharedWaker(Arc<OnceLock<Waker>>);

impl SharedWaker {
    fn wake(&self) {
        if let Some(waker) = self.0.get() {
            waker();
        }
    }
}

impl Debug for SharedWaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.0.get().is_some() {
            "SharedWaker(installed)"
        } else {
            "SharedWaker(none)"
        })
    }
}

#[derive(Debug)]
pub struct StateRuntime {
    send: Sender<StateUpdate>,
    recv: Receiver<StateUpdate>,
    waker: SharedWaker,
}

impl Default for StateRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRuntime {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            send,
            recv,
            waker: SharedWaker::default(),
        }
    }

    /// Install the waker. Only the first call wins; returns whether this one
    /// did.
    pub fn install_waker(&self, waker: impl Fn() + Send + Sync + 'static) -> bool {
        self.waker.0.set(Box::new(waker)).is_ok()
    }

    pub fn has_waker(&self) -> bool {
        self.waker.0.get().is_some()
    }

    pub fn updater(&self) -> Updater {
        Updater {
            send: self.send.clone(),
            waker: self.waker.clone(),
        }
    }

    pub(crate) fn latest_only_updater(&self, task_id: TaskId) -> LatestOnlyUpdater {
        LatestOnlyUpdater {
            task_id,
            send: self.send.clone(),
            waker: self.waker.clone(),
        }
    }

    pub(crate) fn drain(&self) -> impl Iterator<Item = StateUpdate> + '_ {
        self.recv.try_iter()
    }
}

/// Unconditional writer: every value it sends is applied.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<StateUpdate>,
    waker: SharedWaker,
}

impl Updater {
    pub fn set<T: State>(&self, state: T) {
        if self.send.send(StateUpdate::new(None, state)).is_err() {
            debug!("State context dropped, discarding {}", type_name::<T>());
            return;
        }
        self.waker.wake();
    }
}

/// Writer bound to one command task.
///
/// Values are tagged with the task's [`TaskId`]; once a newer task of the
/// same command has been spawned they are discarded instead of applied.
#[derive(Debug, Clone)]
pub struct LatestOnlyUpdater {
    task_id: TaskId,
    send: Sender<StateUpdate>,
    waker: SharedWaker,
}

impl LatestOnlyUpdater {
    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn set<T: State>(&self, state: T) {
        if self
            .send
            .send(StateUpdate::new(Some(self.task_id), state))
            .is_err()
        {
            debug!("State context dropped, discarding {}", type_name::<T>());
            return;
        }
        self.waker.wake();
    }
}
