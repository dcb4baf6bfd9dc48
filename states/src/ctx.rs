use std::any::{TypeId, type_name};
use std::collections::BTreeMap;
use std::future::Future;

use log::{debug, error, warn};
use tokio_util::sync::CancellationToken;

use crate::{
    Command, CommandFuture, CommandSnapshot, Error, LatestOnlyUpdater, State, StateRuntime,
    TaskHandle, TaskId, Updater,
};

type RunFn = Box<dyn FnOnce(CommandSnapshot, LatestOnlyUpdater, CancellationToken) -> CommandFuture + Send>;

struct QueuedCommand {
    type_id: TypeId,
    name: &'static str,
    run: RunFn,
}

/// Owner of every UI state plus the command runtime.
///
/// Per frame the app calls [`sync_computes`](Self::sync_computes) first (apply
/// async results), renders, then [`flush_commands`](Self::flush_commands)
/// (spawn whatever the render enqueued).
pub struct StateCtx {
    runtime: StateRuntime,
    states: BTreeMap<TypeId, Box<dyn State>>,
    queue: Vec<QueuedCommand>,
    tasks: BTreeMap<TypeId, TaskHandle>,
    generations: BTreeMap<TypeId, u64>,
    #[cfg(not(target_arch = "wasm32"))]
    task_set: tokio::task::JoinSet<()>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("queued", &self.queue.len())
            .field("tasks", &self.tasks.len())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        Self {
            runtime: StateRuntime::new(),
            states: BTreeMap::new(),
            queue: Vec::new(),
            tasks: BTreeMap::new(),
            generations: BTreeMap::new(),
            #[cfg(not(target_arch = "wasm32"))]
            task_set: tokio::task::JoinSet::new(),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        if self
            .states
            .insert(TypeId::of::<T>(), Box::new(state))
            .is_some()
        {
            warn!("State {} registered twice, keeping the latest", type_name::<T>());
        }
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "StateCtx::try_state"))
    }

    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, Error> {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "StateCtx::try_state_mut"))
    }

    /// # Panics
    /// Panics if `T` was never registered with [`add_state`](Self::add_state).
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Panics
    /// Panics if `T` was never registered with [`add_state`](Self::add_state).
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.try_state_mut::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn updater(&self) -> Updater {
        self.runtime.updater()
    }

    /// Called after every update a command sends, from whatever thread sent
    /// it. The first installed waker stays.
    pub fn install_waker(&self, waker: impl Fn() + Send + Sync + 'static) -> bool {
        self.runtime.install_waker(waker)
    }

    pub fn has_waker(&self) -> bool {
        self.runtime.has_waker()
    }

    pub fn snapshot(&self) -> CommandSnapshot {
        let mut snap = CommandSnapshot::new();
        for (id, state) in &self.states {
            if let Some(cloned) = state.snapshot() {
                snap.insert_cloned(*id, cloned);
            }
        }
        snap
    }

    /// Queue `C::default()` for the next flush. Enqueueing the same command
    /// twice before a flush keeps a single entry.
    pub fn enqueue_command<C: Command>(&mut self) {
        self.enqueue(C::default());
    }

    /// Queue a configured command instance for the next flush.
    pub fn enqueue<C: Command>(&mut self, command: C) {
        let type_id = TypeId::of::<C>();
        self.queue.retain(|queued| queued.type_id != type_id);
        self.queue.push(QueuedCommand {
            type_id,
            name: type_name::<C>(),
            run: Box::new(move |snap, updater, cancel| command.run(snap, updater, cancel)),
        });
    }

    pub fn queued_commands(&self) -> usize {
        self.queue.len()
    }

    /// Spawn every queued command against a fresh snapshot.
    ///
    /// A command already in flight for the same type is cancelled and its
    /// pending results become stale.
    pub fn flush_commands(&mut self) {
        for queued in std::mem::take(&mut self.queue) {
            let generation = self.generations.entry(queued.type_id).or_default();
            *generation += 1;
            let task_id = TaskId::new(queued.type_id, *generation);

            let token = CancellationToken::new();
            let handle = TaskHandle::new(task_id, token.clone());
            if let Some(previous) = self.tasks.insert(queued.type_id, handle)
                && !previous.is_cancelled()
            {
                debug!(
                    "Cancelling {} generation {}",
                    queued.name,
                    previous.id().generation()
                );
                previous.cancel();
            }

            debug!("Spawning {} generation {}", queued.name, task_id.generation());
            let updater = self.runtime.latest_only_updater(task_id);
            let future = (queued.run)(self.snapshot(), updater, token.clone());
            let name = queued.name;
            self.spawn(async move {
                tokio::select! {
                    () = token.cancelled() => debug!("{name} cancelled"),
                    () = future => {}
                }
            });
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn(&mut self, future: impl Future<Output = ()> + Send + 'static) {
        self.task_set.spawn(future);
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn(&mut self, future: impl Future<Output = ()> + Send + 'static) {
        wasm_bindgen_futures::spawn_local(future);
    }

    /// Apply results sent by commands since the last call.
    ///
    /// Returns how many updates were applied, so callers can decide whether to
    /// repaint.
    pub fn sync_computes(&mut self) -> usize {
        #[cfg(not(target_arch = "wasm32"))]
        while let Some(joined) = self.task_set.try_join_next() {
            if let Err(err) = joined
                && err.is_panic()
            {
                error!("Command task panicked: {err}");
            }
        }

        let updates: Vec<_> = self.runtime.drain().collect();
        let mut applied = 0;
        for update in updates {
            if let Some(origin) = update.origin
                && let Some(latest) = self.tasks.get(&origin.type_id())
                && origin.is_superseded_by(&latest.id())
            {
                debug!(
                    "Dropping stale {} from generation {}",
                    update.target_name,
                    origin.generation()
                );
                continue;
            }

            match self.states.get_mut(&update.target) {
                Some(state) => {
                    state.assign_box(update.value);
                    applied += 1;
                }
                None => warn!("Update for unregistered state {}", update.target_name),
            }
        }
        applied
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn task_count(&self) -> usize {
        self.task_set.len()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn task_set_mut(&mut self) -> &mut tokio::task::JoinSet<()> {
        &mut self.task_set
    }

    /// Cancel everything in flight and drop queued commands.
    pub async fn shutdown(&mut self) {
        self.queue.clear();
        for handle in self.tasks.values() {
            handle.cancel();
        }
        #[cfg(not(target_arch = "wasm32"))]
        self.task_set.shutdown().await;
    }
}
