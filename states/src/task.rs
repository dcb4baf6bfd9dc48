//! Identity and cancellation for in-flight commands.
//!
//! Every flush of a command gets a fresh [`TaskId`]: the command's `TypeId`
//! plus a generation counter that only grows. Flushing the same command type
//! again cancels the previous task through its [`TaskHandle`] and makes its
//! id stale, so any late result it still sends is dropped on sync.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `true` when `latest` belongs to the same command and was spawned later.
    pub fn is_superseded_by(&self, latest: &Self) -> bool {
        self.type_id == latest.type_id && self.generation < latest.generation
    }
}

/// A spawned command task and the token used to stop it.
///
/// Cancellation is cooperative: the runtime races the command future against
/// [`CancellationToken::cancelled`], and commands may also poll the token.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FetchA;
    struct FetchB;

    #[test]
    fn later_generation_supersedes_earlier() {
        let first = TaskId::new(TypeId::of::<FetchA>(), 1);
        let second = TaskId::new(TypeId::of::<FetchA>(), 2);

        assert!(first.is_superseded_by(&second));
        assert!(!second.is_superseded_by(&first));
        assert!(!second.is_superseded_by(&second));
    }

    #[test]
    fn other_command_never_supersedes() {
        let a = TaskId::new(TypeId::of::<FetchA>(), 1);
        let b = TaskId::new(TypeId::of::<FetchB>(), 9);

        assert!(!a.is_superseded_by(&b));
    }

    #[test]
    fn cancelling_a_clone_cancels_the_shared_token() {
        let handle = TaskHandle::new(
            TaskId::new(TypeId::of::<FetchA>(), 1),
            CancellationToken::new(),
        );
        let token = handle.cancellation_token();
        let cloned = handle.clone();

        assert!(!token.is_cancelled());
        cloned.cancel();

        assert!(handle.is_cancelled());
        assert!(token.is_cancelled());
    }
}
