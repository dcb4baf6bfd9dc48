use std::any::{Any, type_name};

use log::error;

/// A value stored in [`StateCtx`](crate::StateCtx).
///
/// States are owned by the UI thread. Async commands never touch them
/// directly: they read a [`CommandSnapshot`](crate::CommandSnapshot) taken at
/// dispatch time and write back through an updater, which is applied on the
/// next [`StateCtx::sync_computes`](crate::StateCtx::sync_computes).
pub trait State: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Clone of this state handed to commands. States returning `None` are
    /// invisible to commands.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    /// Replace `self` with a value produced by an updater.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body: downcast and overwrite.
pub fn state_assign_impl<T: State>(state: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *state = *value,
        Err(_) => error!("Failed to assign state {}: type mismatch", type_name::<T>()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    struct Counter(u32);

    impl State for Counter {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }

        fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
            state_assign_impl(self, new_self);
        }
    }

    #[test]
    fn assign_replaces_value() {
        let mut counter = Counter(1);
        counter.assign_box(Box::new(Counter(7)));
        assert_eq!(counter, Counter(7));
    }

    #[test]
    fn assign_with_wrong_type_keeps_value() {
        let mut counter = Counter(1);
        counter.assign_box(Box::new("not a counter"));
        assert_eq!(counter, Counter(1));
    }
}
