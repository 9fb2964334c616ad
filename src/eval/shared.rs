use std::fmt;
use std::sync::Arc;

use super::core::Evaluate;

/// SharedDeferred: a cloneable, thread-safe deferred expression
///
/// Clones share the same computation. Like [`Deferred`](super::deferred::Deferred)
/// nothing is cached: every force on every clone runs the computation again.
/// Any synchronisation the computation needs for the state it touches is up to
/// the computation itself.
pub struct SharedDeferred<T> {
    thunk: Arc<dyn Fn() -> T + Send + Sync>,
}

impl<T> SharedDeferred<T> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self { thunk: Arc::new(f) }
    }

    pub fn force(&self) -> T {
        (self.thunk)()
    }
}

impl<T> Clone for SharedDeferred<T> {
    fn clone(&self) -> Self {
        Self {
            thunk: Arc::clone(&self.thunk),
        }
    }
}

impl<T> Evaluate<T> for SharedDeferred<T> {
    fn evaluate(&self) -> T {
        self.force()
    }
}

impl<T> fmt::Debug for SharedDeferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedDeferred")
            .field("handles", &Arc::strong_count(&self.thunk))
            .finish()
    }
}
