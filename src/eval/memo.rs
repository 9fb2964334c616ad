use std::cell::{Cell, OnceCell};
use std::fmt;

use tracing::trace;

use super::core::Evaluate;

/// Memo: a deferred expression that runs at most once
///
/// The first [`force`](Memo::force) runs the computation and caches its result;
/// later forces return the cached value without running anything. If the
/// expression is never forced, the computation never runs.
///
/// Forcing a `Memo` from inside its own computation panics. If the computation
/// itself panics, nothing is cached and the next force runs it again.
pub struct Memo<'a, T> {
    cell: OnceCell<T>,
    /// Set while the computation is on the stack
    running: Cell<bool>,
    init: Box<dyn Fn() -> T + 'a>,
}

/// Clears the running flag on exit, unwinding included.
struct RunningGuard<'g>(&'g Cell<bool>);

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<'a, T> Memo<'a, T> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> T + 'a,
    {
        Self {
            cell: OnceCell::new(),
            running: Cell::new(false),
            init: Box::new(f),
        }
    }

    pub fn force(&self) -> &T {
        if let Some(value) = self.cell.get() {
            return value;
        }
        if self.running.replace(true) {
            panic!("Memo forced from inside its own computation");
        }
        let _guard = RunningGuard(&self.running);
        self.cell.get_or_init(|| {
            trace!("memo: running computation");
            (self.init)()
        })
    }

    pub fn is_forced(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Returns the cached value without forcing.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Drops the cached value; the next force runs the computation again.
    pub fn reset(&mut self) -> Option<T> {
        self.cell.take()
    }

    pub fn into_inner(self) -> Option<T> {
        self.cell.into_inner()
    }
}

impl<T: Clone> Evaluate<T> for Memo<'_, T> {
    fn evaluate(&self) -> T {
        self.force().clone()
    }
}

impl<T: fmt::Debug> fmt::Debug for Memo<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("value", &self.cell.get())
            .finish_non_exhaustive()
    }
}
