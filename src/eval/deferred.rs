use std::fmt;

use tracing::trace;

use super::core::{EvalResult, Evaluate};

/// Deferred: a boxed computation that runs every time it is forced
///
/// `Deferred` is the value form of a deferred expression. Constructing one only
/// captures the closure; the closure decides whether outer state is borrowed
/// (bounded by `'a`) or moved in. Forcing runs the closure again on every call,
/// no result is remembered. Use [`Memo`](super::memo::Memo) when the result
/// should be cached.
pub struct Deferred<'a, T> {
    /// Optional name reported in trace events when forced
    label: Option<&'static str>,
    /// The captured computation
    thunk: Box<dyn Fn() -> T + 'a>,
}

impl<'a, T> Deferred<'a, T> {
    /// Creates a new Deferred expression without running it
    ///
    /// # Arguments
    ///
    /// * `f` - The computation to run on each force
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> T + 'a,
    {
        Self {
            label: None,
            thunk: Box::new(f),
        }
    }

    /// Creates a new Deferred expression that names itself in trace events
    ///
    /// # Arguments
    ///
    /// * `label` - Name reported at TRACE level each time the expression is forced
    /// * `f` - The computation to run on each force
    pub fn labeled<F>(label: &'static str, f: F) -> Self
    where
        F: Fn() -> T + 'a,
    {
        Self {
            label: Some(label),
            thunk: Box::new(f),
        }
    }

    /// Runs the captured computation and returns its result.
    pub fn force(&self) -> T {
        if let Some(label) = self.label {
            trace!(label, "forcing deferred expression");
        }
        (self.thunk)()
    }

    pub fn label(&self) -> Option<&'static str> {
        self.label
    }

    /// Unwraps the captured computation.
    pub fn into_fn(self) -> Box<dyn Fn() -> T + 'a> {
        self.thunk
    }
}

impl<'a, T, E> Deferred<'a, Result<T, E>> {
    /// Forces a fallible expression, returning the computation's own error.
    pub fn try_force(&self) -> EvalResult<T, E> {
        self.force()
    }
}

impl<T> Evaluate<T> for Deferred<'_, T> {
    fn evaluate(&self) -> T {
        self.force()
    }
}

impl<'a, T, F> From<F> for Deferred<'a, T>
where
    F: Fn() -> T + 'a,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl<T> fmt::Debug for Deferred<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
