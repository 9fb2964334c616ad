//! # Core Evaluation Definitions
//!
//! This module defines the fundamental interface that every deferred
//! expression in the crate implements.

/// Evaluate trait defines the core deferred-expression interface.
///
/// An implementor holds a computation that takes no arguments and produces a
/// `T`. Nothing runs until [`evaluate`](Evaluate::evaluate) is called, and
/// every call runs the computation again unless the implementor documents
/// otherwise.
///
/// Every `Fn() -> T` closure implements this trait, so a consuming function
/// written against `impl Evaluate<T>` accepts a plain closure as well as any
/// of the boxed value types.
///
/// # Type Parameters
///
/// * `T` - The type produced when the expression is forced
pub trait Evaluate<T> {
    /// Runs the captured computation and returns its result.
    ///
    /// # Returns
    ///
    /// * `T` - Whatever the computation produced. If the computation panics, the
    ///   panic unwinds through this call untouched.
    fn evaluate(&self) -> T;
}

impl<T, F> Evaluate<T> for F
where
    F: Fn() -> T,
{
    fn evaluate(&self) -> T {
        self()
    }
}

/// Result type for fallible deferred expressions.
///
/// The error parameter is always the computation's own failure kind; the
/// crate never substitutes an error type of its own.
pub type EvalResult<T, E> = Result<T, E>;

/// TryEvaluate is the fallible face of [`Evaluate`].
///
/// It is implemented for every expression that evaluates to a `Result`, and
/// hands that `Result` back unchanged, so `?` at the call site propagates the
/// computation's failure exactly as a direct call would.
pub trait TryEvaluate<T, E> {
    /// Runs the captured computation, propagating its failure.
    ///
    /// # Returns
    ///
    /// * `Ok(value)` - If the computation succeeded
    /// * `Err(error)` - The computation's own error, untouched
    fn try_evaluate(&self) -> EvalResult<T, E>;
}

impl<T, E, X> TryEvaluate<T, E> for X
where
    X: Evaluate<Result<T, E>> + ?Sized,
{
    fn try_evaluate(&self) -> EvalResult<T, E> {
        self.evaluate()
    }
}
