//! # Expression Combinators
//!
//! This module implements combinators that build new deferred expressions out
//! of existing ones. Building a combinator never forces its inputs; forcing the
//! combinator forces the inputs it needs, in a fixed order.
//!
//! ## Combinator Types
//!
//! * **Transformation Combinators**: `Map` applies a function to the forced value
//! * **Sequential Combinators**: `Zip` forces two expressions, left then right
//! * **Alternative Combinators**: `OrElse` forces a fallback only on `None`
//! * **Construction Combinators**: `Lazy` builds the inner expression on demand

use super::core::Evaluate;
use std::marker::PhantomData;

/// Map: Transforms the result of an expression using a function
///
/// The function runs once per force, right after the inner expression.
#[derive(Clone)]
pub struct Map<E, F, A> {
    /// The expression whose result will be transformed
    expr: E,
    /// The transformation function
    f: F,
    _phantom: PhantomData<A>,
}

impl<E, F, A> Map<E, F, A> {
    /// Creates a new Map expression
    ///
    /// # Arguments
    ///
    /// * `expr` - The expression whose result will be transformed
    /// * `f` - The transformation function to apply to the result
    pub fn new(expr: E, f: F) -> Self {
        Self {
            expr,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<A, B, E, F> Evaluate<B> for Map<E, F, A>
where
    E: Evaluate<A>,
    F: Fn(A) -> B,
{
    fn evaluate(&self) -> B {
        (self.f)(self.expr.evaluate())
    }
}

/// Zip: Forces two expressions and pairs their results
///
/// The left expression is always forced before the right one.
#[derive(Clone)]
pub struct Zip<E1, E2, A, B> {
    left: E1,
    right: E2,
    _phantom: PhantomData<(A, B)>,
}

impl<E1, E2, A, B> Zip<E1, E2, A, B> {
    pub fn new(left: E1, right: E2) -> Self {
        Self {
            left,
            right,
            _phantom: PhantomData,
        }
    }
}

impl<E1, E2, A, B> Evaluate<(A, B)> for Zip<E1, E2, A, B>
where
    E1: Evaluate<A>,
    E2: Evaluate<B>,
{
    fn evaluate(&self) -> (A, B) {
        let a = self.left.evaluate();
        let b = self.right.evaluate();
        (a, b)
    }
}

/// OrElse: Falls back to a second expression when the first yields `None`
///
/// The primary expression is forced first. The fallback is forced only when
/// the primary produced `None`, so its cost and side effects are skipped
/// entirely on a hit.
#[derive(Clone)]
pub struct OrElse<P, D> {
    /// Expression producing the optional primary value
    primary: P,
    /// Expression producing the substitute value
    fallback: D,
}

impl<P, D> OrElse<P, D> {
    /// Creates a new OrElse expression
    ///
    /// # Arguments
    ///
    /// * `primary` - Expression producing an `Option<T>`
    /// * `fallback` - Expression producing a `T`, forced only on `None`
    pub fn new(primary: P, fallback: D) -> Self {
        Self { primary, fallback }
    }
}

impl<T, P, D> Evaluate<T> for OrElse<P, D>
where
    P: Evaluate<Option<T>>,
    D: Evaluate<T>,
{
    fn evaluate(&self) -> T {
        match self.primary.evaluate() {
            Some(value) => value,
            None => self.fallback.evaluate(),
        }
    }
}

/// Lazy: Defers the construction of an expression as well as its evaluation
///
/// The builder runs on every force and the expression it returns is forced
/// right away.
pub struct Lazy<F> {
    f: F,
}

impl<F> Lazy<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, F, E> Evaluate<T> for Lazy<F>
where
    F: Fn() -> E,
    E: Evaluate<T>,
{
    fn evaluate(&self) -> T {
        (self.f)().evaluate()
    }
}
