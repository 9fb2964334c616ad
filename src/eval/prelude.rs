use super::combinators::*;
use super::core::Evaluate;
use super::deferred::Deferred;
use super::future::AsyncDeferred;
use super::memo::Memo;
use super::shared::SharedDeferred;
use std::future::Future;

pub fn defer<'a, T, F>(f: F) -> Deferred<'a, T>
where
    F: Fn() -> T + 'a,
{
    Deferred::new(f)
}

pub fn memo<'a, T, F>(f: F) -> Memo<'a, T>
where
    F: Fn() -> T + 'a,
{
    Memo::new(f)
}

pub fn shared<T, F>(f: F) -> SharedDeferred<T>
where
    F: Fn() -> T + Send + Sync + 'static,
{
    SharedDeferred::new(f)
}

pub fn defer_async<T, F, Fut>(f: F) -> AsyncDeferred<T>
where
    T: Send + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = T> + Send + 'static,
{
    AsyncDeferred::new(f)
}

/// Consumes an expression and evaluates it once.
pub fn force<T, E>(expr: E) -> T
where
    E: Evaluate<T>,
{
    expr.evaluate()
}

pub fn map<E, F, A, B>(expr: E, f: F) -> Map<E, F, A>
where
    E: Evaluate<A>,
    F: Fn(A) -> B,
{
    Map::new(expr, f)
}

pub fn zip<E1, E2, A, B>(left: E1, right: E2) -> Zip<E1, E2, A, B>
where
    E1: Evaluate<A>,
    E2: Evaluate<B>,
{
    Zip::new(left, right)
}

pub fn or_else<T, P, D>(primary: P, fallback: D) -> OrElse<P, D>
where
    P: Evaluate<Option<T>>,
    D: Evaluate<T>,
{
    OrElse::new(primary, fallback)
}

pub fn lazy<T, F, E>(f: F) -> Lazy<F>
where
    F: Fn() -> E,
    E: Evaluate<T>,
{
    Lazy::new(f)
}
