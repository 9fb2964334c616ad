use std::fmt;
use std::future::Future;

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};

/// Asynchronous counterpart of [`Evaluate`](super::core::Evaluate).
///
/// The computation is asynchronous, so forcing is an `.await`. As with the
/// synchronous trait, nothing runs until the expression is forced.
#[async_trait]
pub trait AsyncEvaluate<T: Send>: Send + Sync {
    async fn evaluate_async(&self) -> T;
}

/// AsyncDeferred: a deferred expression whose computation is a future
///
/// The stored closure is a future factory. No future exists until
/// [`force`](AsyncDeferred::force) is called, and every force builds and awaits
/// a fresh one, so the computation's side effects repeat per force.
/// Cancellation or timeouts are up to the awaiting caller.
pub struct AsyncDeferred<T> {
    factory: Box<dyn Fn() -> BoxFuture<'static, T> + Send + Sync>,
}

impl<T: Send + 'static> AsyncDeferred<T> {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        Self {
            factory: Box::new(move || f().boxed()),
        }
    }

    pub async fn force(&self) -> T {
        (self.factory)().await
    }
}

#[async_trait]
impl<T: Send + 'static> AsyncEvaluate<T> for AsyncDeferred<T> {
    async fn evaluate_async(&self) -> T {
        self.force().await
    }
}

impl<T> fmt::Debug for AsyncDeferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncDeferred").finish_non_exhaustive()
    }
}
