use serde::{Deserialize, Serialize};

use super::core::Evaluate;
use super::deferred::Deferred;
use super::memo::Memo;

/// How a [`Thunk`] treats repeated forces
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EvalPolicy {
    /// Run the computation on every force
    #[default]
    Reevaluate,
    /// Run the computation on the first force and reuse the result
    Memoize,
}

/// A deferred expression whose caching behaviour is picked at runtime.
#[derive(Debug)]
pub enum Thunk<'a, T> {
    Reevaluate(Deferred<'a, T>),
    Memoize(Memo<'a, T>),
}

impl<'a, T> Thunk<'a, T> {
    pub fn with_policy<F>(policy: EvalPolicy, f: F) -> Self
    where
        F: Fn() -> T + 'a,
    {
        match policy {
            EvalPolicy::Reevaluate => Thunk::Reevaluate(Deferred::new(f)),
            EvalPolicy::Memoize => Thunk::Memoize(Memo::new(f)),
        }
    }

    pub fn policy(&self) -> EvalPolicy {
        match self {
            Thunk::Reevaluate(_) => EvalPolicy::Reevaluate,
            Thunk::Memoize(_) => EvalPolicy::Memoize,
        }
    }
}

impl<T: Clone> Thunk<'_, T> {
    pub fn force(&self) -> T {
        match self {
            Thunk::Reevaluate(expr) => expr.force(),
            Thunk::Memoize(memo) => memo.force().clone(),
        }
    }
}

impl<T: Clone> Evaluate<T> for Thunk<'_, T> {
    fn evaluate(&self) -> T {
        self.force()
    }
}
