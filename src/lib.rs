//! # deferral: Deferred Expressions for Rust
//!
//! `deferral` lets a computation be passed around as an ordinary value and run
//! only when, and only if, the holder decides to pay for it.
//!
//! ## Technical Foundations
//!
//! ### 1. One Contract
//! Every deferred expression implements [`eval::core::Evaluate`]: a single
//! zero-argument `evaluate` method. Every `Fn() -> T` closure already satisfies
//! it, so callers never have to wrap anything to pass a deferred argument.
//!
//! ### 2. Value Types
//! When an expression has to be stored, named or shared, it is boxed:
//! - [`Deferred`]: re-runs its computation on every force
//! - [`Memo`]: runs its computation at most once and caches the result
//! - [`SharedDeferred`]: cloneable and `Send + Sync`
//! - [`AsyncDeferred`]: produces a fresh future on every force
//!
//! ### 3. Consuming Patterns
//! The [`patterns`] module holds the three shapes callers actually write:
//! - Conditional suppression ([`patterns::guard`])
//! - Default-value supply ([`patterns::fallback`])
//! - Error-as-value construction ([`patterns::require`])
//!
//! ## Evaluation Semantics
//!
//! ```text
//! construct  → nothing runs, only captures are taken
//! force      → the computation runs exactly once per call
//! never force → the computation never runs
//! ```
//!
//! Failures of the captured computation are never caught or transformed: a
//! `Deferred<Result<T, E>>` hands back the `E` it produced, and a panic unwinds
//! through `force` as it would through a direct call.
//!
//! ## Example
//!
//! ```
//! use deferral::{defer, patterns::fallback::value_or};
//!
//! let lookup: Option<u32> = None;
//! let fallback = defer(|| 25);
//! assert_eq!(value_or(lookup, fallback), 25);
//! ```

pub mod config;
pub mod error;
pub mod eval;
pub mod patterns;

// Re-exports
pub use error::*;
pub use eval::combinators::{Lazy, Map, OrElse, Zip};
pub use eval::core::{EvalResult, Evaluate, TryEvaluate};
pub use eval::deferred::Deferred;
pub use eval::future::{AsyncDeferred, AsyncEvaluate};
pub use eval::memo::Memo;
pub use eval::prelude::*;
pub use eval::shared::SharedDeferred;
pub use eval::thunk::Thunk;
