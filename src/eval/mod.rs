//! # Deferred Evaluation
//!
//! This module implements the deferred-expression machinery: a computation is
//! captured as a value at one point and run, if at all, at another.
//!
//! ## Core Components
//!
//! * **Evaluate Trait**: The single-method contract every deferred expression
//!   fulfils. Any `Fn() -> T` closure implements it.
//! * **Value Types**: [`deferred::Deferred`], [`memo::Memo`],
//!   [`shared::SharedDeferred`] and [`future::AsyncDeferred`] box a computation
//!   so it can be stored, labelled, cached or shared.
//! * **Combinators**: Small wrappers that compose expressions without forcing
//!   them, like `Map`, `Zip`, `OrElse` and `Lazy`.
//! * **Thunk**: A value type whose caching behaviour is chosen at runtime by an
//!   [`thunk::EvalPolicy`].
//!
//! ## Evaluation Rules
//!
//! 1. Constructing any of these types runs nothing.
//! 2. `force`/`evaluate` runs the captured computation; the result is whatever
//!    the computation returned, failures included.
//! 3. Only [`memo::Memo`] (and a memoizing [`thunk::Thunk`]) remembers a result;
//!    everything else re-runs on every force.
//!
//! ## Usage Example
//!
//! ```
//! use std::cell::Cell;
//! use deferral::eval::prelude::*;
//! use deferral::eval::core::Evaluate;
//!
//! let runs = Cell::new(0);
//! let expr = defer(|| {
//!     runs.set(runs.get() + 1);
//!     "computed"
//! });
//! assert_eq!(runs.get(), 0);
//!
//! assert_eq!(expr.evaluate(), "computed");
//! assert_eq!(expr.force(), "computed");
//! assert_eq!(runs.get(), 2);
//! ```

pub mod combinators;
pub mod core;
pub mod deferred;
pub mod future;
pub mod memo;
pub mod prelude;
pub mod shared;
pub mod thunk;


pub use self::core::EvalResult;
pub use self::core::Evaluate;
pub use self::core::TryEvaluate;
