//! # Consuming Patterns
//!
//! Functions that accept deferred expressions and decide whether, and when, to
//! force them. Each pattern exists so that a caller can write an expensive or
//! side-effecting argument without paying for it on the paths that don't need it.
//!
//! * [`guard`]: conditional suppression, the expression may never run
//! * [`fallback`]: default values, forced only when the primary value is absent
//! * [`require`]: error-as-value, the error is built only on the failure path

pub mod fallback;
pub mod guard;
pub mod require;
