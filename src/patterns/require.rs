use tracing::debug;

use crate::eval::core::Evaluate;

/// Unwraps `value`, or forces `error` and returns it as the failure.
///
/// The error expression is never forced on the success path, so building the
/// error (formatting, allocation, capturing context) costs nothing when the
/// value is present.
///
/// # Returns
/// * `Ok(value)` - If `value` was present
/// * `Err(error)` - The forced error, exactly as the expression produced it
pub fn require<T, E>(value: Option<T>, error: impl Evaluate<E>) -> Result<T, E> {
    match value {
        Some(value) => Ok(value),
        None => {
            debug!("required value missing, forcing error");
            Err(error.evaluate())
        }
    }
}

/// Accepts `value` if `predicate` holds, otherwise forces `error`.
pub fn require_that<T, E>(
    value: T,
    predicate: impl FnOnce(&T) -> bool,
    error: impl Evaluate<E>,
) -> Result<T, E> {
    if predicate(&value) {
        Ok(value)
    } else {
        Err(error.evaluate())
    }
}

/// Unwraps `result`, or forces `error` in place of the original failure.
///
/// The original error is dropped. `error` is forced only when `result` is an
/// `Err`.
pub fn require_ok<T, E, F>(result: Result<T, E>, error: impl Evaluate<F>) -> Result<T, F> {
    match result {
        Ok(value) => Ok(value),
        Err(_) => Err(error.evaluate()),
    }
}
