use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::eval::core::Evaluate;
use crate::eval::future::AsyncEvaluate;

/// Returns `primary` when present, otherwise forces `fallback`.
///
/// # Arguments
/// * `primary` - The value that was already looked up or computed
/// * `fallback` - Forced only when `primary` is `None`
pub fn value_or<T>(primary: Option<T>, fallback: impl Evaluate<T>) -> T {
    match primary {
        Some(value) => value,
        None => {
            debug!("primary value absent, forcing fallback");
            fallback.evaluate()
        }
    }
}

/// Looks `key` up in `map`, forcing `fallback` only on a miss.
///
/// The map is read-only here; a miss does not insert the fallback value.
pub fn lookup_or<K, Q, V>(map: &HashMap<K, V>, key: &Q, fallback: impl Evaluate<V>) -> V
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    V: Clone,
{
    value_or(map.get(key).cloned(), fallback)
}

/// Async variant of [`value_or`]: the fallback future is only created and
/// awaited when `primary` is `None`.
pub async fn value_or_async<T, D>(primary: Option<T>, fallback: &D) -> T
where
    T: Send,
    D: AsyncEvaluate<T> + ?Sized,
{
    match primary {
        Some(value) => value,
        None => {
            debug!("primary value absent, awaiting fallback");
            fallback.evaluate_async().await
        }
    }
}
