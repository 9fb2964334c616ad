use tracing::{debug, Level};

use crate::config::GateConfig;
use crate::eval::core::Evaluate;

/// Gate: forces expressions only while it is enabled
///
/// A disabled gate drops the expressions handed to it without running them, so
/// neither their cost nor their side effects are paid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gate {
    enabled: bool,
}

impl Default for Gate {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Gate {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn from_config(config: &GateConfig) -> Self {
        Self::new(config.enabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Forces `expr` if the gate is enabled.
    ///
    /// # Returns
    ///
    /// * `Some(value)` - If the gate was enabled and the expression was forced
    /// * `None` - If the gate was disabled; the expression never ran
    pub fn run<T>(&self, expr: impl Evaluate<T>) -> Option<T> {
        when(self.enabled, expr)
    }
}

/// Forces `expr` only when `condition` holds.
pub fn when<T>(condition: bool, expr: impl Evaluate<T>) -> Option<T> {
    if condition {
        Some(expr.evaluate())
    } else {
        None
    }
}

/// Emits `message` at DEBUG level, building it only if DEBUG is enabled.
///
/// Returns whether the message was forced.
pub fn debug_lazy(message: impl Evaluate<String>) -> bool {
    if tracing::enabled!(Level::DEBUG) {
        let message = message.evaluate();
        debug!("{}", message);
        true
    } else {
        false
    }
}
