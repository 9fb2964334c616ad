use std::cell::Cell;
use std::collections::HashMap;

use deferral::{
    config::DeferralConfig,
    defer,
    patterns::{
        fallback::{lookup_or, value_or},
        guard::{when, Gate},
        require::require,
    },
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
enum GreetingError {
    #[error("missing name")]
    MissingNameError,
}

fn greet(name: Option<&str>, calls: &Cell<u32>) -> Result<String, GreetingError> {
    let name = require(name, || {
        calls.set(calls.get() + 1);
        GreetingError::MissingNameError
    })?;
    Ok(format!("Hello, {}!", name))
}

fn inventory() -> HashMap<&'static str, u32> {
    HashMap::from([("apples", 42)])
}

#[test]
fn test_lookup_miss_yields_fallback_25() {
    let runs = Cell::new(0);
    let count = lookup_or(&inventory(), "pears", defer(|| {
        runs.set(runs.get() + 1);
        25
    }));
    assert_eq!(count, 25);
    assert_eq!(runs.get(), 1);
}

#[test]
fn test_lookup_hit_with_42_never_forces_fallback() {
    let runs = Cell::new(0);
    let count = lookup_or(&inventory(), "apples", defer(|| {
        runs.set(runs.get() + 1);
        25
    }));
    assert_eq!(count, 42);
    assert_eq!(runs.get(), 0);
}

#[test]
fn test_missing_name_raises_exactly_that_error() {
    let calls = Cell::new(0);
    assert_eq!(greet(None, &calls), Err(GreetingError::MissingNameError));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_present_name_never_raises() {
    let calls = Cell::new(0);
    assert_eq!(greet(Some("Ada"), &calls), Ok("Hello, Ada!".to_string()));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_gate_from_config_suppresses() {
    let config = DeferralConfig::from_json_str(r#"{"gate": {"enabled": false}}"#).unwrap();
    let gate = Gate::from_config(&config.gate);
    let runs = Cell::new(0);

    assert_eq!(gate.run(|| runs.set(runs.get() + 1)), None);
    assert_eq!(when(runs.get() > 0, || "never"), None);
    assert_eq!(runs.get(), 0);
}

#[test]
fn test_value_or_forces_borrowed_expression_each_time() {
    let runs = Cell::new(0);
    let fallback = defer(|| {
        runs.set(runs.get() + 1);
        "anonymous"
    });

    assert_eq!(value_or(None, || fallback.force()), "anonymous");
    assert_eq!(value_or(None, || fallback.force()), "anonymous");
    assert_eq!(value_or(Some("named"), || fallback.force()), "named");
    assert_eq!(runs.get(), 2);
}
