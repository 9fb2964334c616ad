use std::cell::Cell;

use deferral::{
    defer, force, lazy, map, memo, or_else, zip, Deferred, Evaluate, Thunk, TryEvaluate,
};
use pretty_assertions::assert_eq;

pub mod shared_test;

#[derive(Debug, Clone, PartialEq)]
struct Reading {
    sensor: &'static str,
    celsius: f64,
}

fn counter_expr(runs: &Cell<u32>) -> Deferred<'_, u32> {
    defer(move || {
        runs.set(runs.get() + 1);
        runs.get()
    })
}

#[test]
fn test_unforced_expression_has_no_side_effect() {
    let runs = Cell::new(0);
    {
        let _expr = counter_expr(&runs);
    }
    assert_eq!(runs.get(), 0);
}

#[test]
fn test_force_of_construct_equals_direct_evaluation() {
    let base = 40;
    let direct = base + 2;
    assert_eq!(force(defer(|| base + 2)), direct);
    assert_eq!(force(|| base + 2), direct);
}

#[test]
fn test_construction_reads_zero_then_two_after_two_forces() {
    let runs = Cell::new(0);
    let expr = counter_expr(&runs);
    assert_eq!(runs.get(), 0);

    expr.force();
    expr.force();
    assert_eq!(runs.get(), 2);
}

#[test]
fn test_memo_is_a_separate_capability() {
    let runs = Cell::new(0);
    let cached = memo(|| {
        runs.set(runs.get() + 1);
        Reading {
            sensor: "north",
            celsius: 21.5,
        }
    });

    assert_eq!(runs.get(), 0);
    assert_eq!(
        cached.evaluate(),
        Reading {
            sensor: "north",
            celsius: 21.5
        }
    );
    cached.force();
    assert_eq!(runs.get(), 1);
}

#[test]
fn test_combinators_compose_without_forcing() {
    let runs = Cell::new(0);
    let celsius = || {
        runs.set(runs.get() + 1);
        20.0_f64
    };
    let fahrenheit = map(celsius, |c: f64| c * 9.0 / 5.0 + 32.0);
    let labelled = zip(|| "south", fahrenheit);
    assert_eq!(runs.get(), 0);

    assert_eq!(labelled.evaluate(), ("south", 68.0));
    assert_eq!(runs.get(), 1);
}

#[test]
fn test_or_else_and_lazy() {
    let cache: Option<u32> = None;
    let builds = Cell::new(0);
    let expr = or_else(
        move || cache,
        lazy(|| {
            builds.set(builds.get() + 1);
            || 7_u32
        }),
    );
    assert_eq!(builds.get(), 0);
    assert_eq!(expr.evaluate(), 7);
    assert_eq!(builds.get(), 1);
}

#[test]
fn test_fallible_expression_propagates_with_question_mark() {
    #[derive(Debug, PartialEq)]
    struct Offline;

    fn read(expr: &impl TryEvaluate<u8, Offline>) -> Result<u8, Offline> {
        let value = expr.try_evaluate()?;
        Ok(value * 2)
    }

    let online: Deferred<Result<u8, Offline>> = defer(|| Ok(4));
    let offline: Deferred<Result<u8, Offline>> = defer(|| Err(Offline));
    assert_eq!(read(&online), Ok(8));
    assert_eq!(read(&offline), Err(Offline));
}

#[test]
fn test_config_driven_thunk() {
    let config = deferral::config::DeferralConfig::from_json_str(r#"{"policy": "memoize"}"#)
        .expect("valid config");
    let runs = Cell::new(0);
    let thunk: Thunk<'_, ()> = config.thunk(|| runs.set(runs.get() + 1));

    thunk.force();
    thunk.force();
    assert_eq!(runs.get(), 1);
}
