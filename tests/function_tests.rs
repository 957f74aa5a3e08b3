//! Unit tests for the synchronous decorators: `identity`, `once` and `memoize`.

#![cfg(feature = "function")]

use std::cell::Cell;

use collectkit::function::{Memoized, Once, identity, memoize, once};
use rstest::rstest;

// =============================================================================
// identity
// =============================================================================

#[rstest]
#[case(0)]
#[case(-17)]
#[case(i64::MAX)]
fn test_identity_returns_argument(#[case] value: i64) {
    assert_eq!(identity(value), value);
}

#[rstest]
fn test_identity_as_map_function() {
    let words: Vec<&str> = ["a", "b"].into_iter().map(identity).collect();
    assert_eq!(words, vec!["a", "b"]);
}

// =============================================================================
// once
// =============================================================================

#[rstest]
fn test_once_runs_function_a_single_time() {
    let counter = Cell::new(0);
    let increment = once(|(): ()| {
        counter.set(counter.get() + 1);
        counter.get()
    });

    assert_eq!(increment(()), 1);
    assert_eq!(increment(()), 1);
    assert_eq!(increment(()), 1);
    assert_eq!(counter.get(), 1);
}

#[rstest]
fn test_once_ignores_later_arguments() {
    let square = once(|value: i32| value * value);
    assert_eq!(square(4), 16);
    assert_eq!(square(5), 16);
}

#[rstest]
fn test_once_wrappers_are_independent() {
    let calls = Cell::new(0);
    let record = |tag: &'static str| {
        calls.set(calls.get() + 1);
        tag
    };
    let first = once(record);
    let second = once(record);

    assert_eq!(first("first"), "first");
    assert_eq!(second("second"), "second");
    assert_eq!(first("again"), "first");
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn test_once_struct_reports_state() {
    let greeting = Once::new(|name: &str| format!("hello {name}"));
    assert!(!greeting.is_called());
    assert_eq!(greeting.get(), None);

    assert_eq!(greeting.call("ada"), "hello ada");
    assert!(greeting.is_called());
    assert_eq!(greeting.get(), Some("hello ada".to_string()));
}

// =============================================================================
// memoize
// =============================================================================

#[rstest]
fn test_memoize_same_arguments_compute_once() {
    let calls = Cell::new(0);
    let slow_square = memoize(|value: u64| {
        calls.set(calls.get() + 1);
        value * value
    });

    assert_eq!(slow_square(9), 81);
    assert_eq!(slow_square(9), 81);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn test_memoize_distinct_arguments_compute_again() {
    let calls = Cell::new(0);
    let join = memoize(|(left, right): (String, String)| {
        calls.set(calls.get() + 1);
        format!("{left}-{right}")
    });

    assert_eq!(join(("a".into(), "b".into())), "a-b");
    assert_eq!(join(("b".into(), "a".into())), "b-a");
    assert_eq!(join(("a".into(), "b".into())), "a-b");
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn test_memoized_struct_caches_per_argument() {
    fn fibonacci(number: u32) -> u64 {
        if number < 2 {
            u64::from(number)
        } else {
            fibonacci(number - 1) + fibonacci(number - 2)
        }
    }

    let memo: Memoized<u32, u64, fn(u32) -> u64> = Memoized::new(fibonacci);
    assert_eq!(memo.call(20), 6765);
    assert_eq!(memo.call(20), 6765);
    assert_eq!(memo.call(10), 55);
    assert_eq!(memo.len(), 2);
}

#[rstest]
fn test_memoized_wrappers_have_separate_caches() {
    let calls = Cell::new(0);
    let count = |value: i32| {
        calls.set(calls.get() + 1);
        value
    };
    let first = memoize(count);
    let second = memoize(count);

    first(1);
    second(1);
    first(1);
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn test_memoized_clear_empties_cache() {
    let memoized = Memoized::new(|value: i32| value + 1);
    memoized.call(1);
    memoized.call(2);
    assert_eq!(memoized.len(), 2);

    memoized.clear();
    assert!(memoized.is_empty());
}
