//! Right-biased chains and variant matching across the container families

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sumcase_core::logging::init_test_logging;
use sumcase_core::{Matcher, PartialFunction, Pattern, Value, ValueKind};
use sumcase_types::{
    attempt, catching, failure, left, present, right, success, CapturedError, Either, Filterable,
    MatchWith, Maybe, Outcome, RightBiased, SumMatcher,
};

#[test]
fn test_right_flat_map_chains() {
    let six: Either<&str, i32> = right::<&str, i32>(5).flat_map(|v| right(v + 1));
    assert_eq!(six, right(6));

    let err: Either<&str, i32> = left::<&str, i32>("e").flat_map(|v| right(v + 1));
    assert_eq!(err, left("e"));
}

#[test]
fn test_success_biased_matcher_over_values() {
    init_test_logging();

    let matcher = SumMatcher::<Either<Value, Value>, _>::new()
        .success(Pattern::kind(ValueKind::Int), |v| {
            Value::Int(v.as_int().unwrap_or_default() + 1)
        })
        .failure(Pattern::kind(ValueKind::Str), |_| Value::symbol("err"));

    assert_eq!(matcher.call(&right(Value::Int(1))), Ok(Value::Int(2)));
    assert_eq!(
        matcher.call(&left(Value::from("boom"))),
        Ok(Value::symbol("err"))
    );
    assert!(matcher.call(&right(Value::from("x"))).is_err());
}

#[test]
fn test_outcome_matching_by_error_class() {
    let describe = SumMatcher::<Outcome<i32>, String>::new()
        .success((), |n| format!("parsed {}", n))
        .failure(Pattern::kind(CapturedError::PANIC), |_| "panicked".to_string())
        .failure((), |err| format!("failed: {}", err.message()));

    assert_eq!(describe.call(&attempt(|| "7".parse::<i32>())).unwrap(), "parsed 7");
    assert_eq!(
        describe.call(&catching(|| -> i32 { panic!("bad state") })).unwrap(),
        "panicked"
    );
    assert_eq!(
        describe.call(&attempt(|| "x".parse::<i32>())).unwrap(),
        "failed: invalid digit found in string"
    );
}

#[test]
fn test_recover_with_matcher() {
    let fallback = Matcher::new()
        .case(Pattern::kind(CapturedError::PANIC), |_: &CapturedError| -1);

    let recovered = catching(|| -> i32 { panic!("boom") }).recover(&fallback);
    assert_eq!(recovered, success(-1));

    let untouched = failure::<i32>(CapturedError::new("io", "closed")).recover(&fallback);
    assert!(untouched.is_failure());
}

#[test]
fn test_matcher_built_once_and_shared() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let matcher = Arc::new(
        SumMatcher::<Maybe<u32>, u32>::new()
            .present((), move |n| {
                counter.fetch_add(1, Ordering::SeqCst);
                n + 1
            })
            .absent(|| 0),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let matcher = Arc::clone(&matcher);
            std::thread::spawn(move || matcher.lift(&present(i)))
        })
        .collect();

    let mut results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();
    results.sort();
    assert_eq!(results, vec![Some(1), Some(2), Some(3), Some(4)]);
    assert_eq!(calls.load(Ordering::SeqCst), 4);
    assert_eq!(matcher.lift(&Maybe::Absent), Some(0));
}

#[test]
fn test_match_with_on_filtered_values() {
    let result = present(8)
        .select(|n| n % 2 == 0)
        .map(|n| n / 2)
        .match_with(|m| m.present((), |n| *n).absent(|| 0));
    assert_eq!(result, Ok(4));

    let result = present(7)
        .select(|n| n % 2 == 0)
        .match_with(|m| m.present((), |n| *n).absent(|| 0));
    assert_eq!(result, Ok(0));
}

#[test]
fn test_success_behaves_like_its_payload() {
    let ok = success(3);
    assert_eq!(ok.get(), Ok(&3));
    assert_eq!(ok.clone().get_or_else(|| 42), 3);
    assert_eq!(ok.clone().or_else(|| success(42)), success(3));

    let mut seen = Vec::new();
    ok.each(|x| seen.push(*x))
        .map(|x| x + 1)
        .each(|x| seen.push(*x));
    failure::<i32>(CapturedError::new("io", "closed")).each(|x| seen.push(*x));
    assert_eq!(seen, vec![3, 4]);
}

proptest! {
    #[test]
    fn failures_never_invoke_the_function(message in "[a-z]{1,8}") {
        let calls = AtomicUsize::new(0);
        let failed: Outcome<i64> = failure(CapturedError::new("prop", message.clone()));

        let mapped = failed.clone().map(|x| { calls.fetch_add(1, Ordering::SeqCst); x + 1 });
        let chained = failed.flat_map(|x| { calls.fetch_add(1, Ordering::SeqCst); success(x) });

        prop_assert_eq!(calls.load(Ordering::SeqCst), 0);
        prop_assert_eq!(mapped.error().map(|e| e.message().to_string()), Some(message.clone()));
        prop_assert_eq!(chained.error().map(|e| e.message().to_string()), Some(message));
    }

    #[test]
    fn successes_invoke_the_function_once(x in any::<i32>()) {
        let calls = AtomicUsize::new(0);
        let mapped = right::<String, i32>(x).map(|v| { calls.fetch_add(1, Ordering::SeqCst); i64::from(v) * 2 });
        prop_assert_eq!(calls.load(Ordering::SeqCst), 1);
        prop_assert_eq!(mapped, Either::Right(i64::from(x) * 2));

        let kept = present(x).select(|_| true);
        prop_assert_eq!(kept, Maybe::Present(x));
    }
}
