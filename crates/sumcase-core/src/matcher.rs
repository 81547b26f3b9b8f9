//! The pattern-matching engine
//!
//! A [`Matcher`] is an ordered list of branches. Calling it tries the
//! branches in the order they were added and evaluates the first one that
//! is defined at the value; there is no specificity ranking. Attaching a
//! catch-all with [`Matcher::else_`] seals the matcher into a
//! [`TotalMatcher`], which can no longer fail.
//!
//! Building consumes the matcher by value, so the branch list can only be
//! extended by its single owner. Once built, a matcher is used through
//! `&self` and is `Send + Sync`, so it can be shared behind an `Arc`.
//!
//! ```
//! use sumcase_core::{Matcher, Pattern, Value, ValueKind};
//!
//! let matcher = Matcher::new()
//!     .case(Pattern::kind(ValueKind::Int), |x: &Value| Value::Int(x.as_int().unwrap_or(0) * 2))
//!     .case(Pattern::kind(ValueKind::Str), |x: &Value| {
//!         Value::Int(x.as_str().map_or(0, |s| s.len() as i64))
//!     })
//!     .else_(|_| Value::symbol("other"));
//!
//! assert_eq!(matcher.call(&Value::Int(5)), Value::Int(10));
//! assert_eq!(matcher.call(&Value::from("ab")), Value::Int(2));
//! assert_eq!(matcher.call(&Value::Float(3.14)), Value::symbol("other"));
//! ```

use std::fmt;
use std::sync::Arc;

use sumcase_error::MatchError;
use tracing::{debug, trace};

use crate::case::{Case, Effect};
use crate::config::Diagnostics;
use crate::partial::{BoxedPartial, PartialFunction};
use crate::pattern::{Matchable, Patterns};

//-----------------------------------------------------------------------------
// Matcher
//-----------------------------------------------------------------------------

/// Ordered list of branches, first match wins
pub struct Matcher<A, B> {
    branches: Vec<BoxedPartial<A, B>>,
    diagnostics: Diagnostics,
}

impl<A: 'static, B: 'static> Matcher<A, B> {
    /// Create a matcher with no branches
    pub fn new() -> Self {
        Self {
            branches: Vec::new(),
            diagnostics: Diagnostics::default(),
        }
    }

    /// Build a matcher by mutating it in a closure
    pub fn build(define: impl FnOnce(&mut Self)) -> Self {
        let mut matcher = Self::new();
        define(&mut matcher);
        matcher
    }

    /// Use `diagnostics` for dispatch tracing and error rendering
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Append a branch accepting values that pass any of `patterns`
    pub fn case<F>(self, patterns: impl Into<Patterns<A>>, effect: F) -> Self
    where
        A: Matchable,
        F: Fn(&A) -> B + Send + Sync + 'static,
    {
        self.or_else(Case::new(patterns, effect))
    }

    /// Append a guarded branch. The guard only runs once `patterns` accept.
    pub fn case_if<G, F>(self, patterns: impl Into<Patterns<A>>, guard: G, effect: F) -> Self
    where
        A: Matchable,
        G: Fn(&A) -> bool + Send + Sync + 'static,
        F: Fn(&A) -> B + Send + Sync + 'static,
    {
        self.or_else(Case::new(patterns, effect).guard(guard))
    }

    /// Append any partial function as the next branch
    pub fn or_else<P>(mut self, branch: P) -> Self
    where
        P: PartialFunction<A, B> + 'static,
    {
        self.push(branch);
        self
    }

    /// Append a branch in place
    pub fn push<P>(&mut self, branch: P)
    where
        P: PartialFunction<A, B> + 'static,
    {
        self.branches.push(Box::new(branch));
    }

    /// Append a case in place
    pub fn push_case<F>(&mut self, patterns: impl Into<Patterns<A>>, effect: F)
    where
        A: Matchable,
        F: Fn(&A) -> B + Send + Sync + 'static,
    {
        self.push(Case::new(patterns, effect));
    }

    /// Attach the catch-all branch, sealing the matcher
    pub fn else_<F>(self, effect: F) -> TotalMatcher<A, B>
    where
        F: Fn(&A) -> B + Send + Sync + 'static,
    {
        TotalMatcher {
            matcher: self,
            fallback: Arc::new(effect),
        }
    }
}

impl<A, B> Matcher<A, B> {
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
    }

    fn dispatch(&self, x: &A) -> Option<B> {
        for (index, branch) in self.branches.iter().enumerate() {
            if let Some(result) = branch.lift(x) {
                if self.diagnostics.trace_dispatch {
                    trace!(branch = index, "matched branch");
                }
                return Some(result);
            }
        }
        None
    }

    /// Evaluate the first branch defined at `x`
    pub fn call(&self, x: &A) -> Result<B, MatchError>
    where
        A: fmt::Debug,
    {
        self.dispatch(x).ok_or_else(|| {
            let err = MatchError::with_limit(x, self.diagnostics.max_rendered_len);
            debug!(value = %err.value(), branches = self.branches.len(), "no branch matched");
            err
        })
    }

    /// Evaluate the first branch defined at `x`, or return `None`
    pub fn lift(&self, x: &A) -> Option<B> {
        self.dispatch(x)
    }
}

impl<A: 'static, B: 'static> Default for Matcher<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B> fmt::Debug for Matcher<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("branches", &self.branches.len())
            .field("diagnostics", &self.diagnostics)
            .finish()
    }
}

impl<A, B> PartialFunction<A, B> for Matcher<A, B> {
    fn is_defined_at(&self, x: &A) -> bool {
        self.branches.iter().any(|branch| branch.is_defined_at(x))
    }

    fn lift(&self, x: &A) -> Option<B> {
        self.dispatch(x)
    }

    fn apply(&self, x: &A) -> Result<B, MatchError>
    where
        A: fmt::Debug,
    {
        self.call(x)
    }
}

//-----------------------------------------------------------------------------
// Total Matcher
//-----------------------------------------------------------------------------

/// A matcher with a catch-all branch; defined at every value
pub struct TotalMatcher<A, B> {
    matcher: Matcher<A, B>,
    fallback: Effect<A, B>,
}

impl<A, B> TotalMatcher<A, B> {
    /// Evaluate the first defined branch, or the catch-all
    pub fn call(&self, x: &A) -> B {
        match self.matcher.dispatch(x) {
            Some(result) => result,
            None => {
                if self.matcher.diagnostics.trace_dispatch {
                    trace!(branch = "else", "matched branch");
                }
                (self.fallback)(x)
            }
        }
    }

    /// Number of branches before the catch-all
    pub fn len(&self) -> usize {
        self.matcher.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matcher.is_empty()
    }
}

impl<A, B> fmt::Debug for TotalMatcher<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TotalMatcher")
            .field("branches", &self.matcher.len())
            .finish()
    }
}

impl<A, B> PartialFunction<A, B> for TotalMatcher<A, B> {
    fn is_defined_at(&self, _x: &A) -> bool {
        true
    }

    fn lift(&self, x: &A) -> Option<B> {
        Some(self.call(x))
    }
}

//-----------------------------------------------------------------------------
// Tests
//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partial::from_fn;
    use crate::pattern::Pattern;
    use crate::value::{Value, ValueKind};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn classify() -> TotalMatcher<Value, Value> {
        Matcher::new()
            .case(Pattern::kind(ValueKind::Int), |x: &Value| {
                Value::Int(x.as_int().unwrap_or_default() * 2)
            })
            .case(Pattern::kind(ValueKind::Str), |x: &Value| {
                Value::Int(x.as_str().map_or(0, |s| s.len() as i64))
            })
            .else_(|_| Value::symbol("other"))
    }

    #[test]
    fn test_type_dispatch_with_catch_all() {
        let matcher = classify();
        assert_eq!(matcher.call(&Value::Int(5)), Value::Int(10));
        assert_eq!(matcher.call(&Value::from("ab")), Value::Int(2));
        assert_eq!(matcher.call(&Value::Float(3.14)), Value::symbol("other"));
        assert_eq!(matcher.len(), 2);
    }

    #[test]
    fn test_first_declared_branch_wins() {
        let matcher = Matcher::new()
            .case(Pattern::kind(ValueKind::Number), |_: &Value| "number")
            .case(Pattern::kind(ValueKind::Int), |_: &Value| "int");

        assert_eq!(matcher.call(&Value::Int(1)), Ok("number"));
    }

    #[test]
    fn test_exhaustion_reports_value() {
        let matcher: Matcher<i64, i64> = Matcher::new().case(Pattern::eq(1), |x: &i64| *x);
        let err = matcher.call(&2).unwrap_err();
        assert_eq!(err.value(), "2");
        assert_eq!(matcher.lift(&2), None);
        assert_eq!(matcher.lift(&1), Some(1));
    }

    #[test]
    fn test_diagnostics_truncate_rendered_value() {
        let diagnostics = Diagnostics {
            max_rendered_len: 3,
            trace_dispatch: false,
        };
        let matcher: Matcher<String, ()> = Matcher::new().with_diagnostics(diagnostics);
        let err = matcher.call(&"abcdef".to_string()).unwrap_err();
        assert_eq!(err.value(), "\"ab...");
    }

    #[test]
    fn test_guard_failure_falls_through() {
        let matcher = Matcher::new()
            .case_if(Pattern::kind(ValueKind::Int), |x: &Value| x.as_int() > Some(10), |_| "big")
            .case(Pattern::kind(ValueKind::Int), |_: &Value| "small");

        assert_eq!(matcher.call(&Value::Int(11)), Ok("big"));
        assert_eq!(matcher.call(&Value::Int(2)), Ok("small"));
    }

    #[test]
    fn test_later_branches_are_not_evaluated() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let matcher = Matcher::new()
            .case(Pattern::Any, |x: &i64| *x)
            .or_else(from_fn(
                move |_: &i64| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    true
                },
                |x: &i64| -x,
            ));

        assert_eq!(matcher.call(&3), Ok(3));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_build_block_form() {
        let matcher = Matcher::build(|m| {
            m.push_case(Pattern::eq(0_i64), |_| "zero");
            m.push_case((), |_| "nonzero");
        });

        assert_eq!(matcher.call(&0), Ok("zero"));
        assert_eq!(matcher.call(&7), Ok("nonzero"));
    }

    #[test]
    fn test_matchers_compose_as_partial_functions() {
        let small: Matcher<i64, &str> = Matcher::new().case(Pattern::predicate(|x: &i64| *x < 10), |_| "small");
        let large: Matcher<i64, &str> = Matcher::new().case(Pattern::predicate(|x: &i64| *x > 100), |_| "large");

        let either = small.or_else(large);
        assert!(either.is_defined_at(&5));
        assert!(!either.is_defined_at(&50));
        assert_eq!(either.call(&500), Ok("large"));

        let inner: Matcher<i64, i64> = Matcher::new().case(Pattern::Any, |x: &i64| x + 1);
        let nested = Matcher::new()
            .case(Pattern::eq(1_i64), |_| 0)
            .or_else(inner)
            .and_then(Matcher::new().case(Pattern::predicate(|x: &i64| x % 2 == 0), |x: &i64| x / 2));

        assert_eq!(nested.lift(&1), Some(0));
        assert_eq!(nested.lift(&3), Some(2));
        assert_eq!(nested.lift(&4), None);
    }

    #[test]
    fn test_total_matcher_is_defined_everywhere() {
        let matcher = classify();
        assert!(matcher.is_defined_at(&Value::Nil));
        assert_eq!(matcher.lift(&Value::Nil), Some(Value::symbol("other")));
    }

    #[test]
    fn test_matcher_is_shareable_across_threads() {
        let matcher = Arc::new(classify());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let matcher = Arc::clone(&matcher);
                std::thread::spawn(move || matcher.call(&Value::Int(i)))
            })
            .collect();

        let results: Vec<Value> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![Value::Int(0), Value::Int(2), Value::Int(4), Value::Int(6)]);
    }
}
