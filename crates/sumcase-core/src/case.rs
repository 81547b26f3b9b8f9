//! Case branches
//!
//! A case is the unit a matcher is made of: a pattern list, an optional
//! guard and an effect. It is a partial function defined where the
//! patterns accept the value and the guard, if any, holds.

use std::fmt;
use std::sync::Arc;

use crate::partial::PartialFunction;
use crate::pattern::{Matchable, Patterns};

/// Shared branch effect
pub type Effect<A, B> = Arc<dyn Fn(&A) -> B + Send + Sync>;

/// Shared branch guard
pub type Guard<A> = Arc<dyn Fn(&A) -> bool + Send + Sync>;

/// A single `(patterns, guard, effect)` branch
pub struct Case<A: Matchable, B> {
    patterns: Patterns<A>,
    guard: Option<Guard<A>>,
    effect: Effect<A, B>,
}

impl<A: Matchable, B> Case<A, B> {
    /// Create a case accepting values that pass any of `patterns`
    pub fn new<F>(patterns: impl Into<Patterns<A>>, effect: F) -> Self
    where
        F: Fn(&A) -> B + Send + Sync + 'static,
    {
        Self {
            patterns: patterns.into(),
            guard: None,
            effect: Arc::new(effect),
        }
    }

    /// Create a case accepting every value
    pub fn otherwise<F>(effect: F) -> Self
    where
        F: Fn(&A) -> B + Send + Sync + 'static,
    {
        Self::new(Patterns::any(), effect)
    }

    /// Add a guard. Guards added later are conjoined with earlier ones.
    pub fn guard<G>(mut self, guard: G) -> Self
    where
        A: 'static,
        G: Fn(&A) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(match self.guard.take() {
            Some(previous) => Arc::new(move |x: &A| previous(x) && guard(x)),
            None => Arc::new(guard),
        });
        self
    }

    pub fn is_guarded(&self) -> bool {
        self.guard.is_some()
    }
}

impl<A: Matchable, B> PartialFunction<A, B> for Case<A, B> {
    // Guards only run once the patterns have accepted the value.
    fn is_defined_at(&self, x: &A) -> bool {
        self.patterns.test(x) && self.guard.as_ref().map_or(true, |guard| guard(x))
    }

    fn lift(&self, x: &A) -> Option<B> {
        if self.is_defined_at(x) {
            Some((self.effect)(x))
        } else {
            None
        }
    }
}

impl<A: Matchable, B> fmt::Debug for Case<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case")
            .field("patterns", &self.patterns)
            .field("guarded", &self.guard.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Pattern;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_case_without_patterns_matches_everything() {
        let case = Case::otherwise(|x: &i64| x + 1);
        assert!(case.is_defined_at(&-100));
        assert_eq!(case.lift(&1), Some(2));
    }

    #[test]
    fn test_case_patterns_are_alternatives() {
        let case = Case::new([Pattern::eq(1_i64), Pattern::eq(5)], |x: &i64| x * 10);
        assert_eq!(case.lift(&5), Some(50));
        assert_eq!(case.lift(&2), None);
    }

    #[test]
    fn test_guard_runs_only_after_patterns_accept() {
        let guard_calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&guard_calls);
        let case = Case::new(Pattern::eq(3_i64), |_: &i64| "three").guard(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        assert!(!case.is_defined_at(&4));
        assert_eq!(guard_calls.load(Ordering::SeqCst), 0);

        assert!(case.is_defined_at(&3));
        assert_eq!(guard_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failing_guard_makes_case_undefined() {
        let case = Case::new(Pattern::predicate(|x: &i64| *x > 0), |x: &i64| *x)
            .guard(|x| x % 2 == 0)
            .guard(|x| *x < 100);

        assert!(case.is_guarded());
        assert_eq!(case.lift(&4), Some(4));
        assert_eq!(case.lift(&3), None);
        assert_eq!(case.lift(&200), None);
    }
}
