//! Partial functions
//!
//! A partial function is defined on a subset of its domain and exposes the
//! definedness test separately from evaluation. Everything the matcher does
//! is built from the combinators in this module: branches are partial
//! functions, `or_else` is alternation and `and_then` pipes the result of
//! one partial function into the next.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use sumcase_error::MatchError;

//-----------------------------------------------------------------------------
// Trait
//-----------------------------------------------------------------------------

/// A function defined only on part of its input domain.
///
/// `lift` is the primitive operation: it returns `None` outside the domain
/// and otherwise evaluates the function exactly once. `apply` is the
/// checked call that fails with [`MatchError`] instead of proceeding on an
/// undefined input.
pub trait PartialFunction<A, B>: Send + Sync {
    /// Whether the function is defined at `x`. Must not have side effects
    /// beyond evaluating the stages needed to answer.
    fn is_defined_at(&self, x: &A) -> bool;

    /// Evaluate at `x` if defined.
    fn lift(&self, x: &A) -> Option<B>;

    /// Evaluate at `x`, failing with [`MatchError`] when undefined.
    fn apply(&self, x: &A) -> Result<B, MatchError>
    where
        A: fmt::Debug,
    {
        self.lift(x).ok_or_else(|| MatchError::new(x))
    }

    /// Evaluate at `x`, or compute `default` from `x` when undefined.
    fn call_or_else<D>(&self, x: &A, default: D) -> B
    where
        Self: Sized,
        D: FnOnce(&A) -> B,
    {
        match self.lift(x) {
            Some(y) => y,
            None => default(x),
        }
    }

    /// Fall back to `other` wherever `self` is undefined.
    fn or_else<G>(self, other: G) -> OrElse<Self, G>
    where
        Self: Sized,
        G: PartialFunction<A, B>,
    {
        OrElse {
            first: self,
            second: other,
        }
    }

    /// Feed results of `self` into `other`.
    fn and_then<C, G>(self, other: G) -> AndThen<Self, G, B>
    where
        Self: Sized,
        G: PartialFunction<B, C>,
    {
        AndThen {
            first: self,
            second: other,
            _intermediate: PhantomData,
        }
    }

    /// Feed results of `self` into the total function `f`.
    fn and_then_total<C, F>(self, f: F) -> AndThen<Self, Total<F>, B>
    where
        Self: Sized,
        F: Fn(&B) -> C + Send + Sync,
    {
        self.and_then(Total(f))
    }

    /// Erase the concrete type.
    fn boxed(self) -> BoxedPartial<A, B>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// Type-erased partial function
pub type BoxedPartial<A, B> = Box<dyn PartialFunction<A, B>>;

impl<A, B, P> PartialFunction<A, B> for Box<P>
where
    P: PartialFunction<A, B> + ?Sized,
{
    fn is_defined_at(&self, x: &A) -> bool {
        (**self).is_defined_at(x)
    }

    fn lift(&self, x: &A) -> Option<B> {
        (**self).lift(x)
    }
}

impl<A, B, P> PartialFunction<A, B> for Arc<P>
where
    P: PartialFunction<A, B> + ?Sized,
{
    fn is_defined_at(&self, x: &A) -> bool {
        (**self).is_defined_at(x)
    }

    fn lift(&self, x: &A) -> Option<B> {
        (**self).lift(x)
    }
}

//-----------------------------------------------------------------------------
// Combinators
//-----------------------------------------------------------------------------

/// Alternation of two partial functions, preferring the first
pub struct OrElse<F, G> {
    first: F,
    second: G,
}

impl<A, B, F, G> PartialFunction<A, B> for OrElse<F, G>
where
    F: PartialFunction<A, B>,
    G: PartialFunction<A, B>,
{
    fn is_defined_at(&self, x: &A) -> bool {
        self.first.is_defined_at(x) || self.second.is_defined_at(x)
    }

    fn lift(&self, x: &A) -> Option<B> {
        self.first.lift(x).or_else(|| self.second.lift(x))
    }
}

/// Sequential composition through an intermediate value of type `M`
pub struct AndThen<F, G, M> {
    first: F,
    second: G,
    _intermediate: PhantomData<fn() -> M>,
}

impl<A, M, C, F, G> PartialFunction<A, C> for AndThen<F, G, M>
where
    F: PartialFunction<A, M>,
    G: PartialFunction<M, C>,
{
    // The second stage can only be tested against the first stage's output.
    fn is_defined_at(&self, x: &A) -> bool {
        self.first
            .lift(x)
            .map_or(false, |m| self.second.is_defined_at(&m))
    }

    // The intermediate value is computed once and handed straight on.
    fn lift(&self, x: &A) -> Option<C> {
        let m = self.first.lift(x)?;
        self.second.lift(&m)
    }
}

//-----------------------------------------------------------------------------
// Constructors
//-----------------------------------------------------------------------------

/// A function defined everywhere
pub struct Total<F>(pub F);

impl<A, B, F> PartialFunction<A, B> for Total<F>
where
    F: Fn(&A) -> B + Send + Sync,
{
    fn is_defined_at(&self, _x: &A) -> bool {
        true
    }

    fn lift(&self, x: &A) -> Option<B> {
        Some((self.0)(x))
    }
}

/// A function whose domain is given by a predicate
pub struct FromFn<D, F> {
    defined: D,
    function: F,
}

impl<A, B, D, F> PartialFunction<A, B> for FromFn<D, F>
where
    D: Fn(&A) -> bool + Send + Sync,
    F: Fn(&A) -> B + Send + Sync,
{
    fn is_defined_at(&self, x: &A) -> bool {
        (self.defined)(x)
    }

    fn lift(&self, x: &A) -> Option<B> {
        if (self.defined)(x) {
            Some((self.function)(x))
        } else {
            None
        }
    }
}

/// A function defined nowhere
pub struct Empty;

impl<A, B> PartialFunction<A, B> for Empty {
    fn is_defined_at(&self, _x: &A) -> bool {
        false
    }

    fn lift(&self, _x: &A) -> Option<B> {
        None
    }
}

/// Wrap a total function
pub fn total<A, B, F>(f: F) -> Total<F>
where
    F: Fn(&A) -> B + Send + Sync,
{
    Total(f)
}

/// Build a partial function from a domain predicate and a body
pub fn from_fn<A, B, D, F>(defined: D, function: F) -> FromFn<D, F>
where
    D: Fn(&A) -> bool + Send + Sync,
    F: Fn(&A) -> B + Send + Sync,
{
    FromFn { defined, function }
}

/// The partial function with an empty domain
pub fn empty() -> Empty {
    Empty
}

//-----------------------------------------------------------------------------
// Tests
//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn positive() -> impl PartialFunction<i64, String> {
        from_fn(|x: &i64| *x > 0, |x: &i64| format!("+{}", x))
    }

    fn negative() -> impl PartialFunction<i64, String> {
        from_fn(|x: &i64| *x < 0, |x: &i64| format!("{}", x))
    }

    #[test]
    fn test_apply_fails_fast_outside_domain() {
        let pf = positive();
        assert_eq!(pf.apply(&3), Ok("+3".to_string()));

        let err = pf.apply(&-3).unwrap_err();
        assert_eq!(err.value(), "-3");
    }

    #[test]
    fn test_or_else_prefers_first() {
        let both = from_fn(|x: &i64| *x >= 0, |_: &i64| "first")
            .or_else(from_fn(|x: &i64| *x <= 0, |_: &i64| "second"));

        assert_eq!(both.lift(&0), Some("first"));
        assert_eq!(both.lift(&-1), Some("second"));
        assert!(both.is_defined_at(&5));
    }

    #[test]
    fn test_or_else_union_of_domains() {
        let sign = positive().or_else(negative());
        assert!(sign.is_defined_at(&1));
        assert!(sign.is_defined_at(&-1));
        assert!(!sign.is_defined_at(&0));
        assert_eq!(sign.call_or_else(&0, |_| "zero".to_string()), "zero");
    }

    #[test]
    fn test_and_then_requires_both_stages() {
        let halve = from_fn(|x: &i64| x % 2 == 0, |x: &i64| x / 2);
        let composed = halve.and_then(positive());

        assert_eq!(composed.lift(&8), Some("+4".to_string()));
        assert!(!composed.is_defined_at(&3));
        assert!(!composed.is_defined_at(&-4));
    }

    #[test]
    fn test_and_then_evaluates_first_stage_once_per_lift() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let counted = total(move |x: &i64| {
            counter.fetch_add(1, Ordering::SeqCst);
            *x
        });
        let composed = counted.and_then(positive());

        assert_eq!(composed.lift(&2), Some("+2".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_and_then_total_maps_result() {
        let len = positive().and_then_total(|s: &String| s.len());
        assert_eq!(len.lift(&42), Some(3));
        assert_eq!(len.lift(&-42), None);
    }

    #[test]
    fn test_empty_and_boxed() {
        let nothing: BoxedPartial<i64, i64> = empty().boxed();
        assert!(!nothing.is_defined_at(&1));
        assert_eq!(nothing.lift(&1), None);

        let shared: Arc<dyn PartialFunction<i64, String>> = Arc::new(positive());
        let fallback = Arc::clone(&shared).or_else(negative());
        assert_eq!(fallback.lift(&-2), Some("-2".to_string()));
    }
}
