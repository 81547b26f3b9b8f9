//! Matchers specialised to two-variant containers
//!
//! A success-biased branch is the composition of two partial functions: one
//! that extracts the payload of the success variant, and a [`Case`] over
//! that payload. Since `and_then` is undefined wherever either stage is, a
//! payload that fails the branch's patterns (or guard) leaves the whole
//! branch undefined and the matcher moves on to the next one. Failure-biased
//! branches are the mirror image.
//!
//! ```
//! use sumcase_core::Pattern;
//! use sumcase_types::{right, Either, MatchWith};
//!
//! let parsed: Either<String, i64> = right(41);
//! let described = parsed.match_with(|m| {
//!     m.right(Pattern::predicate(|n: &i64| *n > 0), |n| format!("positive {}", n))
//!         .left((), |err: &String| format!("error {}", err))
//! });
//! assert_eq!(described.unwrap(), "positive 41");
//! ```

use std::fmt;
use std::marker::PhantomData;

use sumcase_core::{
    Case, Diagnostics, Matchable, Matcher, PartialFunction, Patterns, TotalMatcher,
};
use sumcase_error::MatchError;

use crate::either::Either;
use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::sum::SumType;

//-----------------------------------------------------------------------------
// Payload Extraction
//-----------------------------------------------------------------------------

/// Partial function defined on the success variant, yielding its payload
pub struct SuccessPayload<C>(PhantomData<fn() -> C>);

impl<C> SuccessPayload<C> {
    pub fn new() -> Self {
        SuccessPayload(PhantomData)
    }
}

impl<C> Default for SuccessPayload<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> PartialFunction<C, C::Success> for SuccessPayload<C>
where
    C: SumType,
    C::Success: Clone,
{
    fn is_defined_at(&self, x: &C) -> bool {
        x.success_payload().is_some()
    }

    fn lift(&self, x: &C) -> Option<C::Success> {
        x.success_payload().cloned()
    }
}

/// Partial function defined on the failure variant, yielding its payload
pub struct FailurePayload<C>(PhantomData<fn() -> C>);

impl<C> FailurePayload<C> {
    pub fn new() -> Self {
        FailurePayload(PhantomData)
    }
}

impl<C> Default for FailurePayload<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> PartialFunction<C, C::Failure> for FailurePayload<C>
where
    C: SumType,
    C::Failure: Clone,
{
    fn is_defined_at(&self, x: &C) -> bool {
        x.failure_payload().is_some()
    }

    fn lift(&self, x: &C) -> Option<C::Failure> {
        x.failure_payload().cloned()
    }
}

/// Branch over the success payload of `C`. The payload is tested in place.
pub struct SuccessBranch<C, B>
where
    C: SumType,
    C::Success: Matchable,
{
    case: Case<C::Success, B>,
    _container: PhantomData<fn() -> C>,
}

impl<C, B> PartialFunction<C, B> for SuccessBranch<C, B>
where
    C: SumType,
    C::Success: Matchable,
{
    fn is_defined_at(&self, x: &C) -> bool {
        x.success_payload()
            .map_or(false, |payload| self.case.is_defined_at(payload))
    }

    fn lift(&self, x: &C) -> Option<B> {
        self.case.lift(x.success_payload()?)
    }
}

/// Branch over the failure payload of `C`. The payload is tested in place.
pub struct FailureBranch<C, B>
where
    C: SumType,
    C::Failure: Matchable,
{
    case: Case<C::Failure, B>,
    _container: PhantomData<fn() -> C>,
}

impl<C, B> PartialFunction<C, B> for FailureBranch<C, B>
where
    C: SumType,
    C::Failure: Matchable,
{
    fn is_defined_at(&self, x: &C) -> bool {
        x.failure_payload()
            .map_or(false, |payload| self.case.is_defined_at(payload))
    }

    fn lift(&self, x: &C) -> Option<B> {
        self.case.lift(x.failure_payload()?)
    }
}

/// Lift a case over the success payload to a branch over the container.
///
/// Behaves like `SuccessPayload::new().and_then(case)` without cloning the
/// payload.
pub fn on_success<C, B>(case: Case<C::Success, B>) -> SuccessBranch<C, B>
where
    C: SumType,
    C::Success: Matchable,
{
    SuccessBranch {
        case,
        _container: PhantomData,
    }
}

/// Lift a case over the failure payload to a branch over the container
pub fn on_failure<C, B>(case: Case<C::Failure, B>) -> FailureBranch<C, B>
where
    C: SumType,
    C::Failure: Matchable,
{
    FailureBranch {
        case,
        _container: PhantomData,
    }
}

//-----------------------------------------------------------------------------
// One-Sided Matchers
//-----------------------------------------------------------------------------

/// Matcher whose branches only look at success payloads
pub struct SuccessMatcher<C, B> {
    matcher: Matcher<C, B>,
}

impl<C, B> SuccessMatcher<C, B>
where
    C: SumType + 'static,
    C::Success: Matchable + 'static,
    B: 'static,
{
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(),
        }
    }

    pub fn with_diagnostics(self, diagnostics: Diagnostics) -> Self {
        Self {
            matcher: self.matcher.with_diagnostics(diagnostics),
        }
    }

    pub fn success<F>(self, patterns: impl Into<Patterns<C::Success>>, effect: F) -> Self
    where
        F: Fn(&C::Success) -> B + Send + Sync + 'static,
    {
        Self {
            matcher: self.matcher.or_else(on_success(Case::new(patterns, effect))),
        }
    }

    pub fn success_if<G, F>(
        self,
        patterns: impl Into<Patterns<C::Success>>,
        guard: G,
        effect: F,
    ) -> Self
    where
        G: Fn(&C::Success) -> bool + Send + Sync + 'static,
        F: Fn(&C::Success) -> B + Send + Sync + 'static,
    {
        Self {
            matcher: self
                .matcher
                .or_else(on_success(Case::new(patterns, effect).guard(guard))),
        }
    }

    pub fn call(&self, x: &C) -> Result<B, MatchError>
    where
        C: fmt::Debug,
    {
        self.matcher.call(x)
    }

    pub fn lift(&self, x: &C) -> Option<B> {
        self.matcher.lift(x)
    }

    pub fn into_matcher(self) -> Matcher<C, B> {
        self.matcher
    }
}

/// Matcher whose branches only look at failure payloads
pub struct FailureMatcher<C, B> {
    matcher: Matcher<C, B>,
}

impl<C, B> FailureMatcher<C, B>
where
    C: SumType + 'static,
    C::Failure: Matchable + 'static,
    B: 'static,
{
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(),
        }
    }

    pub fn with_diagnostics(self, diagnostics: Diagnostics) -> Self {
        Self {
            matcher: self.matcher.with_diagnostics(diagnostics),
        }
    }

    pub fn failure<F>(self, patterns: impl Into<Patterns<C::Failure>>, effect: F) -> Self
    where
        F: Fn(&C::Failure) -> B + Send + Sync + 'static,
    {
        Self {
            matcher: self.matcher.or_else(on_failure(Case::new(patterns, effect))),
        }
    }

    pub fn failure_if<G, F>(
        self,
        patterns: impl Into<Patterns<C::Failure>>,
        guard: G,
        effect: F,
    ) -> Self
    where
        G: Fn(&C::Failure) -> bool + Send + Sync + 'static,
        F: Fn(&C::Failure) -> B + Send + Sync + 'static,
    {
        Self {
            matcher: self
                .matcher
                .or_else(on_failure(Case::new(patterns, effect).guard(guard))),
        }
    }

    pub fn call(&self, x: &C) -> Result<B, MatchError>
    where
        C: fmt::Debug,
    {
        self.matcher.call(x)
    }

    pub fn lift(&self, x: &C) -> Option<B> {
        self.matcher.lift(x)
    }

    pub fn into_matcher(self) -> Matcher<C, B> {
        self.matcher
    }
}

impl<C, B> Default for SuccessMatcher<C, B>
where
    C: SumType + 'static,
    C::Success: Matchable + 'static,
    B: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C, B> Default for FailureMatcher<C, B>
where
    C: SumType + 'static,
    C::Failure: Matchable + 'static,
    B: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C, B> PartialFunction<C, B> for SuccessMatcher<C, B> {
    fn is_defined_at(&self, x: &C) -> bool {
        self.matcher.is_defined_at(x)
    }

    fn lift(&self, x: &C) -> Option<B> {
        PartialFunction::lift(&self.matcher, x)
    }
}

impl<C, B> PartialFunction<C, B> for FailureMatcher<C, B> {
    fn is_defined_at(&self, x: &C) -> bool {
        self.matcher.is_defined_at(x)
    }

    fn lift(&self, x: &C) -> Option<B> {
        PartialFunction::lift(&self.matcher, x)
    }
}

//-----------------------------------------------------------------------------
// Combined Matcher
//-----------------------------------------------------------------------------

/// Matcher mixing success branches, failure branches and cases over the
/// container itself, tried in declaration order
pub struct SumMatcher<C, B> {
    matcher: Matcher<C, B>,
}

impl<C, B> SumMatcher<C, B>
where
    C: SumType + 'static,
    B: 'static,
{
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(),
        }
    }

    pub fn with_diagnostics(self, diagnostics: Diagnostics) -> Self {
        Self {
            matcher: self.matcher.with_diagnostics(diagnostics),
        }
    }

    /// Branch on the success payload
    pub fn success<F>(self, patterns: impl Into<Patterns<C::Success>>, effect: F) -> Self
    where
        C::Success: Matchable + 'static,
        F: Fn(&C::Success) -> B + Send + Sync + 'static,
    {
        self.or_else(on_success(Case::new(patterns, effect)))
    }

    /// Guarded branch on the success payload
    pub fn success_if<G, F>(
        self,
        patterns: impl Into<Patterns<C::Success>>,
        guard: G,
        effect: F,
    ) -> Self
    where
        C::Success: Matchable + 'static,
        G: Fn(&C::Success) -> bool + Send + Sync + 'static,
        F: Fn(&C::Success) -> B + Send + Sync + 'static,
    {
        self.or_else(on_success(Case::new(patterns, effect).guard(guard)))
    }

    /// Branch on the failure payload
    pub fn failure<F>(self, patterns: impl Into<Patterns<C::Failure>>, effect: F) -> Self
    where
        C::Failure: Matchable + 'static,
        F: Fn(&C::Failure) -> B + Send + Sync + 'static,
    {
        self.or_else(on_failure(Case::new(patterns, effect)))
    }

    /// Guarded branch on the failure payload
    pub fn failure_if<G, F>(
        self,
        patterns: impl Into<Patterns<C::Failure>>,
        guard: G,
        effect: F,
    ) -> Self
    where
        C::Failure: Matchable + 'static,
        G: Fn(&C::Failure) -> bool + Send + Sync + 'static,
        F: Fn(&C::Failure) -> B + Send + Sync + 'static,
    {
        self.or_else(on_failure(Case::new(patterns, effect).guard(guard)))
    }

    /// Branch on the container value itself
    pub fn case<F>(self, patterns: impl Into<Patterns<C>>, effect: F) -> Self
    where
        C: Matchable,
        F: Fn(&C) -> B + Send + Sync + 'static,
    {
        self.or_else(Case::new(patterns, effect))
    }

    /// Append any partial function over the container
    pub fn or_else<P>(self, branch: P) -> Self
    where
        P: PartialFunction<C, B> + 'static,
    {
        Self {
            matcher: self.matcher.or_else(branch),
        }
    }

    /// Attach the catch-all branch
    pub fn else_<F>(self, effect: F) -> TotalMatcher<C, B>
    where
        F: Fn(&C) -> B + Send + Sync + 'static,
    {
        self.matcher.else_(effect)
    }

    pub fn into_matcher(self) -> Matcher<C, B> {
        self.matcher
    }
}

impl<C, B> SumMatcher<C, B> {
    pub fn call(&self, x: &C) -> Result<B, MatchError>
    where
        C: fmt::Debug,
    {
        self.matcher.call(x)
    }

    pub fn lift(&self, x: &C) -> Option<B> {
        self.matcher.lift(x)
    }

    pub fn len(&self) -> usize {
        self.matcher.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matcher.is_empty()
    }
}

impl<C, B> Default for SumMatcher<C, B>
where
    C: SumType + 'static,
    B: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C, B> fmt::Debug for SumMatcher<C, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SumMatcher")
            .field("branches", &self.matcher.len())
            .finish()
    }
}

impl<C, B> PartialFunction<C, B> for SumMatcher<C, B> {
    fn is_defined_at(&self, x: &C) -> bool {
        self.matcher.is_defined_at(x)
    }

    fn lift(&self, x: &C) -> Option<B> {
        self.matcher.lift(x)
    }
}

//-----------------------------------------------------------------------------
// Family Aliases
//-----------------------------------------------------------------------------

impl<T, B> SumMatcher<Maybe<T>, B>
where
    T: Matchable + 'static,
    B: 'static,
{
    pub fn present<F>(self, patterns: impl Into<Patterns<T>>, effect: F) -> Self
    where
        F: Fn(&T) -> B + Send + Sync + 'static,
    {
        self.success(patterns, effect)
    }

    pub fn present_if<G, F>(self, patterns: impl Into<Patterns<T>>, guard: G, effect: F) -> Self
    where
        G: Fn(&T) -> bool + Send + Sync + 'static,
        F: Fn(&T) -> B + Send + Sync + 'static,
    {
        self.success_if(patterns, guard, effect)
    }

    /// `Absent` carries no payload, so there is nothing to pattern over
    pub fn absent<F>(self, effect: F) -> Self
    where
        F: Fn() -> B + Send + Sync + 'static,
    {
        self.failure((), move |_: &()| effect())
    }
}

impl<L, R, B> SumMatcher<Either<L, R>, B>
where
    L: Matchable + 'static,
    R: Matchable + 'static,
    B: 'static,
{
    pub fn right<F>(self, patterns: impl Into<Patterns<R>>, effect: F) -> Self
    where
        F: Fn(&R) -> B + Send + Sync + 'static,
    {
        self.success(patterns, effect)
    }

    pub fn right_if<G, F>(self, patterns: impl Into<Patterns<R>>, guard: G, effect: F) -> Self
    where
        G: Fn(&R) -> bool + Send + Sync + 'static,
        F: Fn(&R) -> B + Send + Sync + 'static,
    {
        self.success_if(patterns, guard, effect)
    }

    pub fn left<F>(self, patterns: impl Into<Patterns<L>>, effect: F) -> Self
    where
        F: Fn(&L) -> B + Send + Sync + 'static,
    {
        self.failure(patterns, effect)
    }

    pub fn left_if<G, F>(self, patterns: impl Into<Patterns<L>>, guard: G, effect: F) -> Self
    where
        G: Fn(&L) -> bool + Send + Sync + 'static,
        F: Fn(&L) -> B + Send + Sync + 'static,
    {
        self.failure_if(patterns, guard, effect)
    }
}

//-----------------------------------------------------------------------------
// One-Shot Matching
//-----------------------------------------------------------------------------

/// Build a matcher for one value and run it straight away
pub trait MatchWith: SumType + fmt::Debug + Sized + 'static {
    fn match_with<B, D>(&self, define: D) -> Result<B, MatchError>
    where
        B: 'static,
        D: FnOnce(SumMatcher<Self, B>) -> SumMatcher<Self, B>,
    {
        define(SumMatcher::new()).call(self)
    }
}

impl<T: fmt::Debug + 'static> MatchWith for Maybe<T> {}

impl<L: fmt::Debug + 'static, R: fmt::Debug + 'static> MatchWith for Either<L, R> {}

impl<T: fmt::Debug + 'static> MatchWith for Outcome<T> {}
