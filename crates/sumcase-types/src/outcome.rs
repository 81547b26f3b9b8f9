//! Results of computations that may fail
//!
//! `Outcome` holds either the value a computation produced or the
//! [`CapturedError`] it raised. Filtering a `Success` whose payload is
//! rejected turns it into a `Failure` carrying a [`NoSuchElement`] error.

use std::fmt;

use sumcase_core::{Matchable, PartialFunction};
use sumcase_error::{CapturedError, NoSuchElement};

use crate::biased::{Filterable, RightBiased};
use crate::sum::{SumType, Variant};

/// The value of a computation, or the error it raised
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Failure(CapturedError),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// The captured error of a `Failure`
    pub fn error(&self) -> Option<&CapturedError> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(err) => Some(err),
        }
    }

    /// Turn failures the handler is defined at into successes.
    ///
    /// ```
    /// use sumcase_core::{Matcher, Pattern};
    /// use sumcase_error::CapturedError;
    /// use sumcase_types::Outcome;
    ///
    /// let handler = Matcher::new().case(Pattern::kind(CapturedError::PANIC), |_: &CapturedError| 0);
    /// let failed: Outcome<i32> = Outcome::Failure(CapturedError::new("panic", "boom"));
    /// assert_eq!(failed.recover(&handler), Outcome::Success(0));
    /// ```
    pub fn recover<P>(self, handler: &P) -> Self
    where
        P: PartialFunction<CapturedError, T> + ?Sized,
    {
        match self {
            Outcome::Failure(err) => match handler.lift(&err) {
                Some(value) => Outcome::Success(value),
                None => Outcome::Failure(err),
            },
            success => success,
        }
    }

    /// Replace failures the handler is defined at with the outcome it returns
    pub fn recover_with<P>(self, handler: &P) -> Self
    where
        P: PartialFunction<CapturedError, Outcome<T>> + ?Sized,
    {
        match self {
            Outcome::Failure(err) => handler.lift(&err).unwrap_or(Outcome::Failure(err)),
            success => success,
        }
    }

    /// Convert into a `Result`, exposing the captured error
    pub fn into_result(self) -> Result<T, CapturedError> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(err) => Err(err),
        }
    }
}

impl<T> SumType for Outcome<T> {
    type Success = T;
    type Failure = CapturedError;

    const SUCCESS_VARIANT: &'static str = "Success";
    const FAILURE_VARIANT: &'static str = "Failure";

    fn success_payload(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    fn failure_payload(&self) -> Option<&CapturedError> {
        self.error()
    }
}

impl<T> RightBiased for Outcome<T> {
    type Rebind<U> = Outcome<U>;

    fn into_success<U>(self) -> Result<T, Outcome<U>> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(err) => Err(Outcome::Failure(err)),
        }
    }

    fn wrap<U>(value: U) -> Outcome<U> {
        Outcome::Success(value)
    }

    fn from_rebound(rebound: Outcome<T>) -> Self {
        rebound
    }
}

impl<T: fmt::Debug> Filterable for Outcome<T> {
    fn empty_for(rejected: T) -> Self {
        Outcome::Failure(CapturedError::from_error(NoSuchElement::predicate_failed(
            &rejected,
        )))
    }
}

impl<T> Matchable for Outcome<T>
where
    T: PartialEq + fmt::Debug + Send + Sync,
{
    type Kind = Variant;

    fn is_a(&self, kind: &Variant) -> bool {
        self.variant() == *kind
    }
}
