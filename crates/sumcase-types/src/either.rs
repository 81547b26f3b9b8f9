//! Disjoint unions
//!
//! `Either` holds a `Left` or a `Right` value. Right-biased operations act
//! on `Right` and pass `Left` through untouched. There is no natural empty
//! value, so filtering takes an explicit replacement.

use std::fmt;

use sumcase_core::Matchable;

use crate::biased::RightBiased;
use crate::sum::{SumType, Variant};

/// One of two values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    pub fn left_value(&self) -> Option<&L> {
        match self {
            Either::Left(value) => Some(value),
            Either::Right(_) => None,
        }
    }

    pub fn right_value(&self) -> Option<&R> {
        match self {
            Either::Left(_) => None,
            Either::Right(value) => Some(value),
        }
    }

    /// Exchange the sides
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(value) => Either::Right(value),
            Either::Right(value) => Either::Left(value),
        }
    }

    /// Collapse both sides into one value
    pub fn fold<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        match self {
            Either::Left(value) => on_left(value),
            Either::Right(value) => on_right(value),
        }
    }

    pub fn map_left<M>(self, f: impl FnOnce(L) -> M) -> Either<M, R> {
        match self {
            Either::Left(value) => Either::Left(f(value)),
            Either::Right(value) => Either::Right(value),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(value: Result<R, L>) -> Self {
        match value {
            Ok(value) => Either::Right(value),
            Err(value) => Either::Left(value),
        }
    }
}

impl<L, R> SumType for Either<L, R> {
    type Success = R;
    type Failure = L;

    const SUCCESS_VARIANT: &'static str = "Right";
    const FAILURE_VARIANT: &'static str = "Left";

    fn success_payload(&self) -> Option<&R> {
        self.right_value()
    }

    fn failure_payload(&self) -> Option<&L> {
        self.left_value()
    }
}

impl<L, R> RightBiased for Either<L, R> {
    type Rebind<U> = Either<L, U>;

    fn into_success<U>(self) -> Result<R, Either<L, U>> {
        match self {
            Either::Left(value) => Err(Either::Left(value)),
            Either::Right(value) => Ok(value),
        }
    }

    fn wrap<U>(value: U) -> Either<L, U> {
        Either::Right(value)
    }

    fn from_rebound(rebound: Either<L, R>) -> Self {
        rebound
    }
}

impl<L, R> Matchable for Either<L, R>
where
    L: PartialEq + fmt::Debug + Send + Sync,
    R: PartialEq + fmt::Debug + Send + Sync,
{
    type Kind = Variant;

    fn is_a(&self, kind: &Variant) -> bool {
        self.variant() == *kind
    }
}
