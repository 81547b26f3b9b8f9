//! Constructors for the containers
//!
//! `attempt` and `catching` run a computation and keep whatever it raised
//! as an [`Outcome::Failure`] instead of propagating it.

use std::error::Error as StdError;
use std::panic::{self, AssertUnwindSafe};

use sumcase_error::CapturedError;
use tracing::debug;

use crate::either::Either;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

pub fn present<T>(value: T) -> Maybe<T> {
    Maybe::Present(value)
}

pub fn absent<T>() -> Maybe<T> {
    Maybe::Absent
}

pub fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

pub fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

pub fn success<T>(value: T) -> Outcome<T> {
    Outcome::Success(value)
}

pub fn failure<T>(error: CapturedError) -> Outcome<T> {
    Outcome::Failure(error)
}

/// Run a fallible computation, capturing its error
pub fn attempt<T, E, F>(f: F) -> Outcome<T>
where
    E: StdError + Send + Sync + 'static,
    F: FnOnce() -> Result<T, E>,
{
    match f() {
        Ok(value) => Outcome::Success(value),
        Err(err) => captured(CapturedError::from_error(err)),
    }
}

/// Run a computation returning `anyhow::Result`, capturing its error chain
pub fn attempt_anyhow<T, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> anyhow::Result<T>,
{
    match f() {
        Ok(value) => Outcome::Success(value),
        Err(err) => captured(CapturedError::from(err)),
    }
}

/// Run a computation, capturing a panic as a failure.
///
/// The panic hook still runs, so the panic message is printed as usual.
pub fn catching<T, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => captured(CapturedError::from_panic(payload)),
    }
}

fn captured<T>(error: CapturedError) -> Outcome<T> {
    debug!(class = %error.class(), message = %error.message(), "captured failure");
    Outcome::Failure(error)
}
