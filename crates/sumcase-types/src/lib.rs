//! Sumcase containers
//!
//! `Maybe`, `Either` and `Outcome` are closed two-variant enums sharing one
//! set of right-biased operations ([`RightBiased`]) and one family of
//! variant-aware matchers ([`SumMatcher`]).

pub mod biased;
pub mod either;
pub mod factory;
pub mod matching;
pub mod maybe;
pub mod outcome;
pub mod sum;

pub use biased::{Filterable, RightBiased};
pub use either::Either;
pub use factory::{
    absent, attempt, attempt_anyhow, catching, failure, left, present, right, success,
};
pub use matching::{
    on_failure, on_success, FailureBranch, FailureMatcher, FailurePayload, MatchWith,
    SuccessBranch, SuccessMatcher, SuccessPayload, SumMatcher,
};
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use sum::{SumType, Variant};

pub use sumcase_error::{CapturedError, NoSuchElement};
