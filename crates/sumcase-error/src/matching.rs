// Matching and container access errors

use std::any::Any;
use std::fmt;
use thiserror::Error;

use crate::{codes, ErrorCode, ErrorDomain, SumcaseError};

/// Default upper bound, in characters, for a value rendered into an error.
pub const DEFAULT_RENDER_LIMIT: usize = 256;

/// Render a value with its `Debug` form, truncated to `limit` characters.
pub fn render_value<V: fmt::Debug + ?Sized>(value: &V, limit: usize) -> String {
    let rendered = format!("{:?}", value);
    match rendered.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &rendered[..cut]),
        None => rendered,
    }
}

/// No branch of a matcher was defined at the value and no catch-all was set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no branch matched value {value}")]
pub struct MatchError {
    value: String,
}

impl MatchError {
    /// Create a match error for `value` using the default render limit
    pub fn new<V: fmt::Debug + ?Sized>(value: &V) -> Self {
        Self::with_limit(value, DEFAULT_RENDER_LIMIT)
    }

    /// Create a match error, rendering at most `limit` characters of `value`
    pub fn with_limit<V: fmt::Debug + ?Sized>(value: &V, limit: usize) -> Self {
        Self {
            value: render_value(value, limit),
        }
    }

    /// The rendered unmatched value
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl SumcaseError for MatchError {
    fn error_code(&self) -> &'static str {
        "MATCH_NO_BRANCH"
    }

    fn code(&self) -> ErrorCode {
        codes::NO_MATCH
    }

    fn domain(&self) -> ErrorDomain {
        ErrorDomain::Matching
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A payload was requested from a container that holds none.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no such element: {message}")]
pub struct NoSuchElement {
    message: String,
}

impl NoSuchElement {
    /// `get` was called on the empty variant named `variant`
    pub fn on_get(variant: &str) -> Self {
        Self {
            message: format!("{}.get", variant),
        }
    }

    /// A filtering predicate rejected `value`
    pub fn predicate_failed<V: fmt::Debug + ?Sized>(value: &V) -> Self {
        Self {
            message: format!(
                "predicate does not hold for {}",
                render_value(value, DEFAULT_RENDER_LIMIT)
            ),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl SumcaseError for NoSuchElement {
    fn error_code(&self) -> &'static str {
        "CONTAINER_NO_SUCH_ELEMENT"
    }

    fn code(&self) -> ErrorCode {
        codes::NO_SUCH_ELEMENT
    }

    fn domain(&self) -> ErrorDomain {
        ErrorDomain::Container
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
