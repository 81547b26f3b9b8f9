// Errors captured from computations
// A failed computation keeps its error as data instead of propagating it

use std::any::{self, Any};
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::{codes, ErrorCode, ErrorDomain, SumcaseError};

/// An error (or panic) raised by a computation and kept as a value.
///
/// `class` identifies where the error came from: the type name of the
/// original error, [`CapturedError::PANIC`] for panics, or whatever class the
/// caller supplied. Two captured errors are equal when class and message
/// agree; the original error, if any, stays reachable through
/// [`CapturedError::downcast_ref`] and `source()`.
#[derive(Clone)]
pub struct CapturedError {
    class: String,
    message: String,
    source: Option<Source>,
}

// An `anyhow::Error` is kept whole so its own downcasting still works.
#[derive(Clone)]
enum Source {
    Std(Arc<dyn StdError + Send + Sync + 'static>),
    Anyhow(Arc<anyhow::Error>),
}

impl CapturedError {
    /// Class recorded for captured panics
    pub const PANIC: &'static str = "panic";

    /// Create a captured error from a class and a message
    pub fn new(class: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Capture a typed error, keeping it as the source
    pub fn from_error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            class: any::type_name::<E>().to_string(),
            message: err.to_string(),
            source: Some(Source::Std(Arc::new(err))),
        }
    }

    /// Capture the payload of a caught panic
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self::new(Self::PANIC, message)
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this error was captured from a value of type `E`
    pub fn is<E: 'static>(&self) -> bool {
        self.class == any::type_name::<E>()
    }

    /// Whether this error came from a panic
    pub fn is_panic(&self) -> bool {
        self.class == Self::PANIC
    }

    /// Borrow the original error, if it was of type `E`
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + Send + Sync + 'static,
    {
        match self.source.as_ref()? {
            Source::Std(err) => err.downcast_ref::<E>(),
            Source::Anyhow(err) => err.downcast_ref::<E>(),
        }
    }
}

impl From<anyhow::Error> for CapturedError {
    fn from(err: anyhow::Error) -> Self {
        Self {
            class: any::type_name::<anyhow::Error>().to_string(),
            message: format!("{:#}", err),
            source: Some(Source::Anyhow(Arc::new(err))),
        }
    }
}

impl PartialEq for CapturedError {
    fn eq(&self, other: &Self) -> bool {
        self.class == other.class && self.message == other.message
    }
}

impl fmt::Debug for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedError")
            .field("class", &self.class)
            .field("message", &self.message)
            .finish()
    }
}

impl fmt::Display for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.class, self.message)
    }
}

impl StdError for CapturedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self.source.as_ref()? {
            Source::Std(err) => {
                let inner: &(dyn StdError + 'static) = &**err;
                Some(inner)
            }
            Source::Anyhow(err) => Some(<anyhow::Error as AsRef<dyn StdError>>::as_ref(&**err)),
        }
    }
}

impl SumcaseError for CapturedError {
    fn error_code(&self) -> &'static str {
        if self.is_panic() {
            "CAPTURED_PANIC"
        } else {
            "CAPTURED_ERROR"
        }
    }

    fn code(&self) -> ErrorCode {
        if self.is_panic() {
            codes::PANICKED
        } else {
            codes::CAPTURED
        }
    }

    fn domain(&self) -> ErrorDomain {
        ErrorDomain::Captured
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
