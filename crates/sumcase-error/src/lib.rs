// Sumcase Error Handling
// Central location for the error types raised by matchers and containers

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

// Re-export common error handling tools for convenience
pub use anyhow;
pub use thiserror;

mod captured;
mod conversion;
mod matching;

pub use captured::CapturedError;
pub use conversion::{map_error, to_box_error, IntoBoxError, MESSAGE_CLASS};
pub use matching::{render_value, MatchError, NoSuchElement, DEFAULT_RENDER_LIMIT};

/// Error domains representing the component that raised an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorDomain {
    Matching,
    Container,
    Captured,
    Config,
}

impl fmt::Display for ErrorDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorDomain::Matching => write!(f, "matching"),
            ErrorDomain::Container => write!(f, "container"),
            ErrorDomain::Captured => write!(f, "captured"),
            ErrorDomain::Config => write!(f, "config"),
        }
    }
}

/// Error code structure for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ErrorCode(pub u32);

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Numeric codes, grouped by domain
pub mod codes {
    use crate::ErrorCode;

    // Matching errors start with 1000
    pub const NO_MATCH: ErrorCode = ErrorCode(1001);

    // Container errors start with 2000
    pub const NO_SUCH_ELEMENT: ErrorCode = ErrorCode(2001);

    // Captured computation errors start with 3000
    pub const CAPTURED: ErrorCode = ErrorCode(3001);
    pub const PANICKED: ErrorCode = ErrorCode(3002);

    // Configuration errors start with 4000
    pub const CONFIG_IO: ErrorCode = ErrorCode(4001);
    pub const CONFIG_PARSE: ErrorCode = ErrorCode(4002);
    pub const CONFIG_INVALID: ErrorCode = ErrorCode(4003);
}

/// Standard error message format for serialization
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ErrorMessage {
    pub code: ErrorCode,
    pub domain: ErrorDomain,
    pub message: String,
}

/// Base trait for all errors surfaced by sumcase.
pub trait SumcaseError: StdError + fmt::Debug + fmt::Display + Send + Sync + Any + 'static {
    /// Returns a unique static string code for this error type.
    fn error_code(&self) -> &'static str;

    /// Numeric code of this error.
    fn code(&self) -> ErrorCode;

    /// Component that raised the error.
    fn domain(&self) -> ErrorDomain;

    /// Serializable summary of the error.
    fn to_message(&self) -> ErrorMessage {
        ErrorMessage {
            code: self.code(),
            domain: self.domain(),
            message: self.to_string(),
        }
    }

    /// Returns this error as a `&dyn Any` to allow downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// Any error a caller can receive from the engine or the containers.
///
/// Lets code that both runs matchers and unwraps containers use `?` on
/// either kind of failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    NoSuchElement(#[from] NoSuchElement),

    #[error(transparent)]
    Captured(#[from] CapturedError),
}

impl SumcaseError for Error {
    fn error_code(&self) -> &'static str {
        match self {
            Error::Match(e) => e.error_code(),
            Error::NoSuchElement(e) => e.error_code(),
            Error::Captured(e) => e.error_code(),
        }
    }

    fn code(&self) -> ErrorCode {
        match self {
            Error::Match(e) => e.code(),
            Error::NoSuchElement(e) => e.code(),
            Error::Captured(e) => e.code(),
        }
    }

    fn domain(&self) -> ErrorDomain {
        match self {
            Error::Match(e) => e.domain(),
            Error::NoSuchElement(e) => e.domain(),
            Error::Captured(e) => e.domain(),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Shorthand for a boxed sumcase error
pub type BoxError = Box<dyn SumcaseError>;

/// Convenient Result type for code that mixes matching and unwrapping
pub type Result<T> = std::result::Result<T, Error>;
