// Error conversion utilities
// Boxes any sumcase error, or turns foreign errors into captured ones

use crate::{BoxError, CapturedError, SumcaseError};

/// Class recorded for errors that arrive as bare messages
pub const MESSAGE_CLASS: &str = "message";

/// Trait for converting an error value into a [`BoxError`]
pub trait IntoBoxError {
    fn into_box_error(self) -> BoxError;
}

impl<E: SumcaseError> IntoBoxError for E {
    fn into_box_error(self) -> BoxError {
        Box::new(self)
    }
}

impl IntoBoxError for anyhow::Error {
    fn into_box_error(self) -> BoxError {
        Box::new(CapturedError::from(self))
    }
}

impl IntoBoxError for std::io::Error {
    fn into_box_error(self) -> BoxError {
        Box::new(CapturedError::from_error(self))
    }
}

impl IntoBoxError for String {
    fn into_box_error(self) -> BoxError {
        Box::new(CapturedError::new(MESSAGE_CLASS, self))
    }
}

impl IntoBoxError for &str {
    fn into_box_error(self) -> BoxError {
        Box::new(CapturedError::new(MESSAGE_CLASS, self))
    }
}

/// Box any convertible error
pub fn to_box_error<E: IntoBoxError>(err: E) -> BoxError {
    err.into_box_error()
}

/// Map the error side of a result into a [`BoxError`]
pub fn map_error<T, E: IntoBoxError>(result: Result<T, E>) -> Result<T, BoxError> {
    result.map_err(IntoBoxError::into_box_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{codes, ErrorDomain, MatchError};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sumcase_errors_box_unchanged() {
        let boxed = MatchError::new(&1).into_box_error();
        assert_eq!(boxed.code(), codes::NO_MATCH);
        assert!(boxed.as_any().downcast_ref::<MatchError>().is_some());
    }

    #[test]
    fn test_foreign_errors_become_captured() {
        let boxed = to_box_error("plain failure");
        assert_eq!(boxed.domain(), ErrorDomain::Captured);
        assert_eq!(boxed.to_string(), "message: plain failure");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let result: Result<(), _> = map_error(Err(io));
        let boxed = result.unwrap_err();
        let captured = boxed.as_any().downcast_ref::<CapturedError>().unwrap();
        assert!(captured.is::<std::io::Error>());
        assert_eq!(captured.message(), "gone");
    }
}
