//! Optional values
//!
//! `Maybe` is either `Present` with a payload or `Absent`. It is the
//! success-biased container with a natural empty value, so rejected
//! payloads become `Absent`.

use std::fmt;

use sumcase_core::Matchable;

use crate::biased::{Filterable, RightBiased};
use crate::sum::{SumType, Variant};

/// A value that may be missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maybe<T> {
    Present(T),
    Absent,
}

impl<T> Maybe<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

impl<T> SumType for Maybe<T> {
    type Success = T;
    type Failure = ();

    const SUCCESS_VARIANT: &'static str = "Present";
    const FAILURE_VARIANT: &'static str = "Absent";

    fn success_payload(&self) -> Option<&T> {
        match self {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }

    fn failure_payload(&self) -> Option<&()> {
        match self {
            Maybe::Present(_) => None,
            Maybe::Absent => Some(&()),
        }
    }
}

impl<T> RightBiased for Maybe<T> {
    type Rebind<U> = Maybe<U>;

    fn into_success<U>(self) -> Result<T, Maybe<U>> {
        match self {
            Maybe::Present(value) => Ok(value),
            Maybe::Absent => Err(Maybe::Absent),
        }
    }

    fn wrap<U>(value: U) -> Maybe<U> {
        Maybe::Present(value)
    }

    fn from_rebound(rebound: Maybe<T>) -> Self {
        rebound
    }
}

impl<T> Filterable for Maybe<T> {
    fn empty_for(_rejected: T) -> Self {
        Maybe::Absent
    }
}

impl<T> Matchable for Maybe<T>
where
    T: PartialEq + fmt::Debug + Send + Sync,
{
    type Kind = Variant;

    fn is_a(&self, kind: &Variant) -> bool {
        self.variant() == *kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_get_on_absent_names_variant() {
        let absent: Maybe<i32> = Maybe::Absent;
        let err = absent.get().unwrap_err();
        assert_eq!(err.to_string(), "no such element: Absent.get");
        assert_eq!(Maybe::Present(3).get(), Ok(&3));
    }

    #[test]
    fn test_map_and_flat_map() {
        assert_eq!(Maybe::Present(2).map(|x| x * 10), Maybe::Present(20));
        assert_eq!(Maybe::<i32>::Absent.map(|x| x * 10), Maybe::Absent);
        assert_eq!(
            Maybe::Present(2).flat_map(|x| if x > 1 { Maybe::Present(x) } else { Maybe::Absent }),
            Maybe::Present(2)
        );
        assert_eq!(
            Maybe::Present(0).flat_map(|x| if x > 1 { Maybe::Present(x) } else { Maybe::Absent }),
            Maybe::Absent
        );
    }

    #[test]
    fn test_select_and_reject() {
        assert_eq!(Maybe::Present(4).select(|x| x % 2 == 0), Maybe::Present(4));
        assert_eq!(Maybe::Present(3).select(|x| x % 2 == 0), Maybe::Absent);
        assert_eq!(Maybe::Present(3).reject(|x| x % 2 == 0), Maybe::Present(3));
        assert_eq!(Maybe::<i32>::Absent.select(|_| true), Maybe::Absent);
    }

    #[test]
    fn test_or_else_and_get_or_else() {
        assert_eq!(Maybe::Absent.or_else(|| Maybe::Present(1)), Maybe::Present(1));
        assert_eq!(Maybe::Present(2).or_else(|| Maybe::Present(1)), Maybe::Present(2));
        assert_eq!(Maybe::Absent.get_or_else(|| 7), 7);
    }

    #[test]
    fn test_variant_view() {
        let absent: Maybe<&str> = Maybe::Absent;
        assert!(absent.is_empty());
        assert_eq!(absent.failure_payload(), Some(&()));
        assert_eq!(absent.variant_name(), "Absent");
        assert!(Maybe::Present("x").is_a(&Variant::Success));
        assert_eq!(Option::from(Maybe::Present(1)), Some(1));
    }
}
