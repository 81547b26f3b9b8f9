//! Right-biased operations
//!
//! Every container has a success-shaped variant that carries a payload
//! through transformation chains and a failure-shaped variant that passes
//! through them unchanged. The operations are written once here, against
//! the [`SumType`] view of a container plus two capabilities: splitting off
//! the success payload and wrapping a new one.

use sumcase_error::NoSuchElement;

use crate::sum::SumType;

//-----------------------------------------------------------------------------
// Right-Biased Trait
//-----------------------------------------------------------------------------

/// Operations that act on the success-shaped variant and short-circuit on
/// the failure-shaped one.
pub trait RightBiased: SumType + Sized {
    /// The same container family holding a payload of type `U`
    type Rebind<U>: RightBiased<Success = U>;

    /// Take the success payload, or re-type the failure-shaped variant.
    fn into_success<U>(self) -> Result<Self::Success, Self::Rebind<U>>;

    /// Wrap a payload in the success-shaped variant.
    fn wrap<U>(value: U) -> Self::Rebind<U>;

    /// Identity for containers rebound at their own payload type.
    fn from_rebound(rebound: Self::Rebind<Self::Success>) -> Self;

    /// Whether this is the success-shaped variant
    fn is_success_shaped(&self) -> bool {
        self.success_payload().is_some()
    }

    /// Borrow the payload, or fail naming the empty variant
    fn get(&self) -> Result<&Self::Success, NoSuchElement> {
        self.success_payload()
            .ok_or_else(|| NoSuchElement::on_get(Self::FAILURE_VARIANT))
    }

    /// Take the payload, or evaluate `default`
    fn get_or_else<F>(self, default: F) -> Self::Success
    where
        F: FnOnce() -> Self::Success,
    {
        match self.into_success::<Self::Success>() {
            Ok(value) => value,
            Err(_) => default(),
        }
    }

    /// Keep a success, or substitute `alternative`
    fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.is_success_shaped() {
            self
        } else {
            alternative()
        }
    }

    /// Run `f` on the payload for its side effect
    fn each<F>(self, f: F) -> Self
    where
        F: FnOnce(&Self::Success),
    {
        if let Some(value) = self.success_payload() {
            f(value);
        }
        self
    }

    /// Transform the payload
    fn map<U, F>(self, f: F) -> Self::Rebind<U>
    where
        F: FnOnce(Self::Success) -> U,
    {
        match self.into_success::<U>() {
            Ok(value) => Self::wrap(f(value)),
            Err(failed) => failed,
        }
    }

    /// Transform the payload into another container of the same family
    fn flat_map<U, F>(self, f: F) -> Self::Rebind<U>
    where
        F: FnOnce(Self::Success) -> Self::Rebind<U>,
    {
        match self.into_success::<U>() {
            Ok(value) => f(value),
            Err(failed) => failed,
        }
    }

    /// Keep a success whose payload satisfies `predicate`, otherwise build
    /// the replacement from the rejected payload
    fn select_or_else<P, F>(self, predicate: P, rejected: F) -> Self
    where
        P: FnOnce(&Self::Success) -> bool,
        F: FnOnce(Self::Success) -> Self,
    {
        match self.success_payload().map(predicate) {
            Some(false) => match self.into_success::<Self::Success>() {
                Ok(value) => rejected(value),
                Err(failed) => Self::from_rebound(failed),
            },
            _ => self,
        }
    }

    /// Keep a success whose payload does not satisfy `predicate`
    fn reject_or_else<P, F>(self, predicate: P, rejected: F) -> Self
    where
        P: FnOnce(&Self::Success) -> bool,
        F: FnOnce(Self::Success) -> Self,
    {
        self.select_or_else(|value| !predicate(value), rejected)
    }
}

/// Right-biased containers with a natural empty value for rejected payloads
pub trait Filterable: RightBiased {
    /// The value a rejected payload turns into
    fn empty_for(rejected: Self::Success) -> Self;

    /// Keep a success whose payload satisfies `predicate`
    fn select<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&Self::Success) -> bool,
    {
        self.select_or_else(predicate, Self::empty_for)
    }

    /// Keep a success whose payload does not satisfy `predicate`
    fn reject<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&Self::Success) -> bool,
    {
        self.reject_or_else(predicate, Self::empty_for)
    }
}
