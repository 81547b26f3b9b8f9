//! Two-variant view shared by every container

/// Which side of a two-variant container a value is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// `Present`, `Right` or `Success`
    Success,
    /// `Absent`, `Left` or `Failure`
    Failure,
}

/// A container with one success-shaped and one failure-shaped variant.
///
/// Exactly one of [`SumType::success_payload`] and
/// [`SumType::failure_payload`] returns `Some` for any value.
pub trait SumType {
    /// Payload of the success-shaped variant
    type Success;
    /// Payload of the failure-shaped variant; `()` when it carries none
    type Failure;

    const SUCCESS_VARIANT: &'static str;
    const FAILURE_VARIANT: &'static str;

    fn success_payload(&self) -> Option<&Self::Success>;

    fn failure_payload(&self) -> Option<&Self::Failure>;

    fn variant(&self) -> Variant {
        if self.success_payload().is_some() {
            Variant::Success
        } else {
            Variant::Failure
        }
    }

    /// Name of the variant this value is in
    fn variant_name(&self) -> &'static str {
        match self.variant() {
            Variant::Success => Self::SUCCESS_VARIANT,
            Variant::Failure => Self::FAILURE_VARIANT,
        }
    }
}
