//! Pattern tests
//!
//! A pattern is a closed set of ways to accept a value: by equality, by
//! kind membership, by predicate, or as the alternation of other patterns.
//! Kinds come from the [`Matchable`] trait, which lets each domain decide
//! what "is a" means for its values.

use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use sumcase_error::CapturedError;

/// Values that patterns can be tested against.
pub trait Matchable: PartialEq + fmt::Debug + Send + Sync {
    /// Tag used by kind-membership patterns
    type Kind: fmt::Debug + Clone + Send + Sync + 'static;

    /// Whether this value belongs to `kind`
    fn is_a(&self, kind: &Self::Kind) -> bool;
}

// Statically typed values are always of their own type.
macro_rules! impl_matchable_by_type_id {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Matchable for $ty {
                type Kind = TypeId;

                fn is_a(&self, kind: &TypeId) -> bool {
                    *kind == TypeId::of::<$ty>()
                }
            }
        )*
    };
}

impl_matchable_by_type_id!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String, &'static str,
);

// Captured errors are kinds of their class, e.g. `CapturedError::PANIC` or
// `std::any::type_name::<E>()`.
impl Matchable for CapturedError {
    type Kind = &'static str;

    fn is_a(&self, kind: &&'static str) -> bool {
        self.class() == *kind
    }
}

/// Shared unary predicate
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A single pattern test over values of type `T`
pub enum Pattern<T: Matchable> {
    /// Accepts every value
    Any,
    /// Accepts values equal to the given one
    Eq(T),
    /// Accepts values of the given kind
    Kind(T::Kind),
    /// Accepts values the predicate holds for
    Predicate(Predicate<T>),
    /// Accepts values accepted by any of the inner patterns
    AnyOf(Vec<Pattern<T>>),
}

impl<T: Matchable> Pattern<T> {
    pub fn eq(value: T) -> Self {
        Pattern::Eq(value)
    }

    pub fn kind(kind: T::Kind) -> Self {
        Pattern::Kind(kind)
    }

    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Pattern::Predicate(Arc::new(f))
    }

    pub fn any_of(patterns: impl IntoIterator<Item = Pattern<T>>) -> Self {
        Pattern::AnyOf(patterns.into_iter().collect())
    }

    /// Alternation with another pattern
    pub fn or(self, other: Pattern<T>) -> Self {
        match self {
            Pattern::AnyOf(mut patterns) => {
                patterns.push(other);
                Pattern::AnyOf(patterns)
            }
            single => Pattern::AnyOf(vec![single, other]),
        }
    }

    /// Whether `value` passes this pattern
    pub fn test(&self, value: &T) -> bool {
        match self {
            Pattern::Any => true,
            Pattern::Eq(expected) => value == expected,
            Pattern::Kind(kind) => value.is_a(kind),
            Pattern::Predicate(predicate) => predicate(value),
            Pattern::AnyOf(patterns) => patterns.iter().any(|p| p.test(value)),
        }
    }
}

impl<T: Matchable + 'static> Pattern<T>
where
    T: Matchable<Kind = TypeId>,
{
    /// Kind pattern for a statically typed value
    pub fn of_type() -> Self {
        Pattern::Kind(TypeId::of::<T>())
    }
}

impl<T: Matchable + Clone> Clone for Pattern<T> {
    fn clone(&self) -> Self {
        match self {
            Pattern::Any => Pattern::Any,
            Pattern::Eq(value) => Pattern::Eq(value.clone()),
            Pattern::Kind(kind) => Pattern::Kind(kind.clone()),
            Pattern::Predicate(predicate) => Pattern::Predicate(Arc::clone(predicate)),
            Pattern::AnyOf(patterns) => Pattern::AnyOf(patterns.clone()),
        }
    }
}

impl<T: Matchable> fmt::Debug for Pattern<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Any => write!(f, "Any"),
            Pattern::Eq(value) => f.debug_tuple("Eq").field(value).finish(),
            Pattern::Kind(kind) => f.debug_tuple("Kind").field(kind).finish(),
            Pattern::Predicate(_) => write!(f, "Predicate(<fn>)"),
            Pattern::AnyOf(patterns) => f.debug_tuple("AnyOf").field(patterns).finish(),
        }
    }
}

/// The pattern list of a branch, accepted when any entry accepts.
///
/// An empty list accepts everything.
pub struct Patterns<T: Matchable>(Vec<Pattern<T>>);

impl<T: Matchable> Patterns<T> {
    /// The unconditional pattern list
    pub fn any() -> Self {
        Patterns(Vec::new())
    }

    pub fn is_unconditional(&self) -> bool {
        self.0.is_empty()
    }

    pub fn test(&self, value: &T) -> bool {
        self.0.is_empty() || self.0.iter().any(|p| p.test(value))
    }
}

impl<T: Matchable> fmt::Debug for Patterns<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}

impl<T: Matchable> From<()> for Patterns<T> {
    fn from(_: ()) -> Self {
        Patterns::any()
    }
}

impl<T: Matchable> From<Pattern<T>> for Patterns<T> {
    fn from(pattern: Pattern<T>) -> Self {
        Patterns(vec![pattern])
    }
}

impl<T: Matchable> From<Vec<Pattern<T>>> for Patterns<T> {
    fn from(patterns: Vec<Pattern<T>>) -> Self {
        Patterns(patterns)
    }
}

impl<T: Matchable, const N: usize> From<[Pattern<T>; N]> for Patterns<T> {
    fn from(patterns: [Pattern<T>; N]) -> Self {
        Patterns(patterns.into_iter().collect())
    }
}
