//! Sumcase core: partial functions and the pattern-matching engine
//!
//! Branches are partial functions built from a pattern list, an optional
//! guard and an effect. A [`Matcher`] tries its branches in declaration
//! order; matchers are themselves partial functions and compose with
//! `or_else` and `and_then`.

pub mod case;
pub mod config;
pub mod logging;
pub mod matcher;
pub mod partial;
pub mod pattern;
pub mod value;

pub use case::Case;
pub use config::{ConfigError, Diagnostics, LoggingConfig, SumcaseConfig};
pub use matcher::{Matcher, TotalMatcher};
pub use partial::{empty, from_fn, total, AndThen, BoxedPartial, OrElse, PartialFunction, Total};
pub use pattern::{Matchable, Pattern, Patterns};
pub use value::{Value, ValueKind};

pub use sumcase_error::{MatchError, SumcaseError};
