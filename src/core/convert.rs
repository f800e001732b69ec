//! Conversions from std results.

use crate::core::outcome::Outcome;

/// `Ok(v)` becomes `Ok(Some(v))` and `Err(e)` becomes `Error(Some(e))` —
/// sugar over the [`ok`](Outcome::ok) and [`error`](Outcome::error)
/// factories for code arriving from `?`-style APIs.
///
/// The reverse direction is deliberately not provided: it would have to
/// collapse `EmptyOk` and `Ok(None)` into one state, which this type exists
/// to keep apart.
impl<T, E> From<std::result::Result<T, E>> for Outcome<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::error(error),
        }
    }
}
