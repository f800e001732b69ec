//! The [`Outcome`] enum, its factories, classification predicates, and
//! null-safe accessors.

/// A value that is either success ([`Ok`](Outcome::Ok) or
/// [`EmptyOk`](Outcome::EmptyOk)) or failure ([`Error`](Outcome::Error)).
///
/// An `Outcome` encodes the already-decided result of a prior fallible
/// operation. It is immutable once constructed: exactly one variant tag
/// holds, and no operation transitions an existing instance into another
/// variant. Chaining happens by consuming one outcome and producing a new
/// one (see [`map`](Outcome::map) and [`flat_map`](Outcome::flat_map)).
///
/// # Absence vs. void
///
/// `Ok(None)` and `EmptyOk` are different states and are never collapsed
/// into one another:
///
/// - `Ok(None)` — the operation produces a value, and that value happened
///   to be absent.
/// - `EmptyOk` — the operation produces no value by design (a void
///   operation that simply completed).
///
/// Both read as absent through [`value`](Outcome::value);
/// [`is_void_ok`](Outcome::is_void_ok) disambiguates.
///
/// # Failure payloads
///
/// The payload type `E` is opaque to this type: it is never inspected,
/// compared, or synthesized. `Error(None)` — a failure with no payload — is
/// a legal state and is never upgraded to a default payload. Distinguishing
/// failure categories is the caller's job, by examining the payload after
/// retrieving it with [`err`](Outcome::err).
///
/// # Construction
///
/// [`ok`](Outcome::ok), [`ok_void`](Outcome::ok_void), and
/// [`error`](Outcome::error) are the construction surface. The variants are
/// public so callers can destructure exhaustively; the enum is deliberately
/// not `#[non_exhaustive]`.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// Successful operation that produced a value.
    ///
    /// The value itself may be absent; `Ok(None)` is reachable only through
    /// this variant and is not the same state as [`EmptyOk`](Outcome::EmptyOk).
    Ok(Option<T>),

    /// Successful operation that produces nothing (a void operation).
    EmptyOk,

    /// Failed operation with an optional failure payload.
    ///
    /// An absent payload is legal and is never replaced with a default.
    Error(Option<E>),
}

impl<T, E> Outcome<T, E> {
    /// Create a successful outcome wrapping `value`.
    ///
    /// Accepts the value directly or as an `Option`; `Outcome::ok(None)`
    /// builds the absent-value success state, which is NOT the same as
    /// [`ok_void`](Outcome::ok_void).
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let with_value: Outcome<i32, String> = Outcome::ok(5);
    /// let absent: Outcome<i32, String> = Outcome::ok(None);
    ///
    /// assert_eq!(with_value.value(), Some(&5));
    /// assert_eq!(absent.value(), None);
    /// assert!(absent.is_ok() && !absent.is_void_ok());
    /// ```
    pub fn ok(value: impl Into<Option<T>>) -> Self {
        Self::Ok(value.into())
    }

    /// Create a successful outcome carrying nothing at all.
    ///
    /// This is the void-success case, for operations that complete without
    /// producing a value.
    pub fn ok_void() -> Self {
        Self::EmptyOk
    }

    /// Create a failed outcome wrapping `payload`.
    ///
    /// Accepts the payload directly or as an `Option`;
    /// `Outcome::error(None)` builds a failure with no payload.
    pub fn error(payload: impl Into<Option<E>>) -> Self {
        Self::Error(payload.into())
    }

    /// Whether this outcome represents success.
    ///
    /// True for both [`Ok`](Outcome::Ok) and [`EmptyOk`](Outcome::EmptyOk):
    /// success is defined as "not an error", independent of whether a value
    /// is present. Always the negation of [`is_error`](Outcome::is_error).
    #[inline]
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_) | Self::EmptyOk)
    }

    /// Whether this outcome is a successful void result.
    ///
    /// True only for [`EmptyOk`](Outcome::EmptyOk); false for `Ok` even when
    /// its value is absent.
    #[inline]
    #[must_use]
    pub fn is_void_ok(&self) -> bool {
        matches!(self, Self::EmptyOk)
    }

    /// Whether this outcome represents failure.
    #[inline]
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The wrapped success value, if there is one.
    ///
    /// Yields `Some` only when the variant is `Ok` AND the wrapped value is
    /// present. `EmptyOk`, `Error`, and `Ok(None)` all read as `None` here;
    /// use [`is_void_ok`](Outcome::is_void_ok) to tell the last two success
    /// states apart.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => value.as_ref(),
            Self::EmptyOk | Self::Error(_) => None,
        }
    }

    /// The wrapped failure payload, if there is one.
    ///
    /// Yields `Some` only when the variant is `Error` AND the payload is
    /// present; `None` for both success variants and for `Error(None)`.
    #[inline]
    #[must_use]
    pub fn err(&self) -> Option<&E> {
        match self {
            Self::Error(payload) => payload.as_ref(),
            Self::Ok(_) | Self::EmptyOk => None,
        }
    }

    /// Consume the outcome, returning the success value if present.
    ///
    /// Same decision table as [`value`](Outcome::value), by ownership.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Ok(value) => value,
            Self::EmptyOk | Self::Error(_) => None,
        }
    }

    /// Consume the outcome, returning the failure payload if present.
    ///
    /// Same decision table as [`err`](Outcome::err), by ownership.
    #[must_use]
    pub fn into_err(self) -> Option<E> {
        match self {
            Self::Error(payload) => payload,
            Self::Ok(_) | Self::EmptyOk => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ok_with_value_stores_and_returns_it() {
        let outcome: Outcome<&str, String> = Outcome::ok("test");

        assert!(outcome.is_ok());
        assert!(!outcome.is_error());
        assert!(!outcome.is_void_ok());
        assert_eq!(outcome.value(), Some(&"test"));
        assert_eq!(outcome.err(), None);
    }

    #[test]
    fn ok_with_absent_value_is_still_a_success() {
        let outcome: Outcome<&str, String> = Outcome::ok(None);

        assert!(outcome.is_ok());
        assert!(!outcome.is_error());
        assert!(!outcome.is_void_ok());
        assert_eq!(outcome.value(), None);
        assert_eq!(outcome.err(), None);
        // Structurally Ok(None), not EmptyOk.
        assert_eq!(outcome, Outcome::Ok(None));
    }

    #[test]
    fn ok_void_represents_a_successful_void_result() {
        let outcome: Outcome<(), String> = Outcome::ok_void();

        assert!(outcome.is_ok());
        assert!(outcome.is_void_ok());
        assert!(!outcome.is_error());
        assert_eq!(outcome.value(), None);
        assert_eq!(outcome.err(), None);
    }

    #[test]
    fn absent_value_and_void_success_stay_distinct() {
        let absent: Outcome<i32, String> = Outcome::ok(None);
        let void: Outcome<i32, String> = Outcome::ok_void();

        assert_ne!(absent, void);
        assert!(!absent.is_void_ok());
        assert!(void.is_void_ok());
    }

    #[test]
    fn error_stores_and_returns_the_payload() {
        let outcome: Outcome<i32, &str> = Outcome::error("boom");

        assert!(outcome.is_error());
        assert!(!outcome.is_ok());
        assert!(!outcome.is_void_ok());
        assert_eq!(outcome.value(), None);
        assert_eq!(outcome.err(), Some(&"boom"));
    }

    #[test]
    fn error_with_absent_payload_is_still_an_error() {
        let outcome: Outcome<i32, String> = Outcome::error(None);

        assert!(outcome.is_error());
        assert!(!outcome.is_ok());
        assert_eq!(outcome.err(), None);
        assert_eq!(outcome, Outcome::Error(None));
    }

    #[test]
    fn owning_accessors_follow_the_same_table() {
        let ok: Outcome<String, String> = Outcome::ok("value".to_owned());
        let void: Outcome<String, String> = Outcome::ok_void();
        let error: Outcome<String, String> = Outcome::error("payload".to_owned());

        assert_eq!(ok.into_value(), Some("value".to_owned()));
        assert_eq!(void.into_value(), None);
        assert_eq!(error.clone().into_value(), None);
        assert_eq!(error.into_err(), Some("payload".to_owned()));
    }

    #[test]
    fn exhaustive_destructuring_agrees_with_the_predicates() {
        let outcome: Outcome<i32, String> = Outcome::ok(7);

        let description = match outcome {
            Outcome::Ok(Some(value)) => format!("value {value}"),
            Outcome::Ok(None) => "absent value".to_owned(),
            Outcome::EmptyOk => "void".to_owned(),
            Outcome::Error(_) => "failure".to_owned(),
        };

        assert_eq!(description, "value 7");
    }
}
