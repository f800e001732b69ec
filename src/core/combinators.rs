//! Chaining combinators for [`Outcome`].
//!
//! Each combinator evaluates the same value-level decision table:
//!
//! | current variant | `map(f)`    | `flat_map(f)` | `map_err(f)`   |
//! |-----------------|-------------|---------------|----------------|
//! | `Ok(v)`         | `Ok(f(v))`  | `f(v)` as-is  | `Ok(v)`        |
//! | `EmptyOk`       | `EmptyOk`   | `EmptyOk`     | `EmptyOk`      |
//! | `Error(e)`      | `Error(e)`  | `Error(e)`    | `Error(f(e))`  |
//!
//! There is no retry, recovery, or catching in here: if a supplied closure
//! panics, the panic propagates to the caller.

use crate::core::outcome::Outcome;

impl<T, E> Outcome<T, E> {
    /// Transform the success value, leaving the variant kind untouched.
    ///
    /// The closure runs only on [`Ok`](Outcome::Ok) and receives the raw,
    /// possibly-absent value; its (possibly absent) output is wrapped in a
    /// new `Ok`. `EmptyOk` yields `EmptyOk` and `Error` carries its payload
    /// through unchanged, retyped to the new success type; the closure is
    /// never invoked for either.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::ok(21);
    /// let doubled = outcome.map(|n| n.map(|n| n * 2));
    /// assert_eq!(doubled.value(), Some(&42));
    /// ```
    pub fn map<U, F>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(Option<T>) -> Option<U>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(transform(value)),
            Self::EmptyOk => Outcome::EmptyOk,
            Self::Error(payload) => Outcome::Error(payload),
        }
    }

    /// Chain a fallible step, short-circuiting at the first failure.
    ///
    /// The closure runs only on [`Ok`](Outcome::Ok) and whatever outcome it
    /// produces is returned verbatim — including when that outcome is itself
    /// an `Error` or `EmptyOk`. An existing `EmptyOk` or `Error` propagates
    /// to the end of the chain without invoking the closure.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// fn checked_half(n: Option<i32>) -> Outcome<i32, String> {
    ///     match n {
    ///         Some(n) if n % 2 == 0 => Outcome::ok(n / 2),
    ///         _ => Outcome::error("not even".to_owned()),
    ///     }
    /// }
    ///
    /// let outcome: Outcome<i32, String> = Outcome::ok(42);
    /// assert_eq!(outcome.flat_map(checked_half).value(), Some(&21));
    /// ```
    pub fn flat_map<U, F>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(Option<T>) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => transform(value),
            Self::EmptyOk => Outcome::EmptyOk,
            Self::Error(payload) => Outcome::Error(payload),
        }
    }

    /// Transform the failure payload; the error-side dual of
    /// [`map`](Outcome::map).
    ///
    /// The closure runs only on [`Error`](Outcome::Error) and receives the
    /// raw, possibly-absent payload. Both success variants pass through
    /// untouched.
    pub fn map_err<F2, F>(self, transform: F) -> Outcome<T, F2>
    where
        F: FnOnce(Option<E>) -> Option<F2>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::EmptyOk => Outcome::EmptyOk,
            Self::Error(payload) => Outcome::Error(transform(payload)),
        }
    }
}
