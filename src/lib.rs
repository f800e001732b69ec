//! # Outcome
//!
//! A closed, three-variant algebraic result type for fallible operations.
//!
//! Where [`std::result::Result`] models "a value or an error", [`Outcome`]
//! models the three-way split some APIs actually produce: a success carrying
//! a (possibly absent) value, a success carrying nothing at all, and a
//! failure carrying a (possibly absent) payload. Failures are returned as
//! ordinary values and inspected explicitly; nothing is ever thrown.
//!
//! ## Quick Start
//!
//! ```rust
//! use outcome::Outcome;
//!
//! fn divide(a: i32, b: i32) -> Outcome<i32, String> {
//!     if b == 0 {
//!         Outcome::error("division by zero".to_owned())
//!     } else {
//!         Outcome::ok(a / b)
//!     }
//! }
//!
//! assert_eq!(divide(10, 2).value(), Some(&5));
//! assert!(divide(10, 0).is_error());
//! ```
//!
//! ## The three variants
//!
//! - [`Outcome::Ok`] — success with a value; the value itself may be absent
//!   (`Ok(None)`), which is a distinct state, not a failure and not a void
//!   success.
//! - [`Outcome::EmptyOk`] — success with no value at all, for operations
//!   that simply complete (built with [`Outcome::ok_void`]).
//! - [`Outcome::Error`] — failure with an optional opaque payload.
//!
//! The enum is deliberately closed (not `#[non_exhaustive]`): downstream
//! `match` expressions stay exhaustive, and no fourth variant can appear.

// === Core type and operations ===
pub mod core;

// === Public API Exports ===

/// The three-variant outcome type.
pub use crate::core::Outcome;

/// Convenient prelude with everything you need.
pub mod prelude {
    pub use crate::Outcome;
}
