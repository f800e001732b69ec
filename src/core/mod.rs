//! Core outcome type and its operations.
//!
//! - [`outcome`](crate::core::outcome) - The [`Outcome`] enum, factories,
//!   predicates, and null-safe accessors
//! - [`combinators`](crate::core::combinators) - `map` / `flat_map` /
//!   `map_err` chaining
//! - [`convert`](crate::core::convert) - Conversions from std results
//! - [`display`](crate::core::display) - Human-readable rendering

pub mod combinators;
pub mod convert;
pub mod display;
pub mod outcome;

// Re-export the core type
pub use outcome::Outcome;
