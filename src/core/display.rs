//! Human-readable rendering for [`Outcome`].

use std::fmt;

use crate::core::outcome::Outcome;

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(Some(value)) => write!(f, "ok: {value}"),
            Self::Ok(None) => f.write_str("ok: <no value>"),
            Self::EmptyOk => f.write_str("ok: <void>"),
            Self::Error(Some(payload)) => write!(f, "error: {payload}"),
            Self::Error(None) => f.write_str("error: <no payload>"),
        }
    }
}
