//! Core error type.
//!
//! Downstream crates wrap `CoreError` as one `#[from]` variant of their own
//! error enums rather than re-declaring the lookup failures.

use std::fmt;

use thiserror::Error;

use crate::CityId;

/// How a failed city lookup was addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityRef {
    Id(CityId),
    Name(String),
}

impl fmt::Display for CityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CityRef::Id(id) => write!(f, "{id}"),
            CityRef::Name(name) => write!(f, "{name:?}"),
        }
    }
}

/// Errors produced by `rt-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown city reference {0}")]
    UnknownCity(CityRef),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("calendar overflow past {0}")]
    DateOverflow(chrono::NaiveDate),
}

/// Shorthand result type for `rt-core`.
pub type CoreResult<T> = Result<T, CoreError>;
