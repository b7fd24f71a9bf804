//! The error type shared by every fallible function in this crate.

use thiserror::Error;

/// Returned when a function is called with a value it cannot work with,
/// like an empty identifier or an empty pad string.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
