//! Input validation error types.
//!
//! ┌ [`InputError::InvalidValue`]   : token is not a number
//! ├ [`InputError::NonFiniteValue`] : value is `nan` or infinite
//! └ [`InputError::UnequalLength`]  : x and f(x) counts differ
//!
//! All are raised before any estimate is attempted.

use std::fmt;

use thiserror::Error;

/// Which of the two input sequences a value came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Series {
    X,
    Fx,
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Series::X  => f.write_str("x"),
            Series::Fx => f.write_str("f(x)"),
        }
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("values of x and f(x) must be numerical: `{token}` at {which} index {idx}")]
    InvalidValue { which: Series, idx: usize, token: String },

    #[error("values of x and f(x) must be finite: `{token}` at {which} index {idx}")]
    NonFiniteValue { which: Series, idx: usize, token: String },

    #[error("the number of x and f(x) values must be equal: got {x_len} and {fx_len}")]
    UnequalLength { x_len: usize, fx_len: usize },
}
