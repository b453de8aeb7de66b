//! Area estimates under sampled curves.
//!
//! - [`estimation`] : left/right Riemann and trapezoidal sums plus the
//!   per-interval shapes behind them
//! - [`input`]      : parsing of whitespace-separated sample strings
//! - [`plot`]       : rendering of the curve and shapes to an image file

pub mod estimation;
pub mod input;
pub mod plot;
