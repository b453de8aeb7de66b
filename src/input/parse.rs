//! Parses whitespace-separated sample strings into validated pairs.

use log::debug;

use crate::estimation::algorithms::Rule;
use crate::estimation::config::non_finite_idx;
use crate::estimation::estimate::estimate;
use crate::estimation::report::EstimationReport;
use crate::input::errors::{InputError, Series};

/// Equal-length, finite `x` / `f(x)` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    xs: Vec<f64>,
    fxs: Vec<f64>,
}

fn check_finite(values: &[f64], which: Series) -> Result<(), InputError> {
    match non_finite_idx(values) {
        Some(idx) => Err(InputError::NonFiniteValue { which, idx, token: values[idx].to_string() }),
        None      => Ok(()),
    }
}

impl Samples {
    /// # Errors
    /// - [`InputError::NonFiniteValue`] if any value is `nan` or infinite;
    ///   `xs` is checked first.
    /// - [`InputError::UnequalLength`] if the counts differ.
    pub fn new(xs: Vec<f64>, fxs: Vec<f64>) -> Result<Self, InputError> {
        check_finite(&xs, Series::X)?;
        check_finite(&fxs, Series::Fx)?;
        if xs.len() != fxs.len() {
            return Err(InputError::UnequalLength { x_len: xs.len(), fx_len: fxs.len() });
        }
        Ok(Self { xs, fxs })
    }

    pub fn xs(&self) -> &[f64] { &self.xs }
    pub fn fxs(&self) -> &[f64] { &self.fxs }
    pub fn len(&self) -> usize { self.xs.len() }
    pub fn is_empty(&self) -> bool { self.xs.is_empty() }

    pub fn estimate(&self, rule: Rule) -> EstimationReport {
        estimate(&self.xs, &self.fxs, rule)
    }
}

/// Parses a single whitespace-separated list of numbers belonging to `which`.
///
/// Empty or blank text yields an empty vector. `nan` and `inf` are rejected.
///
/// # Errors
/// - [`InputError::InvalidValue`] with the index of the first non-numeric token.
/// - [`InputError::NonFiniteValue`] with the index of the first `nan`/`inf`.
pub fn parse_values(text: &str, which: Series) -> Result<Vec<f64>, InputError> {
    text.split_whitespace()
        .enumerate()
        .map(|(idx, token)| match token.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            Ok(_)  => Err(InputError::NonFiniteValue { which, idx, token: token.to_string() }),
            Err(_) => Err(InputError::InvalidValue { which, idx, token: token.to_string() }),
        })
        .collect()
}

/// Parses the `x` and `f(x)` strings and checks they pair up.
///
/// # Errors
/// - [`InputError::InvalidValue`] / [`InputError::NonFiniteValue`] if either
///   string has a bad token; `x` is checked first.
/// - [`InputError::UnequalLength`] if the counts differ.
pub fn parse_samples(x_text: &str, fx_text: &str) -> Result<Samples, InputError> {
    let xs  = parse_values(x_text, Series::X)?;
    let fxs = parse_values(fx_text, Series::Fx)?;
    debug!("parsed {} x values and {} f(x) values", xs.len(), fxs.len());
    Samples::new(xs, fxs)
}
