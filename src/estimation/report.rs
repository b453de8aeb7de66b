//! Defines the struct returned by the area estimator.
//!
//! Defines the [`EstimationReport`] struct returned by
//! [`crate::estimation::estimate`].

use serde::Serialize;

use crate::estimation::algorithms::Rule;
use crate::estimation::shape::Shape;

/// Summary of an estimation run.
///
/// [`EstimationReport`]
/// - `rule`        : rule used
/// - `rule_name`   : machine name of the rule (e.g. `"left_riemann"`)
/// - `n_provided`  : number of `(x, f(x))` samples
/// - `n_intervals` : number of intervals, `n_provided - 1` or 0
/// - `total`       : signed area estimate
/// - `shapes`      : one shape per interval, left to right in input order
#[derive(Debug, Clone, Serialize)]
pub struct EstimationReport {
    pub rule: Rule,
    pub rule_name: &'static str,
    pub n_provided: usize,
    pub n_intervals: usize,
    pub total: f64,
    pub shapes: Vec<Shape>,
}

impl EstimationReport {
    pub fn new(rule: Rule, n_provided: usize) -> Self {
        Self {
            rule,
            rule_name: rule.rule_name(),
            n_provided,
            n_intervals: n_provided.saturating_sub(1),
            total: 0.0,
            shapes: Vec::new(),
        }
    }
}
