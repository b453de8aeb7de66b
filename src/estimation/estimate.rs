//! Area Estimation
//!
//! Approximates the definite integral of sampled data with a
//! [Riemann sum](https://en.wikipedia.org/wiki/Riemann_sum) (left or right
//! endpoint) or the [trapezoidal rule](https://en.wikipedia.org/wiki/Trapezoidal_rule).
//!
//! Each consecutive pair `(x[i], f[i])`, `(x[i+1], f[i+1])` defines an
//! interval. The rule turns every interval into one [`Shape`]; the total is
//! the sum of the shapes' signed areas in interval order.

use crate::estimation::algorithms::Rule;
use crate::estimation::config::EstimationCfg;
use crate::estimation::report::EstimationReport;
use crate::estimation::shape::Shape;

/// Interval shapes in order. Pairs up to the shorter of the two slices.
#[inline]
fn interval_shapes<'s>(
    xs: &'s [f64], fxs: &'s [f64], rule: Rule
) -> impl Iterator<Item = Shape> + 's {
    xs.windows(2)
        .zip(fxs.windows(2))
        .map(move |(x, f)| rule.shape(x[0], x[1], f[0], f[1]))
}

/// Estimates the signed area under the samples `(xs, fxs)` with `rule`.
///
/// # Behavior
/// For `i = 0 .. N-2` with `w = xs[i+1] - xs[i]`:
///
/// ```text
/// left_riemann    : area_i = w * fxs[i]
/// right_riemann   : area_i = w * fxs[i+1]
/// trapezoidal_sum : area_i = 0.5 * (fxs[i] + fxs[i+1]) * w
/// ```
///
/// Fewer than two samples give a total of `0.0` and no shapes.
/// `xs` and `fxs` are expected to have equal length; validate with
/// [`EstimationCfg`] or [`crate::input::parse_samples`] first.
///
/// # Returns
/// [`EstimationReport`] containing
/// - `rule_name`   : e.g. `"trapezoidal_sum"`
/// - `n_provided`  : number of samples
/// - `n_intervals` : number of shapes
/// - `total`       : signed area estimate
/// - `shapes`      : per-interval geometry
pub fn estimate(xs: &[f64], fxs: &[f64], rule: Rule) -> EstimationReport {
    let mut report = EstimationReport::new(rule, xs.len());

    report.shapes = interval_shapes(xs, fxs, rule).collect();
    report.n_intervals = report.shapes.len();
    report.total = report.shapes.iter().fold(0.0, |acc, s| acc + s.area());

    report
}

/// Runs [`estimate`] over a validated [`EstimationCfg`].
pub fn estimate_cfg(cfg: EstimationCfg) -> EstimationReport {
    estimate(cfg.x(), cfg.fx(), cfg.rule())
}

/// Signed area only; no shapes are allocated.
pub fn total(xs: &[f64], fxs: &[f64], rule: Rule) -> f64 {
    interval_shapes(xs, fxs, rule).fold(0.0, |acc, s| acc + s.area())
}

/// Per-interval geometry only.
pub fn shapes(xs: &[f64], fxs: &[f64], rule: Rule) -> Vec<Shape> {
    interval_shapes(xs, fxs, rule).collect()
}
