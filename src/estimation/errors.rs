use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstimationError {
    #[error("unequal length: x has {x_len} elements, f(x) has {fx_len}")]
    UnequalLength { x_len: usize, fx_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteValue { idx: usize },

    #[error("unknown rule `{got}`: expected left_riemann, right_riemann or trapezoidal_sum")]
    UnknownRule { got: String },
}
