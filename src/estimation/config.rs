//! Validated configuration for the area estimator.
//!
//! [`EstimationCfg`] fields
//! - `x`    : x values provided
//! - `fx`   : f(x) values provided
//! - `rule` : [`Rule`] to apply; [`Rule::LeftRiemann`] by default
//!
//! [`EstimationCfg::new`] initializes configuration with empty slices.
//! Setters reject non-finite values and, once both sequences are set,
//! mismatched lengths. Fewer than two points is allowed and estimates to 0.

use crate::estimation::algorithms::Rule;
use crate::estimation::errors::EstimationError;

#[derive(Debug, Copy, Clone)]
pub struct EstimationCfg<'a> {
    x    : &'a [f64],
    fx   : &'a [f64],
    rule : Rule,
    // distinguishes "never set" from "set to an empty slice"
    x_set  : bool,
    fx_set : bool,
}

impl<'a> Default for EstimationCfg<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> EstimationCfg<'a> {
    pub const DEFAULT_RULE: Rule = Rule::LeftRiemann;

    #[must_use]
    pub fn new() -> Self {
        Self {
            x      : &[],
            fx     : &[],
            rule   : Self::DEFAULT_RULE,
            x_set  : false,
            fx_set : false,
        }
    }

    pub fn set_x(mut self, v: &'a [f64]) -> Result<Self, EstimationError> {
        if let Some(idx) = non_finite_idx(v) {
            return Err(EstimationError::NonFiniteValue { idx });
        }

        // length agreement check
        // symmetric with set_fx
        if self.fx_set && self.fx.len() != v.len() {
            return Err(EstimationError::UnequalLength { x_len: v.len(), fx_len: self.fx.len() });
        }

        self.x = v;
        self.x_set = true;
        Ok(self)
    }

    pub fn set_fx(mut self, v: &'a [f64]) -> Result<Self, EstimationError> {
        if let Some(idx) = non_finite_idx(v) {
            return Err(EstimationError::NonFiniteValue { idx });
        }

        if self.x_set && self.x.len() != v.len() {
            return Err(EstimationError::UnequalLength { x_len: self.x.len(), fx_len: v.len() });
        }

        self.fx = v;
        self.fx_set = true;
        Ok(self)
    }

    pub fn set_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn fx(&self) -> &'a [f64] { self.fx }
    pub fn rule(&self) -> Rule { self.rule }
}

pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}
