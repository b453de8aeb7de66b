//! Defines the area estimation rule variants
//!
//! Provides the [`Rule`] enum, which enumerates all supported rules, along
//! with the per-interval geometry each rule produces.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::estimation::errors::EstimationError;
use crate::estimation::shape::Shape;

/// Area estimation rule variants.
/// - [`Rule::LeftRiemann`]  rectangle height from the left endpoint (LRAM)
/// - [`Rule::RightRiemann`] rectangle height from the right endpoint (RRAM)
/// - [`Rule::Trapezoidal`]  trapezoid between both endpoints
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    #[default]
    LeftRiemann,
    RightRiemann,
    #[serde(rename = "trapezoidal_sum")]
    Trapezoidal,
}

impl Rule {
    pub const ALL: [Rule; 3] = [Rule::LeftRiemann, Rule::RightRiemann, Rule::Trapezoidal];

    pub const fn rule_name(self) -> &'static str {
        match self {
            Rule::LeftRiemann  => "left_riemann",
            Rule::RightRiemann => "right_riemann",
            Rule::Trapezoidal  => "trapezoidal_sum",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Rule::LeftRiemann  => "Left Riemann Sum (LRAM)",
            Rule::RightRiemann => "Right Riemann Sum (RRAM)",
            Rule::Trapezoidal  => "Trapezoidal Sum",
        }
    }

    /// Shape this rule places over the interval `[x0, x1]` given the
    /// sampled values `f0 = f(x0)` and `f1 = f(x1)`.
    #[inline]
    pub fn shape(self, x0: f64, x1: f64, f0: f64, f1: f64) -> Shape {
        match self {
            Rule::LeftRiemann  => Shape::Rectangle { x0, x1, height: f0 },
            Rule::RightRiemann => Shape::Rectangle { x0, x1, height: f1 },
            Rule::Trapezoidal  => Shape::Trapezoid { x0, x1, h0: f0, h1: f1 },
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rule_name())
    }
}

impl FromStr for Rule {
    type Err = EstimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        match key.as_str() {
            "left_riemann" | "left" | "lram" => Ok(Rule::LeftRiemann),
            "right_riemann" | "right" | "rram" => Ok(Rule::RightRiemann),
            "trapezoidal_sum" | "trapezoidal" | "trapezoid" | "trap" => Ok(Rule::Trapezoidal),
            _ => Err(EstimationError::UnknownRule { got: s.to_string() }),
        }
    }
}
