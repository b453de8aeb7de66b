//! Per-interval shapes used to render an approximation.
//!
//! Each interval `[x0, x1]` carries one [`Shape`]. Widths and heights are
//! signed; a reversed interval or a negative height yields a negative area.

use serde::Serialize;

/// Renderable primitive for one interval.
///
/// - [`Shape::Rectangle`] : constant `height` over `[x0, x1]`
/// - [`Shape::Trapezoid`] : height `h0` at `x0`, `h1` at `x1`
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Rectangle { x0: f64, x1: f64, height: f64 },
    Trapezoid { x0: f64, x1: f64, h0: f64, h1: f64 },
}

impl Shape {
    #[inline]
    pub fn x0(&self) -> f64 {
        match *self {
            Shape::Rectangle { x0, .. } | Shape::Trapezoid { x0, .. } => x0,
        }
    }

    #[inline]
    pub fn x1(&self) -> f64 {
        match *self {
            Shape::Rectangle { x1, .. } | Shape::Trapezoid { x1, .. } => x1,
        }
    }

    /// Signed width `x1 - x0`.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x1() - self.x0()
    }

    /// Heights at the left and right edge.
    #[inline]
    pub fn heights(&self) -> (f64, f64) {
        match *self {
            Shape::Rectangle { height, .. } => (height, height),
            Shape::Trapezoid { h0, h1, .. } => (h0, h1),
        }
    }

    /// Signed area.
    ///
    /// ```text
    /// rectangle : width * height
    /// trapezoid : 0.5 * (h0 + h1) * width
    /// ```
    #[inline]
    pub fn area(&self) -> f64 {
        match *self {
            Shape::Rectangle { height, .. } => self.width() * height,
            Shape::Trapezoid { h0, h1, .. } => 0.5 * (h0 + h1) * self.width(),
        }
    }

    /// Polygon vertices, counter-clockwise from the baseline at `x0`.
    pub fn outline(&self) -> [(f64, f64); 4] {
        let (x0, x1) = (self.x0(), self.x1());
        let (h0, h1) = self.heights();
        [(x0, 0.0), (x0, h0), (x1, h1), (x1, 0.0)]
    }
}
