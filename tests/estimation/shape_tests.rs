use approx::assert_abs_diff_eq;
use riemann::estimation::{Rule, Shape};

const ATOL: f64 = 1e-12;

#[test]
fn rule_shape_geometry() {
    assert_eq!(
        Rule::LeftRiemann.shape(1.0, 3.0, 2.0, 5.0),
        Shape::Rectangle { x0: 1.0, x1: 3.0, height: 2.0 }
    );
    assert_eq!(
        Rule::RightRiemann.shape(1.0, 3.0, 2.0, 5.0),
        Shape::Rectangle { x0: 1.0, x1: 3.0, height: 5.0 }
    );
    assert_eq!(
        Rule::Trapezoidal.shape(1.0, 3.0, 2.0, 5.0),
        Shape::Trapezoid { x0: 1.0, x1: 3.0, h0: 2.0, h1: 5.0 }
    );
}

#[test]
fn rectangle_area_and_heights() {
    let s = Shape::Rectangle { x0: 1.0, x1: 3.0, height: 2.5 };
    assert_eq!(s.width(), 2.0);
    assert_eq!(s.heights(), (2.5, 2.5));
    assert_abs_diff_eq!(s.area(), 5.0, epsilon = ATOL);
}

#[test]
fn trapezoid_area_and_heights() {
    let s = Shape::Trapezoid { x0: 1.0, x1: 3.0, h0: 2.0, h1: 5.0 };
    assert_eq!(s.heights(), (2.0, 5.0));
    assert_abs_diff_eq!(s.area(), 7.0, epsilon = ATOL);
}

#[test]
fn reversed_interval_has_negative_area() {
    let s = Shape::Trapezoid { x0: 3.0, x1: 1.0, h0: 2.0, h1: 5.0 };
    assert_eq!(s.width(), -2.0);
    assert_abs_diff_eq!(s.area(), -7.0, epsilon = ATOL);
}

#[test]
fn outline_starts_on_baseline() {
    let rect = Shape::Rectangle { x0: 0.0, x1: 1.0, height: 4.0 };
    assert_eq!(rect.outline(), [(0.0, 0.0), (0.0, 4.0), (1.0, 4.0), (1.0, 0.0)]);

    let trap = Shape::Trapezoid { x0: 2.0, x1: 3.0, h0: -1.0, h1: 6.0 };
    assert_eq!(trap.outline(), [(2.0, 0.0), (2.0, -1.0), (3.0, 6.0), (3.0, 0.0)]);
}
