use approx::assert_abs_diff_eq;
use riemann::estimation::Rule;
use riemann::input::{parse_samples, parse_values, InputError, Samples, Series};

type RiemannResult = Result<(), InputError>;

#[test]
fn parses_whitespace_separated() -> RiemannResult {
    let v = parse_values("0  1\t2.5\n-3 1e2", Series::X)?;
    assert_eq!(v, vec![0.0, 1.0, 2.5, -3.0, 100.0]);
    Ok(())
}

#[test]
fn blank_is_empty() -> RiemannResult {
    assert!(parse_values("", Series::X)?.is_empty());
    assert!(parse_values("   \t ", Series::Fx)?.is_empty());
    Ok(())
}

#[test]
fn non_numeric_token() {
    let err = parse_values("1 2 abc 4", Series::Fx).unwrap_err();
    assert!(matches!(err, InputError::InvalidValue { which: Series::Fx, idx: 2, ref token }
        if token == "abc"));
}

#[test]
fn comma_separated_is_rejected() {
    let err = parse_values("1,2,3", Series::X).unwrap_err();
    assert!(matches!(err, InputError::InvalidValue { which: Series::X, idx: 0, .. }));
}

#[test]
fn non_finite_token() {
    let err = parse_values("1 nan", Series::X).unwrap_err();
    assert!(matches!(err, InputError::NonFiniteValue { which: Series::X, idx: 1, .. }));

    let err = parse_values("inf 2", Series::Fx).unwrap_err();
    assert!(matches!(err, InputError::NonFiniteValue { which: Series::Fx, idx: 0, ref token }
        if token == "inf"));
}

#[test]
fn non_finite_message_is_distinct() {
    let err = parse_values("0 -inf", Series::X).unwrap_err();
    assert_eq!(
        err.to_string(),
        "values of x and f(x) must be finite: `-inf` at x index 1"
    );
}

#[test]
fn samples_new_rejects_nan() {
    let err = Samples::new(vec![0.0, f64::NAN], vec![1.0, 2.0]).unwrap_err();
    assert!(matches!(err, InputError::NonFiniteValue { which: Series::X, idx: 1, .. }));
}

#[test]
fn samples_new_rejects_infinite_fx() {
    let err = Samples::new(vec![0.0, 1.0, 2.0], vec![1.0, 2.0, f64::NEG_INFINITY]).unwrap_err();
    assert!(matches!(err, InputError::NonFiniteValue { which: Series::Fx, idx: 2, .. }));
}

#[test]
fn samples_new_finiteness_before_length() {
    let err = Samples::new(vec![f64::INFINITY], vec![1.0, 2.0]).unwrap_err();
    assert!(matches!(err, InputError::NonFiniteValue { which: Series::X, idx: 0, .. }));
}

#[test]
fn samples_new_accepts_finite() -> RiemannResult {
    let s = Samples::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 4.0, 9.0])?;
    assert_abs_diff_eq!(s.estimate(Rule::Trapezoidal).total, 9.5, epsilon = 1e-12);
    Ok(())
}

#[test]
fn samples_pair_up() -> RiemannResult {
    let s = parse_samples("0 1 2 3", "0 1 4 9")?;
    assert_eq!(s.len(), 4);
    assert!(!s.is_empty());
    assert_eq!(s.xs(), &[0.0, 1.0, 2.0, 3.0]);
    assert_eq!(s.fxs(), &[0.0, 1.0, 4.0, 9.0]);

    assert_abs_diff_eq!(s.estimate(Rule::LeftRiemann).total, 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(s.estimate(Rule::RightRiemann).total, 14.0, epsilon = 1e-12);
    assert_abs_diff_eq!(s.estimate(Rule::Trapezoidal).total, 9.5, epsilon = 1e-12);
    Ok(())
}

#[test]
fn unequal_length() {
    let err = parse_samples("0 1 2", "0 1").unwrap_err();
    assert!(matches!(err, InputError::UnequalLength { x_len: 3, fx_len: 2 }));
}

#[test]
fn value_error_reported_before_length() {
    let err = parse_samples("0 1 2", "0 x").unwrap_err();
    assert!(matches!(err, InputError::InvalidValue { which: Series::Fx, idx: 1, .. }));
}

#[test]
fn x_checked_before_fx() {
    let err = parse_samples("0 ? 2", "0 x 4").unwrap_err();
    assert!(matches!(err, InputError::InvalidValue { which: Series::X, idx: 1, .. }));
}

#[test]
fn error_messages() {
    let err = parse_samples("0 1", "0").unwrap_err();
    assert_eq!(
        err.to_string(),
        "the number of x and f(x) values must be equal: got 2 and 1"
    );

    let err = parse_samples("0 1", "0 y").unwrap_err();
    assert_eq!(
        err.to_string(),
        "values of x and f(x) must be numerical: `y` at f(x) index 1"
    );
}

#[test]
fn single_sample_is_zero() -> RiemannResult {
    let s = parse_samples("5", "2")?;
    let rep = s.estimate(Rule::Trapezoidal);
    assert_eq!(rep.total, 0.0);
    assert!(rep.shapes.is_empty());
    Ok(())
}
