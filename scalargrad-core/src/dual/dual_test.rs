use super::*;
use approx::assert_abs_diff_eq;
use std::f64::consts::{E, FRAC_PI_2};

const TOL: f64 = 1e-6;

#[test]
fn test_identity() {
    let (value, dx) = derivative(|x| x, 7.0);
    assert_eq!(value, 7.0);
    assert_eq!(dx, 1.0);
}

#[test]
fn test_neg_pow_mul_add() {
    // -x^2 + 3x at x = 5
    let (value, dx) = derivative(|x| -x.powf(2.0) + 3.0 * x, 5.0);
    assert_abs_diff_eq!(value, -10.0, epsilon = TOL);
    assert_abs_diff_eq!(dx, -7.0, epsilon = TOL);
}

#[test]
fn test_constant_times_variable() {
    let y = 4.0 * Dual::variable(3.0);
    assert_abs_diff_eq!(y.value(), 12.0, epsilon = TOL);
    assert_abs_diff_eq!(y.derivative(), 4.0, epsilon = TOL);
}

#[test]
fn test_large_values() {
    let (value, dx) = derivative(|x| x.powf(2.0) + 2.0 * x + 1.0, 1e6);
    assert_abs_diff_eq!(value, 1.000002e12, epsilon = TOL * 1e12);
    assert_abs_diff_eq!(dx, 2_000_002.0, epsilon = TOL * 1e6);
}

#[test]
fn test_rational_function() {
    // (x^2 + 1) / (x + 1) at x = 3
    let (value, dx) = derivative(|x| (x.powf(2.0) + 1.0) / (x + 1.0), 3.0);
    assert_abs_diff_eq!(value, 2.5, epsilon = TOL);
    assert_abs_diff_eq!(dx, 0.875, epsilon = TOL);
}

#[test]
fn test_cubic() {
    let (value, dx) = derivative(|x| x.powf(3.0) + x * 2.0 + 5.0, 2.0);
    assert_abs_diff_eq!(value, 17.0, epsilon = TOL);
    assert_abs_diff_eq!(dx, 14.0, epsilon = TOL);
}

#[test]
fn test_quotient_rule() {
    let (value, dx) = derivative(|x| x / (x + 1.0), 1.0);
    assert_abs_diff_eq!(value, 0.5, epsilon = TOL);
    assert_abs_diff_eq!(dx, 0.25, epsilon = TOL);
}

#[test]
fn test_sin_of_square_at_peak() {
    let (value, dx) = derivative(|x| x.powf(2.0).sin(), FRAC_PI_2.sqrt());
    assert_abs_diff_eq!(value, 1.0, epsilon = TOL);
    assert_abs_diff_eq!(dx, 0.0, epsilon = TOL);
}

#[test]
fn test_x_log_x() {
    let (value, dx) = derivative(|x| x * x.log(), E);
    assert_abs_diff_eq!(value, E, epsilon = TOL);
    assert_abs_diff_eq!(dx, 2.0, epsilon = TOL);
}

#[test]
fn test_exp_and_cos() {
    let (value, dx) = derivative(|x| x.exp() + x.cos(), 0.0);
    assert_abs_diff_eq!(value, 2.0, epsilon = TOL);
    assert_abs_diff_eq!(dx, 1.0, epsilon = TOL);
}

#[test]
fn test_subtraction() {
    let y = Dual::variable(4.0) - 1.5;
    assert_eq!(y, Dual::new(2.5, 1.0));
    let z = 10.0 - Dual::variable(4.0);
    assert_eq!(z, Dual::new(6.0, -1.0));
}

#[test]
fn test_relu() {
    assert_eq!(Dual::variable(2.0).relu(), Dual::new(2.0, 1.0));
    assert_eq!(Dual::variable(-2.0).relu(), Dual::new(0.0, 0.0));
    assert_eq!(Dual::variable(0.0).relu(), Dual::new(0.0, 0.0));
}

#[test]
fn test_constants_carry_no_derivative() {
    let c = Dual::from(3.0);
    assert_eq!(c, Dual::constant(3.0));
    let y = c * c + c.sin();
    assert_eq!(y.derivative(), 0.0);
}

#[test]
fn test_nan_passes_through() {
    let y = Dual::variable(-1.0).log();
    assert!(y.value().is_nan());
    assert_eq!(y.derivative(), -1.0);
}

#[test]
fn test_sum_and_zero() {
    let xs = [Dual::variable(1.0), Dual::constant(2.0), Dual::variable(3.0)];
    let total: Dual = xs.iter().copied().sum();
    assert_eq!(total, Dual::new(6.0, 2.0));
    assert!(Dual::zero().is_zero());
    assert_eq!(Dual::one(), Dual::constant(1.0));
}

#[test]
fn test_display() {
    assert_eq!(Dual::new(1.5, -2.0).to_string(), "Dual(x=1.5, dx=-2)");
}
