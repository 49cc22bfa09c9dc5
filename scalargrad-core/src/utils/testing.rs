use crate::autograd::Var;

/// Checks that each node's gradient is within `tolerance` of the expected one.
/// Panics with the offending index on mismatch.
pub fn check_grads_near(actual: &[&Var], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Gradient count mismatch");

    for (i, (var, &e)) in actual.iter().zip(expected).enumerate() {
        let a = var.grad();
        if !approx::abs_diff_eq!(a, e, epsilon = tolerance) {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                a,
                e,
                (a - e).abs(),
                tolerance
            );
        }
    }
}

/// Checks that a node's forward value is within `tolerance` of `expected`.
pub fn check_value_near(actual: &Var, expected: f64, tolerance: f64) {
    let a = actual.value();
    assert!(
        approx::abs_diff_eq!(a, expected, epsilon = tolerance),
        "Value mismatch: actual={:?}, expected={:?}, tolerance={:?}",
        a,
        expected,
        tolerance
    );
}
