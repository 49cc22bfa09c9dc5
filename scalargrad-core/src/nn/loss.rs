use crate::autograd::Var;
use crate::error::ScalarGradError;

/// Sum of squared errors `Σ (oᵢ - tᵢ)²` between outputs and plain targets.
///
/// # Errors
/// Returns `TargetSizeMismatch` when the lengths differ and `EmptyBatch`
/// when both are empty.
pub fn squared_error(outputs: &[Var], targets: &[f64]) -> Result<Var, ScalarGradError> {
    if outputs.len() != targets.len() {
        return Err(ScalarGradError::TargetSizeMismatch {
            expected: outputs.len(),
            actual: targets.len(),
        });
    }
    let mut terms = outputs
        .iter()
        .zip(targets)
        .map(|(output, &target)| (output - target).powf(2.0));
    let first = terms.next().ok_or(ScalarGradError::EmptyBatch)?;
    Ok(terms.fold(first, |acc, term| acc + term))
}

/// [`squared_error`] divided by the number of outputs.
pub fn mean_squared_error(outputs: &[Var], targets: &[f64]) -> Result<Var, ScalarGradError> {
    let total = squared_error(outputs, targets)?;
    Ok(total / outputs.len() as f64)
}

#[cfg(test)]
#[path = "loss_test.rs"]
mod tests;
