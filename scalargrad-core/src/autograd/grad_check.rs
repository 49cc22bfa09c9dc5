use super::graph::{Graph, Var};
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Epsilon must be positive and finite, got {0:?}")]
    InvalidEpsilon(f64),

    #[error("Function returned a node that does not belong to the graph it was given")]
    ForeignOutput,
}

/// Checks reverse-mode gradients against central finite differences.
///
/// `func` is evaluated once on a graph whose leaves hold `inputs` and
/// differentiated with `backward()`. Then, for every input `i`, it is
/// re-evaluated on fresh graphs with `inputs[i] ± epsilon` and the
/// numerical slope `(f(x+ε) - f(x-ε)) / 2ε` is compared with the analytical
/// gradient. A pair is accepted when either the absolute or the relative
/// difference is within `tolerance`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&Graph, &[Var]) -> Var,
{
    if !(epsilon > 0.0 && epsilon.is_finite()) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    let analytical_grads = {
        let graph = Graph::new();
        let leaves: Vec<Var> = inputs.iter().map(|&x| graph.constant(x)).collect();
        let output = func(&graph, &leaves);
        if !output.graph().ptr_eq(&graph) {
            return Err(GradCheckError::ForeignOutput);
        }
        output.backward();
        leaves.iter().map(Var::grad).collect::<Vec<f64>>()
    };

    for (i, &analytical_grad) in analytical_grads.iter().enumerate() {
        let loss_plus = evaluate_perturbed(&func, inputs, i, epsilon)?;
        let loss_minus = evaluate_perturbed(&func, inputs, i, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > tolerance && difference / (analytical_grad.abs() + epsilon) > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
        log::trace!(
            "grad check input {}: analytical {} numerical {}",
            i,
            analytical_grad,
            numerical_grad
        );
    }

    Ok(())
}

fn evaluate_perturbed<F>(
    func: &F,
    inputs: &[f64],
    index: usize,
    delta: f64,
) -> Result<f64, GradCheckError>
where
    F: Fn(&Graph, &[Var]) -> Var,
{
    let graph = Graph::new();
    let leaves: Vec<Var> = inputs
        .iter()
        .enumerate()
        .map(|(j, &x)| graph.constant(if j == index { x + delta } else { x }))
        .collect();
    let output = func(&graph, &leaves);
    if !output.graph().ptr_eq(&graph) {
        return Err(GradCheckError::ForeignOutput);
    }
    Ok(output.value())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
