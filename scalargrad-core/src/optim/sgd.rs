use crate::error::ScalarGradError;
use crate::nn::Parameter;
use crate::optim::optimizer_trait::Optimizer;

/// Implements Stochastic Gradient Descent with optional momentum.
///
/// With momentum `μ` the update is `v ← μ·v + g`, `p ← p - lr·v`; with
/// `μ = 0` it reduces to `p ← p - lr·g`.
#[derive(Debug, Clone)]
pub struct Sgd {
    learning_rate: f64,
    momentum: f64,
    velocity: Vec<f64>,
}

impl Sgd {
    /// Creates a new `Sgd`.
    ///
    /// # Errors
    /// Returns `InvalidHyperparameter` unless `learning_rate` is positive and
    /// finite and `0 <= momentum < 1`.
    pub fn new(learning_rate: f64, momentum: f64) -> Result<Self, ScalarGradError> {
        validate_learning_rate(learning_rate)?;
        if !(0.0..1.0).contains(&momentum) {
            return Err(ScalarGradError::InvalidHyperparameter {
                name: "momentum",
                value: momentum,
            });
        }
        Ok(Sgd {
            learning_rate,
            momentum,
            velocity: Vec::new(),
        })
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, params: Vec<&mut Parameter>) -> Result<(), ScalarGradError> {
        if self.momentum == 0.0 {
            for param in params {
                let grad = param.grad();
                param.update(-self.learning_rate * grad);
            }
            return Ok(());
        }

        if self.velocity.is_empty() {
            self.velocity = vec![0.0; params.len()];
        } else if self.velocity.len() != params.len() {
            return Err(ScalarGradError::ParameterCountMismatch {
                expected: self.velocity.len(),
                actual: params.len(),
            });
        }

        for (param, velocity) in params.into_iter().zip(self.velocity.iter_mut()) {
            *velocity = self.momentum * *velocity + param.grad();
            param.update(-self.learning_rate * *velocity);
        }
        Ok(())
    }

    fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    fn set_learning_rate(&mut self, learning_rate: f64) -> Result<(), ScalarGradError> {
        validate_learning_rate(learning_rate)?;
        self.learning_rate = learning_rate;
        Ok(())
    }
}

fn validate_learning_rate(learning_rate: f64) -> Result<(), ScalarGradError> {
    if learning_rate > 0.0 && learning_rate.is_finite() {
        Ok(())
    } else {
        Err(ScalarGradError::InvalidHyperparameter {
            name: "learning_rate",
            value: learning_rate,
        })
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
