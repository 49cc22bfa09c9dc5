use crate::error::ScalarGradError;

/// Hyper-parameters for training a [`NeuralNet`](crate::nn::NeuralNet) on a
/// synthetic dataset.
///
/// The defaults reproduce the "inside the circle" task: 500 points in
/// `[-1, 1]²`, label `1.0` within radius `0.5`, a `[2, 8, 1]` network and
/// 100 epochs of per-sample SGD.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub layer_sizes: Vec<usize>,
    pub learning_rate: f64,
    pub momentum: f64,
    pub epochs: usize,
    pub batch_size: usize,
    pub samples: usize,
    pub radius: f64,
    pub seed: u64,
    /// Report progress every `log_every` epochs; `0` disables reports.
    pub log_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            layer_sizes: vec![2, 8, 1],
            learning_rate: 0.01,
            momentum: 0.0,
            epochs: 100,
            batch_size: 1,
            samples: 500,
            radius: 0.5,
            seed: 42,
            log_every: 5,
        }
    }
}

impl TrainConfig {
    /// Checks that every field is usable.
    ///
    /// # Errors
    /// Returns `InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if self.layer_sizes.len() < 2 || self.layer_sizes.contains(&0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "layer_sizes must have at least two non-zero entries, got {:?}",
                self.layer_sizes
            )));
        }
        if !(self.learning_rate > 0.0 && self.learning_rate.is_finite()) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "learning_rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        if !(0.0..1.0).contains(&self.momentum) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "momentum must be in [0, 1), got {}",
                self.momentum
            )));
        }
        if self.epochs == 0 {
            return Err(ScalarGradError::InvalidConfig("epochs must be non-zero".to_string()));
        }
        if self.batch_size == 0 {
            return Err(ScalarGradError::InvalidConfig("batch_size must be non-zero".to_string()));
        }
        if self.samples == 0 {
            return Err(ScalarGradError::InvalidConfig("samples must be non-zero".to_string()));
        }
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "radius must be positive and finite, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
