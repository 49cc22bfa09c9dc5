use crate::error::ScalarGradError;
use crate::nn::Parameter;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers update parameter values from their accumulated gradients. They
/// do not clear gradients; the owning module does that after the step.
pub trait Optimizer {
    /// Performs a single optimization step over `params`.
    ///
    /// Stateful optimizers expect the same parameters, in the same order, on
    /// every call.
    fn step(&mut self, params: Vec<&mut Parameter>) -> Result<(), ScalarGradError>;

    fn learning_rate(&self) -> f64;

    /// Changes the learning rate for subsequent steps.
    fn set_learning_rate(&mut self, learning_rate: f64) -> Result<(), ScalarGradError>;
}
