use crate::autograd::{Graph, Var};
use crate::error::ScalarGradError;
use crate::nn::module::{BoundModule, Module};
use crate::nn::Parameter;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Non-linearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Relu,
    Identity,
}

impl Activation {
    pub fn apply(&self, z: &Var) -> Var {
        match self {
            Activation::Relu => z.relu(),
            Activation::Identity => z.clone(),
        }
    }
}

/// A single unit computing `activation(Σ wᵢ·xᵢ + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with He-normal weights and a zero bias.
    ///
    /// # Errors
    /// Returns `InvalidLayerSizes` if `input_size` is zero.
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if input_size == 0 {
            return Err(ScalarGradError::InvalidLayerSizes {
                sizes: vec![input_size],
                reason: "a neuron needs at least one input".to_string(),
            });
        }
        let std_dev = (2.0 / input_size as f64).sqrt();
        let normal = Normal::new(0.0, std_dev).map_err(|_| {
            ScalarGradError::InvalidHyperparameter {
                name: "init_std",
                value: std_dev,
            }
        })?;
        let weights = (0..input_size)
            .map(|_| Parameter::new(normal.sample(&mut *rng)))
            .collect();
        Ok(Neuron {
            weights,
            bias: Parameter::new(0.0),
            activation,
        })
    }

    /// Builds a neuron with explicit weights, mainly for tests and loading.
    pub fn from_weights(weights: Vec<f64>, bias: f64, activation: Activation) -> Self {
        Neuron {
            weights: weights.into_iter().map(Parameter::new).collect(),
            bias: Parameter::new(bias),
            activation,
        }
    }

    pub fn input_size(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }
}

impl Module for Neuron {
    type Bound = BoundNeuron;

    fn bind(&self, graph: &Graph) -> BoundNeuron {
        BoundNeuron {
            weights: self.weights.iter().map(|w| w.bind(graph)).collect(),
            bias: self.bias.bind(graph),
            activation: self.activation,
        }
    }

    // Weights first, bias last.
    fn parameters(&self) -> Vec<&Parameter> {
        self.weights.iter().chain(std::iter::once(&self.bias)).collect()
    }

    fn parameters_mut(&mut self) -> Vec<&mut Parameter> {
        self.weights
            .iter_mut()
            .chain(std::iter::once(&mut self.bias))
            .collect()
    }
}

/// A [`Neuron`] whose parameters live on one graph.
#[derive(Debug, Clone)]
pub struct BoundNeuron {
    weights: Vec<Var>,
    bias: Var,
    activation: Activation,
}

impl BoundNeuron {
    /// Computes the neuron output for `inputs` on the bound graph.
    ///
    /// # Errors
    /// Returns `InputSizeMismatch` if `inputs` does not match the weight count.
    pub fn forward(&self, inputs: &[Var]) -> Result<Var, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let z = inputs
            .iter()
            .zip(&self.weights)
            .fold(self.bias.clone(), |acc, (x, w)| &acc + &(x * w));
        Ok(self.activation.apply(&z))
    }
}

impl BoundModule for BoundNeuron {
    fn parameter_vars(&self) -> Vec<&Var> {
        self.weights.iter().chain(std::iter::once(&self.bias)).collect()
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
