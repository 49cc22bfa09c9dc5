use crate::autograd::{Graph, Var};
use crate::error::ScalarGradError;
use crate::nn::loss::squared_error;
use crate::nn::module::{BoundModule, Module};
use crate::nn::neuron::{Activation, BoundNeuron, Neuron};
use crate::nn::Parameter;
use crate::optim::Optimizer;
use rand::Rng;

/// A fully connected feed-forward network of [`Neuron`]s.
///
/// Every neuron, including the output layer, applies ReLU.
#[derive(Debug, Clone)]
pub struct NeuralNet {
    layers: Vec<Vec<Neuron>>,
}

impl NeuralNet {
    /// Creates a network from `layer_sizes`, the first entry being the input
    /// width and each following entry the width of one layer.
    ///
    /// # Errors
    /// Returns `InvalidLayerSizes` if fewer than two sizes are given or any
    /// size is zero.
    pub fn new<R: Rng + ?Sized>(layer_sizes: &[usize], rng: &mut R) -> Result<Self, ScalarGradError> {
        if layer_sizes.len() < 2 {
            return Err(ScalarGradError::InvalidLayerSizes {
                sizes: layer_sizes.to_vec(),
                reason: "need an input size and at least one layer".to_string(),
            });
        }
        if layer_sizes.contains(&0) {
            return Err(ScalarGradError::InvalidLayerSizes {
                sizes: layer_sizes.to_vec(),
                reason: "sizes must be non-zero".to_string(),
            });
        }

        let mut layers = Vec::with_capacity(layer_sizes.len() - 1);
        for pair in layer_sizes.windows(2) {
            let layer = (0..pair[1])
                .map(|_| Neuron::new(pair[0], Activation::Relu, &mut *rng))
                .collect::<Result<Vec<_>, _>>()?;
            layers.push(layer);
        }
        log::debug!(
            "created network {:?} with {} parameters",
            layer_sizes,
            layers.iter().flatten().map(|n| n.input_size() + 1).sum::<usize>()
        );
        Ok(NeuralNet { layers })
    }

    /// Assembles a network from hand-built layers.
    ///
    /// # Errors
    /// Returns `InvalidLayerSizes` if a layer is empty or a neuron's input
    /// size does not match the width of the previous layer.
    pub fn from_layers(layers: Vec<Vec<Neuron>>) -> Result<Self, ScalarGradError> {
        let widths: Vec<usize> = layers.iter().map(Vec::len).collect();
        if layers.is_empty() || widths.contains(&0) {
            return Err(ScalarGradError::InvalidLayerSizes {
                sizes: widths,
                reason: "layers must be non-empty".to_string(),
            });
        }
        let input_size = layers[0][0].input_size();
        let mut expected = input_size;
        for layer in &layers {
            if let Some(neuron) = layer.iter().find(|n| n.input_size() != expected) {
                return Err(ScalarGradError::InvalidLayerSizes {
                    sizes: widths.clone(),
                    reason: format!(
                        "neuron expects {} inputs but previous layer has {}",
                        neuron.input_size(),
                        expected
                    ),
                });
            }
            expected = layer.len();
        }
        Ok(NeuralNet { layers })
    }

    pub fn layers(&self) -> &[Vec<Neuron>] {
        &self.layers
    }

    /// Input width followed by the width of every layer.
    pub fn layer_sizes(&self) -> Vec<usize> {
        std::iter::once(self.input_size())
            .chain(self.layers.iter().map(Vec::len))
            .collect()
    }

    pub fn input_size(&self) -> usize {
        self.layers[0][0].input_size()
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, Vec::len)
    }

    /// Forward pass on plain numbers, discarding the graph.
    pub fn predict(&self, inputs: &[f64]) -> Result<Vec<f64>, ScalarGradError> {
        let graph = Graph::new();
        let bound = self.bind(&graph);
        let xs: Vec<Var> = inputs.iter().map(|&x| graph.constant(x)).collect();
        Ok(bound.flow(&xs)?.iter().map(Var::value).collect())
    }

    /// One gradient step on a single sample. Returns the squared-error loss
    /// measured before the update.
    pub fn train<O: Optimizer + ?Sized>(
        &mut self,
        inputs: &[f64],
        targets: &[f64],
        optimizer: &mut O,
    ) -> Result<f64, ScalarGradError> {
        self.train_batch(&[(inputs, targets)], optimizer)
    }

    /// One gradient step on the mean squared-error loss of a batch.
    ///
    /// Builds one graph for the whole batch, runs a single backward pass,
    /// hands the gradients to `optimizer`, then zeroes them. Returns the loss
    /// measured before the update.
    pub fn train_batch<I, T, O>(
        &mut self,
        batch: &[(I, T)],
        optimizer: &mut O,
    ) -> Result<f64, ScalarGradError>
    where
        I: AsRef<[f64]>,
        T: AsRef<[f64]>,
        O: Optimizer + ?Sized,
    {
        let graph = Graph::new();
        let bound = self.bind(&graph);

        let mut total: Option<Var> = None;
        for (inputs, targets) in batch {
            let xs: Vec<Var> = inputs.as_ref().iter().map(|&x| graph.constant(x)).collect();
            let outputs = bound.flow(&xs)?;
            let loss = squared_error(&outputs, targets.as_ref())?;
            total = Some(match total {
                Some(acc) => acc + loss,
                None => loss,
            });
        }
        let loss = total.ok_or(ScalarGradError::EmptyBatch)? / batch.len() as f64;

        loss.backward();
        self.accumulate_grads(&bound);
        optimizer.step(self.parameters_mut())?;
        self.zero_grad();

        log::trace!("batch of {} samples, {} graph nodes, loss {}", batch.len(), graph.len(), loss.value());
        Ok(loss.value())
    }
}

impl Module for NeuralNet {
    type Bound = BoundNet;

    fn bind(&self, graph: &Graph) -> BoundNet {
        BoundNet {
            layers: self
                .layers
                .iter()
                .map(|layer| layer.iter().map(|n| n.bind(graph)).collect())
                .collect(),
        }
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.layers.iter().flatten().flat_map(Neuron::parameters).collect()
    }

    fn parameters_mut(&mut self) -> Vec<&mut Parameter> {
        self.layers
            .iter_mut()
            .flatten()
            .flat_map(Neuron::parameters_mut)
            .collect()
    }
}

/// A [`NeuralNet`] whose parameters live on one graph.
#[derive(Debug, Clone)]
pub struct BoundNet {
    layers: Vec<Vec<BoundNeuron>>,
}

impl BoundNet {
    /// Feeds `inputs` through every layer and returns the output layer.
    pub fn flow(&self, inputs: &[Var]) -> Result<Vec<Var>, ScalarGradError> {
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer
                .iter()
                .map(|neuron| neuron.forward(&activations))
                .collect::<Result<Vec<_>, _>>()?;
        }
        Ok(activations)
    }
}

impl BoundModule for BoundNet {
    fn parameter_vars(&self) -> Vec<&Var> {
        self.layers
            .iter()
            .flatten()
            .flat_map(BoundNeuron::parameter_vars)
            .collect()
    }
}

#[cfg(test)]
#[path = "net_test.rs"]
mod tests;
