use crate::autograd::{Graph, Var};

/// A long-lived trainable scalar.
///
/// Graphs are rebuilt on every step, so a parameter keeps its value and its
/// gradient outside of any graph. [`Parameter::bind`] places the current
/// value on a step's graph as a leaf; after `backward()`, the leaf's gradient
/// is added back with [`Parameter::accumulate_grad`].
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    value: f64,
    grad: f64,
}

impl Parameter {
    /// Creates a new parameter with a zero gradient.
    pub fn new(value: f64) -> Self {
        Parameter { value, grad: 0.0 }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn grad(&self) -> f64 {
        self.grad
    }

    /// Wraps the current value as a leaf node of `graph`.
    pub fn bind(&self, graph: &Graph) -> Var {
        graph.constant(self.value)
    }

    /// Adds `grad` to the stored gradient.
    ///
    /// Gradients accumulate until [`Parameter::zero_grad`] is called.
    pub fn accumulate_grad(&mut self, grad: f64) {
        self.grad += grad;
    }

    pub fn zero_grad(&mut self) {
        self.grad = 0.0;
    }

    /// Shifts the value by `delta` (used by optimizers).
    pub fn update(&mut self, delta: f64) {
        self.value += delta;
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }
}

impl From<f64> for Parameter {
    fn from(value: f64) -> Self {
        Parameter::new(value)
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
