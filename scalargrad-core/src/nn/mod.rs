//! A small feed-forward network built on the reverse-mode engine.

pub mod loss;
pub mod module;
pub mod net;
pub mod neuron;
pub mod parameter;

pub use module::{BoundModule, Module};
pub use net::{BoundNet, NeuralNet};
pub use neuron::{Activation, BoundNeuron, Neuron};
pub use parameter::Parameter;
