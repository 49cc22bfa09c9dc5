use crate::autograd::{Graph, Var};
use crate::nn::Parameter;

/// A module whose parameters have been placed on one step's graph.
pub trait BoundModule {
    /// Leaf nodes of the bound parameters, in the same order as
    /// [`Module::parameters`].
    fn parameter_vars(&self) -> Vec<&Var>;
}

/// The base trait for all neural network modules.
///
/// A module owns its [`Parameter`]s. Each training step binds it to a fresh
/// [`Graph`], runs the forward pass on the bound form, calls `backward()` on
/// the loss, and copies the leaf gradients back with
/// [`Module::accumulate_grads`].
pub trait Module: std::fmt::Debug {
    type Bound: BoundModule;

    /// Places every parameter on `graph` as a leaf node.
    fn bind(&self, graph: &Graph) -> Self::Bound;

    /// Returns all learnable parameters of the module, including those of
    /// sub-modules.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Mutable access to the same parameters, in the same order.
    fn parameters_mut(&mut self) -> Vec<&mut Parameter>;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets every parameter gradient to zero.
    ///
    /// Must be called between steps: gradients otherwise keep accumulating.
    fn zero_grad(&mut self) {
        for param in self.parameters_mut() {
            param.zero_grad();
        }
    }

    /// Adds the gradients of `bound`'s leaves into the parameters.
    fn accumulate_grads(&mut self, bound: &Self::Bound) {
        let vars = bound.parameter_vars();
        let params = self.parameters_mut();
        debug_assert_eq!(params.len(), vars.len());
        for (param, var) in params.into_iter().zip(vars) {
            param.accumulate_grad(var.grad());
        }
    }
}
