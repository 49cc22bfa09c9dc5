//! Reverse-mode automatic differentiation over scalar nodes.
//!
//! Nodes live in an append-only arena owned by a [`Graph`]; operands are
//! referenced by [`NodeId`]. [`Var::backward`] seeds the loss with `1.0`,
//! orders the reachable nodes with a post-order DFS and runs each node's
//! [`Op`] rule once, in reverse order, so shared sub-expressions receive the
//! sum of every path's contribution.

pub mod grad_check;
mod graph;
mod op;
mod var_ops;

pub use grad_check::{check_grad, GradCheckError};
pub use graph::{Graph, Var};
pub use op::{NodeId, Op};

/// Evaluates `func` on a fresh graph and differentiates it once.
///
/// Each entry of `inputs` becomes a leaf. Returns the output value and the
/// gradient with respect to every input, in input order.
pub fn gradient<F>(func: F, inputs: &[f64]) -> (f64, Vec<f64>)
where
    F: Fn(&Graph, &[Var]) -> Var,
{
    let graph = Graph::new();
    let leaves: Vec<Var> = inputs.iter().map(|&x| graph.constant(x)).collect();
    let output = func(&graph, &leaves);
    output.backward();
    (output.value(), leaves.iter().map(Var::grad).collect())
}
