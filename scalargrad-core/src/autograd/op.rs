use super::graph::Node;
use std::fmt;

/// Index of a node inside its graph's arena.
///
/// Ids are only meaningful for the graph that issued them. An operand always
/// has a strictly smaller id than the node consuming it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.0)
    }
}

/// The operation that produced a node, carrying its operand ids.
///
/// Every variant knows how to push its output gradient back into its
/// operands, so the backward pass is a single exhaustive `match`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Raw input or promoted constant. Propagates nothing.
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    Div(NodeId, NodeId),
    /// `u^k` for a constant exponent `k`.
    Pow(NodeId, f64),
    Neg(NodeId),
    Relu(NodeId),
    Sin(NodeId),
    Cos(NodeId),
    Log(NodeId),
    Exp(NodeId),
}

impl Op {
    /// Short lowercase name, used in logs and `Debug` output of `Var`.
    pub fn name(&self) -> &'static str {
        match self {
            Op::Leaf => "leaf",
            Op::Add(..) => "add",
            Op::Mul(..) => "mul",
            Op::Div(..) => "div",
            Op::Pow(..) => "pow",
            Op::Neg(_) => "neg",
            Op::Relu(_) => "relu",
            Op::Sin(_) => "sin",
            Op::Cos(_) => "cos",
            Op::Log(_) => "log",
            Op::Exp(_) => "exp",
        }
    }

    /// Direct dependencies of the node, in operand order.
    ///
    /// A node used twice by the same operation (`x + x`) is yielded twice;
    /// the traversal's visited set is what deduplicates it.
    pub fn operands(&self) -> impl Iterator<Item = NodeId> {
        let (lhs, rhs) = match *self {
            Op::Leaf => (None, None),
            Op::Add(u, v) | Op::Mul(u, v) | Op::Div(u, v) => (Some(u), Some(v)),
            Op::Pow(u, _)
            | Op::Neg(u)
            | Op::Relu(u)
            | Op::Sin(u)
            | Op::Cos(u)
            | Op::Log(u)
            | Op::Exp(u) => (Some(u), None),
        };
        lhs.into_iter().chain(rhs)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }

    /// Adds this node's local contributions into its operands' gradients.
    ///
    /// `out_grad` must already be fully accumulated. Contributions are added
    /// once per operand slot, so `x * x` adds `x` twice into `x`.
    pub(crate) fn propagate(&self, out_value: f64, out_grad: f64, nodes: &mut [Node]) {
        match *self {
            Op::Leaf => {}
            Op::Add(u, v) => {
                nodes[u.0].grad += out_grad;
                nodes[v.0].grad += out_grad;
            }
            Op::Mul(u, v) => {
                let (a, b) = (nodes[u.0].value, nodes[v.0].value);
                nodes[u.0].grad += b * out_grad;
                nodes[v.0].grad += a * out_grad;
            }
            Op::Div(u, v) => {
                let (a, b) = (nodes[u.0].value, nodes[v.0].value);
                nodes[u.0].grad += (1.0 / b) * out_grad;
                nodes[v.0].grad += (-a / (b * b)) * out_grad;
            }
            Op::Pow(u, k) => {
                let a = nodes[u.0].value;
                nodes[u.0].grad += k * a.powf(k - 1.0) * out_grad;
            }
            Op::Neg(u) => {
                nodes[u.0].grad += -out_grad;
            }
            Op::Relu(u) => {
                // Inactive at exactly zero.
                if nodes[u.0].value > 0.0 {
                    nodes[u.0].grad += out_grad;
                }
            }
            Op::Sin(u) => {
                let a = nodes[u.0].value;
                nodes[u.0].grad += a.cos() * out_grad;
            }
            Op::Cos(u) => {
                let a = nodes[u.0].value;
                nodes[u.0].grad += -a.sin() * out_grad;
            }
            Op::Log(u) => {
                let a = nodes[u.0].value;
                nodes[u.0].grad += (1.0 / a) * out_grad;
            }
            Op::Exp(u) => {
                nodes[u.0].grad += out_value * out_grad;
            }
        }
    }
}

#[cfg(test)]
#[path = "op_test.rs"]
mod tests;
