use super::op::{NodeId, Op};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// One arena slot: forward value, accumulated gradient and producing op.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
}

/// Append-only node store shared by every `Var` of one graph.
#[derive(Debug, Default)]
pub(crate) struct Tape {
    nodes: Vec<Node>,
}

impl Tape {
    fn push(&mut self, value: f64, op: Op) -> NodeId {
        debug_assert!(op.operands().all(|operand| operand.0 < self.nodes.len()));
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            value,
            grad: 0.0,
            op,
        });
        id
    }

    /// Post-order DFS over the operand relation starting at `root`.
    ///
    /// Every node appears after all of its operands and at most once. Uses an
    /// explicit stack so long chains do not exhaust the call stack.
    fn topological_order(&self, root: NodeId) -> Vec<NodeId> {
        let mut visited = vec![false; self.nodes.len()];
        let mut sorted = Vec::new();
        // (node, operands already scheduled)
        let mut stack = vec![(root, false)];

        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                sorted.push(id);
                continue;
            }
            if visited[id.0] {
                continue;
            }
            visited[id.0] = true;
            stack.push((id, true));
            for operand in self.nodes[id.0].op.operands() {
                if !visited[operand.0] {
                    stack.push((operand, false));
                }
            }
        }
        sorted
    }

    fn backward_from(&mut self, root: NodeId) {
        let sorted = self.topological_order(root);
        log::debug!(
            "backward from {}: {} reachable of {} nodes",
            root,
            sorted.len(),
            self.nodes.len()
        );

        self.nodes[root.0].grad = 1.0;
        for &id in sorted.iter().rev() {
            let node = self.nodes[id.0];
            node.op.propagate(node.value, node.grad, &mut self.nodes);
        }
    }

    fn zero_grad(&mut self) {
        for node in &mut self.nodes {
            node.grad = 0.0;
        }
    }
}

/// A reverse-mode computation graph.
///
/// The graph owns every node created through it or through the `Var`s it
/// hands out. Cloning a `Graph` clones the handle, not the nodes. Memory is
/// released when the last handle (graph or var) is dropped.
#[derive(Clone, Default)]
pub struct Graph {
    tape: Rc<RefCell<Tape>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a raw number as a leaf node with zero gradient.
    ///
    /// Inputs, trainable weights and literals are all leaves; they differ only
    /// in whether the caller reads their gradient afterwards.
    pub fn constant(&self, value: f64) -> Var {
        let id = self.tape.borrow_mut().push(value, Op::Leaf);
        Var {
            tape: Rc::clone(&self.tape),
            id,
        }
    }

    /// Number of nodes recorded so far.
    pub fn len(&self) -> usize {
        self.tape.borrow().nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resets the gradient of every node in the graph to zero.
    pub fn zero_grad(&self) {
        self.tape.borrow_mut().zero_grad();
    }

    /// Returns `true` if both handles refer to the same node store.
    pub fn ptr_eq(&self, other: &Graph) -> bool {
        Rc::ptr_eq(&self.tape, &other.tape)
    }

    /// The order in which a backward pass from `root` would visit nodes,
    /// leaves first.
    ///
    /// # Panics
    /// Panics if `root` belongs to another graph.
    pub fn topological_order(&self, root: &Var) -> Vec<NodeId> {
        assert!(
            Rc::ptr_eq(&self.tape, &root.tape),
            "node {} belongs to a different graph",
            root.id
        );
        self.tape.borrow().topological_order(root.id)
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph").field("len", &self.len()).finish()
    }
}

/// Handle to a node of a reverse-mode [`Graph`].
///
/// Every operation on a `Var` appends a new node to the same graph and
/// returns its handle. Mixing a `Var` with an `f64` promotes the number to a
/// constant leaf first.
#[derive(Clone)]
pub struct Var {
    tape: Rc<RefCell<Tape>>,
    id: NodeId,
}

impl Var {
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Forward value of the node.
    pub fn value(&self) -> f64 {
        self.tape.borrow().nodes[self.id.0].value
    }

    /// Accumulated gradient. Zero until a `backward()` reaches this node.
    pub fn grad(&self) -> f64 {
        self.tape.borrow().nodes[self.id.0].grad
    }

    /// The operation that produced this node.
    pub fn op(&self) -> Op {
        self.tape.borrow().nodes[self.id.0].op
    }

    /// Handle to the graph this node lives in.
    pub fn graph(&self) -> Graph {
        Graph {
            tape: Rc::clone(&self.tape),
        }
    }

    pub fn zero_grad(&self) {
        self.tape.borrow_mut().nodes[self.id.0].grad = 0.0;
    }

    /// Runs one backward pass with this node as the loss.
    ///
    /// Seeds this node's gradient with `1.0`, then adds the contribution of
    /// every path into each reachable node. Gradients are not reset first:
    /// callers reusing nodes across passes must zero them.
    pub fn backward(&self) {
        self.tape.borrow_mut().backward_from(self.id);
    }

    /// `self^exponent` for a constant exponent.
    ///
    /// Negative bases with non-integer exponents yield NaN.
    pub fn powf(&self, exponent: f64) -> Var {
        let value = self.value().powf(exponent);
        self.record(value, Op::Pow(self.id, exponent))
    }

    /// `max(0, self)`; zero is treated as inactive.
    pub fn relu(&self) -> Var {
        let x = self.value();
        let value = if x > 0.0 { x } else { 0.0 };
        self.record(value, Op::Relu(self.id))
    }

    pub fn sin(&self) -> Var {
        let value = self.value().sin();
        self.record(value, Op::Sin(self.id))
    }

    pub fn cos(&self) -> Var {
        let value = self.value().cos();
        self.record(value, Op::Cos(self.id))
    }

    /// Natural logarithm. Non-positive inputs yield NaN or `-inf`.
    pub fn log(&self) -> Var {
        let value = self.value().ln();
        self.record(value, Op::Log(self.id))
    }

    pub fn exp(&self) -> Var {
        let value = self.value().exp();
        self.record(value, Op::Exp(self.id))
    }

    /// Promotes a literal to a constant leaf on this node's graph.
    pub(crate) fn lift(&self, value: f64) -> Var {
        self.record(value, Op::Leaf)
    }

    pub(crate) fn binary(&self, rhs: &Var, value: f64, op: fn(NodeId, NodeId) -> Op) -> Var {
        assert!(
            Rc::ptr_eq(&self.tape, &rhs.tape),
            "cannot combine nodes {} and {} from different graphs",
            self.id,
            rhs.id
        );
        self.record(value, op(self.id, rhs.id))
    }

    pub(crate) fn record(&self, value: f64, op: Op) -> Var {
        let id = self.tape.borrow_mut().push(value, op);
        Var {
            tape: Rc::clone(&self.tape),
            id,
        }
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.tape.borrow().nodes[self.id.0];
        write!(
            f,
            "Var({} = {}, value={}, grad={})",
            self.id,
            node.op.name(),
            node.value,
            node.grad
        )
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
