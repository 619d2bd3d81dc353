use crate::types::Op;
use crate::value::Value;

/// Backward rule attached to a non-leaf node.
///
/// Each variant stores strong handles to the operation's inputs, which both
/// keeps the subgraph alive for the backward pass and provides the
/// predecessor links that `build_topo` traverses. The operator set is closed
/// and small, so a tagged enum replaces open-ended dynamic dispatch: one
/// local-derivative rule per variant.
///
/// `apply` must be invoked at most once per backward pass, and only after the
/// output node's `grad` holds its final value. The topological ordering in
/// [`crate::value::Value::backward`] is what establishes that.
#[derive(Debug, Clone)]
pub enum GradFn {
    Add { lhs: Value, rhs: Value },
    Mul { lhs: Value, rhs: Value },
    Pow { base: Value, exponent: f64 },
    Relu { input: Value },
}

impl GradFn {
    /// Accumulates local-derivative * `out_grad` into each input's `grad`.
    ///
    /// Accumulation is per operand: for `x + x` both positions point at the
    /// same node and it receives the contribution twice, which is exactly the
    /// chain rule for a value feeding two argument slots.
    pub(crate) fn apply(&self, out_grad: f64) {
        match self {
            GradFn::Add { lhs, rhs } => {
                lhs.accumulate_grad(out_grad);
                rhs.accumulate_grad(out_grad);
            }
            GradFn::Mul { lhs, rhs } => {
                let a = lhs.data();
                let b = rhs.data();
                lhs.accumulate_grad(out_grad * b);
                rhs.accumulate_grad(out_grad * a);
            }
            GradFn::Pow { base, exponent } => {
                let a = base.data();
                base.accumulate_grad(out_grad * exponent * a.powf(exponent - 1.0));
            }
            GradFn::Relu { input } => {
                // Right-derivative convention: exactly 0 contributes nothing.
                if input.data() > 0.0 {
                    input.accumulate_grad(out_grad);
                }
            }
        }
    }

    /// The operation's inputs in operand order.
    ///
    /// A node used twice as an operand appears twice here; traversal
    /// deduplicates by identity, accumulation must not.
    pub(crate) fn inputs(&self) -> Vec<Value> {
        match self {
            GradFn::Add { lhs, rhs } | GradFn::Mul { lhs, rhs } => {
                vec![lhs.clone(), rhs.clone()]
            }
            GradFn::Pow { base, .. } => vec![base.clone()],
            GradFn::Relu { input } => vec![input.clone()],
        }
    }

    pub(crate) fn op(&self) -> Op {
        match self {
            GradFn::Add { .. } => Op::Add,
            GradFn::Mul { .. } => Op::Mul,
            GradFn::Pow { .. } => Op::Pow,
            GradFn::Relu { .. } => Op::Relu,
        }
    }
}
