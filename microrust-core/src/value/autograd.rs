use crate::autograd::graph::build_topo;
use crate::error::MicroRustError;
use crate::value::Value;

impl Value {
    /// Computes d(self)/d(node) for every node reachable from `self`,
    /// accumulating into each node's `grad`.
    ///
    /// The pass first builds a topological ordering of the reachable
    /// subgraph, seeds `self.grad = 1.0`, then applies each node's backward
    /// rule in reverse order — every consumer's gradient is final before it
    /// propagates to its own inputs, and each rule fires exactly once.
    ///
    /// There is no implicit gradient reset: a second `backward()` call (from
    /// this or any other root) accumulates on top of existing grads. Callers
    /// wanting a fresh pass reset with [`Value::zero_grad`] (or
    /// `Module::zero_grad`) first.
    pub fn backward(&self) -> Result<(), MicroRustError> {
        if self.borrow_value_data().grad_fn.is_none() {
            log::debug!("backward() called on a leaf node; nothing to propagate.");
        }

        let topo = build_topo(self)?;

        self.data.borrow_mut().grad = 1.0;
        for node in topo.iter().rev() {
            let (out_grad, grad_fn) = {
                let guard = node.borrow_value_data();
                (guard.grad, guard.grad_fn.clone())
            };
            if let Some(grad_fn) = grad_fn {
                grad_fn.apply(out_grad);
            }
        }
        Ok(())
    }

    /// Resets this node's gradient accumulator to 0.
    pub fn zero_grad(&self) {
        self.data.borrow_mut().grad = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use crate::value::Value;

    #[test]
    fn test_additivity_of_gradients() {
        // y = x + x must give x.grad == 2: one shared accumulator, hit once
        // per operand slot, not a duplicated edge.
        let x = Value::new(3.0);
        let y = &x + &x;
        y.backward().unwrap();
        assert_eq!(y.grad(), 1.0);
        assert_eq!(x.grad(), 2.0);
    }

    #[test]
    fn test_diamond_graph() {
        // y = relu(x) + relu(x * x) at x = 3: both paths contribute exactly
        // once each, 1 + 2 * 3 = 7.
        let x = Value::new(3.0);
        let y = x.relu() + (&x * &x).relu();
        y.backward().unwrap();
        assert_eq!(x.grad(), 7.0);
    }

    #[test]
    fn test_backward_accumulates_across_passes() {
        let x = Value::new(2.0);
        let y = &x * &x;
        y.backward().unwrap();
        assert_eq!(x.grad(), 4.0);
        // No implicit reset: a second pass doubles the accumulation.
        y.backward().unwrap();
        assert_eq!(x.grad(), 8.0);
    }

    #[test]
    fn test_zero_grad_then_fresh_pass() {
        let x = Value::new(2.0);
        let y = &x * &x;
        y.backward().unwrap();
        x.zero_grad();
        y.zero_grad();
        assert_eq!(x.grad(), 0.0);
        y.backward().unwrap();
        assert_eq!(x.grad(), 4.0);
    }

    #[test]
    fn test_backward_on_leaf() {
        let leaf = Value::new(5.0);
        leaf.backward().unwrap();
        assert_eq!(leaf.grad(), 1.0);
    }
}
