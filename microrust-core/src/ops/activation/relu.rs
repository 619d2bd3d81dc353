// microrust-core/src/ops/activation/relu.rs

use crate::autograd::GradFn;
use crate::value::Value;

// --- Forward Operation ---

/// Rectified Linear Unit: `relu(x) = max(0, x)`.
///
/// The backward rule adds `out.grad` into the input's grad when the input is
/// strictly positive and nothing otherwise. The subgradient at exactly 0 is
/// taken as 0 (the right-derivative convention).
pub fn relu_op(input: &Value) -> Value {
    let x = input.data();
    Value::from_op(
        if x > 0.0 { x } else { 0.0 },
        GradFn::Relu {
            input: input.clone(),
        },
    )
}

impl Value {
    /// Applies the ReLU activation to this node. See [`relu_op`].
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use crate::types::Op;
    use crate::value::Value;

    #[test]
    fn test_relu_forward() {
        assert_eq!(Value::new(-2.0).relu().data(), 0.0);
        assert_eq!(Value::new(0.0).relu().data(), 0.0);
        assert_eq!(Value::new(2.0).relu().data(), 2.0);
        assert_eq!(Value::new(2.0).relu().op(), Op::Relu);
    }

    #[test]
    fn test_relu_subgradient_at_zero() {
        let a = Value::new(0.0);
        let y = a.relu();
        y.backward().unwrap();
        assert_eq!(a.grad(), 0.0); // not 1
    }

    #[test]
    fn test_relu_just_above_zero() {
        let a = Value::new(1e-9);
        let y = a.relu();
        y.backward().unwrap();
        assert_eq!(a.grad(), 1.0);
    }

    #[test]
    fn test_relu_negative_input_blocks_gradient() {
        let a = Value::new(-3.0);
        let y = a.relu();
        y.backward().unwrap();
        assert_eq!(a.grad(), 0.0);
    }

    #[test]
    fn test_relu_backward_scales_by_out_grad() {
        // y = 3 * relu(x): the rule must propagate out.grad, not a bare 1.
        let x = Value::new(2.0);
        let y = x.relu() * 3.0;
        y.backward().unwrap();
        assert_eq!(x.grad(), 3.0);
    }
}
