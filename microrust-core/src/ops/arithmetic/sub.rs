// microrust-core/src/ops/arithmetic/sub.rs

use crate::ops::arithmetic::add::add_op;
use crate::ops::arithmetic::neg::neg_op;
use crate::value::Value;
use std::ops::Sub;

/// Subtraction, expressed as `a + (-b)`.
///
/// Derived operation: no backward rule of its own, only new graph shape out
/// of `add` and `neg`.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

// --- Operator sugar ---
// The `f64 - Value` forms are the right-subtract of the reference surface.

impl Sub<Value> for Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        sub_op(&self, &rhs)
    }
}

impl<'b> Sub<&'b Value> for Value {
    type Output = Value;

    fn sub(self, rhs: &'b Value) -> Value {
        sub_op(&self, rhs)
    }
}

impl<'a> Sub<Value> for &'a Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        sub_op(self, &rhs)
    }
}

impl<'a, 'b> Sub<&'b Value> for &'a Value {
    type Output = Value;

    fn sub(self, rhs: &'b Value) -> Value {
        sub_op(self, rhs)
    }
}

impl Sub<f64> for Value {
    type Output = Value;

    fn sub(self, rhs: f64) -> Value {
        sub_op(&self, &Value::new(rhs))
    }
}

impl<'a> Sub<f64> for &'a Value {
    type Output = Value;

    fn sub(self, rhs: f64) -> Value {
        sub_op(self, &Value::new(rhs))
    }
}

impl Sub<Value> for f64 {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        sub_op(&Value::new(self), &rhs)
    }
}

impl<'b> Sub<&'b Value> for f64 {
    type Output = Value;

    fn sub(self, rhs: &'b Value) -> Value {
        sub_op(&Value::new(self), rhs)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use crate::value::Value;

    #[test]
    fn test_sub_forward() {
        let a = Value::new(15.0);
        let b = Value::new(12.0);
        let c = &a - &b;
        assert_eq!(c.data(), 3.0);
    }

    #[test]
    fn test_sub_backward() {
        let a = Value::new(15.0);
        let b = Value::new(12.0);
        let c = &a - &b;
        c.backward().unwrap();
        assert_eq!(a.grad(), 1.0);
        assert_eq!(b.grad(), -1.0);
    }

    #[test]
    fn test_right_sub() {
        let a = Value::new(4.0);
        let c = 10.0 - &a;
        assert_eq!(c.data(), 6.0);
        c.backward().unwrap();
        assert_eq!(a.grad(), -1.0);
    }
}
