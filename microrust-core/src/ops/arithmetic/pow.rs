// microrust-core/src/ops/arithmetic/pow.rs

use crate::autograd::GradFn;
use crate::error::MicroRustError;
use crate::value::Value;

// --- Forward Operation ---

/// Raises a node to a constant real exponent.
///
/// Only plain-number exponents are supported: the backward rule implemented
/// here is `out.grad * k * base.data^(k-1)`, which covers constant `k` only
/// (a node-valued exponent would need a different rule). A non-finite
/// exponent is rejected as `InvalidExponent`.
pub fn pow_op(base: &Value, exponent: f64) -> Result<Value, MicroRustError> {
    if !exponent.is_finite() {
        return Err(MicroRustError::InvalidExponent { exponent });
    }
    Ok(pow_unchecked(base, exponent))
}

/// Non-validating form for internal callers whose exponent is a known-finite
/// constant (the reciprocal in `div_op` uses -1).
pub(crate) fn pow_unchecked(base: &Value, exponent: f64) -> Value {
    Value::from_op(
        base.data().powf(exponent),
        GradFn::Pow {
            base: base.clone(),
            exponent,
        },
    )
}

impl Value {
    /// `self` raised to the constant power `exponent`. See [`pow_op`].
    pub fn powf(&self, exponent: f64) -> Result<Value, MicroRustError> {
        pow_op(self, exponent)
    }
}

// --- Tests ---
