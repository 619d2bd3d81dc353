use crate::error::MicroRustError;
use crate::nn::init::{uniform_value, uniform_values};
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A single artificial neuron: `nin` weights, one bias, optional ReLU.
#[derive(Debug)]
pub struct Neuron {
    w: Vec<Value>,
    b: Value,
    nonlin: bool,
}

impl Neuron {
    /// Creates a neuron with `nin` inputs, weights and bias drawn uniformly
    /// from [-1, 1] out of the injected random source. `nonlin` selects the
    /// ReLU activation; without it the neuron is a plain affine unit.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, nin: usize, nonlin: bool) -> Self {
        Neuron {
            w: uniform_values(rng, nin),
            b: uniform_value(rng),
            nonlin,
        }
    }

    /// The configured fan-in.
    pub fn nin(&self) -> usize {
        self.w.len()
    }

    /// Whether this neuron applies the ReLU activation.
    pub fn nonlin(&self) -> bool {
        self.nonlin
    }

    /// Computes `relu(w . x + b)` (or the affine sum when linear).
    ///
    /// The result is a single node whose graph captures the whole
    /// computation for later differentiation. Errors with
    /// `DimensionMismatch` when the input length does not match the fan-in.
    pub fn forward(&self, inputs: &[Value]) -> Result<Value, MicroRustError> {
        if inputs.len() != self.w.len() {
            return Err(MicroRustError::DimensionMismatch {
                expected: self.w.len(),
                actual: inputs.len(),
                operation: "Neuron::forward".to_string(),
            });
        }

        let mut act = self.b.clone();
        for (w, x) in self.w.iter().zip(inputs) {
            act = act + w * x;
        }
        Ok(if self.nonlin { act.relu() } else { act })
    }
}

impl Module for Neuron {
    /// Weights in index order, then the bias. This order is load-bearing
    /// for consumers aligning optimizer state with parameters.
    fn parameters(&self) -> Vec<Value> {
        let mut params = Vec::with_capacity(self.w.len() + 1);
        params.extend(self.w.iter().cloned());
        params.push(self.b.clone());
        params
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.nonlin { "ReLU" } else { "Linear" };
        write!(f, "{}Neuron({})", kind, self.w.len())
    }
}

// --- Tests ---
