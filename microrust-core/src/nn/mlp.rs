use crate::error::MicroRustError;
use crate::nn::layer::{Layer, LayerOutput};
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A multi-layer perceptron: a stack of [`Layer`]s, each layer's fan-in
/// fixed to the previous layer's width.
#[derive(Debug)]
pub struct MLP {
    layers: Vec<Layer>,
}

impl MLP {
    /// Creates a network with input width `nin` and one layer per entry of
    /// `nouts`. Every layer applies ReLU except the last, which is linear —
    /// the conventional regression/logit-output head.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, nin: usize, nouts: &[usize]) -> Self {
        let widths: Vec<usize> = std::iter::once(nin).chain(nouts.iter().copied()).collect();
        let layers = (0..nouts.len())
            .map(|i| {
                let nonlin = i != nouts.len() - 1;
                Layer::new(rng, widths[i], widths[i + 1], nonlin)
            })
            .collect();
        MLP { layers }
    }

    /// Feeds `inputs` through each layer in order, threading each layer's
    /// output as the next layer's input, and returns the final layer's
    /// forward result.
    pub fn forward(&self, inputs: &[Value]) -> Result<LayerOutput, MicroRustError> {
        let mut activations = LayerOutput::Many(inputs.to_vec());
        for layer in &self.layers {
            let current = activations.into_values();
            activations = layer.forward(&current)?;
        }
        Ok(activations)
    }
}

impl Module for MLP {
    /// Each layer's parameters in layer order, flattened.
    fn parameters(&self) -> Vec<Value> {
        self.layers
            .iter()
            .flat_map(|l| l.parameters())
            .collect()
    }
}

impl fmt::Display for MLP {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers: Vec<String> = self.layers.iter().map(|l| l.to_string()).collect();
        write!(f, "MLP of [{}]", layers.join(", "))
    }
}

// --- Tests ---
