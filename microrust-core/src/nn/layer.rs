use crate::error::MicroRustError;
use crate::nn::module::Module;
use crate::nn::neuron::Neuron;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// Output of a layer forward pass.
///
/// A layer with exactly one neuron surfaces its output as a single node
/// rather than a singleton sequence, so the final network output of a
/// 1-wide head reads as one `Value`.
#[derive(Debug, Clone)]
pub enum LayerOutput {
    Single(Value),
    Many(Vec<Value>),
}

impl LayerOutput {
    /// The outputs as a vector, whichever form they came in.
    pub fn into_values(self) -> Vec<Value> {
        match self {
            LayerOutput::Single(v) => vec![v],
            LayerOutput::Many(vs) => vs,
        }
    }

    /// The single output node, if the layer was 1-wide.
    pub fn as_single(&self) -> Option<&Value> {
        match self {
            LayerOutput::Single(v) => Some(v),
            LayerOutput::Many(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            LayerOutput::Single(_) => 1,
            LayerOutput::Many(vs) => vs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An ordered collection of neurons sharing one fan-in.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates `nout` neurons of fan-in `nin`, the `nonlin` flag applied
    /// uniformly.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, nin: usize, nout: usize, nonlin: bool) -> Self {
        Layer {
            neurons: (0..nout).map(|_| Neuron::new(rng, nin, nonlin)).collect(),
        }
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    /// Applies every neuron to the same inputs, one output per neuron.
    pub fn forward(&self, inputs: &[Value]) -> Result<LayerOutput, MicroRustError> {
        let mut outputs = Vec::with_capacity(self.neurons.len());
        for neuron in &self.neurons {
            outputs.push(neuron.forward(inputs)?);
        }
        if outputs.len() == 1 {
            Ok(LayerOutput::Single(outputs.remove(0)))
        } else {
            Ok(LayerOutput::Many(outputs))
        }
    }
}

impl Module for Layer {
    /// Each neuron's parameters in neuron order, flattened.
    fn parameters(&self) -> Vec<Value> {
        self.neurons
            .iter()
            .flat_map(|n| n.parameters())
            .collect()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neurons: Vec<String> = self.neurons.iter().map(|n| n.to_string()).collect();
        write!(f, "Layer of [{}]", neurons.join(", "))
    }
}

// --- Tests ---
