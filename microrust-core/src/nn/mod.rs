pub mod init;
pub mod layer;
pub mod mlp;
pub mod module;
pub mod neuron;

pub use layer::{Layer, LayerOutput};
pub use mlp::MLP;
pub use module::Module;
pub use neuron::Neuron;
