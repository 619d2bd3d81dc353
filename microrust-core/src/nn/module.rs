use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers,
/// containers).
///
/// A module owns a fixed collection of trainable [`Value`] nodes. The
/// returned parameter order is stable and load-bearing: an external
/// optimizer aligns its per-parameter state with this exact sequence.
pub trait Module: std::fmt::Debug {
    /// Returns the flat, order-stable sequence of trainable parameters.
    ///
    /// Handles are cheap clones of the owned nodes: reading `data`/`grad`
    /// and writing `data` through them mutates the module's own parameters.
    fn parameters(&self) -> Vec<Value>;

    /// Resets the gradient of every parameter to 0.
    ///
    /// Call between an optimizer step and the next forward/backward cycle
    /// whenever grads are not meant to accumulate across steps. Idempotent.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }
}
