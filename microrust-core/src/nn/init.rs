use crate::value::Value;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Creates a leaf parameter node drawn uniformly from [-1, 1].
///
/// The random source is injected by the caller so that initialization is
/// reproducible and testable via a seeded generator.
pub fn uniform_value<R: Rng + ?Sized>(rng: &mut R) -> Value {
    let dist = Uniform::new_inclusive(-1.0f64, 1.0f64);
    Value::new(dist.sample(rng))
}

/// Creates `n` leaf parameter nodes drawn uniformly from [-1, 1].
pub fn uniform_values<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Value> {
    (0..n).map(|_| uniform_value(rng)).collect()
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
