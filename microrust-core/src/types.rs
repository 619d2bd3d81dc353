use std::fmt;

/// Tag identifying the operation that produced a [`crate::Value`].
///
/// Purely cosmetic: it is carried for introspection and debugging (graph
/// printers, `Debug` output) and has no effect on the computation itself.
/// Derived operations (neg, sub, div) are built out of the primitives below
/// and therefore show up as `Mul`/`Add`/`Pow` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Leaf node: a constant or a parameter, not produced by an operation.
    None,
    Add,
    Mul,
    Pow,
    Relu,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Op::None => "",
            Op::Add => "+",
            Op::Mul => "*",
            Op::Pow => "pow",
            Op::Relu => "ReLU",
        };
        write!(f, "{}", symbol)
    }
}
