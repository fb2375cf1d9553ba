pub mod code;
mod coding_error;
pub mod tree;

pub use code::{CodeTable, SymbolCode};
pub use coding_error::{CodingError, ConfigurationIssue, MalformedInput};
pub use tree::{HuffmanTree, Side};

/// One entry of an alphabet: a symbol and its non-negative weight.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolWeight<S> {
    pub symbol: S,
    pub weight: f64,
}

impl<S> SymbolWeight<S> {
    pub fn new(symbol: S, weight: f64) -> Self {
        Self { symbol, weight }
    }
}

impl<S> From<(S, f64)> for SymbolWeight<S> {
    fn from(value: (S, f64)) -> Self {
        Self {
            symbol: value.0,
            weight: value.1,
        }
    }
}
