use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationIssue {
    EmptyAlphabet,
    DuplicateSymbol(String),
    InvalidWeight(String, f64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedInput {
    /// input ended while the decoder was still inside the tree
    IncompleteCode { consumed_bits: usize },
    InvalidBit { bit: char, position: usize },
    /// the bit leads to a branch that has no symbol (single symbol trees only)
    UnassignedCode { position: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum CodingError {
    ConfigurationError(ConfigurationIssue),
    UnknownSymbolError(String),
    MalformedInputError(MalformedInput),
}

impl Display for ConfigurationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAlphabet => write!(f, "the alphabet must contain at least one symbol"),
            Self::DuplicateSymbol(symbol) => {
                write!(f, "symbol {} occurs more than once in the alphabet", symbol)
            }
            Self::InvalidWeight(symbol, weight) => {
                write!(
                    f,
                    "weight {} of symbol {} is not a finite non-negative number",
                    weight, symbol
                )
            }
        }
    }
}

impl Display for MalformedInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncompleteCode { consumed_bits } => {
                write!(
                    f,
                    "bit sequence ends in the middle of a code word after {} bits",
                    consumed_bits
                )
            }
            Self::InvalidBit { bit, position } => {
                write!(
                    f,
                    "unexpected character '{}' at position {}, expected '0' or '1'",
                    bit, position
                )
            }
            Self::UnassignedCode { position } => {
                write!(f, "bit at position {} does not lead to any symbol", position)
            }
        }
    }
}

impl Display for CodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigurationError(issue) => {
                write!(f, "Invalid alphabet: {}", issue)
            }
            Self::UnknownSymbolError(symbol) => {
                write!(f, "Symbol {} does not belong to the alphabet", symbol)
            }
            Self::MalformedInputError(reason) => {
                write!(f, "Malformed input: {}", reason)
            }
        }
    }
}

impl std::error::Error for CodingError {}

impl From<ConfigurationIssue> for CodingError {
    fn from(value: ConfigurationIssue) -> Self {
        Self::ConfigurationError(value)
    }
}

impl From<MalformedInput> for CodingError {
    fn from(value: MalformedInput) -> Self {
        Self::MalformedInputError(value)
    }
}
