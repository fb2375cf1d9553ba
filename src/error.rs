use std::fmt::Display;

use crate::huffman::CodingError;

#[derive(Debug)]
pub enum Error {
    NoInputProvided,
    UnableToOpenInputFileForReading(String, std::io::Error),
    FailedToReadInput(std::io::Error),
    Coding(CodingError),
    RoundTripMismatch(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoInputProvided => {
                write!(f, "Neither a text nor an input file was provided")
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::FailedToReadInput(error) => write!(f, "Failed to read input: {}", error),
            Self::Coding(error) => write!(f, "{}", error),
            Self::RoundTripMismatch(line) => {
                write!(f, "Line {} did not decode back to its original text", line)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error) => Some(error),
            Self::FailedToReadInput(error) => Some(error),
            Self::Coding(error) => Some(error),
            _ => None,
        }
    }
}

impl From<CodingError> for Error {
    fn from(value: CodingError) -> Self {
        Self::Coding(value)
    }
}
