use std::error::Error;
use std::fmt;

/// Custom error type for encoder preparation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncoderError {
    /// Priming data contained no non-null labels, so no mapping can be built.
    NoObservedLabels,
}

impl fmt::Display for EncoderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncoderError::NoObservedLabels => {
                write!(f, "priming data contains no non-null labels")
            }
        }
    }
}

impl Error for EncoderError {}
