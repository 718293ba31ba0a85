use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum MutationError {
    InvalidRate(f64),   // must be a probability in [0, 1]
}

impl fmt::Display for MutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationError::InvalidRate(r) => {
                write!(f, "Invalid mutation rate {} (expected a value in [0, 1])", r)
            }
        }
    }
}

impl std::error::Error for MutationError {}
