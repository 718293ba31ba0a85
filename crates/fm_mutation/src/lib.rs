/// The crate error type.
mod error;

/// The four-letter substitution alphabet.
mod alphabet;

/// Header vs. sequence lines.
mod line_kind;

/// Validated per-base substitution probability.
mod mutation_rate;

/// The mutator and its run statistics.
mod mutator;

/// Line-by-line reader → writer pass.
mod transcoder;

pub use error::*;
pub use alphabet::*;
pub use line_kind::*;
pub use mutation_rate::*;
pub use mutator::*;
pub use transcoder::*;
