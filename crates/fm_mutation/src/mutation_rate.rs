use std::fmt;
use std::str::FromStr;

use crate::MutationError;

/// Per-base substitution probability, guaranteed to lie in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct MutationRate(f64);

impl MutationRate {
    /// Roughly the rate of uncorrected replication errors.
    pub const DEFAULT: f64 = 1e-5;

    pub fn new(rate: f64) -> Result<Self, MutationError> {
        // NaN fails both comparisons.
        if (0.0..=1.0).contains(&rate) {
            Ok(MutationRate(rate))
        } else {
            Err(MutationError::InvalidRate(rate))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for MutationRate {
    fn default() -> Self {
        MutationRate(Self::DEFAULT)
    }
}

impl TryFrom<f64> for MutationRate {
    type Error = MutationError;
    fn try_from(rate: f64) -> Result<Self, Self::Error> {
        MutationRate::new(rate)
    }
}

impl FromStr for MutationRate {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rate: f64 = s.trim().parse().map_err(|e| format!("{}: '{}'", e, s))?;
        MutationRate::new(rate).map_err(|e| e.to_string())
    }
}

impl fmt::Display for MutationRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
