use clap::Args;
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use fm_mutation::MutationRate;
use fm_mutation::Mutator;

/// Substitution model parameters.
#[derive(Debug, Args)]
pub struct MutationArguments {
    /// Per-base substitution probability, in [0, 1].
    #[arg(long, value_name = "RATE", default_value_t = MutationRate::default())]
    pub mutation_rate: MutationRate,

    /// Seed for reproducible output (any integer, including 0 and negatives).
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,
}

impl MutationArguments {
    /// Seeded generator if a seed was given, OS entropy otherwise.
    pub fn build_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                debug!("Seeding random generator with {}", seed);
                // Bit cast: every i64 maps to a distinct u64 seed.
                StdRng::seed_from_u64(seed as u64)
            }
            None => {
                debug!("Seeding random generator from OS entropy");
                StdRng::from_os_rng()
            }
        }
    }

    pub fn build_mutator(&self) -> Mutator<StdRng> {
        let mutator = Mutator::new(self.build_rng(), self.mutation_rate);
        debug!("Mutation rate: {}", mutator.rate());
        if mutator.rate().value() == 0.0 {
            warn!("Mutation rate is 0, output will be identical to input.");
        }
        mutator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rand::Rng;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        mutation: MutationArguments,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::try_parse_from(["test"]).unwrap();
        assert_eq!(cli.mutation.mutation_rate.value(), 1e-5);
        assert_eq!(cli.mutation.seed, None);
    }

    #[test]
    fn test_seed_zero_is_a_seed() {
        let cli = TestCli::try_parse_from(["test", "--seed", "0"]).unwrap();
        assert_eq!(cli.mutation.seed, Some(0));
        let a: u64 = cli.mutation.build_rng().random();
        let b: u64 = cli.mutation.build_rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rate_out_of_range_is_rejected() {
        assert!(TestCli::try_parse_from(["test", "--mutation-rate", "1.01"]).is_err());
        assert!(TestCli::try_parse_from(["test", "--mutation-rate", "-0.5"]).is_err());
        assert!(TestCli::try_parse_from(["test", "--mutation-rate", "NaN"]).is_err());
        let cli = TestCli::try_parse_from(["test", "--mutation-rate", "1"]).unwrap();
        assert_eq!(cli.mutation.mutation_rate.value(), 1.0);
    }

    #[test]
    fn test_negative_seed_is_a_seed() {
        let cli = TestCli::try_parse_from(["test", "--seed", "-3"]).unwrap();
        assert_eq!(cli.mutation.seed, Some(-3));
        let a: u64 = cli.mutation.build_rng().random();
        let b: u64 = cli.mutation.build_rng().random();
        assert_eq!(a, b);

        let cli = TestCli::try_parse_from(["test", "--seed=-3"]).unwrap();
        assert_eq!(cli.mutation.seed, Some(-3));

        let other = TestCli::try_parse_from(["test", "--seed", "3"]).unwrap();
        let c: u64 = other.mutation.build_rng().random();
        assert_ne!(a, c);
    }

    #[test]
    fn test_build_mutator_keeps_rate() {
        let cli = TestCli::try_parse_from(["test", "--mutation-rate", "0.25", "--seed", "1"]).unwrap();
        assert_eq!(cli.mutation.build_mutator().rate().value(), 0.25);
    }
}
