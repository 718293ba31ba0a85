use std::fmt;
use log::trace;
use rand::Rng;

use crate::LineKind;
use crate::MutationRate;
use crate::is_alphabet_member;
use crate::random_base;

/// Counters collected over one mutation run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MutationStats {
    pub header_lines: usize,
    pub sequence_lines: usize,
    /// Alphabet members that were rolled for.
    pub bases_examined: usize,
    /// Rolls that fell below the rate.
    pub substitutions: usize,
    /// Substitutions that drew the original base.
    pub silent_substitutions: usize,
}

impl MutationStats {
    /// Substitutions that actually changed the base.
    pub fn changed_bases(&self) -> usize {
        self.substitutions - self.silent_substitutions
    }
}

impl fmt::Display for MutationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
            "headers: {}, sequence lines: {}, bases: {}, substitutions: {} ({} silent)",
            self.header_lines,
            self.sequence_lines,
            self.bases_examined,
            self.substitutions,
            self.silent_substitutions,
        )
    }
}

/// Applies random point substitutions to FASTA lines.
///
/// The generator is owned by the mutator, so a seeded `R` makes a whole run
/// reproducible. Randomness is consumed only for alphabet members: one
/// uniform roll each, plus one index draw per substitution.
pub struct Mutator<R: Rng> {
    rng: R,
    rate: MutationRate,
    stats: MutationStats,
}

impl<R: Rng> Mutator<R> {
    pub fn new(rng: R, rate: MutationRate) -> Self {
        Self { rng, rate, stats: MutationStats::default() }
    }

    pub fn rate(&self) -> MutationRate {
        self.rate
    }

    pub fn stats(&self) -> &MutationStats {
        &self.stats
    }

    pub fn into_stats(self) -> MutationStats {
        self.stats
    }

    /// Mutates `line` in place, unless it is a header. The line may carry
    /// its terminator; terminators are never alphabet members.
    pub fn mutate_line(&mut self, line: &mut [u8]) -> LineKind {
        let kind = LineKind::classify(line);
        match kind {
            LineKind::Header => self.stats.header_lines += 1,
            LineKind::Sequence => {
                self.stats.sequence_lines += 1;
                for c in line.iter_mut() {
                    self.mutate_base(c);
                }
            }
        }
        kind
    }

    fn mutate_base(&mut self, c: &mut u8) {
        if !is_alphabet_member(*c) {
            return;
        }
        self.stats.bases_examined += 1;
        if self.rng.random::<f64>() < self.rate.value() {
            let new = random_base(&mut self.rng);
            self.stats.substitutions += 1;
            if new == *c {
                self.stats.silent_substitutions += 1;
            } else {
                trace!("{} -> {}", *c as char, new as char);
            }
            *c = new;
        }
    }
}
