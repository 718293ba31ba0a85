//! # fastamut
//!
//! Random point substitutions for FASTA nucleotide files.
//!
//! This crate re-exports the mutation model and adds the file plumbing and
//! command line arguments used by `fm-mutate`.

pub mod io_adapters;
pub mod mutation_parsers;

pub mod mutation {
    pub use ::fm_mutation::*;
}
