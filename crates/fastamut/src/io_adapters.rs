use std::fs::File;
use std::io::{stdin, stdout, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use fm_mutation::MutationStats;
use fm_mutation::transcode;

use crate::mutation_parsers::MutationArguments;

// ============================================================
//  Input / output handles ("-" means stdin / stdout)
// ============================================================

/// Buffered reader over a file path.
pub fn open_input_file<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Cannot open input file {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Buffered reader over stdin.
pub fn open_input_stdin() -> Result<Box<dyn BufRead>> {
    Ok(Box::new(BufReader::new(stdin())))
}

/// Read either from stdin ("-") or a file path.
pub fn open_input(s: &str) -> Result<Box<dyn BufRead>> {
    if s == "-" {
        debug!("Reading from stdin");
        open_input_stdin()
    } else {
        debug!("Reading from {}", s);
        open_input_file(s)
    }
}

/// Buffered writer over a file path; the file is created or truncated.
pub fn open_output_file<P: AsRef<Path>>(path: P) -> Result<Box<dyn Write>> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Cannot create output file {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Buffered writer over stdout.
pub fn open_output_stdout() -> Result<Box<dyn Write>> {
    Ok(Box::new(BufWriter::new(stdout().lock())))
}

/// Write either to stdout ("-") or a file path.
pub fn open_output(s: &str) -> Result<Box<dyn Write>> {
    if s == "-" {
        debug!("Writing to stdout");
        open_output_stdout()
    } else {
        debug!("Writing to {}", s);
        open_output_file(s)
    }
}

// ============================================================
//  One complete run
// ============================================================

/// Mutates `input` into `output` and returns the run statistics.
///
/// The input is opened before the output, so a missing input never
/// truncates an existing output file. Both handles are closed on return.
pub fn mutate_fasta(input: &str, output: &str, args: &MutationArguments) -> Result<MutationStats> {
    let reader = open_input(input)?;
    let writer = open_output(output)?;
    let mut mutator = args.build_mutator();
    transcode(reader, writer, &mut mutator)
        .with_context(|| format!("Failed to mutate {} into {}", input, output))?;
    Ok(mutator.into_stats())
}

// ============================================================
//  Unit tests
// ============================================================
