use std::io::Write;
use log::info;
use colored::*;
use env_logger::Builder;
use clap::Args;
use clap::Parser;
use clap::ArgAction;
use anyhow::Result;

use fastamut::io_adapters::mutate_fasta;
use fastamut::mutation_parsers::MutationArguments;


#[derive(Debug, Args)]
pub struct MutateIO {
    /// Input file (FASTA), or "-" for stdin
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Output file (created or truncated), or "-" for stdout
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: String,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}


#[derive(Debug, Parser)]
#[command(name = "fm-mutate")]
#[command(author, version, about = "Introduce random point substitutions into a FASTA file")]
pub struct Cli {
    #[command(flatten)]
    pub io: MutateIO,

    #[command(flatten, next_help_heading = "Mutation model parameters")]
    pub mutation: MutationArguments,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            writeln!(buf, "{}", record.args())
        })
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.io.verbose);

    let stats = mutate_fasta(&cli.io.input, &cli.io.output, &cli.mutation)?;

    info!("{} {}", "headers:".yellow(), stats.header_lines);
    info!("{} {}", "sequence lines:".yellow(), stats.sequence_lines);
    info!("{} {}", "bases examined:".yellow(), stats.bases_examined);
    info!("{} {} ({} silent, {} changed)",
        "substitutions:".green(),
        stats.substitutions,
        stats.silent_substitutions,
        stats.changed_bases(),
    );

    Ok(())
}
