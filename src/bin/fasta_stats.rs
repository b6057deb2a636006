use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::info;

use pdb_fasta_tools::{
    EmptySequencePolicy, FastaError, FastaReader, ReportOptions, open_output, write_report,
};

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
enum EmptySequence {
    /// Report GC% as 0.0
    #[default]
    Zero,
    /// Stop with an error
    Error,
}

impl From<EmptySequence> for EmptySequencePolicy {
    fn from(e: EmptySequence) -> Self {
        match e {
            EmptySequence::Zero => EmptySequencePolicy::Zero,
            EmptySequence::Error => EmptySequencePolicy::Error,
        }
    }
}

/// Write per-record nucleotide statistics of a FASTA file as a TSV report
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the file to open
    #[arg(short, long = "infile")]
    infile: PathBuf,

    /// Path to the file to write
    #[arg(short, long = "outfile")]
    outfile: PathBuf,

    /// What to do with records whose sequence is empty
    #[arg(long = "empty-sequence", value_enum, default_value_t = EmptySequence::Zero)]
    empty_sequence: EmptySequence,
}

fn run(cli: &Cli) -> Result<usize, FastaError> {
    let records = FastaReader::from_path(&cli.infile)?.read_all()?;
    info!("{}: {} records", cli.infile.display(), records.len());

    let mut out = open_output(&cli.outfile)?;
    let opts = ReportOptions {
        empty_sequence: cli.empty_sequence.into(),
    };
    write_report(&records, &mut out, &opts)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(rows) => {
            info!("{}: {rows} rows", cli.outfile.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
