use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use pdb_fasta_tools::{
    FastaError, FastaReader, SplitOptions, SplitSummary, open_output, split_records,
};

/// Split a PDB FASTA dump into protein and secondary-structure files
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the file to open
    #[arg(short, long = "infile")]
    infile: PathBuf,

    /// Header substring that marks a protein record
    #[arg(short, long, default_value = "sequence")]
    keyword: String,

    /// Directory for pdb_protein.fasta and pdb_ss.fasta
    #[arg(short = 'd', long = "outdir", default_value = ".")]
    outdir: PathBuf,
}

fn run(cli: &Cli) -> Result<SplitSummary, FastaError> {
    let records = FastaReader::from_path(&cli.infile)?.read_all()?;
    info!("{}: {} records", cli.infile.display(), records.len());

    let opts = SplitOptions {
        keyword: cli.keyword.clone(),
        ..SplitOptions::default()
    };
    let mut protein = open_output(cli.outdir.join(&opts.protein_file))?;
    let mut ss = open_output(cli.outdir.join(&opts.ss_file))?;
    split_records(&records, &opts.keyword, &mut protein, &mut ss)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
