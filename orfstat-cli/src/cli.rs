use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version)]
#[command(about = "ORF and k-mer statistics for a FASTA file")]
pub struct Cli {
    // Input FASTA file
    #[arg(help = "Input FASTA file")]
    pub input: PathBuf,

    // Identifier of the sequence reported on its own
    #[arg(short = 't', long = "target-id")]
    pub target_id: Option<String>,

    // Verbosity
    #[arg(long = "verbose", default_value_t = false)]
    pub verbose: bool,
}
