use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "coalign")]
#[command(
    about = "Globally align two sequences, keeping every tied traceback, and report all co-optimal alignments"
)]
pub struct Cli {
    /// Query sequence file
    #[arg(value_name = "QUERY.fasta")]
    pub query_path: PathBuf,

    /// Target sequence file
    #[arg(value_name = "TARGET.fasta")]
    pub target_path: PathBuf,

    /// Scoring config file
    #[arg(value_name = "CONFIG.json")]
    pub config_path: PathBuf,

    /// Where to place the alignment report
    #[arg(short = 'o', long = "output", value_name = "path")]
    pub output_path: PathBuf,

    /// Allow coalign to overwrite files
    #[arg(short = 'q', long = "allow-overwrite", default_value_t = false)]
    pub allow_overwrite: bool,
}
