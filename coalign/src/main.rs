mod args;
mod config;
mod util;

use args::Cli;
use config::load_config;
use util::PathBufExt;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use libcoalign::align::GlobalAligner;
use libcoalign::output::output_standard::write_standard_output;
use libcoalign::structs::Sequence;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(error) = run(&cli) {
        log::error!("{error:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let params = load_config(&cli.config_path)?;
    log::debug!("params: {params:?}");

    let query = first_fasta_record(&cli.query_path)?;
    let target = first_fasta_record(&cli.target_path)?;

    let aligner = GlobalAligner::new(params);
    let (score, graph) = aligner.run(&query, &target)?;

    let mut out = cli.output_path.open(cli.allow_overwrite)?;
    let written = write_standard_output(
        score,
        aligner.alignments(&query, &target, &graph),
        &mut out,
    )?;
    out.flush().context("failed to flush output file")?;

    println!("score: {score}");
    println!("alignments written: {written}");

    Ok(())
}

fn first_fasta_record(path: &Path) -> Result<Sequence> {
    Sequence::from_fasta(path)?
        .into_iter()
        .next()
        .with_context(|| format!("no fasta records in: {}", path.to_string_lossy()))
}
