// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::path::PathBuf;

use log::{debug, info, warn};

use clap::Parser;

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::config::{find_rehead_config, FileConfig, RunConfig};
use crate::errors::Result;
use crate::header::random_header;
use crate::output::{OutputPaths, RecordSink};
use crate::seq::fasta::FastaReader;

/// Replace the headers of a FastA file with random letters and numbers, and write a TSV file
/// mapping the old headers to the new ones.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// FastA file whose headers are to be replaced
    #[arg(short, long)]
    input: PathBuf,

    /// Directory where the new FastA file and the TSV file will be saved
    #[arg(short, long)]
    outdir: PathBuf,

    /// Length of the new headers [default: 18]
    #[arg(short, long, allow_negative_numbers = true)]
    length: Option<i64>,

    /// Line width of the output sequences, 0 for no wrapping [default: 60]
    #[arg(short, long)]
    wrap: Option<usize>,

    /// Random seed (for reproducible headers)
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Debug)]
pub struct RunSummary {
    pub records: usize,
    pub paths: OutputPaths,
}

/// Reads every record of the input, gives it a fresh random header, and appends it (and the
/// old/new header pair) to the output files, in input order.
///
/// Records written before an error are left in place.
pub fn rehead<R: Rng + ?Sized>(config: &RunConfig, rng: &mut R) -> Result<RunSummary> {
    config.validate()?;
    let paths = OutputPaths::derive(&config.input, &config.outdir)?;
    info!(
        "Writing {} and {}",
        paths.fasta.display(),
        paths.mapping.display()
    );
    if paths.any_exists() {
        // Re-running on the same output directory duplicates records.
        warn!(
            "{} or {} already exists; appending to it",
            paths.fasta.display(),
            paths.mapping.display()
        );
    }

    let sink = RecordSink::new(paths, config.wrap);
    let mut records = 0;
    for record in FastaReader::from_path(&config.input)? {
        let record = record?;
        let new_id = random_header(rng, config.length);
        debug!("{} -> {}", record.id, new_id);
        sink.append(&record.id, &new_id, &record.sequence)?;
        records += 1;
    }

    Ok(RunSummary {
        records,
        paths: sink.paths().clone(),
    })
}

pub fn run() -> Result<()> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();

    let file_config = match find_rehead_config() {
        Some(path) => {
            info!("Reading defaults from {}", path.display());
            FileConfig::from_file(&path)?
        }
        None => FileConfig::default(),
    };
    let config = RunConfig::resolve(
        cli.input,
        cli.outdir,
        cli.length,
        cli.wrap,
        cli.seed,
        &file_config,
    )?;
    debug!("{:?}", config);

    let mut rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let summary = rehead(&config, &mut rng)?;
    info!(
        "Renamed {} record(s) from {}",
        summary.records,
        config.input.display()
    );

    Ok(())
}
