use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, info};

use crate::{initialise_logging, report::AlignmentReport};

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    /// Path to a toml output file of `pairalign align`.
    #[clap(long, short = 'i')]
    input: PathBuf,

    /// Also print the statistics of each alignment.
    #[clap(long)]
    statistics: bool,
}

pub fn cli(cli: Cli) -> Result<()> {
    initialise_logging(cli.log_level);

    info!("Reading pairalign output toml file {:?}", cli.input);
    let report = AlignmentReport::read(&cli.input)?;

    println!("Reference: {}", report.reference_name);
    println!("Query: {}", report.query_name);
    println!();

    for alignment in &report.alignments {
        println!("{alignment}");
        if cli.statistics {
            println!("{}", alignment.statistics);
        }
        println!();
    }

    Ok(())
}
