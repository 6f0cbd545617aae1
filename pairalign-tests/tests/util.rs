use std::{env, path::Path};

use anyhow::{Result, anyhow};
use clap::Parser;
use pairalign::{align, show};

pub fn run_in_repo_root(args: &str) -> Result<()> {
    // The manifest directory is "[...]/pairalign/pairalign-tests",
    // simulate a call from the repo root by moving to its parent.
    env::set_current_dir(
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .ok_or(anyhow!("No parent directory"))?,
    )?;

    if args.starts_with("align ") {
        let args = align::Cli::try_parse_from(args.split_whitespace())?;
        align::cli(args)?;
    } else if args.starts_with("show ") {
        let args = show::Cli::try_parse_from(args.split_whitespace())?;
        show::cli(args)?;
    } else {
        return Err(anyhow!("Unknown subcommand: {args}"));
    }

    Ok(())
}
