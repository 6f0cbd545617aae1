use anyhow::Result;
use clap::Parser;
use pairalign::{align, show};

#[derive(Parser)]
#[command(version, about)]
enum Cli {
    /// Align two sequences globally and/or locally.
    Align(align::Cli),

    /// Print an alignment report written by `pairalign align -o` again.
    Show(show::Cli),
}

fn main() -> Result<()> {
    match Cli::parse() {
        Cli::Align(cli) => align::cli(cli),
        Cli::Show(cli) => show::cli(cli),
    }
}
