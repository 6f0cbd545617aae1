use std::{fs::File, path::PathBuf, time::Instant};

use anyhow::{Context, Result, anyhow, ensure};
use clap::{Args, Parser, ValueEnum};
use lib_pairalign::{align, alignment_mode::AlignmentMode, scoring_policy::ScoringPolicy};
use log::{LevelFilter, debug, info};

use crate::{
    align::fasta_parser::{FastaRecord, parse_pair_fasta_file, parse_single_fasta_file},
    initialise_logging,
    report::{AlignmentReport, ModeReport},
};

pub mod fasta_parser;

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    #[command(flatten)]
    input: CliInput,

    /// The file to store the alignment report in toml format.
    ///
    /// It can be printed again with `pairalign show`.
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,

    /// Align end-to-end (global), the best matching substrings (local), or both one after the other.
    #[clap(long, short = 'm', default_value = "global")]
    mode: CliAlignmentMode,

    /// A file containing the scoring policy.
    ///
    /// If not given, the default policy with match score 1, mismatch score -1 and gap score -2 is used.
    #[clap(long, short = 's')]
    scoring_file: Option<PathBuf>,

    /// Overrides the match score of the scoring policy.
    #[clap(long, allow_hyphen_values = true)]
    match_score: Option<i32>,

    /// Overrides the mismatch score of the scoring policy.
    #[clap(long, allow_hyphen_values = true)]
    mismatch_score: Option<i32>,

    /// Overrides the gap score of the scoring policy.
    #[clap(long, allow_hyphen_values = true)]
    gap_score: Option<i32>,

    /// A string of characters that should be skipped in the input sequences.
    ///
    /// For example, `-` characters of a previous alignment can be skipped this way.
    #[clap(long, default_value = "", allow_hyphen_values = true)]
    skip_characters: String,

    /// Convert the input sequences to upper case before aligning.
    #[clap(long)]
    uppercase: bool,

    /// Abort if the alignment matrix would have more cells than this.
    ///
    /// The matrix has one more row than the reference length and one more column than the query length.
    #[clap(long)]
    max_matrix_cells: Option<usize>,
}

#[derive(Args)]
struct CliInput {
    #[clap(flatten)]
    inline_input: Option<CliInlineInput>,

    #[clap(flatten)]
    separate_input: Option<CliSeparateInput>,

    #[clap(flatten)]
    pair_input: Option<CliPairInput>,
}

#[derive(Args)]
#[group(multiple = true)]
struct CliInlineInput {
    /// The reference sequence.
    #[clap(long, required = false, requires = "seq2", conflicts_with_all = ["reference", "query", "pair_fasta"])]
    seq1: String,

    /// The query sequence.
    #[clap(long, required = false, requires = "seq1", conflicts_with_all = ["reference", "query", "pair_fasta"])]
    seq2: String,
}

#[derive(Args)]
#[group(multiple = true)]
struct CliSeparateInput {
    /// The path to the reference fasta file.
    #[clap(long, short = 'r', required = false, requires = "query")]
    reference: PathBuf,

    /// The path to the query fasta file.
    #[clap(long, short = 'q', required = false, requires = "reference")]
    query: PathBuf,
}

#[derive(Args)]
struct CliPairInput {
    /// The path to a fasta file containing both the reference and the query.
    #[clap(long, short = 'p', required = false, conflicts_with_all = ["reference", "query"])]
    pair_fasta: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CliAlignmentMode {
    Global,
    Local,
    Both,
}

impl CliAlignmentMode {
    fn modes(&self) -> &'static [AlignmentMode] {
        match self {
            CliAlignmentMode::Global => &[AlignmentMode::Global],
            CliAlignmentMode::Local => &[AlignmentMode::Local],
            CliAlignmentMode::Both => &[AlignmentMode::Global, AlignmentMode::Local],
        }
    }
}

pub fn cli(cli: Cli) -> Result<()> {
    initialise_logging(cli.log_level);

    // Load input sequences.
    let (mut reference_record, mut query_record) = if let Some(CliInlineInput { seq1, seq2 }) =
        &cli.input.inline_input
    {
        (
            FastaRecord::new("seq1", seq1.as_str()),
            FastaRecord::new("seq2", seq2.as_str()),
        )
    } else if let Some(CliPairInput { pair_fasta }) = &cli.input.pair_input {
        info!("Loading pair file {pair_fasta:?}");
        parse_pair_fasta_file(pair_fasta)?
    } else if let Some(CliSeparateInput { reference, query }) = &cli.input.separate_input {
        info!("Loading reference file {reference:?}");
        let reference = parse_single_fasta_file(reference)?;

        info!("Loading query file {query:?}");
        let query = parse_single_fasta_file(query)?;

        (reference, query)
    } else {
        return Err(anyhow!(
            "No input given, provide both sequences with --seq1/--seq2, -r/-q or -p"
        ));
    };

    // Remove skip characters.
    let skip_characters = cli.skip_characters.chars().collect::<Vec<_>>();
    reference_record
        .sequence
        .retain(|c| !skip_characters.contains(&c));
    query_record
        .sequence
        .retain(|c| !skip_characters.contains(&c));

    if cli.uppercase {
        reference_record.sequence = reference_record.sequence.to_uppercase();
        query_record.sequence = query_record.sequence.to_uppercase();
    }

    ensure!(
        !reference_record.sequence.is_empty() && !query_record.sequence.is_empty(),
        "Empty input sequence, provide both sequences"
    );

    let reference: Vec<_> = reference_record.sequence.chars().collect();
    let query: Vec<_> = query_record.sequence.chars().collect();

    if let Some(max_matrix_cells) = cli.max_matrix_cells {
        let matrix_cells = (reference.len() + 1)
            .checked_mul(query.len() + 1)
            .ok_or_else(|| anyhow!("Alignment matrix size overflows"))?;
        ensure!(
            matrix_cells <= max_matrix_cells,
            "The alignment matrix would have {matrix_cells} cells, but at most {max_matrix_cells} are allowed"
        );
    }

    let scoring_policy = load_scoring_policy(&cli)?;
    info!(
        "Scoring policy: match {}, mismatch {}, gap {}",
        scoring_policy.match_score, scoring_policy.mismatch_score, scoring_policy.gap_score
    );

    let mut report = AlignmentReport {
        reference_name: reference_record.name(),
        query_name: query_record.name(),
        alignments: Vec::new(),
    };

    for &mode in cli.mode.modes() {
        info!("Computing {mode} alignment");
        let start_time = Instant::now();
        let result = align(&reference, &query, scoring_policy, mode)?;
        let duration = start_time.elapsed();
        debug!("Statistics:\n{}", result.statistics());

        let mode_report = ModeReport::new(result, duration.as_secs_f64());
        println!("{mode_report}");
        println!();
        report.alignments.push(mode_report);
    }

    if let Some(output) = &cli.output {
        info!("Writing report to {output:?}");
        report.write(output)?;
    }

    Ok(())
}

fn load_scoring_policy(cli: &Cli) -> Result<ScoringPolicy> {
    let mut scoring_policy = if let Some(scoring_file) = &cli.scoring_file {
        info!("Loading scoring file {scoring_file:?}");
        ScoringPolicy::read_plain(
            File::open(scoring_file)
                .with_context(|| format!("Unable to open scoring file {scoring_file:?}"))?,
        )
        .with_context(|| format!("Unable to parse scoring file {scoring_file:?}"))?
    } else {
        ScoringPolicy::default()
    };

    if let Some(match_score) = cli.match_score {
        scoring_policy.match_score = match_score;
    }
    if let Some(mismatch_score) = cli.mismatch_score {
        scoring_policy.mismatch_score = mismatch_score;
    }
    if let Some(gap_score) = cli.gap_score {
        scoring_policy.gap_score = gap_score;
    }

    Ok(scoring_policy)
}
