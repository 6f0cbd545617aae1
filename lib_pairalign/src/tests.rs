use std::thread;

use noisy_float::types::r64;

use crate::{
    align, align_str,
    alignment_matrix::AlignmentMatrix,
    alignment_mode::AlignmentMode,
    alignment_result::{AlignmentResult, GAP_CHARACTER},
    error::{Error, SequenceName},
    score::Score,
    scoring_policy::ScoringPolicy,
};

const PAIRS: &[(&str, &str)] = &[
    ("GATTACA", "GCATGCU"),
    ("ACACACTA", "AGCACACA"),
    ("ACG", "ACCG"),
    ("A", "T"),
    ("ACGT", "ACGT"),
    ("TTTT", "AAAA"),
    ("AAAC", "C"),
    ("CCAGTTACGGA", "AGTTTACG"),
    ("TGCATGCATTTAG", "GCATGGATT"),
];

const MODES: [AlignmentMode; 2] = [AlignmentMode::Global, AlignmentMode::Local];

fn ungapped(aligned: &str) -> String {
    aligned.chars().filter(|c| *c != GAP_CHARACTER).collect()
}

fn assert_alignment(
    result: &AlignmentResult,
    aligned_reference: &str,
    aligned_query: &str,
    score: i64,
) {
    assert_eq!(result.aligned_reference(), aligned_reference);
    assert_eq!(result.aligned_query(), aligned_query);
    assert_eq!(result.score(), Score::from(score));
}

#[test]
fn global_scenario() {
    let result = align_str(
        "GATTACA",
        "GCATGCU",
        ScoringPolicy::default(),
        AlignmentMode::Global,
    )
    .unwrap();

    assert_alignment(&result, "GATTACA", "GCATGCU", -1);
    assert_eq!(result.mode(), AlignmentMode::Global);
    assert_eq!(result.reference_range(), 0..7);
    assert_eq!(result.query_range(), 0..7);
    assert_eq!(result.cigar(), "1M2X1M1X1M1X");
}

#[test]
fn local_scenario() {
    let result = align_str(
        "ACACACTA",
        "AGCACACA",
        ScoringPolicy::default(),
        AlignmentMode::Local,
    )
    .unwrap();

    assert_alignment(&result, "ACACA", "ACACA", 5);
    assert_eq!(result.reference_range(), 0..5);
    assert_eq!(result.query_range(), 3..8);
    assert_eq!(result.reference_length(), 8);
    assert_eq!(result.query_length(), 8);
    assert_eq!(result.cigar(), "5M");
}

#[test]
fn local_tie_break_prefers_first_maximum() {
    let result = align(b"ACG", b"ACCG", ScoringPolicy::default(), AlignmentMode::Local).unwrap();

    assert_alignment(&result, "AC", "AC", 2);
    assert_eq!(result.reference_range(), 0..2);
    assert_eq!(result.query_range(), 0..2);
}

#[test]
fn local_without_positive_score() {
    for (reference, query) in [("TTTT", "AAAA"), ("A", "T")] {
        let result = align_str(
            reference,
            query,
            ScoringPolicy::default(),
            AlignmentMode::Local,
        )
        .unwrap();

        assert_alignment(&result, "", "", 0);
        assert!(result.alignment().is_empty());
        assert_eq!(result.reference_range(), 0..0);
        assert_eq!(result.query_range(), 0..0);
        assert_eq!(result.statistics().identity, r64(0.0));
    }
}

#[test]
fn identical_sequences() {
    for length in 1..20 {
        let sequence: String = "ACGT".chars().cycle().take(length).collect();
        let result = align_str(
            &sequence,
            &sequence,
            ScoringPolicy::default(),
            AlignmentMode::Global,
        )
        .unwrap();

        assert_alignment(&result, &sequence, &sequence, length as i64);
        assert_eq!(result.statistics().identity, r64(1.0));
    }
}

#[test]
fn alternative_gap_score() {
    let result = align_str(
        "GATTACA",
        "GCATGCU",
        ScoringPolicy::new(2, -1, -1),
        AlignmentMode::Global,
    )
    .unwrap();

    assert_alignment(&result, "G-ATTACA", "GCA-TGCU", 4);
    let statistics = result.statistics();
    assert_eq!(statistics.matches, 4);
    assert_eq!(statistics.substitutions, 2);
    assert_eq!(statistics.insertions, 1);
    assert_eq!(statistics.deletions, 1);
    assert_eq!(statistics.length, 8);
    assert_eq!(statistics.identity, r64(0.5));
}

#[test]
fn empty_input_is_rejected() {
    for mode in MODES {
        assert!(matches!(
            align_str("", "ACGT", ScoringPolicy::default(), mode),
            Err(Error::InvalidInput(SequenceName::Reference))
        ));
        assert!(matches!(
            align_str("ACGT", "", ScoringPolicy::default(), mode),
            Err(Error::InvalidInput(SequenceName::Query))
        ));
        assert!(matches!(
            align::<u8>(&[], &[], ScoringPolicy::default(), mode),
            Err(Error::InvalidInput(_))
        ));
    }
}

#[test]
fn score_matches_matrix() {
    for &(reference, query) in PAIRS {
        for mode in MODES {
            let mut matrix = AlignmentMatrix::new(
                ScoringPolicy::default(),
                mode,
                reference.len(),
                query.len(),
            );
            let optimum = matrix.align(reference.as_bytes(), query.as_bytes());
            let result = align_str(reference, query, ScoringPolicy::default(), mode).unwrap();

            assert_eq!(result.score(), optimum, "{mode} {reference} {query}");
        }
    }
}

#[test]
fn aligned_sequences_reconstruct_inputs() {
    for &(reference, query) in PAIRS {
        for mode in MODES {
            let result = align_str(reference, query, ScoringPolicy::default(), mode).unwrap();

            assert_eq!(
                result.aligned_reference().chars().count(),
                result.aligned_query().chars().count()
            );
            assert_eq!(
                ungapped(result.aligned_reference()),
                reference[result.reference_range()]
            );
            assert_eq!(ungapped(result.aligned_query()), query[result.query_range()]);
            assert_eq!(
                result.marker_line().chars().count(),
                result.alignment().len()
            );

            if mode == AlignmentMode::Global {
                assert_eq!(result.reference_range(), 0..reference.len());
                assert_eq!(result.query_range(), 0..query.len());
            }
        }
    }
}

#[test]
fn swapping_sequences_keeps_score() {
    for &(reference, query) in PAIRS {
        for mode in MODES {
            let forward = align_str(reference, query, ScoringPolicy::default(), mode).unwrap();
            let backward = align_str(query, reference, ScoringPolicy::default(), mode).unwrap();

            assert_eq!(forward.score(), backward.score(), "{mode} {reference} {query}");
        }
    }
}

#[test]
fn higher_match_score_never_lowers_score() {
    for &(reference, query) in PAIRS {
        for mode in MODES {
            let mut previous = None;
            for match_score in 0..5 {
                let score = align_str(
                    reference,
                    query,
                    ScoringPolicy::new(match_score, -1, -2),
                    mode,
                )
                .unwrap()
                .score();

                if let Some(previous) = previous {
                    assert!(score >= previous, "{mode} {reference} {query}");
                }
                previous = Some(score);
            }
        }
    }
}

#[test]
fn independent_alignments_in_parallel() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AlignmentMatrix>();
    assert_send_sync::<AlignmentResult>();
    assert_send_sync::<ScoringPolicy>();

    let expected: Vec<_> = PAIRS
        .iter()
        .map(|&(reference, query)| {
            align_str(reference, query, ScoringPolicy::default(), AlignmentMode::Local).unwrap()
        })
        .collect();

    let actual: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = PAIRS
            .iter()
            .map(|&(reference, query)| {
                scope.spawn(move || {
                    align_str(reference, query, ScoringPolicy::default(), AlignmentMode::Local)
                        .unwrap()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(expected, actual);
}

#[test]
fn display() {
    let result = align_str("ACG", "ACCG", ScoringPolicy::default(), AlignmentMode::Global).unwrap();

    assert_eq!(
        result.to_string(),
        "A-CG\n| ||\nACCG\nScore: 1\nCIGAR: 1M1I2M"
    );
}
