use eyre::Result;

use seqalign::pairwise::alignment::utils;
use seqalign::pairwise::scoring::{self, gaps, symbols, weights};
use seqalign::pairwise::{Local, Offset};

use crate::dna;

#[test]
fn embedded_motif() -> Result<()> {
    let (seq1, seq2) = (b"AAGGTT".as_slice(), b"GG".as_slice());
    let scheme = dna(seq1, seq2, 1.0, -1.0, 2.0);
    let matrix = Local::build(seq1.len(), seq2.len(), &scheme).unwrap();

    assert_eq!(matrix.best(), 2.0);

    let trace = matrix.settle();
    assert_eq!(*trace.origin(), Offset::new(2, 0));
    assert_eq!(utils::symbols(trace.ops()), "~~");

    let (top, bottom) = utils::reconstruct_str(*trace.origin(), trace.ops(), "AAGGTT", "GG")?;
    assert_eq!((top.as_str(), bottom.as_str()), ("GG", "GG"));
    Ok(())
}

#[test]
fn repeated_motif_ranks_origins() -> Result<()> {
    let (seq1, seq2) = (b"ACGTACGT".as_slice(), b"CGTA".as_slice());
    let scheme = dna(seq1, seq2, 1.0, -1.0, 2.0);
    let matrix = Local::build(seq1.len(), seq2.len(), &scheme).unwrap();

    // The full CGTA repeat beats the truncated CGT suffix repeat
    assert_eq!(matrix.best(), 4.0);
    assert_eq!(matrix.top_distinct(2), vec![4.0, 3.0]);
    assert_eq!(matrix.top_distinct(1)[0], matrix.best());

    let trace = matrix.settle();
    assert_eq!(*trace.origin(), Offset::new(1, 0));
    assert_eq!(utils::symbols(trace.ops()), "~~~~");

    let (top, bottom) = utils::reconstruct_str(*trace.origin(), trace.ops(), "ACGTACGT", "CGTA")?;
    assert_eq!((top.as_str(), bottom.as_str()), ("CGTA", "CGTA"));
    Ok(())
}

#[test]
fn at_least_the_best_single_match() {
    let (seq1, seq2) = (b"XXAYY".as_slice(), b"BAC".as_slice());
    let scheme = dna(seq1, seq2, 1.0, -1.0, 2.0);
    let matrix = Local::build(seq1.len(), seq2.len(), &scheme).unwrap();

    // A local alignment degenerates to the best single match at minimum
    assert!(matrix.best() >= 1.0);
    assert_eq!(matrix.best(), 1.0);
}

#[test]
fn all_mismatches_floor_at_zero() {
    let (seq1, seq2) = (b"AAA".as_slice(), b"TTT".as_slice());
    let scheme = dna(seq1, seq2, 1.0, -1.0, 2.0);
    let matrix = Local::build(seq1.len(), seq2.len(), &scheme).unwrap();

    assert_eq!(matrix.best(), 0.0);

    // Nothing beats zero, so traceback degenerates to the (0, 0) cell
    let trace = matrix.settle();
    assert_eq!(*trace.origin(), Offset::new(0, 0));
    assert_eq!(utils::symbols(trace.ops()), "~");
}

#[test]
fn partial_credit_substitution() {
    let (seq1, seq2) = (b"GG".as_slice(), b"GA".as_slice());
    let scheme = scoring::compose(
        symbols::SeqPair::new(
            seq1,
            seq2,
            symbols::Partial {
                equal: 1.0,
                substitution: (b'G', b'A'),
                partial: 0.5,
                different: 0.0,
            },
        ),
        gaps::Constant { cost: 1.0 },
        weights::Uniform::new(),
    );
    let matrix = Local::build(seq1.len(), seq2.len(), &scheme).unwrap();

    // G=G followed by G~A at half credit
    assert_eq!(matrix.best(), 1.5);
}

#[test]
fn zero_dimensions_build_nothing() {
    let scheme = scoring::compose(
        symbols::from_fn(|_, _| 1.0),
        gaps::Constant { cost: 2.0 },
        weights::Uniform::new(),
    );
    assert!(Local::build(0, 3, &scheme).is_none());
    assert!(Local::build(3, 0, &scheme).is_none());
}

#[test]
fn scores_are_not_clamped() {
    // A mate function that is negative everywhere leaves negative cells in
    // the matrix; only best() floors its answer at zero
    let scheme = scoring::compose(
        symbols::from_fn(|_, _| -1.0),
        gaps::Constant { cost: 2.0 },
        weights::Uniform::new(),
    );
    let matrix = Local::build(3, 3, &scheme).unwrap();
    assert_eq!(matrix.best(), 0.0);
    assert!(matrix.at(1, 1).score() < &0.0);
}
