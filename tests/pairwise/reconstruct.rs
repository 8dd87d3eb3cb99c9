use eyre::Result;

use seqalign::pairwise::alignment::utils;
use seqalign::pairwise::{Global, Local, Offset, Op};

use crate::dna;

#[test]
fn global_round_trip() -> Result<()> {
    let (seq1, seq2) = (b"ACGT".as_slice(), b"AGT".as_slice());
    let scheme = dna(seq1, seq2, 1.0, -1.0, 2.0);
    let trace = Global::build(seq1.len(), seq2.len(), &scheme)
        .unwrap()
        .settle();

    let (top, bottom) = utils::reconstruct_str(*trace.origin(), trace.ops(), "ACGT", "AGT")?;
    assert_eq!(top.len(), bottom.len());

    // Dropping the gap symbols reproduces both inputs in full
    assert_eq!(top.replace('-', ""), "ACGT");
    assert_eq!(bottom.replace('-', ""), "AGT");
    Ok(())
}

#[test]
fn local_round_trip_with_flanks() -> Result<()> {
    let (seq1, seq2) = (b"AAGGTT".as_slice(), b"GG".as_slice());
    let scheme = dna(seq1, seq2, 1.0, -1.0, 2.0);
    let trace = Local::build(seq1.len(), seq2.len(), &scheme)
        .unwrap()
        .settle();

    let (top, bottom) = utils::reconstruct_str(*trace.origin(), trace.ops(), "AAGGTT", "GG")?;
    let (used1, used2) = trace.consumed();

    // Origin prefix + gapless alignment body + unconsumed suffix == input
    let rebuilt1 = format!(
        "{}{}{}",
        &"AAGGTT"[..trace.origin().seq1],
        top.replace('-', ""),
        &"AAGGTT"[trace.origin().seq1 + used1..]
    );
    let rebuilt2 = format!(
        "{}{}{}",
        &"GG"[..trace.origin().seq2],
        bottom.replace('-', ""),
        &"GG"[trace.origin().seq2 + used2..]
    );
    assert_eq!(rebuilt1, "AAGGTT");
    assert_eq!(rebuilt2, "GG");
    Ok(())
}

#[test]
fn custom_gap_symbol() -> Result<()> {
    let ops = [Op::Equivalent, Op::GapFirst, Op::Equivalent];
    let (top, bottom) = utils::reconstruct(
        Offset::new(0, 0),
        &ops,
        &b"AC".as_slice(),
        &b"AXC".as_slice(),
        b'*',
    )?;
    assert_eq!(top, b"A*C");
    assert_eq!(bottom, b"AXC");
    Ok(())
}

#[test]
fn overrunning_trace_is_rejected() {
    let ops = [Op::Equivalent, Op::Equivalent, Op::Equivalent];
    assert!(utils::reconstruct_str(Offset::new(0, 0), &ops, "A", "A").is_err());
    assert!(utils::reconstruct_str(Offset::new(5, 0), &ops, "ABC", "ABC").is_err());
}

#[test]
fn symbol_rendering() {
    let ops = [Op::Equivalent, Op::GapFirst, Op::GapSecond, Op::Equivalent];
    assert_eq!(utils::symbols(&ops), "~v^~");
    assert_eq!(utils::symbols(&[]), "");
}
