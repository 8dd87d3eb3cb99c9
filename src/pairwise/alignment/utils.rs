use eyre::{ensure, Result};

use crate::alignable::Alignable;

use super::{Offset, Op};

/// Replays an operation sequence against the two original sequences,
/// producing two equal-length rows padded with `gap` wherever one sequence
/// has no counterpart. Purely a deterministic replay; no scoring involved.
///
/// Errors if the trace consumes symbols past the end of either sequence.
pub fn reconstruct<S1, S2>(
    origin: Offset,
    ops: &[Op],
    seq1: &S1,
    seq2: &S2,
    gap: S1::Symbol,
) -> Result<(Vec<S1::Symbol>, Vec<S1::Symbol>)>
where
    S1: Alignable,
    S2: Alignable<Symbol = S1::Symbol>,
    S1::Symbol: Copy,
{
    let mut pos1 = origin.seq1;
    let mut pos2 = origin.seq2;
    let mut top = Vec::with_capacity(ops.len());
    let mut bottom = Vec::with_capacity(ops.len());
    for op in ops {
        match op {
            Op::GapFirst => {
                ensure!(
                    pos2 < seq2.len(),
                    "trace runs past the end of the second sequence (position {pos2})"
                );
                top.push(gap);
                bottom.push(*seq2.at(pos2));
                pos2 += 1;
            }
            Op::GapSecond => {
                ensure!(
                    pos1 < seq1.len(),
                    "trace runs past the end of the first sequence (position {pos1})"
                );
                top.push(*seq1.at(pos1));
                bottom.push(gap);
                pos1 += 1;
            }
            Op::Equivalent => {
                ensure!(
                    pos1 < seq1.len() && pos2 < seq2.len(),
                    "trace runs past the end of a sequence (positions {pos1}, {pos2})"
                );
                top.push(*seq1.at(pos1));
                bottom.push(*seq2.at(pos2));
                pos1 += 1;
                pos2 += 1;
            }
        }
    }
    Ok((top, bottom))
}

/// [`reconstruct`] over strings with `-` as the gap symbol. Sequences must
/// be ASCII for the output columns to line up.
pub fn reconstruct_str(
    origin: Offset,
    ops: &[Op],
    seq1: &str,
    seq2: &str,
) -> Result<(String, String)> {
    let (top, bottom) = reconstruct(origin, ops, &seq1.as_bytes(), &seq2.as_bytes(), b'-')?;
    Ok((String::from_utf8(top)?, String::from_utf8(bottom)?))
}

/// Compact one-symbol-per-op rendering, mostly for debug output and tests.
pub fn symbols(ops: &[Op]) -> String {
    ops.iter().map(Op::symbol).collect()
}
