use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use super::{Offset, Op};

/// Traceback result: where the winning alignment begins in sequence
/// coordinates and the operation sequence that replays it. For semi-global
/// alignments the origin is always (0, 0) since the ops span both sequences
/// in full; for local alignments it is the true start offset.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve, Constructor)]
pub struct Trace {
    origin: Offset,
    ops: Vec<Op>,
}

impl Trace {
    /// Total number of symbols the trace consumes from each sequence.
    pub fn consumed(&self) -> (usize, usize) {
        let mut seq1 = 0;
        let mut seq2 = 0;
        for op in &self.ops {
            op.apply(&mut seq1, &mut seq2);
        }
        (seq1, seq2)
    }
}
