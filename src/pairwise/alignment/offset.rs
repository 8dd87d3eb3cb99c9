use derive_getters::Dissolve;
use derive_more::{Constructor, From, Into};

/// Coordinate pair in sequence space: an index into the first sequence and
/// an index into the second. Doubles as the matrix (row, column) coordinate.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Debug,
    Hash,
    Default,
    Constructor,
    Dissolve,
    From,
    Into,
)]
pub struct Offset {
    pub seq1: usize,
    pub seq2: usize,
}
