use derive_getters::{Dissolve, Getters};

use crate::num::Score;
use crate::pairwise::alignment::Offset;

use super::Drift;

/// One solved sub-problem of the dynamic program: the best cumulative score
/// of an alignment ending at this cell, the coordinate where that alignment
/// began, and the move that produced the score.
#[derive(Copy, Clone, PartialEq, Debug, Default, Getters, Dissolve)]
pub struct Cell<S: Score> {
    pub(super) score: S,
    pub(super) origin: Offset,
    pub(super) drift: Drift,
}

impl<S: Score> Cell<S> {
    pub(super) fn new(score: S, origin: Offset, drift: Drift) -> Self {
        Self {
            score,
            origin,
            drift,
        }
    }
}
