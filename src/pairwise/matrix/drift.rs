/// Direction and run length of the move that produced a cell.
///
/// A diagonal move resets the run; gap moves record how many consecutive gap
/// symbols end at the cell in the same direction. The run length feeds the
/// gap penalty, so position-dependent gap models see how deep into a gap the
/// recurrence currently is.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum Drift {
    /// One symbol consumed from each sequence.
    #[default]
    Diagonal,
    /// `run` consecutive leftward moves: the second sequence advanced while
    /// the first held a gap. Always >= 1.
    Horizontal(usize),
    /// `run` consecutive upward moves: the first sequence advanced while the
    /// second held a gap. Always >= 1.
    Vertical(usize),
}

impl Drift {
    pub fn is_diagonal(&self) -> bool {
        matches!(self, Drift::Diagonal)
    }

    /// Length of the current gap run; zero immediately after a diagonal move.
    pub fn run(&self) -> usize {
        match self {
            Drift::Diagonal => 0,
            Drift::Horizontal(run) | Drift::Vertical(run) => *run,
        }
    }

    /// The run state after one more leftward move: an existing horizontal
    /// run grows, anything else starts a fresh run of one.
    pub(crate) fn extend_horizontal(self) -> Self {
        match self {
            Drift::Horizontal(run) => Drift::Horizontal(run + 1),
            _ => Drift::Horizontal(1),
        }
    }

    /// The run state after one more upward move.
    pub(crate) fn extend_vertical(self) -> Self {
        match self {
            Drift::Vertical(run) => Drift::Vertical(run + 1),
            _ => Drift::Vertical(1),
        }
    }
}
