use crate::num::Score;
use crate::pairwise::alignment::{Offset, Op, Trace};
use crate::pairwise::scoring::Scheme;

use super::grid::{self, Grid};
use super::{Cell, Drift};

/// Smith-Waterman matrix: aligns the best-scoring contiguous sub-region of
/// each sequence. Every cell may start a brand-new alignment, so the best
/// score can sit anywhere in the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Local<S: Score> {
    grid: Grid<S>,
}

impl<S: Score> Local<S> {
    /// Builds and fills the matrix in O(rows * cols) time and space.
    /// Returns `None` when either dimension is zero. Index domains of the
    /// scheme are a caller precondition and are not validated.
    ///
    /// Scores are not clamped at zero: the fresh-start candidate bounds the
    /// cell score only when the match payoff is non-negative. Schemes where
    /// every candidate can go negative store negative scores.
    pub fn build<Sch>(rows: usize, cols: usize, scheme: &Sch) -> Option<Self>
    where
        Sch: Scheme<Score = S>,
    {
        if rows == 0 || cols == 0 {
            return None;
        }
        let mut grid = Grid::seeded(rows, cols, scheme);
        for row in 1..rows {
            for col in 1..cols {
                let k = scheme.weight(row, col);
                let left = *grid.at(row, col - 1);
                let diag = *grid.at(row - 1, col - 1);
                let up = *grid.at(row - 1, col);

                let h = left.score - k * scheme.penalty(left.drift);
                let s = diag.score + k * scheme.score(row, col);
                let v = up.score - k * scheme.penalty(up.drift);
                // Fresh start: begin a new alignment right here
                let o = k * scheme.score(row, col);

                *grid.at_mut(row, col) = if h > s && h > v && h > o {
                    Cell::new(h, left.origin, left.drift.extend_horizontal())
                } else if v > s && v > o {
                    Cell::new(v, up.origin, up.drift.extend_vertical())
                } else if o > s {
                    Cell::new(o, Offset::new(row, col), Drift::Diagonal)
                } else {
                    Cell::new(s, diag.origin, Drift::Diagonal)
                };
            }
        }
        Some(Self { grid })
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn at(&self, row: usize, col: usize) -> &Cell<S> {
        self.grid.at(row, col)
    }

    /// Best score anywhere in the grid, or zero when every score is negative.
    pub fn best(&self) -> S {
        grid::best(self.grid.scan())
    }

    /// Top `n` scores with pairwise distinct alignment origins, over the
    /// whole grid, descending.
    pub fn top_distinct(&self, n: usize) -> Vec<S> {
        grid::top_distinct(self.grid.scan(), n)
    }

    /// Traceback from the best cell, stopping at the cell where the local
    /// alignment began. The returned origin is that coordinate, i.e. the
    /// true start offset within each sequence.
    pub fn settle(&self) -> Trace {
        let peak = grid::summit(self.grid.scan());
        let origin = self.grid.at(peak.seq1, peak.seq2).origin;

        let mut ops = Vec::with_capacity(peak.seq1 + peak.seq2 + 1);
        let mut row = peak.seq1;
        let mut col = peak.seq2;
        loop {
            match self.grid.at(row, col).drift {
                Drift::Horizontal(run) => {
                    for _ in 0..run {
                        ops.push(Op::GapFirst);
                    }
                    col -= run;
                }
                Drift::Vertical(run) => {
                    for _ in 0..run {
                        ops.push(Op::GapSecond);
                    }
                    row -= run;
                }
                // Origin cells are always diagonal, so the walk can only
                // terminate here
                Drift::Diagonal => {
                    ops.push(Op::Equivalent);
                    if Offset::new(row, col) == origin {
                        break;
                    }
                    row -= 1;
                    col -= 1;
                }
            }
        }
        ops.reverse();
        Trace::new(origin, ops)
    }
}
