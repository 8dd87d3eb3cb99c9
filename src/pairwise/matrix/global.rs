use crate::num::Score;
use crate::pairwise::alignment::{Offset, Op, Trace};
use crate::pairwise::scoring::Scheme;

use super::grid::{self, Grid};
use super::{Cell, Drift};

/// Needleman-Wunsch matrix, semi-global flavor: an optimal alignment spans
/// both sequences but unmatched ends are free, so it may end anywhere on the
/// last row or column and leading gaps cost nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct Global<S: Score> {
    grid: Grid<S>,
}

impl<S: Score> Global<S> {
    /// Builds and fills the matrix in O(rows * cols) time and space.
    /// Returns `None` when either dimension is zero. Index domains of the
    /// scheme are a caller precondition and are not validated.
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

                // Diagonal is the fallback on every tie
                *grid.at_mut(row, col) = if h > s && h > v {
                    Cell::new(h, left.origin, left.drift.extend_horizontal())
                } else if v > s {
                    Cell::new(v, up.origin, up.drift.extend_vertical())
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

    /// Best score on the rim, or zero when every rim score is negative.
    pub fn best(&self) -> S {
        grid::best(self.grid.rim())
    }

    /// Top `n` rim scores with pairwise distinct alignment origins,
    /// descending.
    pub fn top_distinct(&self, n: usize) -> Vec<S> {
        grid::top_distinct(self.grid.rim(), n)
    }

    /// Traceback from the best rim cell. Unconsumed suffixes and prefixes
    /// come out as explicit gap ops, so the returned ops always span both
    /// sequences in full and the origin is always (0, 0).
    pub fn settle(&self) -> Trace {
        let peak = grid::summit(self.grid.rim());
        let mut ops = Vec::with_capacity(self.grid.rows() + self.grid.cols());

        // Trailing free gaps past the chosen end cell; reversed into place at
        // the end together with everything else.
        for _ in peak.seq1 + 1..self.grid.rows() {
            ops.push(Op::GapSecond);
        }
        for _ in peak.seq2 + 1..self.grid.cols() {
            ops.push(Op::GapFirst);
        }

        let mut row = peak.seq1 as isize;
        let mut col = peak.seq2 as isize;
        while row >= 0 && col >= 0 {
            match self.grid.at(row as usize, col as usize).drift {
                Drift::Horizontal(run) => {
                    for _ in 0..run {
                        ops.push(Op::GapFirst);
                    }
                    col -= run as isize;
                }
                Drift::Vertical(run) => {
                    for _ in 0..run {
                        ops.push(Op::GapSecond);
                    }
                    row -= run as isize;
                }
                Drift::Diagonal => {
                    ops.push(Op::Equivalent);
                    row -= 1;
                    col -= 1;
                }
            }
        }
        // Drain whichever prefix the walk left unconsumed
        while row >= 0 {
            ops.push(Op::GapSecond);
            row -= 1;
        }
        while col >= 0 {
            ops.push(Op::GapFirst);
            col -= 1;
        }

        ops.reverse();
        Trace::new(Offset::default(), ops)
    }
}
