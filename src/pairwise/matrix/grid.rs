use std::cmp::Ordering;
use std::collections::HashMap;

use crate::num::Score;
use crate::pairwise::alignment::Offset;
use crate::pairwise::scoring::{symbols, weights};

use super::{Cell, Drift};

/// Dense row-major arena of solved cells, `rows` x `cols`. Every
/// relationship in the recurrence is a fixed up/left/up-left offset, so flat
/// storage beats any linked representation.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct Grid<S: Score> {
    rows: usize,
    cols: usize,
    cells: Vec<Cell<S>>,
}

impl<S: Score> Grid<S> {
    /// Allocates the arena and seeds row 0 and column 0: every rim cell is a
    /// valid independent alignment start, which is what makes leading gaps
    /// free. Interior cells are left for the recurrences to fill.
    pub(super) fn seeded<Sch>(rows: usize, cols: usize, scheme: &Sch) -> Self
    where
        Sch: symbols::Scorer<Score = S> + weights::Scorer<Score = S>,
    {
        debug_assert!(rows > 0 && cols > 0);
        let mut grid = Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
        };
        for col in 0..cols {
            *grid.at_mut(0, col) = Cell::new(
                scheme.weight(0, col) * scheme.score(0, col),
                Offset::new(0, col),
                Drift::Diagonal,
            );
        }
        for row in 1..rows {
            *grid.at_mut(row, 0) = Cell::new(
                scheme.weight(row, 0) * scheme.score(row, 0),
                Offset::new(row, 0),
                Drift::Diagonal,
            );
        }
        grid
    }

    pub(super) fn rows(&self) -> usize {
        self.rows
    }

    pub(super) fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub(super) fn at(&self, row: usize, col: usize) -> &Cell<S> {
        &self.cells[row * self.cols + col]
    }

    #[inline(always)]
    pub(super) fn at_mut(&mut self, row: usize, col: usize) -> &mut Cell<S> {
        &mut self.cells[row * self.cols + col]
    }

    /// Row-major walk over every cell.
    pub(super) fn scan(&self) -> impl Iterator<Item = (Offset, &Cell<S>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(ind, cell)| (Offset::new(ind / self.cols, ind % self.cols), cell))
    }

    /// Last column top to bottom, then last row left to right: the only
    /// cells where a semi-global alignment may end. The corner is visited
    /// twice; callers compare strictly so the first visit wins.
    pub(super) fn rim(&self) -> impl Iterator<Item = (Offset, &Cell<S>)> + '_ {
        let last_col = (0..self.rows).map(move |row| {
            let offset = Offset::new(row, self.cols - 1);
            (offset, self.at(offset.seq1, offset.seq2))
        });
        let last_row = (0..self.cols).map(move |col| {
            let offset = Offset::new(self.rows - 1, col);
            (offset, self.at(offset.seq1, offset.seq2))
        });
        last_col.chain(last_row)
    }
}

/// Maximum score over the scanned cells, or zero when nothing beats zero.
pub(super) fn best<'a, S: Score + 'a>(
    cells: impl Iterator<Item = (Offset, &'a Cell<S>)>,
) -> S {
    let mut max = S::zero();
    for (_, cell) in cells {
        if cell.score > max {
            max = cell.score;
        }
    }
    max
}

/// Per distinct origin, the maximum score among the scanned cells; sorted
/// descending and truncated to `n`. This ranks alignments by where they
/// start, not the `n` best cells.
pub(super) fn top_distinct<'a, S: Score + 'a>(
    cells: impl Iterator<Item = (Offset, &'a Cell<S>)>,
    n: usize,
) -> Vec<S> {
    let mut per_origin: HashMap<Offset, S> = HashMap::new();
    for (_, cell) in cells {
        per_origin
            .entry(cell.origin)
            .and_modify(|score| {
                if cell.score > *score {
                    *score = cell.score;
                }
            })
            .or_insert(cell.score);
    }
    let mut scores: Vec<S> = per_origin.into_values().collect();
    scores.sort_unstable_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    scores.truncate(n);
    scores
}

/// Coordinate of the best-scoring cell. Strict comparison means the first
/// cell in scan order wins ties; the scan order itself is the tie-break
/// policy, deterministic but otherwise arbitrary. Falls back to (0, 0) when
/// nothing beats zero.
pub(super) fn summit<'a, S: Score + 'a>(
    cells: impl Iterator<Item = (Offset, &'a Cell<S>)>,
) -> Offset {
    let mut at = Offset::default();
    let mut max = S::zero();
    for (offset, cell) in cells {
        if cell.score > max {
            max = cell.score;
            at = offset;
        }
    }
    at
}
