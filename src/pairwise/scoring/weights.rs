use std::marker::PhantomData;

use crate::num::Score;

/// Positional multiplier applied to both the match payoff and the gap
/// penalty at a given cell.
pub trait Scorer {
    type Score: Score;

    fn weight(&self, seq1pos: usize, seq2pos: usize) -> Self::Score;
}

/// The default weight: a constant 1 everywhere.
pub struct Uniform<S: Score> {
    _phantom: PhantomData<S>,
}

impl<S: Score> Uniform<S> {
    pub fn new() -> Self {
        Self {
            _phantom: Default::default(),
        }
    }
}

impl<S: Score> Default for Uniform<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Score> Scorer for Uniform<S> {
    type Score = S;

    #[inline(always)]
    fn weight(&self, _: usize, _: usize) -> Self::Score {
        S::one()
    }
}

/// Linear weighting along the first sequence: `intercept + slope * seq1pos`.
/// Probe design uses this to emphasize one end of a probe.
pub struct Ramp<S: Score> {
    pub intercept: S,
    pub slope: S,
}

impl<S: Score> Scorer for Ramp<S> {
    type Score = S;

    #[inline(always)]
    fn weight(&self, seq1pos: usize, _: usize) -> Self::Score {
        // Cast cannot fail: usize always converts to a float
        self.intercept + self.slope * S::from(seq1pos).unwrap()
    }
}

/// Lifts a closure over two positions into a [`Scorer`].
pub struct FromFn<S, F> {
    f: F,
    _phantom: PhantomData<S>,
}

pub fn from_fn<S: Score, F: Fn(usize, usize) -> S>(f: F) -> FromFn<S, F> {
    FromFn {
        f,
        _phantom: Default::default(),
    }
}

impl<S: Score, F: Fn(usize, usize) -> S> Scorer for FromFn<S, F> {
    type Score = S;

    #[inline(always)]
    fn weight(&self, seq1pos: usize, seq2pos: usize) -> Self::Score {
        (self.f)(seq1pos, seq2pos)
    }
}
