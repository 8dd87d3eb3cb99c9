use std::marker::PhantomData;

use crate::num::Score;
use crate::pairwise::matrix::Drift;

/// Gap cost as a function of the run state of the predecessor cell. The
/// returned value is subtracted (after positional weighting) from the
/// predecessor's score, so positive values penalize gaps.
pub trait Scorer {
    type Score: Score;

    fn penalty(&self, run: Drift) -> Self::Score;
}

/// Fixed cost regardless of how long the gap already is.
pub struct Constant<S: Score> {
    pub cost: S,
}

impl<S: Score> Scorer for Constant<S> {
    type Score = S;

    #[inline(always)]
    fn penalty(&self, _: Drift) -> Self::Score {
        self.cost
    }
}

/// The historical default: `base` to open a gap, `base / (run + 1)` to extend
/// one. Extension gets cheaper as the run grows, which is the opposite of
/// most affine models; kept as-is because changing it changes every result.
pub struct Tapering<S: Score> {
    pub base: S,
}

impl<S: Score> Default for Tapering<S> {
    fn default() -> Self {
        Self {
            base: S::one() + S::one(),
        }
    }
}

impl<S: Score> Scorer for Tapering<S> {
    type Score = S;

    #[inline(always)]
    fn penalty(&self, run: Drift) -> Self::Score {
        match run.run() {
            0 => self.base,
            // Cast cannot fail: usize always converts to a float
            n => self.base / S::from(n + 1).unwrap(),
        }
    }
}

/// Lifts a closure over the run state into a [`Scorer`].
pub struct FromFn<S, F> {
    f: F,
    _phantom: PhantomData<S>,
}

pub fn from_fn<S: Score, F: Fn(Drift) -> S>(f: F) -> FromFn<S, F> {
    FromFn {
        f,
        _phantom: Default::default(),
    }
}

impl<S: Score, F: Fn(Drift) -> S> Scorer for FromFn<S, F> {
    type Score = S;

    #[inline(always)]
    fn penalty(&self, run: Drift) -> Self::Score {
        (self.f)(run)
    }
}
