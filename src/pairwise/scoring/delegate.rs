use std::marker::PhantomData;

use crate::pairwise::matrix::Drift;
use crate::pairwise::scoring::{gaps, symbols, weights, Score};

pub struct Delegate<S, M, G, W>
where
    S: Score,
    M: symbols::Scorer<Score = S>,
    G: gaps::Scorer<Score = S>,
    W: weights::Scorer<Score = S>,
{
    pub symbols: M,
    pub gaps: G,
    pub weights: W,
    score: PhantomData<S>,
}

impl<S, M, G, W> Delegate<S, M, G, W>
where
    S: Score,
    M: symbols::Scorer<Score = S>,
    G: gaps::Scorer<Score = S>,
    W: weights::Scorer<Score = S>,
{
    pub fn new(symbols: M, gaps: G, weights: W) -> Self {
        Delegate {
            symbols,
            gaps,
            weights,
            score: Default::default(),
        }
    }
}

impl<S, M, G, W> symbols::Scorer for Delegate<S, M, G, W>
where
    S: Score,
    M: symbols::Scorer<Score = S>,
    G: gaps::Scorer<Score = S>,
    W: weights::Scorer<Score = S>,
{
    type Score = S;

    #[inline(always)]
    fn score(&self, seq1pos: usize, seq2pos: usize) -> Self::Score {
        self.symbols.score(seq1pos, seq2pos)
    }
}

impl<S, M, G, W> gaps::Scorer for Delegate<S, M, G, W>
where
    S: Score,
    M: symbols::Scorer<Score = S>,
    G: gaps::Scorer<Score = S>,
    W: weights::Scorer<Score = S>,
{
    type Score = S;

    #[inline(always)]
    fn penalty(&self, run: Drift) -> Self::Score {
        self.gaps.penalty(run)
    }
}

impl<S, M, G, W> weights::Scorer for Delegate<S, M, G, W>
where
    S: Score,
    M: symbols::Scorer<Score = S>,
    G: gaps::Scorer<Score = S>,
    W: weights::Scorer<Score = S>,
{
    type Score = S;

    #[inline(always)]
    fn weight(&self, seq1pos: usize, seq2pos: usize) -> Self::Score {
        self.weights.weight(seq1pos, seq2pos)
    }
}

impl<S, M, G, W> super::Scheme for Delegate<S, M, G, W>
where
    S: Score,
    M: symbols::Scorer<Score = S>,
    G: gaps::Scorer<Score = S>,
    W: weights::Scorer<Score = S>,
{
    type Score = S;
}
