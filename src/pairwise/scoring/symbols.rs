use std::marker::PhantomData;

use crate::alignable::Alignable;
use crate::num::Score;

/// Position-indexed match function: the payoff for aligning symbol
/// `seq1pos` of the first sequence against symbol `seq2pos` of the second.
/// This is the only required piece of a scoring scheme; the matrix builders
/// call it for every seeded and interior cell.
pub trait Scorer {
    type Score: Score;

    fn score(&self, seq1pos: usize, seq2pos: usize) -> Self::Score;
}

/// Per-symbol comparison rule, independent of position. Bound to concrete
/// sequences via [`SeqPair`] to obtain a position-indexed [`Scorer`].
pub trait Comparator {
    type Score: Score;
    type Symbol;

    fn compare(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Self::Score;
}

/// Flat payoff: one value for identical symbols, another for everything else.
pub struct Equality<S: Score, Symbol> {
    pub equal: S,
    pub different: S,
    _phantom: PhantomData<Symbol>,
}

impl<S: Score, Symbol: PartialEq> Equality<S, Symbol> {
    pub fn new(equal: S, different: S) -> Self {
        Self {
            equal,
            different,
            _phantom: Default::default(),
        }
    }
}

impl<S: Score, Symbol: PartialEq> Comparator for Equality<S, Symbol> {
    type Score = S;
    type Symbol = Symbol;

    #[inline(always)]
    fn compare(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Self::Score {
        if s1 == s2 {
            self.equal
        } else {
            self.different
        }
    }
}

/// [`Equality`] with one recognized one-way substitution scored at reduced
/// credit, e.g. G in a probe read against A in the reference at half weight.
pub struct Partial<S: Score> {
    pub equal: S,
    /// The tolerated substitution as (first sequence symbol, second sequence
    /// symbol). Direction matters.
    pub substitution: (u8, u8),
    pub partial: S,
    pub different: S,
}

impl<S: Score> Comparator for Partial<S> {
    type Score = S;
    type Symbol = u8;

    #[inline(always)]
    fn compare(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Self::Score {
        if s1 == s2 {
            self.equal
        } else if (*s1, *s2) == self.substitution {
            self.partial
        } else {
            self.different
        }
    }
}

/// Binds two sequences to a comparator, producing the position-indexed match
/// function consumed by the matrix builders. Positions outside the sequences
/// are a caller precondition, not validated here.
pub struct SeqPair<S1, S2, C> {
    seq1: S1,
    seq2: S2,
    comparator: C,
}

impl<S1, S2, C> SeqPair<S1, S2, C>
where
    S1: Alignable,
    S2: Alignable<Symbol = S1::Symbol>,
    C: Comparator<Symbol = S1::Symbol>,
{
    pub fn new(seq1: S1, seq2: S2, comparator: C) -> Self {
        Self {
            seq1,
            seq2,
            comparator,
        }
    }
}

impl<S1, S2, C> Scorer for SeqPair<S1, S2, C>
where
    S1: Alignable,
    S2: Alignable<Symbol = S1::Symbol>,
    C: Comparator<Symbol = S1::Symbol>,
{
    type Score = C::Score;

    #[inline(always)]
    fn score(&self, seq1pos: usize, seq2pos: usize) -> Self::Score {
        self.comparator
            .compare(self.seq1.at(seq1pos), self.seq2.at(seq2pos))
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
    fn score(&self, seq1pos: usize, seq2pos: usize) -> Self::Score {
        (self.f)(seq1pos, seq2pos)
    }
}
