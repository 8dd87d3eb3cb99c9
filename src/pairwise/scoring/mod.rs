pub use delegate::Delegate;

pub use crate::Score;

mod delegate;
pub mod gaps;
pub mod symbols;
pub mod weights;

/// The full scoring configuration of an alignment: a position-indexed match
/// function, a run-length-aware gap penalty and a positional weight. All
/// three must be stateless so a scheme can be shared across threads.
pub trait Scheme:
    symbols::Scorer<Score = <Self as Scheme>::Score>
    + gaps::Scorer<Score = <Self as Scheme>::Score>
    + weights::Scorer<Score = <Self as Scheme>::Score>
{
    type Score: Score;
}

pub fn compose<S, M, G, W>(symbols: M, gaps: G, weights: W) -> Delegate<S, M, G, W>
where
    S: Score,
    M: symbols::Scorer<Score = S>,
    G: gaps::Scorer<Score = S>,
    W: weights::Scorer<Score = S>,
{
    Delegate::new(symbols, gaps, weights)
}
