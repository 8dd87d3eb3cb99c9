//! Pairwise sequence alignment over dense dynamic-programming matrices.
//!
//! The engine is parameterized by three caller-supplied scoring capabilities
//! (per-position match payoff, run-length-aware gap penalty and a positional
//! weight), composed into a [`pairwise::scoring::Scheme`]. Filled matrices
//! expose score extraction, traceback and reconstruction of the two gapped
//! output sequences.

pub use alignable::Alignable;
pub use num::Score;

pub mod alignable;
mod num;
pub mod pairwise;
