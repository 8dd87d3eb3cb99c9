pub use alignment::{Offset, Op, Trace};
pub use matrix::{Cell, Drift, Global, Local};

pub mod alignment;
pub mod matrix;
pub mod scoring;
