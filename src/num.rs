use std::fmt::Debug;

/// Alignment scores are real numbers. The default gap model divides the
/// penalty by the gap run length, so integer scores are not sufficient.
pub trait Score: ::num::Float + Debug + Default {}

impl<T: ::num::Float + Debug + Default> Score for T {}
