pub use cell::Cell;
pub use drift::Drift;
pub use global::Global;
pub use local::Local;

mod cell;
mod drift;
mod global;
mod grid;
mod local;
