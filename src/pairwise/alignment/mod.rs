pub use offset::Offset;
pub use op::Op;
pub use trace::Trace;

mod offset;
mod op;
mod trace;
pub mod utils;
