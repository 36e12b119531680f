pub mod inspect;
pub mod transform;

pub use inspect::*;
pub use transform::*;
