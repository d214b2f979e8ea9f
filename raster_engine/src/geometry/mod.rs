mod transform;
mod bbox;
mod bounds;

pub use transform::*;
pub use bbox::*;
pub use bounds::*;
