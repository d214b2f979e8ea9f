mod composite_method;
mod compositor;

pub use composite_method::*;
pub use compositor::*;
