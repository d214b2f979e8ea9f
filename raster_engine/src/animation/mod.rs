//!
//! Frame control for animated pictures. The frames themselves are produced by a `FrameSource` supplied by
//! whatever loaded the picture.
//!

mod frame_source;
mod animation;
mod expressions;

pub use frame_source::*;
pub use animation::*;
pub use expressions::*;
