//!
//! # Pixels
//!
//! Pixels in this engine are premultiplied 8-bit-per-channel values packed into a `u32` (or a single `u8` for
//! grayscale surfaces). The order of the colour channels within the `u32` depends on the colour space of the
//! target surface, and is described by a `ChannelLayout`. The alpha channel is always the top 8 bits.
//!
//! All of the blending arithmetic is in `blend`: every routine in the rasterizer is built from these few
//! operations so that rounding is identical everywhere.
//!

mod blend;
mod rgba8;
mod color_space;
mod blender;

pub use blend::*;
pub use rgba8::*;
pub use color_space::*;
pub use blender::*;
