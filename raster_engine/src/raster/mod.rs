//!
//! # Rasterizers
//!
//! The rasterizers draw coverage onto a `RasterTarget` using a `PixelSource` for the colours: a solid colour,
//! a gradient or an image. Every source goes through the same span composer, which picks between plain
//! blending, matting against the compositor image or accumulating into the compositor image for masks.
//!

mod raster_target;
mod pixel_source;
mod span_composer;
mod solid;
mod gradient;
mod image_placement;
mod image_sampler;
mod image_source;
mod image;

pub use raster_target::*;
pub use pixel_source::*;
pub use solid::*;
pub use gradient::*;
pub use image_placement::*;
pub use image_sampler::*;
pub use image_source::*;
pub use image::*;
