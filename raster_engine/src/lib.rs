//!
//! # flo_raster_engine
//!
//! A CPU rasterizer and compositor for vector scenes. Shapes arrive as coverage (a run-length encoded list of
//! spans, or a solid rectangle) along with a fill and an optional stroke, and images arrive as pixmaps with a
//! transform. Each drawable is prepared by a task on a pool of worker threads, then composited onto a pixel
//! buffer owned by the caller using premultiplied 8-bit integer arithmetic.
//!
//! Start by creating a `RasterEngine`, then use `renderer()` to create a `SwRenderer` and bind a pixel buffer to it.
//!

mod error;

/// Affine transforms and integer/floating point bounding boxes
pub mod geometry;

/// A pixel is a premultiplied colour packed into a `u32`, and is blended using the integer operations in this module
pub mod pixel;

/// A surface is a buffer of pixels along with its size, stride and colour space
pub mod surface;

/// Coverage describes which pixels a drawable touches, and by how much
pub mod coverage;

/// Solid colours and gradients, and the colour tables generated from gradients
pub mod fill;

/// Compositors combine what's drawn with a mask or matte image
pub mod compositor;

/// Rasterizers draw coverage onto surfaces
pub mod raster;

/// Tasks prepare drawables for rendering on the worker threads
pub mod task;

/// The raster engine owns the worker threads
pub mod engine;

/// The renderer draws prepared tasks onto a render target
pub mod renderer;

/// Frame control for animated pictures
pub mod animation;

pub use error::*;
pub use engine::{RasterEngine, EngineConfig};
pub use renderer::*;
