use crate::compositor::*;
use crate::pixel::*;

use thiserror::Error;

///
/// Errors that can occur while preparing or rasterizing a drawable
///
/// These never cross the `SwRenderer` boundary: the renderer logs them and reports a boolean result instead
///
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("render target is invalid (buffer of {len} pixels, stride {stride}, {width}x{height})")]
    InvalidTarget { len: usize, stride: usize, width: usize, height: usize },

    #[error("no render target is bound")]
    NoTarget,

    #[error("colour space {0:?} is not supported by this operation")]
    UnsupportedColorSpace(ColorSpace),

    #[error("gradients cannot be drawn on a grayscale surface")]
    GrayscaleGradient,

    #[error("images cannot be drawn on a grayscale surface")]
    GrayscaleImage,

    #[error("gradient has no usable length")]
    DegenerateGradient,

    #[error("transform cannot be inverted")]
    SingularTransform,

    #[error("task handle does not refer to a live task")]
    UnknownTask,

    #[error("task handle refers to a task of a different kind")]
    TaskKindMismatch,

    #[error("composite layer {0} is not the active composite layer")]
    CompositeMismatch(usize),

    #[error("composite method {0:?} cannot be used here")]
    InvalidCompositeMethod(CompositeMethod),

    #[error("could not start the worker pool: {0}")]
    PoolBuild(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature="render_png")]
    #[error(transparent)]
    Png(#[from] png::EncodingError),
}
