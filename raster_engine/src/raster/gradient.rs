use super::raster_target::*;
use super::span_composer::*;
use crate::coverage::*;
use crate::error::*;
use crate::fill::*;

///
/// Draws coverage filled with a linear or radial gradient
///
/// The opacity multiplies the coverage of every span
///
pub fn raster_gradient(target: &mut RasterTarget, coverage: &Coverage, fill: &FillTable, opacity: u8) -> Result<(), RasterError> {
    if opacity == 0 || coverage.is_empty() {
        return Ok(());
    }

    if target.surface.color_space().is_grayscale() {
        return Err(RasterError::GrayscaleGradient);
    }

    let bounds = target.surface.bounds();
    compose_spans(target, coverage.spans(bounds), fill, opacity)
}
