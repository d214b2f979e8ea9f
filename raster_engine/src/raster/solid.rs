use super::pixel_source::*;
use super::raster_target::*;
use super::span_composer::*;
use crate::coverage::*;
use crate::error::*;
use crate::geometry::*;
use crate::pixel::*;
use crate::surface::*;

///
/// Draws coverage in a solid colour
///
/// The colour is straight alpha: it's multiplied by the opacity and premultiplied before it's drawn
///
pub fn raster_solid(target: &mut RasterTarget, coverage: &Coverage, color: Rgba8, opacity: u8) -> Result<(), RasterError> {
    let color = color.with_opacity(opacity);
    if color.a() == 0 || coverage.is_empty() {
        return Ok(());
    }

    if target.surface.color_space().is_grayscale() {
        return raster_solid_gray(target, coverage, color.a());
    }

    let [r, g, b, a]    = color.premultiplied();
    let pixel           = (target.surface.blender().join)(r, g, b, a);

    // Opaque rectangles that aren't being composited can be copied straight in
    if let (Coverage::Rect(rect), None) = (coverage, target.compositor.as_ref()) {
        if a == 255 {
            fill_rect(target.surface, rect, pixel)?;
            return Ok(());
        }
    }

    let bounds = target.surface.bounds();
    compose_spans(target, coverage.spans(bounds), &SolidSource(pixel), 255)
}

///
/// Sets every pixel in a rectangle to a colour
///
fn fill_rect(surface: &mut Surface, rect: &BBox, pixel: u32) -> Result<(), RasterError> {
    let rect        = rect.clip_to(surface.width(), surface.height());
    let color_space = surface.color_space();
    let stride      = surface.stride();
    let pixels      = surface.rgba_mut().ok_or(RasterError::UnsupportedColorSpace(color_space))?;

    if rect.is_empty() {
        return Ok(());
    }

    for y in (rect.min_y as usize)..(rect.max_y as usize) {
        let start = y * stride;
        pixels[(start + rect.min_x as usize)..(start + rect.max_x as usize)].fill(pixel);
    }

    Ok(())
}

///
/// Draws coverage with a particular alpha on a grayscale surface
///
fn raster_solid_gray(target: &mut RasterTarget, coverage: &Coverage, alpha: u8) -> Result<(), RasterError> {
    let bounds  = target.surface.bounds();
    let stride  = target.surface.stride();
    let matte   = gray_matte(target.compositor.as_deref())?;
    let pixels  = target.surface.gray_mut().ok_or(RasterError::UnsupportedColorSpace(ColorSpace::Grayscale8))?;

    for span in coverage.spans(bounds) {
        let a       = multiply(span.coverage as u32, alpha as u32);
        let start   = (span.y as usize) * stride + (span.x as usize);
        let dst     = &mut pixels[start..(start + span.len as usize)];

        match matte {
            None => {
                for pixel in dst.iter_mut() {
                    *pixel = (a + multiply(*pixel as u32, 255 - a)) as u8;
                }
            }

            Some((mask, mask_stride, mask_alpha)) => {
                let mask_start = (span.y as usize) * mask_stride + (span.x as usize);

                for (pixel, mask_value) in dst.iter_mut().zip(mask[mask_start..].iter()) {
                    let a   = multiply(a, mask_alpha(*mask_value as u32));
                    *pixel  = (a + multiply(*pixel as u32, 255 - a)) as u8;
                }
            }
        }
    }

    Ok(())
}
