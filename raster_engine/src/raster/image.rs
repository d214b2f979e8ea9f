use super::image_placement::*;
use super::image_source::*;
use super::raster_target::*;
use super::span_composer::*;
use crate::coverage::*;
use crate::error::*;
use crate::geometry::*;
use crate::pixel::*;
use crate::surface::*;

///
/// Draws an image onto a target
///
/// If the image has coverage (because it's been clipped), only the covered pixels are drawn, otherwise the whole
/// of the placement's bounding box is drawn
///
pub fn raster_image(target: &mut RasterTarget, image: ImageView, placement: &ImagePlacement, coverage: Option<&Coverage>, opacity: u8) -> Result<(), RasterError> {
    if opacity == 0 || placement.bbox().is_empty() {
        return Ok(());
    }

    if target.surface.color_space().is_grayscale() {
        return Err(RasterError::GrayscaleImage);
    }

    let bounds  = target.surface.bounds();
    let source  = ImageSource::new(image, placement);

    match coverage {
        Some(coverage)  => compose_spans(target, coverage.spans(bounds), &source, opacity),
        None            => {
            let whole_image = Coverage::Rect(placement.bbox());
            compose_spans(target, whole_image.spans(bounds), &source, opacity)
        }
    }
}

///
/// Draws a region of a surface onto the same region of a target at an opacity
///
pub fn blit_surface(target: &mut RasterTarget, source: &Surface, region: BBox, opacity: u8) -> Result<(), RasterError> {
    if let Some(gray) = source.gray() {
        let matte = gray_matte(target.compositor.as_deref())?;
        return blit_gray(target.surface, gray, source.stride(), matte, region, opacity);
    }

    let image       = source.image_view().ok_or(RasterError::UnsupportedColorSpace(source.color_space()))?;
    let region      = region.clip_to(source.width(), source.height());
    let placement   = ImagePlacement::direct(region);

    raster_image(target, image, &placement, None, opacity)
}

///
/// Draws a region of a grayscale image onto the same region of a grayscale surface, through a matte if there is one
///
fn blit_gray(target: &mut Surface, source: &[u8], source_stride: usize, matte: Option<GrayMatte>, region: BBox, opacity: u8) -> Result<(), RasterError> {
    let region      = region.clip_to(target.width(), target.height());
    let color_space = target.color_space();
    let stride      = target.stride();
    let pixels      = target.gray_mut().ok_or(RasterError::UnsupportedColorSpace(color_space))?;

    if region.is_empty() {
        return Ok(());
    }

    let (min_x, max_x) = (region.min_x as usize, region.max_x as usize);

    for y in (region.min_y as usize)..(region.max_y as usize) {
        let src = &source[(y*source_stride + min_x)..(y*source_stride + max_x)];
        let dst = &mut pixels[(y*stride + min_x)..(y*stride + max_x)];

        match matte {
            None => {
                for (dst_pixel, src_pixel) in dst.iter_mut().zip(src.iter()) {
                    let a       = multiply(*src_pixel as u32, opacity as u32);
                    *dst_pixel  = (a + multiply(*dst_pixel as u32, 255 - a)) as u8;
                }
            }

            Some((mask, mask_stride, mask_alpha)) => {
                let mask = &mask[(y*mask_stride + min_x)..(y*mask_stride + max_x)];

                for ((dst_pixel, src_pixel), mask_value) in dst.iter_mut().zip(src.iter()).zip(mask.iter()) {
                    let a       = multiply(multiply(*src_pixel as u32, opacity as u32), mask_alpha(*mask_value as u32));
                    *dst_pixel  = (a + multiply(*dst_pixel as u32, 255 - a)) as u8;
                }
            }
        }
    }

    Ok(())
}
