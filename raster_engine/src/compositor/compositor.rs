use super::composite_method::*;
use crate::error::*;
use crate::geometry::*;
use crate::pixel::*;
use crate::surface::*;

///
/// A compositor attached to a render target
///
/// The image holds the composite source (eg, the mask). Matte methods read it to derive a mask value for every
/// pixel that's drawn. Masking methods combine what's drawn into the image, which is then drawn over the target.
///
#[derive(Debug)]
pub struct Compositor {
    image:  Surface<'static>,
    method: CompositeMethod,
    bbox:   BBox,
}

impl Compositor {
    ///
    /// Creates a compositor from an image containing the composite source
    ///
    /// `bbox` is the region of the image that the composite source can affect
    ///
    pub fn new(image: Surface<'static>, method: CompositeMethod, bbox: BBox) -> Result<Compositor, RasterError> {
        if !method.is_compositing() {
            return Err(RasterError::InvalidCompositeMethod(method));
        }

        let bbox = bbox.clip_to(image.width(), image.height());
        Ok(Compositor { image, method, bbox })
    }

    #[inline] pub fn method(&self) -> CompositeMethod    { self.method }
    #[inline] pub fn bbox(&self) -> BBox                 { self.bbox }
    #[inline] pub fn image(&self) -> &Surface<'static>   { &self.image }

    #[inline]
    pub fn image_mut(&mut self) -> &mut Surface<'static> {
        &mut self.image
    }

    ///
    /// Releases the compositor, returning its image
    ///
    #[inline]
    pub fn into_image(self) -> Surface<'static> {
        self.image
    }

    ///
    /// Draws the composited image over a target surface (used after a masking operation)
    ///
    pub fn blit_onto(&self, target: &mut Surface) -> Result<(), RasterError> {
        let color_space = target.color_space();
        let region      = self.bbox.clip_to(target.width(), target.height());
        let source      = self.image.image_view().ok_or(RasterError::UnsupportedColorSpace(self.image.color_space()))?;
        let stride      = target.stride();
        let pixels      = target.rgba_mut().ok_or(RasterError::UnsupportedColorSpace(color_space))?;

        if region.is_empty() {
            return Ok(());
        }

        let min_x = region.min_x as usize;
        let max_x = region.max_x as usize;

        for y in (region.min_y as usize)..(region.max_y as usize) {
            let src = &source.row(y)[min_x..max_x];
            let dst = &mut pixels[(y*stride + min_x)..(y*stride + max_x)];

            for (dst_pixel, src_pixel) in dst.iter_mut().zip(src.iter()) {
                *dst_pixel = source_over(*src_pixel, *dst_pixel);
            }
        }

        Ok(())
    }
}
