use super::pixel_storage::*;
use super::image_view::*;
use crate::error::*;
use crate::geometry::*;
use crate::pixel::*;

///
/// A render target: a pixel buffer along with its dimensions and the blending strategies for its colour space
///
/// The pixels are either borrowed from the caller (the main render target) or owned by the engine (compositor
/// and scratch images). Pixels are always premultiplied while rendering is in progress.
///
#[derive(Debug)]
pub struct Surface<'a> {
    pixels:         SurfacePixels<'a>,
    width:          usize,
    height:         usize,
    stride:         usize,
    color_space:    ColorSpace,
    blender:        Blender,
}

///
/// Checks that a buffer is large enough for a surface of a particular size
///
pub (crate) fn check_dimensions(len: usize, stride: usize, width: usize, height: usize) -> Result<(), RasterError> {
    // Sizes that overflow can't fit in any buffer
    let required = stride.checked_mul(height.saturating_sub(1)).and_then(|rows| rows.checked_add(width));
    let invalid  = width == 0
        || height == 0
        || stride < width
        || required.map(|required| len < required).unwrap_or(true);

    if invalid {
        Err(RasterError::InvalidTarget { len, stride, width, height })
    } else {
        Ok(())
    }
}

impl<'a> Surface<'a> {
    ///
    /// Creates a surface that renders to a caller-supplied buffer of 32-bit pixels
    ///
    pub fn from_rgba(buffer: &'a mut [u32], stride: usize, width: usize, height: usize, color_space: ColorSpace) -> Result<Surface<'a>, RasterError> {
        if color_space.is_grayscale() {
            return Err(RasterError::UnsupportedColorSpace(color_space));
        }
        check_dimensions(buffer.len(), stride, width, height)?;

        Ok(Surface {
            pixels:         SurfacePixels::Rgba(PixelStorage::Borrowed(buffer)),
            width:          width,
            height:         height,
            stride:         stride,
            color_space:    color_space,
            blender:        Blender::for_color_space(color_space),
        })
    }

    ///
    /// Creates a surface that renders to a caller-supplied buffer of 8-bit grayscale pixels
    ///
    pub fn from_gray(buffer: &'a mut [u8], stride: usize, width: usize, height: usize) -> Result<Surface<'a>, RasterError> {
        check_dimensions(buffer.len(), stride, width, height)?;

        Ok(Surface {
            pixels:         SurfacePixels::Gray(PixelStorage::Borrowed(buffer)),
            width:          width,
            height:         height,
            stride:         stride,
            color_space:    ColorSpace::Grayscale8,
            blender:        Blender::for_color_space(ColorSpace::Grayscale8),
        })
    }

    ///
    /// Creates a surface that owns its pixels, initially cleared to transparent
    ///
    pub fn new(width: usize, height: usize, color_space: ColorSpace) -> Surface<'static> {
        let pixels = if color_space.is_grayscale() {
            SurfacePixels::Gray(PixelStorage::Owned(vec![0u8; width * height]))
        } else {
            SurfacePixels::Rgba(PixelStorage::Owned(vec![0u32; width * height]))
        };

        Surface {
            pixels:         pixels,
            width:          width,
            height:         height,
            stride:         width,
            color_space:    color_space,
            blender:        Blender::for_color_space(color_space),
        }
    }

    ///
    /// Creates an owned surface with the same size and colour space as this one
    ///
    #[inline]
    pub fn new_like(&self) -> Surface<'static> {
        Surface::new(self.width, self.height, self.color_space)
    }

    #[inline] pub fn width(&self) -> usize                   { self.width }
    #[inline] pub fn height(&self) -> usize                  { self.height }
    #[inline] pub fn stride(&self) -> usize                  { self.stride }
    #[inline] pub fn color_space(&self) -> ColorSpace        { self.color_space }
    #[inline] pub fn blender(&self) -> &Blender              { &self.blender }
    #[inline] pub fn pixels(&self) -> &SurfacePixels<'a>     { &self.pixels }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut SurfacePixels<'a> {
        &mut self.pixels
    }

    ///
    /// The region covered by this surface
    ///
    #[inline]
    pub fn bounds(&self) -> BBox {
        BBox::of_surface(self.width, self.height)
    }

    ///
    /// The 32-bit pixels of this surface, if it is not a grayscale surface
    ///
    #[inline]
    pub fn rgba(&self) -> Option<&[u32]> {
        match &self.pixels {
            SurfacePixels::Rgba(pixels) => Some(pixels),
            SurfacePixels::Gray(_)      => None,
        }
    }

    #[inline]
    pub fn rgba_mut(&mut self) -> Option<&mut [u32]> {
        match &mut self.pixels {
            SurfacePixels::Rgba(pixels) => Some(pixels),
            SurfacePixels::Gray(_)      => None,
        }
    }

    ///
    /// The 8-bit pixels of this surface, if it is a grayscale surface
    ///
    #[inline]
    pub fn gray(&self) -> Option<&[u8]> {
        match &self.pixels {
            SurfacePixels::Gray(pixels) => Some(pixels),
            SurfacePixels::Rgba(_)      => None,
        }
    }

    #[inline]
    pub fn gray_mut(&mut self) -> Option<&mut [u8]> {
        match &mut self.pixels {
            SurfacePixels::Gray(pixels) => Some(pixels),
            SurfacePixels::Rgba(_)      => None,
        }
    }

    ///
    /// Reads the 32-bit pixel at a position (or the gray value, for grayscale surfaces)
    ///
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        match &self.pixels {
            SurfacePixels::Rgba(pixels) => pixels[y * self.stride + x],
            SurfacePixels::Gray(pixels) => pixels[y * self.stride + x] as u32,
        }
    }

    ///
    /// A read-only view of the pixels of a 32-bit surface, suitable for using the surface as an image
    ///
    #[inline]
    pub fn image_view(&self) -> Option<ImageView<'_>> {
        self.rgba().map(|pixels| ImageView::new(pixels, self.width, self.height, self.stride))
    }

    ///
    /// Sets every pixel in the surface to transparent
    ///
    #[inline]
    pub fn clear(&mut self) {
        let bounds = self.bounds();
        self.clear_region(&bounds);
    }

    ///
    /// Sets the pixels in a region to transparent (the region is clipped to the surface)
    ///
    pub fn clear_region(&mut self, region: &BBox) {
        let region = region.clip_to(self.width, self.height);
        if region.is_empty() {
            return;
        }

        let stride  = self.stride;
        let min_x   = region.min_x as usize;
        let max_x   = region.max_x as usize;

        for y in (region.min_y as usize)..(region.max_y as usize) {
            let start = y * stride;

            match &mut self.pixels {
                SurfacePixels::Rgba(pixels) => pixels[(start + min_x)..(start + max_x)].fill(0),
                SurfacePixels::Gray(pixels) => pixels[(start + min_x)..(start + max_x)].fill(0),
            }
        }
    }

    ///
    /// Updates the colour space (and blender) of this surface without changing the pixels
    ///
    #[inline]
    pub (super) fn set_color_space(&mut self, color_space: ColorSpace) {
        self.color_space    = color_space;
        self.blender        = Blender::for_color_space(color_space);
    }
}
