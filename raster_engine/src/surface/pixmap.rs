use super::color_conversion::*;
use super::image_view::*;
use super::surface::check_dimensions;
use crate::error::*;
use crate::pixel::*;

///
/// The pixels of a picture that can be drawn by the renderer
///
/// A pixmap in a straight colour space is premultiplied (and reordered if needed) when it's prepared for
/// rendering, with the converted copy kept by the task that draws it.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Pixmap {
    width:          usize,
    height:         usize,
    stride:         usize,
    color_space:    ColorSpace,
    pixels:         Vec<u32>,
}

impl Pixmap {
    ///
    /// Creates a pixmap from a set of pixels, `stride` pixels per row
    ///
    pub fn from_pixels(width: usize, height: usize, stride: usize, color_space: ColorSpace, pixels: Vec<u32>) -> Result<Pixmap, RasterError> {
        if color_space.is_grayscale() {
            return Err(RasterError::UnsupportedColorSpace(color_space));
        }

        check_dimensions(pixels.len(), stride, width, height)?;

        Ok(Pixmap { width, height, stride, color_space, pixels })
    }

    ///
    /// Creates a pixmap by calling a function for every pixel
    ///
    pub fn from_fn(width: usize, height: usize, color_space: ColorSpace, pixel: impl Fn(usize, usize) -> u32) -> Result<Pixmap, RasterError> {
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| pixel(x, y))
            .collect();

        Pixmap::from_pixels(width, height, width, color_space, pixels)
    }

    #[inline] pub fn width(&self) -> usize               { self.width }
    #[inline] pub fn height(&self) -> usize              { self.height }
    #[inline] pub fn stride(&self) -> usize              { self.stride }
    #[inline] pub fn color_space(&self) -> ColorSpace    { self.color_space }
    #[inline] pub fn pixels(&self) -> &[u32]             { &self.pixels }

    #[inline]
    pub fn view(&self) -> ImageView<'_> {
        ImageView::new(&self.pixels, self.width, self.height, self.stride)
    }

    ///
    /// True if this pixmap can be drawn directly to a target with the specified channel layout
    ///
    #[inline]
    pub fn matches_layout(&self, layout: ChannelLayout) -> bool {
        !self.color_space.is_straight() && self.color_space.layout() == Some(layout)
    }

    ///
    /// Creates a premultiplied copy of this pixmap using a different channel layout
    ///
    pub fn converted_to(&self, layout: ChannelLayout) -> Pixmap {
        let swap        = self.color_space.layout() != Some(layout);
        let straight    = self.color_space.is_straight();
        let color_space = match layout {
            ChannelLayout::Abgr => ColorSpace::Abgr8888,
            ChannelLayout::Argb => ColorSpace::Argb8888,
        };

        let pixels = (0..self.height)
            .flat_map(|y| self.view().row(y).iter().copied())
            .map(|pixel| if swap { ChannelLayout::swap_red_blue(pixel) } else { pixel })
            .map(|pixel| if straight { premultiply_pixel(pixel) } else { pixel })
            .collect();

        Pixmap {
            width:          self.width,
            height:         self.height,
            stride:         self.width,
            color_space:    color_space,
            pixels:         pixels,
        }
    }
}
