use super::surface::*;
use crate::error::*;
use crate::pixel::*;

use once_cell::sync::{Lazy};

///
/// Maps alpha values to `255/alpha` in 16.16 fixed point, for converting premultiplied pixels to straight alpha
///
static UNPREMULTIPLY_FACTOR: Lazy<[u32; 256]> = Lazy::new(|| {
    let mut table = [0u32; 256];

    for alpha in 1..256 {
        table[alpha] = ((255 << 16) + (alpha as u32)/2) / (alpha as u32);
    }

    table
});

///
/// Converts a straight-alpha pixel to a premultiplied one
///
#[inline]
pub fn premultiply_pixel(c: u32) -> u32 {
    let a = alpha(c);

    if a == 255 {
        c
    } else {
        (alpha_blend(c, a) & 0x00ffffff) | (c & 0xff000000)
    }
}

///
/// Converts a premultiplied pixel to straight alpha
///
/// A pixel with an alpha of 0 has no colour, so is converted to transparent white
///
#[inline]
pub fn unpremultiply_pixel(c: u32) -> u32 {
    let a = alpha(c);

    match a {
        0   => 0x00ffffff,
        255 => c,
        _   => {
            let factor  = UNPREMULTIPLY_FACTOR[a as usize];
            let channel = |shift: u32| (((c >> shift) & 0xff) * factor + 0x8000) >> 16;

            (a << 24) | (channel(16).min(255) << 16) | (channel(8).min(255) << 8) | channel(0).min(255)
        }
    }
}

impl<'a> Surface<'a> {
    ///
    /// Converts every pixel of this surface from straight to premultiplied alpha
    ///
    pub fn premultiply(&mut self) -> Result<(), RasterError> {
        self.map_rgba_pixels(premultiply_pixel)
    }

    ///
    /// Converts every pixel of this surface from premultiplied to straight alpha
    ///
    /// This loses information, so it's only used when handing back a finished image
    ///
    pub fn unpremultiply(&mut self) -> Result<(), RasterError> {
        self.map_rgba_pixels(unpremultiply_pixel)
    }

    ///
    /// Reorders the channels of every pixel to suit a new colour space
    ///
    /// Only the channel order is changed: straight-alpha colour spaces are still rendered as premultiplied pixels
    ///
    pub fn convert_color_space(&mut self, color_space: ColorSpace) -> Result<(), RasterError> {
        let from    = self.color_space().layout().ok_or(RasterError::UnsupportedColorSpace(self.color_space()))?;
        let to      = color_space.layout().ok_or(RasterError::UnsupportedColorSpace(color_space))?;

        if from != to {
            self.map_rgba_pixels(ChannelLayout::swap_red_blue)?;
        }

        self.set_color_space(color_space);
        Ok(())
    }

    ///
    /// Applies a function to every pixel of a 32-bit surface
    ///
    fn map_rgba_pixels(&mut self, map_pixel: impl Fn(u32) -> u32) -> Result<(), RasterError> {
        let color_space = self.color_space();
        let width       = self.width();
        let stride      = self.stride();
        let height      = self.height();
        let pixels      = self.rgba_mut().ok_or(RasterError::UnsupportedColorSpace(color_space))?;

        for y in 0..height {
            for pixel in pixels[(y * stride)..(y * stride + width)].iter_mut() {
                *pixel = map_pixel(*pixel);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trip_opaque() {
        for c in [0xff000000u32, 0xffffffff, 0xff102030, 0xff7f8081].iter() {
            assert!(premultiply_pixel(unpremultiply_pixel(*c)) == *c);
        }
    }

    #[test]
    fn transparent_is_white() {
        assert!(unpremultiply_pixel(0) == 0x00ffffff);
    }

    #[test]
    fn unpremultiply_half_alpha() {
        let straight = unpremultiply_pixel(0x80400000);
        assert!(straight == 0x80800000, "{:x}", straight);
    }
}
