use crate::fill::*;

///
/// Supplies the premultiplied source pixels for a run of target pixels
///
pub trait PixelSource {
    ///
    /// Writes the source colours for the pixels starting at `(x, y)` to `target` (one per pixel)
    ///
    fn fetch(&self, x: i32, y: i32, target: &mut [u32]);

    ///
    /// True if every pixel from this source is fully opaque
    ///
    fn is_opaque(&self) -> bool {
        false
    }
}

///
/// A source that supplies a single premultiplied colour
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolidSource(pub u32);

impl PixelSource for SolidSource {
    #[inline]
    fn fetch(&self, _x: i32, _y: i32, target: &mut [u32]) {
        target.fill(self.0);
    }

    #[inline]
    fn is_opaque(&self) -> bool {
        (self.0 >> 24) == 255
    }
}

impl PixelSource for FillTable {
    #[inline]
    fn fetch(&self, x: i32, y: i32, target: &mut [u32]) {
        self.fetch_span(x, y, target);
    }

    #[inline]
    fn is_opaque(&self) -> bool {
        !self.is_translucent()
    }
}
