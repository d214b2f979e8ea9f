///
/// A read-only view of a 32-bit premultiplied image
///
#[derive(Clone, Copy, Debug)]
pub struct ImageView<'a> {
    pixels: &'a [u32],
    width:  usize,
    height: usize,
    stride: usize,
}

impl<'a> ImageView<'a> {
    ///
    /// Creates a view of some pixels (the caller ensures that `pixels` holds `height` rows of `stride` pixels)
    ///
    #[inline]
    pub fn new(pixels: &'a [u32], width: usize, height: usize, stride: usize) -> ImageView<'a> {
        ImageView { pixels, width, height, stride }
    }

    #[inline] pub fn width(&self) -> usize   { self.width }
    #[inline] pub fn height(&self) -> usize  { self.height }
    #[inline] pub fn stride(&self) -> usize  { self.stride }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.stride + x]
    }

    ///
    /// The pixels in a row of the image
    ///
    #[inline]
    pub fn row(&self, y: usize) -> &'a [u32] {
        let start = y * self.stride;
        &self.pixels[start..(start + self.width)]
    }
}
