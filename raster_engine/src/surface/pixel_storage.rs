use std::ops::{Deref, DerefMut};

///
/// Pixel data for a surface: either borrowed from the caller or owned by the engine (for scratch images)
///
#[derive(Debug)]
pub enum PixelStorage<'a, TPixel> {
    Borrowed(&'a mut [TPixel]),
    Owned(Vec<TPixel>),
}

impl<'a, TPixel> Deref for PixelStorage<'a, TPixel> {
    type Target = [TPixel];

    #[inline]
    fn deref(&self) -> &[TPixel] {
        match self {
            PixelStorage::Borrowed(pixels)  => pixels,
            PixelStorage::Owned(pixels)     => pixels,
        }
    }
}

impl<'a, TPixel> DerefMut for PixelStorage<'a, TPixel> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [TPixel] {
        match self {
            PixelStorage::Borrowed(pixels)  => pixels,
            PixelStorage::Owned(pixels)     => pixels,
        }
    }
}

///
/// The pixels of a surface, in the format used by its colour space
///
#[derive(Debug)]
pub enum SurfacePixels<'a> {
    Rgba(PixelStorage<'a, u32>),
    Gray(PixelStorage<'a, u8>),
}
