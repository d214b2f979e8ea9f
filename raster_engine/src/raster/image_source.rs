use super::image_placement::*;
use super::image_sampler::*;
use super::pixel_source::*;
use crate::surface::*;

///
/// Reads the pixels of an image as they appear on the render target
///
pub struct ImageSource<'a> {
    image:      ImageView<'a>,
    placement:  &'a ImagePlacement,
    sampler:    Sampler,
}

impl<'a> ImageSource<'a> {
    #[inline]
    pub fn new(image: ImageView<'a>, placement: &'a ImagePlacement) -> ImageSource<'a> {
        ImageSource {
            image:      image,
            placement:  placement,
            sampler:    placement.sampler(),
        }
    }

    ///
    /// Copies pixels from the image without any scaling
    ///
    #[inline]
    fn fetch_direct(&self, x: i32, y: i32, ox: i32, oy: i32, target: &mut [u32]) {
        let src_y = y + oy;

        if src_y < 0 || src_y >= self.image.height() as i32 {
            target.fill(0);
            return;
        }

        let row     = self.image.row(src_y as usize);
        let width   = self.image.width() as i32;

        for (offset, pixel) in target.iter_mut().enumerate() {
            let src_x = x + offset as i32 + ox;
            *pixel = if src_x >= 0 && src_x < width { row[src_x as usize] } else { 0 };
        }
    }
}

impl<'a> PixelSource for ImageSource<'a> {
    fn fetch(&self, x: i32, y: i32, target: &mut [u32]) {
        let inverse = self.placement.inverse();

        match self.placement.kind() {
            ImageKind::Direct { ox, oy } => self.fetch_direct(x, y, ox, oy, target),

            ImageKind::Scaled => {
                // Rows map to a single row of the image
                let v = inverse.e22 * (y as f32 + 0.5) + inverse.e23;

                for (offset, pixel) in target.iter_mut().enumerate() {
                    let u   = inverse.e11 * ((x + offset as i32) as f32 + 0.5) + inverse.e13;
                    *pixel  = self.sampler.sample(&self.image, u, v);
                }
            }

            ImageKind::General => {
                for (offset, pixel) in target.iter_mut().enumerate() {
                    let (u, v)  = inverse.map((x + offset as i32) as f32 + 0.5, y as f32 + 0.5);
                    *pixel      = self.sampler.sample(&self.image, u, v);
                }
            }
        }
    }
}
