#[cfg(feature="render_png")]
mod render_png {
    use super::super::color_conversion::*;
    use super::super::pixel_storage::*;
    use super::super::surface::*;
    use crate::error::*;

    use std::io::{Write, BufWriter};

    ///
    /// Writes the contents of a surface to a stream as a PNG file
    ///
    /// 32-bit surfaces are written as straight-alpha RGBA (whatever their channel layout), grayscale surfaces as
    /// 8-bit grayscale images. Surfaces in a straight colour space are assumed to have been unpremultiplied already.
    ///
    pub fn write_png<TStream>(surface: &Surface, target: TStream) -> Result<(), RasterError>
    where
        TStream: Write,
    {
        let width       = surface.width();
        let height      = surface.height();
        let stride      = surface.stride();
        let mut encoder = png::Encoder::new(BufWriter::new(target), width as u32, height as u32);

        encoder.set_depth(png::BitDepth::Eight);

        let image_data = match surface.pixels() {
            SurfacePixels::Rgba(pixels) => {
                encoder.set_color(png::ColorType::Rgba);

                let layout      = surface.blender().layout.ok_or(RasterError::UnsupportedColorSpace(surface.color_space()))?;
                let straight    = surface.color_space().is_straight();

                (0..height)
                    .flat_map(|y| pixels[(y*stride)..(y*stride + width)].iter())
                    .map(|pixel| if straight { *pixel } else { unpremultiply_pixel(*pixel) })
                    .flat_map(|pixel| layout.split(pixel))
                    .collect::<Vec<u8>>()
            }

            SurfacePixels::Gray(pixels) => {
                encoder.set_color(png::ColorType::Grayscale);

                (0..height)
                    .flat_map(|y| pixels[(y*stride)..(y*stride + width)].iter().copied())
                    .collect::<Vec<u8>>()
            }
        };

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&image_data)?;

        Ok(())
    }
}

#[cfg(feature="render_png")]
pub use render_png::*;
