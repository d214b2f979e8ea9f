use crate::surface::*;

///
/// Images drawn at less than this scale factor are down-sampled with a box filter instead of bilinear filtering
///
pub const DOWN_SCALE_TOLERANCE: f32 = 0.5;

///
/// How an image is read at positions that don't fall on a pixel centre
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sampler {
    /// Interpolates between the four nearest pixels
    Bilinear,

    /// Averages the `2n x 2n` pixels around the position
    Box(u32),
}

///
/// The radius of the box filter used to down-sample an image by a scale factor
///
#[inline]
pub fn half_scale(scale: f32) -> u32 {
    ((0.5 / scale).floor() as u32).max(1)
}

impl Sampler {
    ///
    /// Chooses the sampler for drawing an image at a particular scale factor
    ///
    #[inline]
    pub fn for_scale(scale: f32) -> Sampler {
        if scale < DOWN_SCALE_TOLERANCE {
            Sampler::Box(half_scale(scale))
        } else {
            Sampler::Bilinear
        }
    }

    ///
    /// Reads the image at a position in image space (where pixel centres are at `n + 0.5`)
    ///
    /// Positions outside of the image are transparent
    ///
    #[inline]
    pub fn sample(&self, image: &ImageView, u: f32, v: f32) -> u32 {
        if !(u >= 0.0 && v >= 0.0 && u < image.width() as f32 && v < image.height() as f32) {
            return 0;
        }

        match self {
            Sampler::Bilinear           => sample_bilinear(image, u, v),
            Sampler::Box(half_scale)    => sample_box(image, u, v, *half_scale),
        }
    }
}

#[inline]
fn channel(pixel: u32, shift: u32) -> u32 {
    (pixel >> shift) & 0xff
}

///
/// Bilinear interpolation of the four pixels nearest to a position, with the pixels at the edge of the image
/// repeated beyond it
///
/// The weights are combined before rounding, so a position exactly between four pixels produces their rounded mean
///
pub fn sample_bilinear(image: &ImageView, u: f32, v: f32) -> u32 {
    let max_x   = image.width() as i32 - 1;
    let max_y   = image.height() as i32 - 1;
    let px      = u - 0.5;
    let py      = v - 0.5;
    let x0      = px.floor();
    let y0      = py.floor();
    let wx      = ((px - x0) * 256.0).round() as u32;
    let wy      = ((py - y0) * 256.0).round() as u32;

    let x0      = x0 as i32;
    let y0      = y0 as i32;
    let x1      = (x0 + 1).clamp(0, max_x) as usize;
    let y1      = (y0 + 1).clamp(0, max_y) as usize;
    let x0      = x0.clamp(0, max_x) as usize;
    let y0      = y0.clamp(0, max_y) as usize;

    let c00     = image.pixel(x0, y0);
    let c10     = image.pixel(x1, y0);
    let c01     = image.pixel(x0, y1);
    let c11     = image.pixel(x1, y1);

    let w00     = (256 - wx) * (256 - wy);
    let w10     = wx * (256 - wy);
    let w01     = (256 - wx) * wy;
    let w11     = wx * wy;

    [0, 8, 16, 24].iter().fold(0, |result, shift| {
        let sum = channel(c00, *shift) * w00 + channel(c10, *shift) * w10 + channel(c01, *shift) * w01 + channel(c11, *shift) * w11;
        result | (((sum + 32768) >> 16) << shift)
    })
}

///
/// The rounded mean of the `2n x 2n` pixels around a position (pixels outside of the image are not counted)
///
pub fn sample_box(image: &ImageView, u: f32, v: f32, half_scale: u32) -> u32 {
    let n       = half_scale as i64;
    let cx      = u.floor() as i64;
    let cy      = v.floor() as i64;
    let min_x   = (cx - n).max(0) as usize;
    let min_y   = (cy - n).max(0) as usize;
    let max_x   = ((cx + n) as usize).min(image.width());
    let max_y   = ((cy + n) as usize).min(image.height());

    let mut sums    = [0u32; 4];
    let mut count   = 0u32;

    for y in min_y..max_y {
        for pixel in image.row(y)[min_x..max_x].iter() {
            sums[0] += channel(*pixel, 0);
            sums[1] += channel(*pixel, 8);
            sums[2] += channel(*pixel, 16);
            sums[3] += channel(*pixel, 24);
            count   += 1;
        }
    }

    if count == 0 {
        return 0;
    }

    sums.iter()
        .zip([0, 8, 16, 24].iter())
        .fold(0, |result, (sum, shift)| result | (((sum + count/2) / count) << shift))
}
