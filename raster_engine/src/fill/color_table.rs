use super::gradient::*;
use crate::pixel::*;

use wide::*;

///
/// The number of entries in the colour table for a gradient
///
pub const GRADIENT_STOP_SIZE: usize = 1024;

///
/// The premultiplied colours along a gradient, packed for a particular render target
///
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTable {
    pixels:         Box<[u32]>,
    translucent:    bool,
}

impl ColorTable {
    ///
    /// Generates the colour table for a set of gradient stops
    ///
    pub fn new(stops: &[GradientStop], layout: ChannelLayout) -> ColorTable {
        let translucent = stops.is_empty() || stops.iter().any(|stop| stop.color.a() < 255);
        let mut pixels  = vec![0u32; GRADIENT_STOP_SIZE].into_boxed_slice();

        // Sort the stops in the gradient
        let mut stops = stops.to_vec();
        stops.sort_by(|stop1, stop2| stop1.offset.total_cmp(&stop2.offset));

        if let (Some(first), Some(last)) = (stops.first(), stops.last()) {
            let first_color     = stop_color(first);
            let last_color      = stop_color(last);
            let mut next_stop   = 0;

            for (pixel_num, pixel) in pixels.iter_mut().enumerate() {
                let pos = (pixel_num as f32) / ((GRADIENT_STOP_SIZE-1) as f32);

                // Move on to the stop following this position
                while next_stop < stops.len() && stops[next_stop].offset <= pos {
                    next_stop += 1;
                }

                let color = if next_stop == 0 {
                    first_color
                } else if next_stop >= stops.len() {
                    last_color
                } else {
                    // Blend between the two stops either side of this position
                    let last_stop   = &stops[next_stop-1];
                    let stop        = &stops[next_stop];
                    let diff        = stop.offset - last_stop.offset;
                    let fraction    = if diff > 0.0 { (pos - last_stop.offset) / diff } else { 1.0 };

                    (stop_color(stop) * f32x4::splat(fraction)) + (stop_color(last_stop) * f32x4::splat(1.0 - fraction))
                };

                *pixel = pack_color(color, layout);
            }
        }

        ColorTable { pixels, translucent }
    }

    ///
    /// True if any of the colours in this table are not fully opaque
    ///
    #[inline]
    pub fn is_translucent(&self) -> bool {
        self.translucent
    }

    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    ///
    /// The colour at a position along the gradient (from 0 to 1)
    ///
    #[inline]
    pub fn color_at(&self, pos: f32) -> u32 {
        let idx = (pos * ((GRADIENT_STOP_SIZE-1) as f32) + 0.5) as isize;
        self.pixels[idx.clamp(0, (GRADIENT_STOP_SIZE-1) as isize) as usize]
    }
}

#[inline]
fn stop_color(stop: &GradientStop) -> f32x4 {
    let [r, g, b, a] = stop.color.0;
    f32x4::new([r as f32, g as f32, b as f32, a as f32])
}

///
/// Premultiplies a straight colour and packs it into a pixel
///
#[inline]
fn pack_color(color: f32x4, layout: ChannelLayout) -> u32 {
    let [_, _, _, alpha]    = color.to_array();
    let premultiplied       = color * f32x4::new([alpha / 255.0, alpha / 255.0, alpha / 255.0, 1.0]);
    let premultiplied       = premultiplied.round().min(f32x4::splat(255.0)).max(f32x4::ZERO);
    let [r, g, b, a]        = premultiplied.to_array();

    layout.join(r as u8, g as u8, b as u8, a as u8)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn two_stop_ramp() {
        let stops = vec![GradientStop::new(0.0, Rgba8([0, 0, 0, 255])), GradientStop::new(1.0, Rgba8([255, 255, 255, 255]))];
        let table = ColorTable::new(&stops, ChannelLayout::Abgr);

        assert!(!table.is_translucent());
        assert!(table.pixels()[0] == 0xff000000, "{:x}", table.pixels()[0]);
        assert!(table.pixels()[GRADIENT_STOP_SIZE-1] == 0xffffffff, "{:x}", table.pixels()[GRADIENT_STOP_SIZE-1]);
    }

    #[test]
    fn translucent_stops() {
        let stops = vec![GradientStop::new(0.0, Rgba8([255, 0, 0, 128])), GradientStop::new(1.0, Rgba8([255, 0, 0, 255]))];
        let table = ColorTable::new(&stops, ChannelLayout::Abgr);

        assert!(table.is_translucent());
        assert!(table.pixels()[0] == 0x80000080, "{:x}", table.pixels()[0]);
    }
}
