use super::color_table::*;
use super::gradient::*;
use crate::error::*;
use crate::geometry::*;
use crate::pixel::*;

///
/// The geometry of a prepared gradient, in gradient space
///
#[derive(Clone, Copy, Debug, PartialEq)]
enum GradientShape {
    Linear { x1: f32, y1: f32, dx: f32, dy: f32, inv_len_sq: f32 },
    Radial { cx: f32, cy: f32, inv_radius: f32 },
}

///
/// A gradient that's ready to be rasterized onto a particular render target
///
#[derive(Clone, Debug, PartialEq)]
pub struct FillTable {
    shape:      GradientShape,
    spread:     Spread,

    /// Maps device pixels back into gradient space
    inverse:    Transform,

    colors:     ColorTable,
}

impl FillTable {
    ///
    /// Prepares a gradient paint for drawing with a transform to a target using the specified channel layout
    ///
    /// Returns `Ok(None)` for solid paints, which don't need a colour table
    ///
    pub fn prepare(paint: &Paint, transform: Option<&Transform>, layout: ChannelLayout) -> Result<Option<FillTable>, RasterError> {
        let (shape, stops, spread, gradient_transform) = match paint {
            Paint::Solid(_) => { return Ok(None); }

            Paint::Linear(linear) => {
                let dx      = linear.x2 - linear.x1;
                let dy      = linear.y2 - linear.y1;
                let len_sq  = dx*dx + dy*dy;

                if len_sq.sqrt() < f32::EPSILON {
                    return Err(RasterError::DegenerateGradient);
                }

                let shape = GradientShape::Linear { x1: linear.x1, y1: linear.y1, dx, dy, inv_len_sq: 1.0/len_sq };
                (shape, &linear.stops, linear.spread, linear.transform.as_ref())
            }

            Paint::Radial(radial) => {
                if radial.radius < f32::EPSILON {
                    return Err(RasterError::DegenerateGradient);
                }

                let shape = GradientShape::Radial { cx: radial.cx, cy: radial.cy, inv_radius: 1.0/radial.radius };
                (shape, &radial.stops, radial.spread, radial.transform.as_ref())
            }
        };

        // The gradient is transformed by its own transform and then by the drawable's transform
        let transform = match (transform, gradient_transform) {
            (Some(transform), Some(gradient))   => transform.multiply(gradient),
            (Some(transform), None)             => *transform,
            (None, Some(gradient))              => *gradient,
            (None, None)                        => Transform::identity(),
        };
        let inverse = transform.invert().ok_or(RasterError::SingularTransform)?;

        Ok(Some(FillTable {
            shape:      shape,
            spread:     spread,
            inverse:    inverse,
            colors:     ColorTable::new(stops, layout),
        }))
    }

    ///
    /// True if the colours in this gradient need blending even where coverage is complete
    ///
    #[inline]
    pub fn is_translucent(&self) -> bool {
        self.colors.is_translucent()
    }

    #[inline]
    pub fn color_table(&self) -> &ColorTable {
        &self.colors
    }

    ///
    /// Applies the spread mode to a gradient position
    ///
    #[inline]
    fn spread_position(&self, pos: f32) -> f32 {
        match self.spread {
            Spread::Pad     => pos.clamp(0.0, 1.0),
            Spread::Repeat  => pos - pos.floor(),
            Spread::Reflect => {
                let pos = pos.abs() % 2.0;
                if pos > 1.0 { 2.0 - pos } else { pos }
            }
        }
    }

    ///
    /// The colour of the gradient at the centre of a device pixel
    ///
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> u32 {
        let (gx, gy) = self.inverse.map(x as f32 + 0.5, y as f32 + 0.5);

        let pos = match self.shape {
            GradientShape::Linear { x1, y1, dx, dy, inv_len_sq }    => ((gx - x1) * dx + (gy - y1) * dy) * inv_len_sq,
            GradientShape::Radial { cx, cy, inv_radius }            => ((gx - cx) * (gx - cx) + (gy - cy) * (gy - cy)).sqrt() * inv_radius,
        };

        self.colors.color_at(self.spread_position(pos))
    }

    ///
    /// Fills a buffer with the colours of a run of pixels starting at `(x, y)`
    ///
    #[inline]
    pub fn fetch_span(&self, x: i32, y: i32, target: &mut [u32]) {
        for (offset, pixel) in target.iter_mut().enumerate() {
            *pixel = self.pixel(x + offset as i32, y);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn black_to_white() -> Vec<GradientStop> {
        vec![GradientStop::new(0.0, Rgba8([0, 0, 0, 255])), GradientStop::new(1.0, Rgba8([255, 255, 255, 255]))]
    }

    #[test]
    fn zero_length_linear_is_rejected() {
        let paint = Paint::Linear(LinearGradient { x1: 4.0, y1: 4.0, x2: 4.0, y2: 4.0, stops: black_to_white(), spread: Spread::Pad, transform: None });
        assert!(FillTable::prepare(&paint, None, ChannelLayout::Abgr).is_err());
    }

    #[test]
    fn linear_ends_are_padded() {
        let paint = Paint::Linear(LinearGradient { x1: 10.0, y1: 0.0, x2: 20.0, y2: 0.0, stops: black_to_white(), spread: Spread::Pad, transform: None });
        let table = FillTable::prepare(&paint, None, ChannelLayout::Abgr).unwrap().unwrap();

        assert!(table.pixel(0, 0) == 0xff000000);
        assert!(table.pixel(30, 0) == 0xffffffff);
    }

    #[test]
    fn radial_centre_is_first_stop() {
        let paint = Paint::Radial(RadialGradient { cx: 8.0, cy: 8.0, radius: 8.0, stops: black_to_white(), spread: Spread::Pad, transform: None });
        let table = FillTable::prepare(&paint, Some(&Transform::translate(0.5, 0.5)), ChannelLayout::Abgr).unwrap().unwrap();

        assert!(table.pixel(8, 8) == 0xff000000, "{:x}", table.pixel(8, 8));
        assert!(table.pixel(40, 8) == 0xffffffff);
    }
}
