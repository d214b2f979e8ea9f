use super::image_sampler::*;
use crate::coverage::*;
use crate::error::*;
use crate::geometry::*;

///
/// How the pixels of an image map onto the render target
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    /// Pixels are copied: target pixel `(x, y)` reads image pixel `(x + ox, y + oy)`
    Direct { ox: i32, oy: i32 },

    /// The image is scaled along the axes (and possibly moved)
    Scaled,

    /// Any other transform: every target pixel is mapped back into the image
    General,
}

///
/// Where and how an image is drawn on the render target
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImagePlacement {
    kind:       ImageKind,
    inverse:    Transform,
    scale:      f32,
    bbox:       BBox,
}

impl ImagePlacement {
    ///
    /// Classifies the drawing of an image of the specified size with a transform, onto a target clipped to `clip`
    ///
    pub fn classify(width: usize, height: usize, transform: Option<&Transform>, clip: BBox) -> Result<ImagePlacement, RasterError> {
        let transform   = transform.copied().unwrap_or_else(Transform::identity);
        let inverse     = transform.invert().ok_or(RasterError::SingularTransform)?;

        let kind = if transform.is_integer_translation() {
            ImageKind::Direct { ox: -(transform.e13.round() as i32), oy: -(transform.e23.round() as i32) }
        } else if transform.is_axis_aligned() {
            ImageKind::Scaled
        } else {
            ImageKind::General
        };

        // The bounding box of the transformed corners of the image
        let (w, h)      = (width as f32, height as f32);
        let corners     = [transform.map(0.0, 0.0), transform.map(w, 0.0), transform.map(0.0, h), transform.map(w, h)];
        let min_x       = corners.iter().map(|(x, _)| *x).fold(f32::MAX, f32::min);
        let min_y       = corners.iter().map(|(_, y)| *y).fold(f32::MAX, f32::min);
        let max_x       = corners.iter().map(|(x, _)| *x).fold(f32::MIN, f32::max);
        let max_y       = corners.iter().map(|(_, y)| *y).fold(f32::MIN, f32::max);
        let bbox        = BBox::new(min_x.round_down(), min_y.round_down(), max_x.round_up(), max_y.round_up());

        Ok(ImagePlacement {
            kind:       kind,
            inverse:    inverse,
            scale:      transform.scale_factor(),
            bbox:       bbox.intersect(&clip),
        })
    }

    ///
    /// Placement for copying a region of an image to the same region of the target
    ///
    #[inline]
    pub fn direct(region: BBox) -> ImagePlacement {
        ImagePlacement {
            kind:       ImageKind::Direct { ox: 0, oy: 0 },
            inverse:    Transform::identity(),
            scale:      1.0,
            bbox:       region,
        }
    }

    ///
    /// Returns this placement, drawn using a different method
    ///
    /// The direct method can only be used when the transform is a whole-pixel translation.
    ///
    #[inline]
    pub fn with_kind(self, kind: ImageKind) -> ImagePlacement {
        ImagePlacement { kind, ..self }
    }

    #[inline] pub fn kind(&self) -> ImageKind        { self.kind }
    #[inline] pub fn inverse(&self) -> &Transform    { &self.inverse }
    #[inline] pub fn scale(&self) -> f32             { self.scale }
    #[inline] pub fn bbox(&self) -> BBox             { self.bbox }

    ///
    /// The sampler to use when reading the image
    ///
    #[inline]
    pub fn sampler(&self) -> Sampler {
        Sampler::for_scale(self.scale)
    }

    ///
    /// Generates the coverage of the image (used when the image is clipped or composited)
    ///
    pub fn coverage(&self, width: usize, height: usize) -> Rle {
        match self.kind {
            ImageKind::Direct { .. } | ImageKind::Scaled => Rle::from_rect(&self.bbox),

            ImageKind::General => {
                let (w, h)      = (width as f32, height as f32);
                let mut spans   = vec![];

                for y in self.bbox.min_y..self.bbox.max_y {
                    let mut run_start = None;

                    for x in self.bbox.min_x..=self.bbox.max_x {
                        let (u, v)  = self.inverse.map(x as f32 + 0.5, y as f32 + 0.5);
                        let inside  = x < self.bbox.max_x && u >= 0.0 && v >= 0.0 && u < w && v < h;

                        match (inside, run_start) {
                            (true, None)            => { run_start = Some(x); }
                            (false, Some(start))    => {
                                spans.push(CoverageSpan::new(start, y, (x - start) as u32, 255));
                                run_start = None;
                            }
                            _                       => { }
                        }
                    }
                }

                Rle::from_spans(spans)
            }
        }
    }
}

///
/// Converts bounding box positions to whole pixels
///
trait PixelRound {
    fn round_down(self) -> i32;
    fn round_up(self) -> i32;
}

impl PixelRound for f32 {
    #[inline]
    fn round_down(self) -> i32 {
        // Positions within rounding error of a pixel edge are treated as being on the edge
        (self + 1e-4).floor() as i32
    }

    #[inline]
    fn round_up(self) -> i32 {
        (self - 1e-4).ceil() as i32
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn translation_is_direct() {
        let placement = ImagePlacement::classify(10, 10, Some(&Transform::translate(5.0, 6.0)), BBox::new(0, 0, 100, 100)).unwrap();

        assert!(placement.kind() == ImageKind::Direct { ox: -5, oy: -6 });
        assert!(placement.bbox() == BBox::new(5, 6, 15, 16));
    }

    #[test]
    fn scale_is_scaled() {
        let placement = ImagePlacement::classify(10, 10, Some(&Transform::scale(0.5, 0.5)), BBox::new(0, 0, 100, 100)).unwrap();

        assert!(placement.kind() == ImageKind::Scaled);
        assert!(placement.bbox() == BBox::new(0, 0, 5, 5));
        assert!(placement.sampler() == Sampler::Bilinear);
    }

    #[test]
    fn rotation_is_general() {
        let placement = ImagePlacement::classify(10, 10, Some(&Transform::rotate(0.3)), BBox::new(0, 0, 100, 100)).unwrap();
        assert!(placement.kind() == ImageKind::General);
    }

    #[test]
    fn small_scale_uses_box_filter() {
        let placement = ImagePlacement::classify(100, 100, Some(&Transform::scale(0.25, 0.25)), BBox::new(0, 0, 100, 100)).unwrap();
        assert!(placement.sampler() == Sampler::Box(2));
    }
}
