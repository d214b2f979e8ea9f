use crate::geometry::*;

///
/// A horizontal run of pixels with a single coverage value
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoverageSpan {
    pub y:          i32,
    pub x:          i32,
    pub len:        u32,
    pub coverage:   u8,
}

impl CoverageSpan {
    #[inline]
    pub const fn new(x: i32, y: i32, len: u32, coverage: u8) -> CoverageSpan {
        CoverageSpan { y, x, len, coverage }
    }

    ///
    /// The x position just after the end of this span
    ///
    #[inline]
    pub const fn end_x(&self) -> i32 {
        self.x + self.len as i32
    }

    ///
    /// Clips this span so it lies within a region, returning `None` if nothing is left
    ///
    #[inline]
    pub fn clip_to(&self, region: &BBox) -> Option<CoverageSpan> {
        if self.y < region.min_y || self.y >= region.max_y {
            return None;
        }

        let start   = self.x.max(region.min_x);
        let end     = self.end_x().min(region.max_x);

        if start < end {
            Some(CoverageSpan::new(start, self.y, (end - start) as u32, self.coverage))
        } else {
            None
        }
    }
}
