use super::rle::*;
use super::span::*;
use crate::geometry::*;

use itertools::Either;

use std::sync::*;

///
/// The pixels touched by a drawable
///
#[derive(Clone, Debug, PartialEq)]
pub enum Coverage {
    /// Every pixel in the rectangle is fully covered
    Rect(BBox),

    /// The pixels are described by a span list
    Rle(Arc<Rle>),
}

impl Coverage {
    ///
    /// The region containing every covered pixel
    ///
    #[inline]
    pub fn bbox(&self) -> BBox {
        match self {
            Coverage::Rect(rect)    => *rect,
            Coverage::Rle(rle)      => rle.bbox(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        match self {
            Coverage::Rect(rect)    => rect.is_empty(),
            Coverage::Rle(rle)      => rle.is_empty(),
        }
    }

    ///
    /// Intersects this coverage with the coverage of a clip source
    ///
    /// Rectangles are clipped as rectangles, everything else by intersecting the spans
    ///
    pub fn intersect(&self, clip: &Coverage) -> Coverage {
        match (self, clip) {
            (Coverage::Rect(rect), Coverage::Rect(clip))    => Coverage::Rect(rect.intersect(clip)),
            (Coverage::Rle(rle), Coverage::Rect(clip))      => Coverage::Rle(Arc::new(rle.clip_rect(clip))),
            (Coverage::Rect(rect), Coverage::Rle(clip))     => Coverage::Rle(Arc::new(clip.clip_rect(rect))),
            (Coverage::Rle(rle), Coverage::Rle(clip))       => Coverage::Rle(Arc::new(rle.intersect(clip))),
        }
    }

    ///
    /// The spans that make up this coverage, clipped to a region
    ///
    pub fn spans(&self, region: BBox) -> impl '_ + Iterator<Item=CoverageSpan> {
        match self {
            Coverage::Rect(rect) => {
                let rect = rect.intersect(&region);
                let rows = if rect.is_empty() { 0..0 } else { rect.min_y..rect.max_y };

                Either::Left(rows.map(move |y| CoverageSpan::new(rect.min_x, y, rect.width() as u32, 255)))
            }

            Coverage::Rle(rle) => {
                Either::Right(rle.spans().iter().filter_map(move |span| span.clip_to(&region)))
            }
        }
    }
}
