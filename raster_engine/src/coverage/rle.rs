use super::span::*;
use crate::geometry::*;
use crate::pixel::*;

///
/// A run-length encoded coverage list: spans ordered by `y` and then by `x`, with no overlaps within a row
///
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Rle {
    spans: Vec<CoverageSpan>,
}

impl Rle {
    ///
    /// Creates a coverage list from a set of spans (empty spans are dropped, and the spans are put in order)
    ///
    /// Where spans in the same row overlap, the leftmost span keeps the overlapping pixels and the later span
    /// is shortened to start where it ends.
    ///
    pub fn from_spans(mut spans: Vec<CoverageSpan>) -> Rle {
        spans.retain(|span| span.len > 0 && span.coverage > 0);
        spans.sort_by_key(|span| (span.y, span.x));

        let mut trimmed: Vec<CoverageSpan> = Vec::with_capacity(spans.len());

        for mut span in spans {
            if let Some(last) = trimmed.last() {
                if last.y == span.y && last.end_x() > span.x {
                    let end = span.end_x();
                    if end <= last.end_x() {
                        continue;
                    }

                    span.x      = last.end_x();
                    span.len    = (end - span.x) as u32;
                }
            }

            trimmed.push(span);
        }

        Rle { spans: trimmed }
    }

    ///
    /// Creates a fully covered list for a rectangle
    ///
    pub fn from_rect(rect: &BBox) -> Rle {
        if rect.is_empty() {
            return Rle::default();
        }

        let spans = (rect.min_y..rect.max_y)
            .map(|y| CoverageSpan::new(rect.min_x, y, rect.width() as u32, 255))
            .collect();

        Rle { spans }
    }

    #[inline]
    pub fn spans(&self) -> &[CoverageSpan] {
        &self.spans
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    ///
    /// The region containing every span in this list
    ///
    pub fn bbox(&self) -> BBox {
        let (first, last) = match (self.spans.first(), self.spans.last()) {
            (Some(first), Some(last))   => (first, last),
            _                           => return BBox::default(),
        };

        let min_x = self.spans.iter().map(|span| span.x).min().unwrap_or(first.x);
        let max_x = self.spans.iter().map(|span| span.end_x()).max().unwrap_or(last.end_x());

        BBox::new(min_x, first.y, max_x, last.y + 1)
    }

    ///
    /// Iterates over the rows of this coverage list
    ///
    pub fn rows(&self) -> impl '_ + Iterator<Item=&[CoverageSpan]> {
        let mut remaining = &self.spans[..];

        std::iter::from_fn(move || {
            let row_y       = remaining.first()?.y;
            let row_len     = remaining.iter().position(|span| span.y != row_y).unwrap_or(remaining.len());
            let (row, rest) = remaining.split_at(row_len);

            remaining = rest;
            Some(row)
        })
    }

    ///
    /// Clips this list to a rectangle
    ///
    pub fn clip_rect(&self, clip: &BBox) -> Rle {
        let spans = self.spans.iter()
            .filter_map(|span| span.clip_to(clip))
            .collect();

        Rle { spans }
    }

    ///
    /// Intersects this list with another: the coverage of overlapping spans is multiplied together, and any part
    /// of either list that doesn't overlap the other is removed
    ///
    pub fn intersect(&self, clip: &Rle) -> Rle {
        let mut spans       = vec![];
        let mut our_rows    = self.rows().peekable();
        let mut clip_rows   = clip.rows().peekable();

        while let (Some(our_row), Some(clip_row)) = (our_rows.peek(), clip_rows.peek()) {
            let our_y   = our_row[0].y;
            let clip_y  = clip_row[0].y;

            if our_y < clip_y {
                our_rows.next();
            } else if clip_y < our_y {
                clip_rows.next();
            } else {
                intersect_row(our_row, clip_row, &mut spans);

                our_rows.next();
                clip_rows.next();
            }
        }

        Rle { spans }
    }
}

///
/// Intersects two rows of spans with the same y position
///
fn intersect_row(row_a: &[CoverageSpan], row_b: &[CoverageSpan], spans: &mut Vec<CoverageSpan>) {
    let mut idx_a = 0;
    let mut idx_b = 0;

    while idx_a < row_a.len() && idx_b < row_b.len() {
        let a       = &row_a[idx_a];
        let b       = &row_b[idx_b];
        let start   = a.x.max(b.x);
        let end     = a.end_x().min(b.end_x());

        if start < end {
            let coverage = multiply(a.coverage as u32, b.coverage as u32) as u8;

            if coverage > 0 {
                spans.push(CoverageSpan::new(start, a.y, (end - start) as u32, coverage));
            }
        }

        // Move past whichever span finishes first
        if a.end_x() <= b.end_x() {
            idx_a += 1;
        } else {
            idx_b += 1;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rows_are_grouped() {
        let rle     = Rle::from_spans(vec![CoverageSpan::new(0, 1, 4, 255), CoverageSpan::new(0, 0, 4, 255), CoverageSpan::new(8, 1, 4, 128)]);
        let rows    = rle.rows().map(|row| row.len()).collect::<Vec<_>>();

        assert!(rows == vec![1, 2], "{:?}", rows);
    }

    #[test]
    fn bbox_of_spans() {
        let rle = Rle::from_spans(vec![CoverageSpan::new(5, 2, 4, 255), CoverageSpan::new(2, 3, 2, 255)]);
        assert!(rle.bbox() == BBox::new(2, 2, 9, 4), "{:?}", rle.bbox());
    }

    #[test]
    fn intersect_partial_overlap() {
        let a       = Rle::from_spans(vec![CoverageSpan::new(0, 0, 10, 255), CoverageSpan::new(0, 1, 10, 128)]);
        let b       = Rle::from_spans(vec![CoverageSpan::new(5, 1, 10, 255), CoverageSpan::new(5, 2, 10, 255)]);
        let result  = a.intersect(&b);

        assert!(result.spans() == &[CoverageSpan::new(5, 1, 5, 128)], "{:?}", result);
    }

    #[test]
    fn overlapping_spans_are_trimmed() {
        let rle = Rle::from_spans(vec![CoverageSpan::new(4, 0, 6, 128), CoverageSpan::new(0, 0, 6, 255), CoverageSpan::new(1, 0, 2, 64), CoverageSpan::new(2, 1, 4, 255)]);

        assert!(rle.spans() == &[CoverageSpan::new(0, 0, 6, 255), CoverageSpan::new(6, 0, 4, 128), CoverageSpan::new(2, 1, 4, 255)], "{:?}", rle);
    }

    #[test]
    fn trimmed_spans_intersect_once() {
        let a       = Rle::from_spans(vec![CoverageSpan::new(0, 0, 8, 255), CoverageSpan::new(4, 0, 8, 255)]);
        let b       = Rle::from_rect(&BBox::new(0, 0, 12, 1));
        let result  = a.intersect(&b);

        assert!(result.spans().iter().map(|span| span.len).sum::<u32>() == 12, "{:?}", result);
    }
}
