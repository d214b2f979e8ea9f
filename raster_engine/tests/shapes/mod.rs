#![allow(dead_code)]

use flo_raster_engine::coverage::*;
use flo_raster_engine::fill::*;
use flo_raster_engine::geometry::*;
use flo_raster_engine::pixel::*;
use flo_raster_engine::task::*;

use std::sync::*;

///
/// A rectangle with an optional stroke centred on its edges
///
/// Only translations are supported when generating coverage
///
pub struct RectShape {
    pub rect:   BBox,
    pub fill:   Paint,
    pub stroke: Option<StrokeStyle>,
}

impl RectShape {
    pub fn filled(rect: BBox, color: Rgba8) -> Arc<RectShape> {
        Arc::new(RectShape { rect, fill: Paint::Solid(color), stroke: None })
    }

    pub fn painted(rect: BBox, fill: Paint) -> Arc<RectShape> {
        Arc::new(RectShape { rect, fill, stroke: None })
    }

    pub fn stroked(rect: BBox, fill: Rgba8, stroke_width: f32, stroke: Rgba8) -> Arc<RectShape> {
        Arc::new(RectShape { rect, fill: Paint::Solid(fill), stroke: Some(StrokeStyle::new(stroke_width, Paint::Solid(stroke))) })
    }

    ///
    /// The rectangle after the request's transform has been applied
    ///
    fn placed(&self, request: &CoverageRequest) -> BBox {
        let transform       = request.transform.unwrap_or_else(Transform::identity);
        let (min_x, min_y)  = transform.map(self.rect.min_x as f32, self.rect.min_y as f32);
        let (max_x, max_y)  = transform.map(self.rect.max_x as f32, self.rect.max_y as f32);

        BBox::new(min_x.round() as i32, min_y.round() as i32, max_x.round() as i32, max_y.round() as i32)
    }
}

impl ShapeSource for RectShape {
    fn fill(&self) -> Paint {
        self.fill.clone()
    }

    fn stroke(&self) -> Option<StrokeStyle> {
        self.stroke.clone()
    }

    fn fill_coverage(&self, request: &CoverageRequest) -> Option<Coverage> {
        let rect = self.placed(request).intersect(&request.clip());

        if request.allow_rect {
            Some(Coverage::Rect(rect))
        } else {
            Some(Coverage::Rle(Arc::new(Rle::from_rect(&rect))))
        }
    }

    fn stroke_coverage(&self, request: &CoverageRequest) -> Option<Rle> {
        let stroke  = self.stroke.as_ref()?;
        let half    = (stroke.width / 2.0).round() as i32;
        let rect    = self.placed(request);
        let outer   = rect.expand(half);
        let inner   = rect.expand(-half);
        let clip    = request.clip();
        let mut spans = vec![];

        for y in outer.min_y..outer.max_y {
            if y >= inner.min_y && y < inner.max_y {
                spans.push(CoverageSpan::new(outer.min_x, y, (inner.min_x - outer.min_x) as u32, 255));
                spans.push(CoverageSpan::new(inner.max_x, y, (outer.max_x - inner.max_x) as u32, 255));
            } else {
                spans.push(CoverageSpan::new(outer.min_x, y, outer.width() as u32, 255));
            }
        }

        Some(Rle::from_spans(spans.into_iter().filter_map(|span| span.clip_to(&clip)).collect()))
    }
}

///
/// Creates a buffer for a render target
///
pub fn buffer(width: usize, height: usize) -> Vec<u32> {
    vec![0u32; width * height]
}
