use super::task_settings::*;
use super::update_flags::*;
use crate::coverage::*;
use crate::error::*;
use crate::fill::*;
use crate::geometry::*;
use crate::pixel::*;

use tracing::{warn};

use std::sync::*;

///
/// The outline of a shape
///
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub width:  f32,
    pub paint:  Paint,
}

impl StrokeStyle {
    #[inline]
    pub fn new(width: f32, paint: Paint) -> StrokeStyle {
        StrokeStyle { width, paint }
    }

    ///
    /// True if this stroke will draw anything
    ///
    #[inline]
    pub fn is_active(&self) -> bool {
        self.width > 0.0 && self.paint.is_visible(255)
    }

    ///
    /// True if this stroke is a solid opaque colour
    ///
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.paint.solid_color().map(|color| color.a() == 255).unwrap_or(false)
    }
}

///
/// What a shape source is asked to generate coverage for
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverageRequest {
    /// The transform to apply to the shape
    pub transform:  Option<Transform>,

    /// Size of the target (coverage must be clipped to this)
    pub width:      usize,
    pub height:     usize,

    /// False if the edges of the fill are going to be covered by an opaque stroke
    pub anti_alias: bool,

    /// True if the coverage can be returned as `Coverage::Rect`
    pub allow_rect: bool,
}

impl CoverageRequest {
    #[inline]
    pub fn clip(&self) -> BBox {
        BBox::of_surface(self.width, self.height)
    }
}

///
/// Supplies the paints and coverage of a shape (generating the coverage from the path is done by the implementor)
///
pub trait ShapeSource : Send + Sync {
    ///
    /// How the interior of the shape is coloured
    ///
    fn fill(&self) -> Paint;

    ///
    /// The outline of the shape, if it has one
    ///
    fn stroke(&self) -> Option<StrokeStyle>;

    ///
    /// Generates the coverage of the interior of the shape
    ///
    fn fill_coverage(&self, request: &CoverageRequest) -> Option<Coverage>;

    ///
    /// Generates the coverage of the outline of the shape
    ///
    fn stroke_coverage(&self, request: &CoverageRequest) -> Option<Rle>;
}

///
/// A shape that's being prepared for rendering
///
pub struct ShapeTask {
    source:          Arc<dyn ShapeSource>,

    /// The paints, as they were when the task was last prepared
    fill:            Paint,
    stroke:          Option<StrokeStyle>,

    /// Coverage as generated by the source, and after clipping
    fill_base:       Option<Coverage>,
    stroke_base:     Option<Coverage>,
    fill_coverage:   Option<Coverage>,
    stroke_coverage: Option<Coverage>,

    fill_table:      Option<FillTable>,
    stroke_table:    Option<FillTable>,

    prepared:        bool,
    compose:         bool,
}

impl ShapeTask {
    pub fn new(source: Arc<dyn ShapeSource>) -> ShapeTask {
        ShapeTask {
            source:          source,
            fill:            Paint::Solid(Rgba8([0, 0, 0, 0])),
            stroke:          None,
            fill_base:       None,
            stroke_base:     None,
            fill_coverage:   None,
            stroke_coverage: None,
            fill_table:      None,
            stroke_table:    None,
            prepared:        false,
            compose:         false,
        }
    }

    ///
    /// Changes the source of this shape (the next preparation will use it)
    ///
    #[inline]
    pub fn set_source(&mut self, source: Arc<dyn ShapeSource>) {
        self.source = source;
    }

    #[inline] pub fn fill(&self) -> &Paint                           { &self.fill }
    #[inline] pub fn stroke(&self) -> Option<&StrokeStyle>           { self.stroke.as_ref() }
    #[inline] pub fn fill_coverage(&self) -> Option<&Coverage>       { self.fill_coverage.as_ref() }
    #[inline] pub fn stroke_coverage(&self) -> Option<&Coverage>     { self.stroke_coverage.as_ref() }
    #[inline] pub fn fill_table(&self) -> Option<&FillTable>         { self.fill_table.as_ref() }
    #[inline] pub fn stroke_table(&self) -> Option<&FillTable>       { self.stroke_table.as_ref() }

    ///
    /// True if the fill and stroke need to be drawn together before the opacity is applied
    ///
    #[inline]
    pub fn compose(&self) -> bool {
        self.compose
    }

    ///
    /// The width of the stroke (0 if the shape has no active stroke)
    ///
    #[inline]
    pub fn stroke_width(&self) -> f32 {
        self.stroke.as_ref().map(|stroke| stroke.width).unwrap_or(0.0)
    }

    ///
    /// The region that drawing this shape can affect
    ///
    pub fn bbox(&self) -> Option<BBox> {
        let fill    = self.fill_coverage.as_ref().filter(|coverage| !coverage.is_empty()).map(|coverage| coverage.bbox());
        let stroke  = self.stroke_coverage.as_ref().filter(|coverage| !coverage.is_empty()).map(|coverage| coverage.bbox());

        match (fill, stroke) {
            (Some(fill), Some(stroke))  => Some(fill.union(&stroke)),
            (fill, stroke)              => fill.or(stroke),
        }
    }

    ///
    /// The coverage to use when this shape clips another drawable
    ///
    #[inline]
    pub fn clip_coverage(&self) -> Coverage {
        self.fill_coverage.clone().unwrap_or(Coverage::Rect(BBox::new(0, 0, 0, 0)))
    }

    ///
    /// Regenerates whatever the update flags say has changed
    ///
    pub fn prepare(&mut self, settings: &TaskSettings) -> Result<(), RasterError> {
        if settings.opacity == 0 {
            return Ok(());
        }

        let flags       = settings.flags;
        let first       = !self.prepared;
        let fill        = self.source.fill();
        let stroke      = self.source.stroke().filter(|stroke| stroke.is_active());
        let fill_active = fill.is_visible(settings.opacity);

        // Shape edges underneath a wide opaque stroke are never seen
        let anti_alias  = !stroke.as_ref().map(|stroke| stroke.is_opaque() && stroke.width > 2.0).unwrap_or(false);
        let request     = CoverageRequest {
            transform:  settings.transform,
            width:      settings.target.width,
            height:     settings.target.height,
            anti_alias: anti_alias,
            allow_rect: !settings.has_composites(),
        };

        // Fill (a shape that has just become visible has no coverage yet)
        let became_visible = fill_active && self.fill_base.is_none();

        if first || became_visible || flags.intersects(UpdateFlags::PATH | UpdateFlags::TRANSFORM) {
            self.fill_base  = if fill_active { self.source.fill_coverage(&request) } else { None };
        }

        if first || flags.intersects(UpdateFlags::GRADIENT | UpdateFlags::TRANSFORM) {
            self.fill_table = prepare_table(&fill, settings);
        }

        // Stroke
        if first || flags.intersects(UpdateFlags::STROKE | UpdateFlags::TRANSFORM) {
            match &stroke {
                Some(stroke) => {
                    self.stroke_base    = self.source.stroke_coverage(&request).map(|rle| Coverage::Rle(Arc::new(rle)));
                    self.stroke_table   = prepare_table(&stroke.paint, settings);
                }

                None => {
                    self.stroke_base    = None;
                    self.stroke_table   = None;
                }
            }
        }

        // Clip paths
        self.fill_coverage      = self.fill_base.clone().map(|coverage| settings.clip(coverage));
        self.stroke_coverage    = self.stroke_base.clone().map(|coverage| settings.clip(coverage));

        let has_fill            = fill_active && self.fill_coverage.as_ref().map(|coverage| !coverage.is_empty()).unwrap_or(false);
        let has_stroke          = stroke.is_some() && self.stroke_coverage.as_ref().map(|coverage| !coverage.is_empty()).unwrap_or(false);
        self.compose            = has_fill && has_stroke && settings.opacity < 255;

        self.fill               = fill;
        self.stroke             = stroke;
        self.prepared           = true;

        Ok(())
    }

    ///
    /// Releases the coverage and colour tables
    ///
    pub fn dispose(&mut self) {
        self.fill_base          = None;
        self.stroke_base        = None;
        self.fill_coverage      = None;
        self.stroke_coverage    = None;
        self.fill_table         = None;
        self.stroke_table       = None;
        self.prepared           = false;
        self.compose            = false;
    }
}

///
/// Builds the colour table for a paint, if it's a gradient
///
fn prepare_table(paint: &Paint, settings: &TaskSettings) -> Option<FillTable> {
    let layout = settings.target.layout()?;

    match FillTable::prepare(paint, settings.transform.as_ref(), layout) {
        Ok(table)   => table,
        Err(err)    => {
            warn!("Gradient will not be drawn: {}", err);
            None
        }
    }
}
