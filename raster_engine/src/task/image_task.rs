use super::task_settings::*;
use super::update_flags::*;
use crate::coverage::*;
use crate::error::*;
use crate::geometry::*;
use crate::raster::*;
use crate::surface::*;

use std::sync::*;

///
/// A picture that's being prepared for rendering
///
pub struct ImageTask {
    source:         Arc<Pixmap>,

    /// Pixels to draw in place of the source's pixels
    pixel_override: Option<Arc<Pixmap>>,

    placement:      Option<ImagePlacement>,

    /// The pixels, converted to the target's channel layout (when the pixmap doesn't match it)
    converted:      Option<Pixmap>,

    /// Coverage of the image (only generated when the image is composited), before and after clipping
    base_coverage:  Option<Coverage>,
    coverage:       Option<Coverage>,
}

impl ImageTask {
    pub fn new(source: Arc<Pixmap>, pixel_override: Option<Arc<Pixmap>>) -> ImageTask {
        ImageTask {
            source:         source,
            pixel_override: pixel_override,
            placement:      None,
            converted:      None,
            base_coverage:  None,
            coverage:       None,
        }
    }

    ///
    /// Changes the pixels drawn by this task
    ///
    pub fn set_source(&mut self, source: Arc<Pixmap>, pixel_override: Option<Arc<Pixmap>>) {
        let changed = !Arc::ptr_eq(&self.source, &source) || match (&self.pixel_override, &pixel_override) {
            (Some(old), Some(new))  => !Arc::ptr_eq(old, new),
            (None, None)            => false,
            _                       => true,
        };

        self.source         = source;
        self.pixel_override = pixel_override;

        if changed {
            self.converted = None;
        }
    }

    ///
    /// The pixmap that will be drawn
    ///
    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        self.pixel_override.as_deref().unwrap_or(&*self.source)
    }

    ///
    /// The pixels to read when drawing the image
    ///
    #[inline]
    pub fn image(&self) -> ImageView<'_> {
        self.converted.as_ref().unwrap_or_else(|| self.pixmap()).view()
    }

    #[inline] pub fn placement(&self) -> Option<&ImagePlacement>   { self.placement.as_ref() }
    #[inline] pub fn coverage(&self) -> Option<&Coverage>          { self.coverage.as_ref() }
    #[inline] pub fn has_converted_pixels(&self) -> bool            { self.converted.is_some() }

    #[inline]
    pub fn bbox(&self) -> Option<BBox> {
        match (&self.coverage, &self.placement) {
            (Some(coverage), _)     => Some(coverage.bbox()),
            (None, Some(placement)) => Some(placement.bbox()),
            (None, None)            => None,
        }
    }

    ///
    /// The coverage to use when this image clips another drawable
    ///
    pub fn clip_coverage(&self) -> Coverage {
        match (&self.coverage, &self.placement) {
            (Some(coverage), _)     => coverage.clone(),
            (None, Some(placement)) => Coverage::Rect(placement.bbox()),
            (None, None)            => Coverage::Rect(BBox::new(0, 0, 0, 0)),
        }
    }

    ///
    /// Classifies the image transform and builds whatever caches the image needs to be drawn
    ///
    pub fn prepare(&mut self, settings: &TaskSettings) -> Result<(), RasterError> {
        // Invisible images are only prepared when their pixels change
        if settings.opacity == 0 && !settings.flags.intersects(UpdateFlags::IMAGE) {
            return Ok(());
        }

        let regenerate = self.placement.is_none() || settings.flags.intersects(UpdateFlags::IMAGE | UpdateFlags::TRANSFORM);

        if regenerate {
            self.placement      = None;
            self.base_coverage  = None;

            let (width, height) = (self.pixmap().width(), self.pixmap().height());
            let placement       = ImagePlacement::classify(width, height, settings.transform.as_ref(), settings.target.bounds())?;

            if settings.has_composites() {
                self.base_coverage = Some(Coverage::Rle(Arc::new(placement.coverage(width, height))));
            }

            self.placement = Some(placement);
        }

        // Convert the pixels if they're not in the same format as the target
        match settings.target.layout() {
            Some(layout) if !self.pixmap().matches_layout(layout) => {
                let already_converted = self.converted.as_ref().map(|converted| converted.color_space().layout() == Some(layout)).unwrap_or(false);

                if !already_converted {
                    self.converted = Some(self.pixmap().converted_to(layout));
                }
            }

            _ => { self.converted = None; }
        }

        self.coverage = self.base_coverage.clone().map(|coverage| settings.clip(coverage));

        Ok(())
    }

    ///
    /// Releases the converted pixels and coverage
    ///
    pub fn dispose(&mut self) {
        self.placement      = None;
        self.converted      = None;
        self.base_coverage  = None;
        self.coverage       = None;
    }
}
