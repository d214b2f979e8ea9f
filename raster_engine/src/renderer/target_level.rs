use crate::compositor::*;
use crate::geometry::*;
use crate::raster::*;
use crate::surface::*;

///
/// A surface that drawing operations are directed at, along with its compositor
///
pub (crate) struct TargetLevel<'a> {
    pub surface:    Surface<'a>,
    compositor:     Option<Compositor>,

    /// Compositors displaced by `attach_compositor()`, restored in reverse order
    saved:          Vec<Option<Compositor>>,
}

impl<'a> TargetLevel<'a> {
    pub fn new(surface: Surface<'a>) -> TargetLevel<'a> {
        TargetLevel {
            surface:    surface,
            compositor: None,
            saved:      vec![],
        }
    }

    ///
    /// The raster target for drawing to this level
    ///
    #[inline]
    pub fn target(&mut self) -> RasterTarget<'_, 'a> {
        RasterTarget::with_compositor(&mut self.surface, self.compositor.as_mut())
    }

    ///
    /// Sets the compositor for this level, saving the previous one
    ///
    pub fn attach_compositor(&mut self, compositor: Compositor) {
        let previous = self.compositor.replace(compositor);
        self.saved.push(previous);
    }

    ///
    /// Restores the compositor that was displaced by the last call to `attach_compositor()`
    ///
    /// Returns the compositor that was removed, or `None` if nothing was attached
    ///
    pub fn restore_compositor(&mut self) -> Option<Compositor> {
        let previous = self.saved.pop()?;
        std::mem::replace(&mut self.compositor, previous)
    }

    ///
    /// Removes every compositor from this level, returning their images
    ///
    pub fn detach_all(&mut self) -> Vec<Surface<'static>> {
        let mut images = vec![];

        while let Some(previous) = self.saved.pop() {
            if let Some(compositor) = std::mem::replace(&mut self.compositor, previous) {
                images.push(compositor.into_image());
            }
        }

        images.extend(self.compositor.take().map(|compositor| compositor.into_image()));
        images
    }
}

///
/// Identifies a composite layer created by `begin_composite()`
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CompositeId(pub (crate) usize);

///
/// An offscreen surface that's drawn onto the level below it when it's finished
///
pub (crate) struct CompositeLayer {
    pub id:     CompositeId,
    pub region: BBox,
    pub level:  TargetLevel<'static>,
}
