use super::target_level::*;
use crate::compositor::*;
use crate::coverage::*;
use crate::engine::*;
use crate::error::*;
use crate::fill::*;
use crate::geometry::*;
use crate::pixel::*;
use crate::raster::*;
use crate::surface::*;
use crate::task::*;

use smallvec::*;
use tracing::{debug, error, warn};

use std::sync::*;

///
/// Renders prepared shapes and images onto a pixel buffer supplied by the caller
///
/// Drawables are prepared on the engine's worker threads by `prepare_shape()` and `prepare_image()`, and are drawn
/// on the calling thread by `render_shape()` and `render_image()`. Failures are logged and reported by returning
/// `false` or `None`.
///
pub struct SwRenderer<'a> {
    engine:         Arc<EngineInner>,

    /// The main render target
    main:           Option<TargetLevel<'a>>,

    /// Composite layers drawn above the main target (the last layer is the one being drawn to)
    layers:         Vec<CompositeLayer>,

    /// Surfaces from finished composite layers, kept for re-use
    spare_surfaces: Vec<Surface<'static>>,
    next_composite: usize,

    registry:       TaskRegistry,

    /// Tasks submitted since the last frame finished
    frame_tasks:    Vec<Arc<RasterTask>>,

    /// Surface that shapes with a fill and a stroke are drawn to before they're blended with the target
    shape_scratch:  Option<Surface<'static>>,
}

///
/// Reports an error at the renderer boundary
///
fn report(err: &RasterError) {
    match err {
        RasterError::InvalidTarget { .. }
        | RasterError::NoTarget
        | RasterError::UnknownTask
        | RasterError::TaskKindMismatch
        | RasterError::CompositeMismatch(_)  => warn!("{}", err),
        _                                   => error!("{}", err),
    }
}

///
/// Converts the result of a drawing operation to the value returned from the renderer
///
fn succeeded(result: Result<(), RasterError>) -> bool {
    match result {
        Ok(())      => true,
        Err(err)    => {
            report(&err);
            false
        }
    }
}

///
/// Draws coverage with a paint
///
fn draw_paint(target: &mut RasterTarget, coverage: &Coverage, paint: &Paint, table: Option<&FillTable>, opacity: u8) -> Result<(), RasterError> {
    match (paint, table) {
        (Paint::Solid(color), _)    => raster_solid(target, coverage, *color, opacity),
        (_, Some(table))            => raster_gradient(target, coverage, table, opacity),

        // Gradients that failed to prepare are not drawn
        (_, None)                   => {
            if target.surface.color_space().is_grayscale() {
                Err(RasterError::GrayscaleGradient)
            } else {
                Ok(())
            }
        }
    }
}

///
/// Draws the fill and the stroke of a shape
///
fn draw_shape(target: &mut RasterTarget, shape: &ShapeTask, opacity: u8) -> Result<(), RasterError> {
    if let Some(coverage) = shape.fill_coverage() {
        draw_paint(target, coverage, shape.fill(), shape.fill_table(), opacity)?;
    }

    if let (Some(coverage), Some(stroke)) = (shape.stroke_coverage(), shape.stroke()) {
        draw_paint(target, coverage, &stroke.paint, shape.stroke_table(), opacity)?;
    }

    Ok(())
}

///
/// Draws a prepared image
///
fn draw_image(target: &mut RasterTarget, image: &ImageTask, opacity: u8) -> Result<(), RasterError> {
    match image.placement() {
        Some(placement) => raster_image(target, image.image(), placement, image.coverage(), opacity),

        // Images whose transform can't be inverted aren't drawn
        None            => Ok(()),
    }
}

///
/// Draws a region of a surface onto a level
///
fn blit_level(level: &mut TargetLevel, source: &Surface, region: BBox, opacity: u8) -> Result<(), RasterError> {
    blit_surface(&mut level.target(), source, region, opacity)
}

impl<'a> SwRenderer<'a> {
    pub (crate) fn new(engine: Arc<EngineInner>) -> SwRenderer<'a> {
        SwRenderer {
            engine:         engine,
            main:           None,
            layers:         vec![],
            spare_surfaces: vec![],
            next_composite: 0,
            registry:       TaskRegistry::new(),
            frame_tasks:    vec![],
            shape_scratch:  None,
        }
    }

    ///
    /// Sets the buffer that this renderer draws to
    ///
    /// The buffer must contain at least `stride * height` pixels, and `stride` must be at least `width`.
    ///
    pub fn bind_target(&mut self, buffer: &'a mut [u32], stride: usize, width: usize, height: usize, color_space: ColorSpace) -> bool {
        match Surface::from_rgba(buffer, stride, width, height, color_space) {
            Ok(surface) => self.bind_surface(surface),
            Err(err)    => { report(&err); false }
        }
    }

    ///
    /// Sets a grayscale buffer as the target of this renderer
    ///
    pub fn bind_gray_target(&mut self, buffer: &'a mut [u8], stride: usize, width: usize, height: usize) -> bool {
        match Surface::from_gray(buffer, stride, width, height) {
            Ok(surface) => self.bind_surface(surface),
            Err(err)    => { report(&err); false }
        }
    }

    fn bind_surface(&mut self, surface: Surface<'a>) -> bool {
        if !self.layers.is_empty() {
            warn!("Render target can't be changed while composite layers are active");
            return false;
        }

        debug!("Bound {}x{} {:?} render target", surface.width(), surface.height(), surface.color_space());

        self.main           = Some(TargetLevel::new(surface));
        self.shape_scratch  = None;
        self.spare_surfaces.clear();

        true
    }

    ///
    /// The colour space of the bound render target
    ///
    pub fn target_color_space(&self) -> Option<ColorSpace> {
        self.main.as_ref().map(|main| main.surface.color_space())
    }

    ///
    /// Information about the bound render target
    ///
    fn target_info(&self) -> Result<TargetInfo, RasterError> {
        let surface = &self.main.as_ref().ok_or(RasterError::NoTarget)?.surface;

        Ok(TargetInfo {
            width:          surface.width(),
            height:         surface.height(),
            color_space:    surface.color_space(),
        })
    }

    ///
    /// Retrieves a live task
    ///
    fn task(&self, handle: TaskHandle) -> Result<Arc<RasterTask>, RasterError> {
        self.registry.get(handle).cloned().ok_or(RasterError::UnknownTask)
    }

    ///
    /// Returns the existing task for a drawable, or creates a new one
    ///
    fn task_for(&mut self, existing: Option<TaskHandle>, target: TargetInfo, create_kind: impl FnOnce() -> TaskKind) -> Result<(TaskHandle, Arc<RasterTask>), RasterError> {
        match existing {
            Some(handle)    => Ok((handle, self.task(handle)?)),
            None            => {
                let task    = Arc::new(RasterTask::new(TaskSettings::new(target), create_kind()));
                let handle  = self.registry.allocate(Arc::clone(&task));

                Ok((handle, task))
            }
        }
    }

    ///
    /// Waits for the sources of a set of composite entries and collects the coverage of the clip paths
    ///
    fn resolve_composites(&self, composites: &[CompositeEntry]) -> Result<SmallVec<[Coverage; 2]>, RasterError> {
        let mut clips = smallvec![];

        for entry in composites.iter() {
            let source = self.task(entry.source)?;
            source.done();

            if entry.method == CompositeMethod::ClipPath {
                clips.push(source.job().clip_coverage());
            }
        }

        Ok(clips)
    }

    ///
    /// Updates the settings of a task and queues it to be prepared
    ///
    fn submit(&mut self, task: Arc<RasterTask>, target: TargetInfo, transform: Option<Transform>, opacity: u8, composites: &[CompositeEntry], flags: UpdateFlags, update_kind: impl FnOnce(&mut TaskKind) -> Result<(), RasterError>) -> Result<(), RasterError> {
        // Tasks used as clips or masks have to be ready before this one starts
        let clips = self.resolve_composites(composites)?;

        {
            let mut job = task.job();
            update_kind(&mut job.kind)?;

            job.settings = TaskSettings {
                target:     target,
                transform:  transform,
                opacity:    opacity,
                flags:      flags,
                composites: composites.iter().copied().collect(),
                clips:      clips,
            };
        }

        task.set_pending();
        self.frame_tasks.push(Arc::clone(&task));
        self.engine.scheduler().submit(task);

        Ok(())
    }

    ///
    /// Prepares a shape to be rendered, returning the handle of the task that prepares it
    ///
    /// `existing` is the handle returned the last time this shape was prepared, and `flags` indicates what has changed
    /// since then. If nothing has changed, the existing task is returned without any further work.
    ///
    pub fn prepare_shape(&mut self, source: Arc<dyn ShapeSource>, existing: Option<TaskHandle>, transform: Option<Transform>, opacity: u8, composites: &[CompositeEntry], flags: UpdateFlags) -> Option<TaskHandle> {
        let result = self.target_info().and_then(|target| {
            let shape_source        = Arc::clone(&source);
            let (handle, task)      = self.task_for(existing, target, move || TaskKind::Shape(ShapeTask::new(shape_source)))?;

            if flags.is_empty() {
                return Ok(handle);
            }

            // Finish any earlier preparation before changing the task
            task.done();

            let submitted = self.submit(task, target, transform, opacity, composites, flags, move |kind| {
                match kind {
                    TaskKind::Shape(shape)  => { shape.set_source(source); Ok(()) }
                    _                       => Err(RasterError::TaskKindMismatch),
                }
            });

            // Tasks created by a failed call are never handed out, so they're released straight away
            if let (Err(_), None) = (&submitted, existing) {
                self.registry.release(handle);
            }

            submitted.map(|_| handle)
        });

        match result {
            Ok(handle)  => Some(handle),
            Err(err)    => { report(&err); None }
        }
    }

    ///
    /// Prepares an image to be rendered, returning the handle of the task that prepares it
    ///
    /// `pixel_override` supplies pixels to use in place of the pixels from `source`
    ///
    pub fn prepare_image(&mut self, source: Arc<Pixmap>, existing: Option<TaskHandle>, pixel_override: Option<Arc<Pixmap>>, transform: Option<Transform>, opacity: u8, composites: &[CompositeEntry], flags: UpdateFlags) -> Option<TaskHandle> {
        let result = self.target_info().and_then(|target| {
            let image_source        = Arc::clone(&source);
            let image_override      = pixel_override.clone();
            let (handle, task)      = self.task_for(existing, target, move || TaskKind::Image(ImageTask::new(image_source, image_override)))?;

            if flags.is_empty() {
                return Ok(handle);
            }

            task.done();

            let submitted = self.submit(task, target, transform, opacity, composites, flags, move |kind| {
                match kind {
                    TaskKind::Image(image)  => { image.set_source(source, pixel_override); Ok(()) }
                    _                       => Err(RasterError::TaskKindMismatch),
                }
            });

            // Tasks created by a failed call are never handed out, so they're released straight away
            if let (Err(_), None) = (&submitted, existing) {
                self.registry.release(handle);
            }

            submitted.map(|_| handle)
        });

        match result {
            Ok(handle)  => Some(handle),
            Err(err)    => { report(&err); None }
        }
    }

    ///
    /// The size and colour space of the level that's being drawn to
    ///
    fn active_info(&self) -> Result<TargetInfo, RasterError> {
        let surface = match self.layers.last() {
            Some(layer) => &layer.level.surface,
            None        => &self.main.as_ref().ok_or(RasterError::NoTarget)?.surface,
        };

        Ok(TargetInfo {
            width:          surface.width(),
            height:         surface.height(),
            color_space:    surface.color_space(),
        })
    }

    ///
    /// Draws a region of a surface onto the level that's being drawn to
    ///
    fn blit_active(&mut self, source: &Surface, region: BBox, opacity: u8) -> Result<(), RasterError> {
        match self.layers.last_mut() {
            Some(layer) => blit_level(&mut layer.level, source, region, opacity),
            None        => blit_level(self.main.as_mut().ok_or(RasterError::NoTarget)?, source, region, opacity),
        }
    }

    ///
    /// Draws a shape with both a fill and a stroke onto the scratch surface, then blends the result onto the active level
    ///
    fn render_composed_shape(&mut self, shape: &ShapeTask, opacity: u8) -> Result<(), RasterError> {
        let bbox = match shape.bbox() {
            Some(bbox)  => bbox,
            None        => { return Ok(()); }
        };

        let info    = self.active_info()?;
        let region  = bbox.expand((shape.stroke_width() / 2.0).ceil() as i32).clip_to(info.width, info.height);
        if region.is_empty() {
            return Ok(());
        }

        // The scratch surface is kept for the rest of the frame
        let mut scratch = match self.shape_scratch.take() {
            Some(scratch) if scratch.width() == info.width && scratch.height() == info.height && scratch.color_space() == info.color_space => scratch,
            _ => Surface::new(info.width, info.height, info.color_space),
        };

        scratch.clear_region(&region);

        let drawn   = draw_shape(&mut RasterTarget::new(&mut scratch), shape, 255);
        let result  = drawn.and_then(|_| self.blit_active(&scratch, region, opacity));

        self.shape_scratch = Some(scratch);
        result
    }

    ///
    /// Draws a shape directly onto the active level
    ///
    fn render_direct_shape(&mut self, shape: &ShapeTask, opacity: u8) -> Result<(), RasterError> {
        match self.layers.last_mut() {
            Some(layer) => draw_shape(&mut layer.level.target(), shape, opacity),
            None        => draw_shape(&mut self.main.as_mut().ok_or(RasterError::NoTarget)?.target(), shape, opacity),
        }
    }

    ///
    /// Draws a prepared shape onto the active target
    ///
    pub fn render_shape(&mut self, handle: TaskHandle) -> bool {
        let task = match self.task(handle) {
            Ok(task)    => task,
            Err(err)    => { report(&err); return false; }
        };

        task.done();

        let job     = task.job();
        let opacity = job.settings.opacity;
        let shape   = match &job.kind {
            TaskKind::Shape(shape)  => shape,
            _                       => { report(&RasterError::TaskKindMismatch); return false; }
        };

        if opacity == 0 {
            return true;
        }

        if shape.compose() {
            succeeded(self.render_composed_shape(shape, opacity))
        } else {
            succeeded(self.render_direct_shape(shape, opacity))
        }
    }

    ///
    /// Draws a prepared image onto the active target
    ///
    pub fn render_image(&mut self, handle: TaskHandle) -> bool {
        let task = match self.task(handle) {
            Ok(task)    => task,
            Err(err)    => { report(&err); return false; }
        };

        task.done();

        let job     = task.job();
        let opacity = job.settings.opacity;
        let image   = match &job.kind {
            TaskKind::Image(image)  => image,
            _                       => { report(&RasterError::TaskKindMismatch); return false; }
        };

        if opacity == 0 {
            return true;
        }

        let result = match self.layers.last_mut() {
            Some(layer) => draw_image(&mut layer.level.target(), image, opacity),
            None        => match self.main.as_mut() {
                Some(main)  => draw_image(&mut main.target(), image, opacity),
                None        => Err(RasterError::NoTarget),
            }
        };

        succeeded(result)
    }

    ///
    /// Releases a task and everything it prepared
    ///
    /// Disposing a task that has already been disposed does nothing.
    ///
    pub fn dispose_task(&mut self, handle: TaskHandle) -> bool {
        match self.registry.release(handle) {
            Some(task) => {
                task.dispose();
                self.frame_tasks.retain(|frame_task| !Arc::ptr_eq(frame_task, &task));
            }

            None => {
                debug!("Task {:?} was already disposed", handle);
            }
        }

        true
    }

    ///
    /// The lifecycle phase of a task
    ///
    pub fn task_phase(&self, handle: TaskHandle) -> Option<TaskPhase> {
        self.registry.get(handle).map(|task| task.phase())
    }

    ///
    /// The region of the target that rendering a task will affect (waits for the task to finish preparing)
    ///
    pub fn bounds(&self, handle: TaskHandle) -> Option<BBox> {
        let task = self.registry.get(handle)?;
        task.done();

        let job = task.job();
        job.bbox()
    }

    ///
    /// The number of tasks owned by this renderer
    ///
    #[inline]
    pub fn task_count(&self) -> usize {
        self.registry.len()
    }

    ///
    /// Starts a frame by clearing the render target
    ///
    pub fn pre_render(&mut self) -> bool {
        match self.main.as_mut() {
            Some(main)  => { main.surface.clear(); true }
            None        => { report(&RasterError::NoTarget); false }
        }
    }

    ///
    /// Finishes a frame
    ///
    /// Targets bound with a straight colour space are converted from premultiplied alpha here.
    ///
    pub fn post_render(&mut self) -> bool {
        if !self.layers.is_empty() {
            warn!("Frame finished with {} composite layers still active", self.layers.len());
        }

        self.frame_tasks.clear();
        self.shape_scratch = None;

        match self.main.as_mut() {
            Some(main) if main.surface.color_space().is_straight() => succeeded(main.surface.unpremultiply()),
            Some(_)                                                 => true,
            None                                                    => { report(&RasterError::NoTarget); false }
        }
    }

    ///
    /// Waits for every task submitted this frame to finish preparing
    ///
    pub fn sync(&self) -> bool {
        for task in self.frame_tasks.iter() {
            task.done();
        }

        true
    }

    ///
    /// Waits for the tasks submitted this frame, then forgets them
    ///
    pub fn clear(&mut self) -> bool {
        self.sync();
        self.frame_tasks.clear();

        true
    }

    ///
    /// Starts drawing to a new composite layer, the same size as the current target
    ///
    /// Only `region` is cleared: drawing outside of it will produce undefined results when the layer is composited.
    ///
    pub fn begin_composite(&mut self, region: BBox) -> Option<CompositeId> {
        let info = match self.active_info() {
            Ok(info)    => info,
            Err(err)    => { report(&err); return None; }
        };

        let region      = region.clip_to(info.width, info.height);
        let spare       = self.spare_surfaces.iter().position(|surface| surface.width() == info.width && surface.height() == info.height && surface.color_space() == info.color_space);
        let mut surface = match spare {
            Some(idx)   => self.spare_surfaces.swap_remove(idx),
            None        => Surface::new(info.width, info.height, info.color_space),
        };

        surface.clear_region(&region);

        let id = CompositeId(self.next_composite);
        self.next_composite += 1;
        self.layers.push(CompositeLayer { id, region, level: TargetLevel::new(surface) });

        debug!("Begin composite {:?} over {:?}", id, region);

        Some(id)
    }

    ///
    /// Removes the topmost composite layer if it has a particular ID
    ///
    fn pop_layer(&mut self, id: CompositeId) -> Result<CompositeLayer, RasterError> {
        match self.layers.last() {
            Some(layer) if layer.id == id   => { }
            _                               => { return Err(RasterError::CompositeMismatch(id.0)); }
        }

        self.layers.pop().ok_or(RasterError::CompositeMismatch(id.0))
    }

    ///
    /// Finishes drawing to a composite layer, and blends it onto the layer below at an opacity
    ///
    pub fn end_composite(&mut self, id: CompositeId, opacity: u8) -> bool {
        let mut layer = match self.pop_layer(id) {
            Ok(layer)   => layer,
            Err(err)    => { report(&err); return false; }
        };

        let mut released    = layer.level.detach_all();
        let surface         = layer.level.surface;
        let result          = self.blit_active(&surface, layer.region, opacity);

        released.push(surface);
        self.spare_surfaces.extend(released);

        debug!("End composite {:?}", id);

        succeeded(result)
    }

    ///
    /// Finishes drawing to a composite layer, and uses it as the compositor for the layer below
    ///
    /// Everything drawn until the next call to `end_masking()` is clipped, masked or matted by the layer.
    ///
    pub fn begin_masking(&mut self, id: CompositeId, method: CompositeMethod) -> bool {
        if !method.is_compositing() {
            report(&RasterError::InvalidCompositeMethod(method));
            return false;
        }

        let mut layer = match self.pop_layer(id) {
            Ok(layer)   => layer,
            Err(err)    => { report(&err); return false; }
        };

        self.spare_surfaces.extend(layer.level.detach_all());

        let compositor = match Compositor::new(layer.level.surface, method, layer.region) {
            Ok(compositor)  => compositor,
            Err(err)        => { report(&err); return false; }
        };

        match self.layers.last_mut() {
            Some(below)                 => below.level.attach_compositor(compositor),
            None                        => match self.main.as_mut() {
                Some(main)  => main.attach_compositor(compositor),
                None        => { report(&RasterError::NoTarget); return false; }
            }
        }

        debug!("Masking with {:?} from composite {:?}", method, id);

        true
    }

    ///
    /// Stops using the compositor set by the last call to `begin_masking()`
    ///
    pub fn end_masking(&mut self) -> bool {
        let removed = match self.layers.last_mut() {
            Some(layer) => layer.level.restore_compositor(),
            None        => self.main.as_mut().and_then(|main| main.restore_compositor()),
        };

        match removed {
            Some(compositor) => {
                self.spare_surfaces.push(compositor.into_image());
                true
            }

            None => {
                warn!("end_masking() called with no compositor attached");
                false
            }
        }
    }
}

impl<'a> Drop for SwRenderer<'a> {
    fn drop(&mut self) {
        self.clear();

        // Workers may still be preparing tasks that weren't part of this frame
        for task in self.registry.tasks() {
            task.done();
        }
    }
}
