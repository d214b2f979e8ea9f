use super::image_task::*;
use super::shape_task::*;
use super::task_settings::*;
use super::task_state::*;
use crate::coverage::*;
use crate::error::*;
use crate::geometry::*;

use tracing::{debug, trace, warn};

use std::sync::*;
use std::time::{Instant};

///
/// The kind of drawable that a task prepares
///
pub enum TaskKind {
    Shape(ShapeTask),
    Image(ImageTask),
}

///
/// The work carried out by a task: its settings and the data it prepares
///
pub struct TaskJob {
    pub settings:   TaskSettings,
    pub kind:       TaskKind,
}

impl TaskJob {
    ///
    /// Prepares the drawable using the current settings
    ///
    pub fn prepare(&mut self) -> Result<(), RasterError> {
        match &mut self.kind {
            TaskKind::Shape(shape) => shape.prepare(&self.settings),
            TaskKind::Image(image) => image.prepare(&self.settings),
        }
    }

    ///
    /// The region that rendering this task will affect
    ///
    pub fn bbox(&self) -> Option<BBox> {
        match &self.kind {
            TaskKind::Shape(shape) => shape.bbox(),
            TaskKind::Image(image) => image.bbox(),
        }
    }

    ///
    /// The coverage of this drawable when it's used as a clip path
    ///
    pub fn clip_coverage(&self) -> Coverage {
        match &self.kind {
            TaskKind::Shape(shape) => shape.clip_coverage(),
            TaskKind::Image(image) => image.clip_coverage(),
        }
    }

    fn dispose(&mut self) {
        self.settings.clips.clear();

        match &mut self.kind {
            TaskKind::Shape(shape) => shape.dispose(),
            TaskKind::Image(image) => image.dispose(),
        }
    }
}

///
/// A drawable that's prepared for rendering on a worker thread
///
/// Anything that reads the prepared data must call `done()` first
///
pub struct RasterTask {
    state:  TaskState,
    job:    Mutex<TaskJob>,
}

impl RasterTask {
    ///
    /// Creates a new idle task
    ///
    pub fn new(settings: TaskSettings, kind: TaskKind) -> RasterTask {
        RasterTask {
            state:  TaskState::new(),
            job:    Mutex::new(TaskJob { settings, kind }),
        }
    }

    #[inline]
    pub fn phase(&self) -> TaskPhase {
        self.state.phase()
    }

    ///
    /// Waits for any worker that's preparing this task to finish
    ///
    #[inline]
    pub fn done(&self) -> TaskPhase {
        self.state.done()
    }

    ///
    /// Locks the job for this task
    ///
    #[inline]
    pub fn job(&self) -> MutexGuard<'_, TaskJob> {
        self.job.lock().unwrap_or_else(PoisonError::into_inner)
    }

    ///
    /// Marks this task as waiting for a worker
    ///
    #[inline]
    pub (crate) fn set_pending(&self) {
        self.state.set_phase(TaskPhase::Pending);
    }

    ///
    /// Prepares the task (called on a worker thread)
    ///
    pub fn run(&self) {
        let _running    = self.state.running();
        let start       = Instant::now();
        let mut job     = self.job();

        if let Err(err) = job.prepare() {
            warn!("Drawable could not be prepared: {}", err);
        }

        trace!("Task prepared in {:?}", start.elapsed());
    }

    ///
    /// Releases the buffers held by this task
    ///
    pub fn dispose(&self) {
        self.done();
        self.job().dispose();
        self.state.set_phase(TaskPhase::Disposed);

        debug!("Task disposed");
    }
}
