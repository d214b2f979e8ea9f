use super::engine_config::*;
use crate::error::*;
use crate::renderer::*;
use crate::task::*;

use tracing::{debug};

use std::sync::*;

///
/// The state shared by an engine and the renderers created from it
///
pub (crate) struct EngineInner {
    scheduler:  TaskScheduler,
    config:     EngineConfig,
}

impl EngineInner {
    #[inline]
    pub (crate) fn scheduler(&self) -> &TaskScheduler {
        &self.scheduler
    }
}

impl Drop for EngineInner {
    fn drop(&mut self) {
        debug!("Raster engine stopped");
    }
}

///
/// A raster engine owns the worker threads used to prepare drawables, and creates renderers
///
/// The workers keep running until the engine and every renderer created from it has been dropped
///
pub struct RasterEngine {
    inner: Arc<EngineInner>,
}

impl RasterEngine {
    ///
    /// Starts a raster engine
    ///
    pub fn init(config: EngineConfig) -> Result<RasterEngine, RasterError> {
        let scheduler = TaskScheduler::new(config.threads, &config.thread_name_prefix, config.stack_size)?;

        Ok(RasterEngine {
            inner: Arc::new(EngineInner { scheduler, config })
        })
    }

    ///
    /// Starts a raster engine with a particular number of worker threads
    ///
    pub fn init_with_threads(threads: usize) -> Result<RasterEngine, RasterError> {
        RasterEngine::init(EngineConfig::default().with_threads(threads))
    }

    ///
    /// Creates a renderer that uses this engine's workers
    ///
    pub fn renderer<'a>(&self) -> SwRenderer<'a> {
        SwRenderer::new(Arc::clone(&self.inner))
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.inner.config
    }

    ///
    /// The number of worker threads in use
    ///
    #[inline]
    pub fn threads(&self) -> usize {
        self.inner.scheduler.threads()
    }

    ///
    /// The number of renderers that are still using this engine
    ///
    #[inline]
    pub fn live_renderers(&self) -> usize {
        Arc::strong_count(&self.inner) - 1
    }

    ///
    /// Releases this handle to the engine, returning true if the workers were stopped
    ///
    /// The workers stay running while there are live renderers.
    ///
    pub fn terminate(self) -> bool {
        Arc::strong_count(&self.inner) == 1
    }
}
