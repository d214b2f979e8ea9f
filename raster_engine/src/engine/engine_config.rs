///
/// Settings used when starting a raster engine
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of worker threads used to prepare drawables (0 to prepare them on the rendering thread)
    pub threads:            usize,

    /// Worker threads are named `<prefix>-<n>`
    pub thread_name_prefix: String,

    /// Stack size for the worker threads, or `None` for the default
    pub stack_size:         Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            // One core is left for the thread doing the compositing
            threads:            num_cpus::get().max(2) - 1,
            thread_name_prefix: "raster-worker".to_string(),
            stack_size:         None,
        }
    }
}

impl EngineConfig {
    #[inline]
    pub fn with_threads(self, threads: usize) -> EngineConfig {
        EngineConfig { threads, ..self }
    }

    #[inline]
    pub fn with_thread_name_prefix(self, prefix: impl Into<String>) -> EngineConfig {
        EngineConfig { thread_name_prefix: prefix.into(), ..self }
    }

    #[inline]
    pub fn with_stack_size(self, stack_size: usize) -> EngineConfig {
        EngineConfig { stack_size: Some(stack_size), ..self }
    }
}
