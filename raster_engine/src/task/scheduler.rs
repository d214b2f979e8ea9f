use super::raster_task::*;
use crate::error::*;

use tracing::{debug};

use std::sync::*;

///
/// Runs task preparation on a pool of worker threads
///
/// A scheduler with no threads runs every task on the thread that submits it
///
pub struct TaskScheduler {
    #[cfg(feature="multithreading")]
    pool:       Option<rayon::ThreadPool>,

    threads:    usize,
}

#[cfg(feature="multithreading")]
impl TaskScheduler {
    ///
    /// Creates a scheduler with a fixed number of worker threads
    ///
    pub fn new(threads: usize, thread_name_prefix: &str, stack_size: Option<usize>) -> Result<TaskScheduler, RasterError> {
        if threads == 0 {
            return Ok(TaskScheduler { pool: None, threads: 0 });
        }

        let prefix      = thread_name_prefix.to_string();
        let mut builder = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(move |idx| format!("{}-{}", prefix, idx));

        if let Some(stack_size) = stack_size {
            builder = builder.stack_size(stack_size);
        }

        let pool = builder.build().map_err(|err| RasterError::PoolBuild(err.to_string()))?;
        debug!("Started {} raster worker threads", threads);

        Ok(TaskScheduler { pool: Some(pool), threads })
    }

    ///
    /// Queues a task to be prepared
    ///
    pub fn submit(&self, task: Arc<RasterTask>) {
        match &self.pool {
            Some(pool)  => pool.spawn(move || task.run()),
            None        => task.run(),
        }
    }
}

#[cfg(not(feature="multithreading"))]
impl TaskScheduler {
    ///
    /// Creates a scheduler (without the `multithreading` feature, tasks always run on the submitting thread)
    ///
    pub fn new(threads: usize, _thread_name_prefix: &str, _stack_size: Option<usize>) -> Result<TaskScheduler, RasterError> {
        if threads > 0 {
            debug!("Worker threads requested, but the multithreading feature is disabled");
        }

        Ok(TaskScheduler { threads: 0 })
    }

    ///
    /// Prepares a task immediately
    ///
    pub fn submit(&self, task: Arc<RasterTask>) {
        task.run();
    }
}

impl TaskScheduler {
    ///
    /// The number of worker threads (0 if tasks run on the submitting thread)
    ///
    #[inline]
    pub fn threads(&self) -> usize {
        self.threads
    }
}
