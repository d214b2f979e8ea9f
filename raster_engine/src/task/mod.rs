//!
//! Drawables are prepared for rendering by tasks, which run on a pool of worker threads. The renderer waits for a
//! task to finish before it reads anything the task prepared.
//!

mod update_flags;
mod task_state;
mod task_settings;
mod task_registry;
mod composite_entry;
mod shape_task;
mod image_task;
mod raster_task;
mod scheduler;

pub use update_flags::*;
pub use task_state::*;
pub use task_settings::*;
pub use task_registry::*;
pub use composite_entry::*;
pub use shape_task::*;
pub use image_task::*;
pub use raster_task::*;
pub use scheduler::*;
