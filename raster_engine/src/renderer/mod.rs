mod target_level;
mod sw_renderer;

pub use target_level::CompositeId;
pub use sw_renderer::*;
