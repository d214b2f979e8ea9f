mod engine_config;
mod raster_engine;

pub use engine_config::*;
pub use raster_engine::*;
pub (crate) use raster_engine::EngineInner;
