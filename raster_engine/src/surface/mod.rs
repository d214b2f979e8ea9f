mod pixel_storage;
mod surface;
mod color_conversion;
mod pixmap;
mod image_view;
mod png_export;

pub use pixel_storage::*;
pub use surface::*;
pub use color_conversion::*;
pub use pixmap::*;
pub use image_view::*;
pub use png_export::*;
