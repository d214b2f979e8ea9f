mod gradient;
mod color_table;
mod fill_table;

pub use gradient::*;
pub use color_table::*;
pub use fill_table::*;
