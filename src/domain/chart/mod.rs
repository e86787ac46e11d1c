pub mod entities;
pub mod value_objects;

pub use entities::{ChartSurface, DEFAULT_MAX_BARS};
pub use value_objects::Viewport;
