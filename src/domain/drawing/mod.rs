pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{Drawing, DrawingSet, LabeledPoint, TEN_YEARS_SECS};
pub use services::{ClickOutcome, PointBuffer, PreviewShape, next_tool_mode, preview_shape};
pub use value_objects::{DrawingId, PatternLabel, Point, ToolMode};
