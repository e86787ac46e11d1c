pub mod geometry;
pub mod gpu_structures;
pub mod label_renderer;
pub mod overlay_world;
pub mod webgpu_renderer;

pub use gpu_structures::OverlayVertex;
pub use label_renderer::{
    LabelRenderer, clear_global_label_renderer, set_global_label_renderer,
    with_global_label_renderer,
};
pub use overlay_world::{
    LinePrimitive, LineStyle, MarkerPrimitive, OverlayWorld, OwnerTag, PreviewTag,
};
pub use webgpu_renderer::{
    WebGpuRenderer, clear_global_renderer, set_global_renderer, with_global_renderer,
};
