use bytemuck::{Pod, Zeroable};

/// GPU representation of one overlay vertex for the vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct OverlayVertex {
    /// X position in clip space
    pub position_x: f32,
    /// Y position in clip space
    pub position_y: f32,
    /// Element type: 0 = candle body, 1 = wick, 2 = overlay line, 3 = preview line, 4 = marker
    pub element_type: f32,
    /// Color selector: for bodies 0 = bearish / 1 = bullish, otherwise unused
    pub color_type: f32,
}

impl OverlayVertex {
    /// Vertex for a candle body quad
    pub fn body_vertex(x: f32, y: f32, is_bullish: bool) -> Self {
        Self {
            position_x: x,
            position_y: y,
            element_type: 0.0,
            color_type: if is_bullish { 1.0 } else { 0.0 },
        }
    }

    /// Vertex for a candle wick quad
    pub fn wick_vertex(x: f32, y: f32) -> Self {
        Self { position_x: x, position_y: y, element_type: 1.0, color_type: 0.5 }
    }

    /// Vertex for a finalized overlay line
    pub fn overlay_line_vertex(x: f32, y: f32) -> Self {
        Self { position_x: x, position_y: y, element_type: 2.0, color_type: 0.0 }
    }

    /// Vertex for a dashed preview line
    pub fn preview_line_vertex(x: f32, y: f32) -> Self {
        Self { position_x: x, position_y: y, element_type: 3.0, color_type: 0.0 }
    }

    /// Vertex for a pattern point marker
    pub fn marker_vertex(x: f32, y: f32) -> Self {
        Self { position_x: x, position_y: y, element_type: 4.0, color_type: 0.0 }
    }

    /// Vertex buffer descriptor for wgpu
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<OverlayVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position_x
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32,
                },
                // position_y
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<f32>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32,
                },
                // element_type
                wgpu::VertexAttribute {
                    offset: (2 * std::mem::size_of::<f32>()) as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32,
                },
                // color_type
                wgpu::VertexAttribute {
                    offset: (3 * std::mem::size_of::<f32>()) as wgpu::BufferAddress,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32,
                },
            ],
        }
    }
}
