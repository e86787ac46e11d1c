#[cfg(target_arch = "wasm32")]
use crate::domain::errors::PresentationError;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::rendering::gpu_structures::OverlayVertex;
#[cfg(target_arch = "wasm32")]
use gloo::utils::document;
use std::cell::RefCell;
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use web_sys::HtmlCanvasElement;

/// Capacity of the vertex buffer; one frame never comes close.
const MAX_VERTICES: usize = 100_000;

thread_local! {
    static GLOBAL_RENDERER: RefCell<Option<Rc<RefCell<WebGpuRenderer>>>> = const { RefCell::new(None) };
}

/// Store the global renderer instance
pub fn set_global_renderer(renderer: Rc<RefCell<WebGpuRenderer>>) {
    GLOBAL_RENDERER.with(|cell| {
        *cell.borrow_mut() = Some(renderer);
    });
}

/// Drop the global renderer (unmount teardown)
pub fn clear_global_renderer() {
    GLOBAL_RENDERER.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

/// Obtain a mutable reference to the global renderer
pub fn with_global_renderer<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut WebGpuRenderer) -> R,
{
    GLOBAL_RENDERER.with(|cell| {
        let opt = cell.borrow_mut();
        opt.as_ref().map(|rc| f(&mut rc.borrow_mut()))
    })
}

/// WebGPU renderer for the chart surface and its overlays.
///
/// Owns the canvas surface and a single pipeline; every frame is a fresh
/// upload of the CPU-built vertex list, so tearing down primitives is purely
/// a matter of not submitting them again.
pub struct WebGpuRenderer {
    _canvas_id: String,
    width: u32,
    height: u32,

    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
}

impl WebGpuRenderer {
    pub async fn is_webgpu_supported() -> bool {
        if let Some(window) = web_sys::window() {
            let navigator = window.navigator();
            js_sys::Reflect::has(&navigator, &"gpu".into()).unwrap_or(false)
        } else {
            false
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub async fn new(_canvas_id: &str, _width: u32, _height: u32) -> Result<Self, JsValue> {
        // The canvas surface only exists in the browser; native builds keep
        // the type for the rest of the crate but can never construct it.
        Err(JsValue::from_str("WebGPU canvas rendering requires the wasm32 target"))
    }

    #[cfg(target_arch = "wasm32")]
    pub async fn new(canvas_id: &str, width: u32, height: u32) -> Result<Self, JsValue> {
        let canvas = document()
            .get_element_by_id(canvas_id)
            .ok_or_else(|| {
                JsValue::from_str(&PresentationError::CanvasNotFound(canvas_id.to_string()).to_string())
            })?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| {
                JsValue::from_str(&PresentationError::NotACanvas(canvas_id.to_string()).to_string())
            })?;

        canvas.set_width(width);
        canvas.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&format!("Failed to create surface: {}", e)))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&format!("Failed to find adapter: {:?}", e)))?;

        let supported_limits = adapter.limits();

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: supported_limits,
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(|e| JsValue::from_str(&format!("Failed to create device: {:?}", e)))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Overlay Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../../overlay_shader.wgsl").into()),
        });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Render Pipeline Layout"),
                bind_group_layouts: &[],
                push_constant_ranges: &[],
            });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Render Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[OverlayVertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Vertex Buffer"),
            size: (std::mem::size_of::<OverlayVertex>() * MAX_VERTICES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        get_logger().info(
            LogComponent::Infrastructure("WebGpuRenderer"),
            &format!("✅ WebGPU renderer ready on '{canvas_id}' ({width}x{height})"),
        );

        Ok(Self {
            _canvas_id: canvas.id(),
            width,
            height,
            surface,
            device,
            queue,
            config,
            render_pipeline,
            vertex_buffer,
        })
    }

    /// Reconfigure the surface for a new container size. Collapsed containers
    /// are ignored; rendering stays suspended until a valid size arrives.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.width = new_width;
            self.height = new_height;
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Upload one frame's vertices and draw them.
    pub fn render(&mut self, vertices: &[OverlayVertex]) -> Result<(), JsValue> {
        let count = vertices.len().min(MAX_VERTICES);
        if count < vertices.len() {
            get_logger().warn(
                LogComponent::Infrastructure("WebGpuRenderer"),
                &format!("frame truncated: {} of {} vertices", count, vertices.len()),
            );
        }
        self.queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices[..count]));

        let output = self
            .surface
            .get_current_texture()
            .map_err(|e| JsValue::from_str(&format!("Failed to acquire frame: {:?}", e)))?;
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("Frame Encoder") });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Chart Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.055,
                            g: 0.067,
                            b: 0.09,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.draw(0..count as u32, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
