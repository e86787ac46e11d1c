use crate::domain::chart::Viewport;
use crate::domain::errors::PresentationError;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::rendering::overlay_world::{MarkerPrimitive, OverlayWorld};
use gloo::utils::document;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Pixel offset between a marker and its label text.
const LABEL_OFFSET_PX: f64 = 8.0;

thread_local! {
    static GLOBAL_LABELS: std::cell::RefCell<Option<std::rc::Rc<LabelRenderer>>> =
        const { std::cell::RefCell::new(None) };
}

/// Store the global label renderer instance
pub fn set_global_label_renderer(renderer: std::rc::Rc<LabelRenderer>) {
    GLOBAL_LABELS.with(|cell| {
        *cell.borrow_mut() = Some(renderer);
    });
}

/// Drop the global label renderer, wiping its canvas first
pub fn clear_global_label_renderer() {
    GLOBAL_LABELS.with(|cell| {
        if let Some(labels) = cell.borrow_mut().take() {
            labels.clear();
        }
    });
}

/// Run against the global label renderer when one is installed
pub fn with_global_label_renderer<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&LabelRenderer) -> R,
{
    GLOBAL_LABELS.with(|cell| cell.borrow().as_ref().map(|rc| f(rc)))
}

/// Text pass for pattern labels, drawn on a transparent 2D canvas stacked
/// above the WebGPU surface. WebGPU draws the geometry; this draws the A-X
/// letters next to each marker, previews included.
pub struct LabelRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl LabelRenderer {
    pub fn new(canvas_id: &str) -> Result<Self, JsValue> {
        let canvas = document()
            .get_element_by_id(canvas_id)
            .ok_or_else(|| {
                JsValue::from_str(&PresentationError::CanvasNotFound(canvas_id.to_string()).to_string())
            })?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| {
                JsValue::from_str(&PresentationError::NotACanvas(canvas_id.to_string()).to_string())
            })?;

        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("2d context has unexpected type"))?;

        Ok(Self { canvas, context })
    }

    pub fn resize(&self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }
    }

    /// Redraw every marker label for the current frame. The canvas is wiped
    /// first, so cleared primitives leave no text behind.
    pub fn render(&self, viewport: &Viewport, overlay: &OverlayWorld) {
        self.clear();
        if !viewport.is_renderable() {
            return;
        }

        self.context.set_font("12px 'SF Pro Display', sans-serif");
        self.context.set_fill_style_str("#e8e6f0");

        for (_, marker) in overlay.world.query::<&MarkerPrimitive>().iter() {
            self.draw_marker_label(viewport, marker);
        }
    }

    fn draw_marker_label(&self, viewport: &Viewport, marker: &MarkerPrimitive) {
        let x = viewport.time_to_x(marker.point.time.as_f64()) as f64 + LABEL_OFFSET_PX;
        let y = viewport.price_to_y(marker.point.value.value()) as f64 - LABEL_OFFSET_PX;
        if let Err(e) = self.context.fill_text(marker.label.as_ref(), x, y) {
            get_logger().warn(
                LogComponent::Infrastructure("LabelRenderer"),
                &format!("label draw failed: {e:?}"),
            );
        }
    }

    pub fn clear(&self) {
        self.context.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }
}
