use std::rc::Rc;
use std::str::FromStr;

use js_sys::Promise;
use leptos::SignalSet;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};

use crate::application::{
    ChartSession, install_global_session, take_global_session, with_session, with_session_mut,
};
use crate::domain::drawing::{Point, ToolMode};
use crate::domain::errors::{ApplicationError, DomainError, EngineError};
use crate::domain::events::PointerEvent;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{Price, Symbol, Timestamp};
use crate::global_state::globals;
use crate::infrastructure::rendering::{
    LabelRenderer, WebGpuRenderer, clear_global_label_renderer, clear_global_renderer, geometry,
    set_global_label_renderer, set_global_renderer, with_global_label_renderer,
    with_global_renderer,
};
use crate::infrastructure::websocket::{FeedSubscription, MarketStreamClient};

/// JS-facing facade over the annotation chart engine.
///
/// Thin bridge only: pixel coordinates are translated through the session's
/// coordinate mapper, every other decision lives in the application/domain
/// layers.
#[wasm_bindgen]
pub struct AnnotationChartApi {
    canvas_id: String,
    label_canvas_id: String,
    width: u32,
    height: u32,
    subscription: Option<FeedSubscription>,
}

#[wasm_bindgen]
impl AnnotationChartApi {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: String, label_canvas_id: String) -> Self {
        Self { canvas_id, label_canvas_id, width: 800, height: 450, subscription: None }
    }

    /// Start a chart session: create the renderers, install the session and
    /// subscribe to the symbol's stream.
    #[wasm_bindgen]
    pub fn start(&mut self, symbol: String, width: u32, height: u32) -> Promise {
        self.width = width;
        self.height = height;

        let symbol = Symbol::from(symbol.as_str());
        globals().symbol.set(symbol.value().to_string());
        install_global_session(ChartSession::new(symbol.clone(), width, height));

        self.close_subscription();
        let subscription = FeedSubscription::new();
        self.subscription = Some(subscription.clone());

        let canvas_id = self.canvas_id.clone();
        let label_canvas_id = self.label_canvas_id.clone();

        future_to_promise(async move {
            let renderer = WebGpuRenderer::new(&canvas_id, width, height).await?;
            set_global_renderer(Rc::new(std::cell::RefCell::new(renderer)));

            let labels = LabelRenderer::new(&label_canvas_id)?;
            labels.resize(width, height);
            set_global_label_renderer(Rc::new(labels));

            spawn_feed_task(symbol, subscription);
            render_frame();

            Ok(JsValue::from_str("chart_session_started"))
        })
    }

    /// Select a drawing tool by name; unknown names and "none" reset to Idle.
    #[wasm_bindgen]
    pub fn select_tool(&self, tool: &str) {
        let selected = match ToolMode::from_str(tool) {
            Ok(mode) if mode != ToolMode::Idle => Some(mode),
            Ok(_) => None,
            Err(_) => {
                if tool != "none" {
                    get_logger().debug(
                        LogComponent::Presentation("Api"),
                        &DomainError::InvalidTool(tool.to_string()).to_string(),
                    );
                }
                None
            }
        };
        with_session_mut(|session| {
            session.select_tool(selected);
            globals().active_tool.set(session.mode());
        });
        render_frame();
    }

    /// Remove every drawing, buffered click and overlay primitive at once.
    #[wasm_bindgen]
    pub fn clear_all(&self) {
        with_session_mut(|session| {
            session.clear_all();
            globals().active_tool.set(session.mode());
            globals().drawing_count.set(0);
        });
        render_frame();
    }

    /// Propagate a container resize into the coordinate mapper and surfaces.
    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        with_session_mut(|session| session.resize(width, height));
        with_global_renderer(|renderer| renderer.resize(width, height));
        with_global_label_renderer(|labels| labels.resize(width, height));
        render_frame();
    }

    /// Pointer click at canvas pixel coordinates.
    #[wasm_bindgen]
    pub fn on_click(&self, x: f32, y: f32) {
        with_session_mut(|session| {
            if let Some(point) = pixel_to_domain(session, x, y) {
                session.pointer_event(PointerEvent::Click(point));
                globals().drawing_count.set(session.drawings().len());
            }
        });
        render_frame();
    }

    /// Pointer hover at canvas pixel coordinates.
    #[wasm_bindgen]
    pub fn on_hover(&self, x: f32, y: f32) {
        with_session_mut(|session| {
            match pixel_to_domain(session, x, y) {
                Some(point) => session.pointer_event(PointerEvent::Hover(point)),
                // Outside the plotted area the hover sample is invalid and
                // the preview must vanish.
                None => session.pointer_event(PointerEvent::Leave),
            }
        });
        render_frame();
    }

    /// The pointer left the canvas entirely.
    #[wasm_bindgen]
    pub fn on_pointer_leave(&self) {
        with_session_mut(|session| session.pointer_event(PointerEvent::Leave));
        render_frame();
    }

    /// Switch to another symbol: tear the old feed and primitives down, then
    /// subscribe fresh.
    #[wasm_bindgen]
    pub fn set_symbol(&mut self, symbol: String) {
        let symbol = Symbol::from(symbol.as_str());
        get_logger().info(
            LogComponent::Presentation("Api"),
            &format!("symbol change -> {}", symbol.value()),
        );

        self.close_subscription();
        if with_session_mut(|session| session.change_symbol(symbol.clone())).is_none() {
            get_logger().warn(
                LogComponent::Presentation("Api"),
                &EngineError::from(ApplicationError::NoActiveSession).to_string(),
            );
            return;
        }
        globals().symbol.set(symbol.value().to_string());
        globals().current_price.set(0.0);
        globals().candle_count.set(0);
        globals().chart_ready.set(false);
        globals().drawing_count.set(0);
        globals().active_tool.set(ToolMode::Idle);

        let subscription = FeedSubscription::new();
        self.subscription = Some(subscription.clone());
        spawn_feed_task(symbol, subscription);
        render_frame();
    }

    /// Unmount: release the subscription, the session and both renderers.
    #[wasm_bindgen]
    pub fn shutdown(&mut self) {
        self.close_subscription();
        if let Some(mut session) = take_global_session() {
            session.shutdown();
        }
        clear_global_label_renderer();
        clear_global_renderer();
        globals().is_streaming.set(false);
        globals().chart_ready.set(false);
    }

    #[wasm_bindgen]
    pub fn is_ready(&self) -> bool {
        with_session(|session| session.surface().is_ready()).unwrap_or(false)
    }

    #[wasm_bindgen]
    pub fn candle_count(&self) -> usize {
        with_session(|session| session.surface().candle_count()).unwrap_or(0)
    }

    #[wasm_bindgen]
    pub fn drawing_count(&self) -> usize {
        with_session(|session| session.drawings().len()).unwrap_or(0)
    }

    fn close_subscription(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.close();
        }
    }
}

/// Convert canvas pixels to a domain point, or `None` outside the plotted
/// data area.
fn pixel_to_domain(session: &ChartSession, x: f32, y: f32) -> Option<Point> {
    let viewport = &session.surface().viewport;
    let time = viewport.x_to_time(x).round();
    let price = viewport.y_to_price(y);
    if !viewport.contains(time, price) {
        return None;
    }
    Some(Point::new(Timestamp::from_secs(time as i64), Price::from(price)))
}

/// Run the stream pump for one subscription on the local task queue.
fn spawn_feed_task(symbol: Symbol, subscription: FeedSubscription) {
    globals().is_streaming.set(true);
    spawn_local(async move {
        let client = MarketStreamClient::new(symbol);
        client
            .run(subscription, |event| {
                with_session_mut(|session| {
                    session.apply_feed_event(event);
                    globals().candle_count.set(session.surface().candle_count());
                    globals().chart_ready.set(session.surface().is_ready());
                    if let Some(price) = session.surface().series().get_latest_price() {
                        globals().current_price.set(price.value());
                    }
                });
                render_frame();
            })
            .await;
        globals().is_streaming.set(false);
    });
}

/// Rebuild and submit one frame from the current session state.
pub fn render_frame() {
    let Some(vertices) = with_session(|session| geometry::build_frame(session.surface(), session.overlay()))
    else {
        return;
    };

    with_global_renderer(|renderer| {
        if let Err(e) = renderer.render(&vertices) {
            get_logger().error(
                LogComponent::Presentation("Render"),
                &format!("frame submit failed: {e:?}"),
            );
        }
    });

    with_session(|session| {
        with_global_label_renderer(|labels| {
            labels.render(&session.surface().viewport, session.overlay());
        });
    });
}
