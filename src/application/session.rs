use crate::domain::chart::ChartSurface;
use crate::domain::drawing::{
    ClickOutcome, DrawingSet, Point, PointBuffer, PreviewShape, ToolMode, next_tool_mode,
    preview_shape,
};
use crate::domain::events::{FeedEvent, PointerEvent};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{FeedOutcome, Symbol};
use crate::infrastructure::rendering::overlay_world::OverlayWorld;

/// One chart session: the single authoritative owner of the feed state,
/// chart surface, drawing machinery and overlay primitives for one symbol.
///
/// All mutation enters through the explicit methods below, driven by
/// discrete external events; each handler runs to completion, so no
/// interleaving is possible and no locking exists.
pub struct ChartSession {
    symbol: Symbol,
    surface: ChartSurface,
    mode: ToolMode,
    buffer: PointBuffer,
    drawings: DrawingSet,
    overlay: OverlayWorld,
    preview: Option<PreviewShape>,
    feed_open: bool,
}

impl ChartSession {
    pub fn new(symbol: Symbol, width: u32, height: u32) -> Self {
        get_logger().info(
            LogComponent::Application("Session"),
            &format!("starting chart session for {}", symbol.value()),
        );
        Self {
            symbol,
            surface: ChartSurface::new(width, height),
            mode: ToolMode::Idle,
            buffer: PointBuffer::new(),
            drawings: DrawingSet::new(),
            overlay: OverlayWorld::new(),
            preview: None,
            feed_open: true,
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn surface(&self) -> &ChartSurface {
        &self.surface
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn buffer(&self) -> &PointBuffer {
        &self.buffer
    }

    pub fn drawings(&self) -> &DrawingSet {
        &self.drawings
    }

    pub fn overlay(&self) -> &OverlayWorld {
        &self.overlay
    }

    pub fn preview(&self) -> Option<&PreviewShape> {
        self.preview.as_ref()
    }

    /// Select a tool (or none). Every transition atomically clears the point
    /// buffer and cancels any pending preview - no state change may leave a
    /// stale partial buffer behind.
    pub fn select_tool(&mut self, selected: Option<ToolMode>) {
        let next = next_tool_mode(self.mode, selected);
        self.enter_mode(next);
    }

    /// Explicit reset: unconditionally back to `Idle`.
    pub fn reset(&mut self) {
        self.enter_mode(ToolMode::Idle);
    }

    fn enter_mode(&mut self, next: ToolMode) {
        if next != self.mode {
            get_logger().debug(
                LogComponent::Application("Session"),
                &format!("tool mode {} -> {}", self.mode, next),
            );
        }
        self.mode = next;
        self.buffer.clear();
        self.set_preview(None);
    }

    /// Handle one pointer event in domain coordinates.
    pub fn pointer_event(&mut self, event: PointerEvent) -> ClickOutcome {
        match event {
            PointerEvent::Click(point) => self.handle_click(point),
            PointerEvent::Hover(point) => {
                self.handle_hover(point);
                ClickOutcome::Ignored
            }
            PointerEvent::Leave => {
                self.set_preview(None);
                ClickOutcome::Ignored
            }
        }
    }

    fn handle_click(&mut self, point: Point) -> ClickOutcome {
        let outcome = self.buffer.push(self.mode, point);
        match &outcome {
            ClickOutcome::Finalized(drawing) => {
                let id = self.drawings.push(drawing.clone());
                self.overlay.sync(&self.drawings);
                get_logger().info(
                    LogComponent::Application("Session"),
                    &format!("finalized {} as {id}", drawing.tool()),
                );
                // Finalizing the active tool returns the machine to Idle.
                self.enter_mode(ToolMode::Idle);
            }
            ClickOutcome::Buffered => {
                // Any stale preview now shows one point too few; drop it
                // until the next hover sample rebuilds it.
                self.set_preview(None);
            }
            ClickOutcome::Rejected | ClickOutcome::Ignored => {}
        }
        outcome
    }

    fn handle_hover(&mut self, point: Point) {
        let shape = preview_shape(self.mode, &self.buffer, point);
        self.set_preview(shape);
    }

    fn set_preview(&mut self, shape: Option<PreviewShape>) {
        self.preview = shape;
        self.overlay.set_preview(self.preview.as_ref());
    }

    /// Tear down every annotation at once: drawing set, point buffer and all
    /// overlay primitives drop together, atomically.
    pub fn clear_all(&mut self) {
        self.drawings.clear();
        self.buffer.clear();
        self.preview = None;
        self.overlay.clear_all();
        self.mode = ToolMode::Idle;
        get_logger().info(LogComponent::Application("Session"), "cleared all drawings");
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
    }

    /// Fold one feed message into the chart. Messages arriving after
    /// `shutdown` or `change_symbol` are dropped, never partially applied.
    pub fn apply_feed_event(&mut self, event: FeedEvent) -> FeedOutcome {
        if !self.feed_open {
            get_logger().debug(
                LogComponent::Application("Session"),
                "dropping feed message after teardown",
            );
            return FeedOutcome::Dropped;
        }
        self.surface.apply_feed_event(event)
    }

    pub fn is_feed_open(&self) -> bool {
        self.feed_open
    }

    /// Replace the whole session for a new symbol. Old candles, drawings and
    /// primitives are discarded; nothing outlives its originating symbol.
    pub fn change_symbol(&mut self, symbol: Symbol) {
        let width = self.surface.viewport.width;
        let height = self.surface.viewport.height;
        self.feed_open = false;
        self.overlay.clear_all();
        *self = ChartSession::new(symbol, width, height);
    }

    /// Release session state on unmount. The surrounding layer closes the
    /// feed subscription and drops the renderers.
    pub fn shutdown(&mut self) {
        self.feed_open = false;
        self.buffer.clear();
        self.preview = None;
        self.overlay.clear_all();
        get_logger().info(
            LogComponent::Application("Session"),
            &format!("session for {} shut down", self.symbol.value()),
        );
    }
}
