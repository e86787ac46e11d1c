use crate::domain::drawing::ToolMode;
use leptos::*;
use once_cell::sync::OnceCell;

/// Global UI signals bridging the engine to the Leptos shell.
pub struct Globals {
    pub current_price: RwSignal<f64>,
    pub candle_count: RwSignal<usize>,
    pub is_streaming: RwSignal<bool>,
    pub chart_ready: RwSignal<bool>,
    pub active_tool: RwSignal<ToolMode>,
    pub drawing_count: RwSignal<usize>,
    pub symbol: RwSignal<String>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        current_price: create_rw_signal(0.0),
        candle_count: create_rw_signal(0),
        is_streaming: create_rw_signal(false),
        chart_ready: create_rw_signal(false),
        active_tool: create_rw_signal(ToolMode::Idle),
        drawing_count: create_rw_signal(0),
        symbol: create_rw_signal(String::new()),
    })
}

crate::global_signals! {
    pub current_price => current_price: f64,
    pub candle_count => candle_count: usize,
    pub is_streaming => is_streaming: bool,
    pub chart_ready => chart_ready: bool,
    pub active_tool => active_tool: ToolMode,
    pub drawing_count => drawing_count: usize,
    pub symbol_signal => symbol: String,
}
