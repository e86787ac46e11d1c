use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::drawing::ToolMode;
use crate::global_state::{
    active_tool, candle_count, chart_ready, current_price, drawing_count, symbol_signal,
};
use crate::presentation::AnnotationChartApi;

const CHART_CANVAS_ID: &str = "annotation-chart-canvas";
const LABEL_CANVAS_ID: &str = "annotation-chart-labels";
const DEFAULT_SYMBOL: &str = "AAPL";
const CHART_WIDTH: u32 = 960;
const CHART_HEIGHT: u32 = 480;

const SYMBOLS: [&str; 3] = ["AAPL", "MSFT", "TSLA"];

/// Chart shell: toolbar, status line and the stacked canvases. The shell only
/// instantiates the engine and forwards DOM events; everything else happens
/// behind the `AnnotationChartApi` facade.
#[component]
pub fn App() -> impl IntoView {
    let api = Rc::new(RefCell::new(AnnotationChartApi::new(
        CHART_CANVAS_ID.to_string(),
        LABEL_CANVAS_ID.to_string(),
    )));

    {
        let api = api.clone();
        create_effect(move |_| {
            // The canvases exist once the view has rendered.
            let _ = api.borrow_mut().start(DEFAULT_SYMBOL.to_string(), CHART_WIDTH, CHART_HEIGHT);
        });
    }

    {
        let api = api.clone();
        on_cleanup(move || {
            api.borrow_mut().shutdown();
        });
    }

    let tool_button = {
        let api = api.clone();
        move |tool: ToolMode, label: &'static str| {
            let api = api.clone();
            view! {
                <button
                    class="tool-button"
                    class:active=move || active_tool().get() == tool
                    on:click=move |_| api.borrow().select_tool(tool.as_ref())
                >
                    {label}
                </button>
            }
        }
    };

    let symbol_button = {
        let api = api.clone();
        move |name: &'static str| {
            let api = api.clone();
            view! {
                <button
                    class="symbol-button"
                    class:active=move || symbol_signal().get() == name
                    on:click=move |_| api.borrow_mut().set_symbol(name.to_string())
                >
                    {name}
                </button>
            }
        }
    };

    let click_api = api.clone();
    let hover_api = api.clone();
    let leave_api = api.clone();
    let clear_api = api.clone();

    view! {
        <style>
            {r#"
            .annotation-chart-app {
                font-family: 'SF Pro Display', -apple-system, sans-serif;
                background: #0e1117;
                min-height: 100vh;
                padding: 20px;
                color: #e8e6f0;
            }
            .status-bar {
                display: flex;
                gap: 24px;
                align-items: baseline;
                margin-bottom: 12px;
            }
            .status-bar .price { font-size: 22px; font-weight: 700; color: #72c685; }
            .status-bar .muted { font-size: 12px; color: #8a8f98; }
            .toolbar { display: flex; gap: 8px; margin-bottom: 12px; }
            .tool-button, .symbol-button {
                background: #1b2027;
                color: #e8e6f0;
                border: 1px solid #2c333d;
                border-radius: 6px;
                padding: 6px 14px;
                cursor: pointer;
            }
            .tool-button.active, .symbol-button.active {
                background: #2d5de9;
                border-color: #2d5de9;
            }
            .chart-stack { position: relative; width: 960px; height: 480px; }
            .chart-stack canvas { position: absolute; top: 0; left: 0; }
            #annotation-chart-labels { pointer-events: auto; }
            "#}
        </style>
        <div class="annotation-chart-app">
            <div class="status-bar">
                <span class="symbol">{move || symbol_signal().get()}</span>
                <span class="price">{move || format!("${:.2}", current_price().get())}</span>
                <span class="muted">
                    {move || {
                        if chart_ready().get() {
                            format!("{} bars", candle_count().get())
                        } else {
                            "waiting for data...".to_string()
                        }
                    }}
                </span>
                <span class="muted">{move || format!("{} drawings", drawing_count().get())}</span>
            </div>
            <div class="toolbar">
                {tool_button(ToolMode::Trendline, "Trendline")}
                {tool_button(ToolMode::Horizontal, "Horizontal")}
                {tool_button(ToolMode::SixPoint, "Six-Point")}
                <button class="tool-button" on:click=move |_| clear_api.borrow().clear_all()>
                    "Clear All"
                </button>
                <span style="width: 24px;"></span>
                {SYMBOLS.into_iter().map(symbol_button).collect_view()}
            </div>
            <div class="chart-stack">
                <canvas
                    id=CHART_CANVAS_ID
                    width=CHART_WIDTH
                    height=CHART_HEIGHT
                ></canvas>
                <canvas
                    id=LABEL_CANVAS_ID
                    width=CHART_WIDTH
                    height=CHART_HEIGHT
                    on:mousedown=move |ev| {
                        click_api.borrow().on_click(ev.offset_x() as f32, ev.offset_y() as f32)
                    }
                    on:mousemove=move |ev| {
                        hover_api.borrow().on_hover(ev.offset_x() as f32, ev.offset_y() as f32)
                    }
                    on:mouseleave=move |_| leave_api.borrow().on_pointer_leave()
                ></canvas>
            </div>
        </div>
    }
}
