#![cfg(target_arch = "wasm32")]

use annotation_chart_wasm::application::ChartSession;
use annotation_chart_wasm::domain::drawing::{Point, ToolMode};
use annotation_chart_wasm::domain::events::PointerEvent;
use annotation_chart_wasm::domain::market_data::{Price, Symbol, Timestamp};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn session_draws_in_the_browser_runtime() {
    let mut session = ChartSession::new(Symbol::from("AAPL"), 800, 450);
    session.select_tool(Some(ToolMode::Trendline));
    session.pointer_event(PointerEvent::Click(Point::new(
        Timestamp::from_secs(1),
        Price::from(10.0),
    )));
    session.pointer_event(PointerEvent::Click(Point::new(
        Timestamp::from_secs(5),
        Price::from(20.0),
    )));

    assert_eq!(session.drawings().len(), 1);
    assert_eq!(session.overlay().line_count(), 1);
    assert_eq!(session.mode(), ToolMode::Idle);
}
