use annotation_chart_wasm::application::ChartSession;
use annotation_chart_wasm::domain::drawing::{Point, ToolMode, next_tool_mode};
use annotation_chart_wasm::domain::events::PointerEvent;
use annotation_chart_wasm::domain::market_data::{Price, Symbol, Timestamp};

fn point(time: i64, value: f64) -> Point {
    Point::new(Timestamp::from_secs(time), Price::from(value))
}

fn session() -> ChartSession {
    ChartSession::new(Symbol::from("AAPL"), 800, 450)
}

#[test]
fn idle_arms_the_selected_tool() {
    assert_eq!(next_tool_mode(ToolMode::Idle, Some(ToolMode::Trendline)), ToolMode::Trendline);
    assert_eq!(next_tool_mode(ToolMode::Idle, Some(ToolMode::Horizontal)), ToolMode::Horizontal);
    assert_eq!(next_tool_mode(ToolMode::Idle, Some(ToolMode::SixPoint)), ToolMode::SixPoint);
}

#[test]
fn selecting_the_active_tool_toggles_off() {
    assert_eq!(next_tool_mode(ToolMode::Trendline, Some(ToolMode::Trendline)), ToolMode::Idle);
    assert_eq!(next_tool_mode(ToolMode::SixPoint, Some(ToolMode::SixPoint)), ToolMode::Idle);
}

#[test]
fn switching_tools_goes_direct() {
    assert_eq!(next_tool_mode(ToolMode::Trendline, Some(ToolMode::SixPoint)), ToolMode::SixPoint);
    assert_eq!(next_tool_mode(ToolMode::SixPoint, Some(ToolMode::Horizontal)), ToolMode::Horizontal);
}

#[test]
fn reset_is_unconditional() {
    for mode in [ToolMode::Idle, ToolMode::Trendline, ToolMode::Horizontal, ToolMode::SixPoint] {
        assert_eq!(next_tool_mode(mode, None), ToolMode::Idle);
        assert_eq!(next_tool_mode(mode, Some(ToolMode::Idle)), ToolMode::Idle);
    }
}

#[test]
fn entering_a_tool_clears_the_buffer_and_preview() {
    let mut session = session();
    session.select_tool(Some(ToolMode::Trendline));
    session.pointer_event(PointerEvent::Click(point(1, 10.0)));
    session.pointer_event(PointerEvent::Hover(point(5, 20.0)));
    assert_eq!(session.buffer().len(), 1);
    assert!(session.preview().is_some());

    session.select_tool(Some(ToolMode::SixPoint));
    assert_eq!(session.mode(), ToolMode::SixPoint);
    assert!(session.buffer().is_empty());
    assert!(session.preview().is_none());
    assert_eq!(session.overlay().preview_count(), 0);
}

#[test]
fn toggle_off_drops_partial_work() {
    let mut session = session();
    session.select_tool(Some(ToolMode::SixPoint));
    session.pointer_event(PointerEvent::Click(point(1, 10.0)));
    session.pointer_event(PointerEvent::Click(point(2, 11.0)));

    session.select_tool(Some(ToolMode::SixPoint));
    assert_eq!(session.mode(), ToolMode::Idle);
    assert!(session.buffer().is_empty());
    assert!(session.drawings().is_empty());
}

#[test]
fn finalize_returns_to_idle() {
    let mut session = session();
    session.select_tool(Some(ToolMode::Trendline));
    session.pointer_event(PointerEvent::Click(point(1, 10.0)));
    session.pointer_event(PointerEvent::Click(point(5, 20.0)));

    assert_eq!(session.mode(), ToolMode::Idle);
    assert_eq!(session.drawings().len(), 1);
    assert!(session.buffer().is_empty());
}

#[test]
fn explicit_reset_from_any_state() {
    let mut session = session();
    session.select_tool(Some(ToolMode::SixPoint));
    session.pointer_event(PointerEvent::Click(point(1, 10.0)));

    session.reset();
    assert_eq!(session.mode(), ToolMode::Idle);
    assert!(session.buffer().is_empty());
    assert!(session.preview().is_none());
}
