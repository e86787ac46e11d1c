use annotation_chart_wasm::application::ChartSession;
use annotation_chart_wasm::domain::drawing::{
    PatternLabel, Point, PointBuffer, PreviewShape, ToolMode, preview_shape,
};
use annotation_chart_wasm::domain::events::PointerEvent;
use annotation_chart_wasm::domain::market_data::{Price, Symbol, Timestamp};

fn point(time: i64, value: f64) -> Point {
    Point::new(Timestamp::from_secs(time), Price::from(value))
}

#[test]
fn empty_buffer_yields_no_preview() {
    let buffer = PointBuffer::new();
    assert_eq!(preview_shape(ToolMode::Trendline, &buffer, point(5, 20.0)), None);
    assert_eq!(preview_shape(ToolMode::SixPoint, &buffer, point(5, 20.0)), None);
}

#[test]
fn trendline_preview_runs_from_buffered_point_to_hover() {
    let mut buffer = PointBuffer::new();
    buffer.push(ToolMode::Trendline, point(1, 10.0));

    let shape = preview_shape(ToolMode::Trendline, &buffer, point(5, 20.0));
    assert_eq!(
        shape,
        Some(PreviewShape::Segment { from: point(1, 10.0), to: point(5, 20.0) })
    );
}

#[test]
fn trendline_preview_suppressed_at_equal_time() {
    let mut buffer = PointBuffer::new();
    buffer.push(ToolMode::Trendline, point(1, 10.0));

    assert_eq!(preview_shape(ToolMode::Trendline, &buffer, point(1, 25.0)), None);
}

#[test]
fn six_point_preview_appends_fresh_hover_and_advances_label() {
    let mut buffer = PointBuffer::new();
    buffer.push(ToolMode::SixPoint, point(1, 10.0));
    buffer.push(ToolMode::SixPoint, point(2, 12.0));

    let shape = preview_shape(ToolMode::SixPoint, &buffer, point(3, 14.0));
    let Some(PreviewShape::Polyline { points, next_label }) = shape else {
        panic!("expected a polyline preview");
    };
    assert_eq!(points, vec![point(1, 10.0), point(2, 12.0), point(3, 14.0)]);
    assert_eq!(next_label, PatternLabel::C);
}

#[test]
fn six_point_preview_skips_hover_at_last_buffered_time() {
    let mut buffer = PointBuffer::new();
    buffer.push(ToolMode::SixPoint, point(1, 10.0));
    buffer.push(ToolMode::SixPoint, point(2, 12.0));

    let shape = preview_shape(ToolMode::SixPoint, &buffer, point(2, 99.0));
    let Some(PreviewShape::Polyline { points, .. }) = shape else {
        panic!("expected a polyline preview");
    };
    assert_eq!(points, vec![point(1, 10.0), point(2, 12.0)]);
}

#[test]
fn horizontal_never_previews() {
    let buffer = PointBuffer::new();
    assert_eq!(preview_shape(ToolMode::Horizontal, &buffer, point(5, 20.0)), None);
}

#[test]
fn hover_spawns_preview_primitives_and_leave_removes_them() {
    let mut session = ChartSession::new(Symbol::from("AAPL"), 800, 450);
    session.select_tool(Some(ToolMode::Trendline));
    session.pointer_event(PointerEvent::Click(point(1, 10.0)));

    session.pointer_event(PointerEvent::Hover(point(5, 20.0)));
    assert!(session.preview().is_some());
    assert_eq!(session.overlay().preview_count(), 1);
    assert!(session.drawings().is_empty());

    session.pointer_event(PointerEvent::Leave);
    assert!(session.preview().is_none());
    assert_eq!(session.overlay().preview_count(), 0);
}

#[test]
fn preview_vanishes_the_instant_the_mode_changes() {
    let mut session = ChartSession::new(Symbol::from("AAPL"), 800, 450);
    session.select_tool(Some(ToolMode::SixPoint));
    session.pointer_event(PointerEvent::Click(point(1, 10.0)));
    session.pointer_event(PointerEvent::Hover(point(2, 12.0)));
    assert!(session.overlay().preview_count() > 0);

    session.select_tool(Some(ToolMode::Trendline));
    assert_eq!(session.overlay().preview_count(), 0);
    assert!(session.preview().is_none());
}

#[test]
fn finalizing_clears_the_preview_with_the_buffer() {
    let mut session = ChartSession::new(Symbol::from("AAPL"), 800, 450);
    session.select_tool(Some(ToolMode::Trendline));
    session.pointer_event(PointerEvent::Click(point(1, 10.0)));
    session.pointer_event(PointerEvent::Hover(point(5, 20.0)));
    assert_eq!(session.overlay().preview_count(), 1);

    session.pointer_event(PointerEvent::Click(point(5, 20.0)));
    assert_eq!(session.drawings().len(), 1);
    assert!(session.preview().is_none());
    assert_eq!(session.overlay().preview_count(), 0);
}

#[test]
fn six_point_preview_marker_advances_with_each_accepted_click() {
    let mut session = ChartSession::new(Symbol::from("AAPL"), 800, 450);
    session.select_tool(Some(ToolMode::SixPoint));

    for (i, t) in [10i64, 20, 30].iter().enumerate() {
        session.pointer_event(PointerEvent::Click(point(*t, 100.0)));
        session.pointer_event(PointerEvent::Hover(point(t + 5, 105.0)));
        let Some(PreviewShape::Polyline { next_label, .. }) = session.preview() else {
            panic!("expected a polyline preview after click {i}");
        };
        assert_eq!(*next_label, PatternLabel::from_click_index(i + 1).unwrap());
    }
}
