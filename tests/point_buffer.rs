use annotation_chart_wasm::domain::drawing::{
    ClickOutcome, Drawing, PatternLabel, Point, PointBuffer, TEN_YEARS_SECS, ToolMode,
};
use annotation_chart_wasm::domain::market_data::{Price, Timestamp};

fn point(time: i64, value: f64) -> Point {
    Point::new(Timestamp::from_secs(time), Price::from(value))
}

#[test]
fn idle_ignores_clicks() {
    let mut buffer = PointBuffer::new();
    assert_eq!(buffer.push(ToolMode::Idle, point(1, 10.0)), ClickOutcome::Ignored);
    assert!(buffer.is_empty());
}

#[test]
fn horizontal_finalizes_on_first_click() {
    let mut buffer = PointBuffer::new();
    let outcome = buffer.push(ToolMode::Horizontal, point(100, 50.0));

    let ClickOutcome::Finalized(Drawing::HorizontalLevel { price, anchor_time }) = outcome else {
        panic!("expected an immediate horizontal level, got {outcome:?}");
    };
    assert_eq!(price.value(), 50.0);
    assert_eq!(anchor_time.value(), 100);
    assert!(buffer.is_empty());

    let (start, end) = Drawing::horizontal_span(anchor_time);
    assert_eq!(start.value(), 100 - TEN_YEARS_SECS);
    assert_eq!(end.value(), 100 + TEN_YEARS_SECS);
}

#[test]
fn trendline_needs_two_clicks() {
    let mut buffer = PointBuffer::new();
    assert_eq!(buffer.push(ToolMode::Trendline, point(1, 10.0)), ClickOutcome::Buffered);
    assert_eq!(buffer.len(), 1);

    let outcome = buffer.push(ToolMode::Trendline, point(5, 20.0));
    let ClickOutcome::Finalized(Drawing::Trendline { points }) = outcome else {
        panic!("expected a finalized trendline, got {outcome:?}");
    };
    assert_eq!(points[0], point(1, 10.0));
    assert_eq!(points[1], point(5, 20.0));
    assert!(buffer.is_empty());
}

#[test]
fn zero_length_trendline_is_rejected() {
    let mut buffer = PointBuffer::new();
    buffer.push(ToolMode::Trendline, point(7, 10.0));

    let outcome = buffer.push(ToolMode::Trendline, point(7, 42.0));
    assert_eq!(outcome, ClickOutcome::Rejected);
    assert_eq!(buffer.len(), 1);
    assert_eq!(buffer.points()[0], point(7, 10.0));
}

#[test]
fn six_point_sorts_by_time_and_keeps_click_labels() {
    let mut buffer = PointBuffer::new();
    let click_times = [5, 3, 1, 6, 2, 4];

    let mut last = ClickOutcome::Ignored;
    for (i, t) in click_times.iter().enumerate() {
        last = buffer.push(ToolMode::SixPoint, point(*t, i as f64));
    }

    let ClickOutcome::Finalized(Drawing::SixPointPattern { points }) = last else {
        panic!("expected a finalized pattern, got {last:?}");
    };
    assert!(buffer.is_empty());

    let times: Vec<i64> = points.iter().map(|lp| lp.point.time.value()).collect();
    assert_eq!(times, vec![1, 2, 3, 4, 5, 6]);

    // time=1 was the 3rd click, so it still carries label C
    let at_one = points.iter().find(|lp| lp.point.time.value() == 1).unwrap();
    assert_eq!(at_one.label, PatternLabel::C);
    let at_five = points.iter().find(|lp| lp.point.time.value() == 5).unwrap();
    assert_eq!(at_five.label, PatternLabel::A);
    let at_four = points.iter().find(|lp| lp.point.time.value() == 4).unwrap();
    assert_eq!(at_four.label, PatternLabel::X);
}

#[test]
fn six_point_rejects_duplicate_times() {
    let mut buffer = PointBuffer::new();
    buffer.push(ToolMode::SixPoint, point(1, 10.0));
    buffer.push(ToolMode::SixPoint, point(2, 11.0));

    let outcome = buffer.push(ToolMode::SixPoint, point(1, 99.0));
    assert_eq!(outcome, ClickOutcome::Rejected);
    assert_eq!(buffer.len(), 2);
}

#[test]
fn below_threshold_clicks_never_finalize() {
    let mut buffer = PointBuffer::new();
    for t in 0..5 {
        let outcome = buffer.push(ToolMode::SixPoint, point(t, 10.0));
        assert_eq!(outcome, ClickOutcome::Buffered);
    }
    assert_eq!(buffer.len(), 5);
    assert!(buffer.awaiting_more(ToolMode::SixPoint));
}
