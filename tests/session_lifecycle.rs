use annotation_chart_wasm::application::ChartSession;
use annotation_chart_wasm::domain::drawing::{ClickOutcome, Drawing, Point, ToolMode};
use annotation_chart_wasm::domain::events::{FeedEvent, PointerEvent};
use annotation_chart_wasm::domain::market_data::{
    Candle, FeedOutcome, OHLCV, Price, Symbol, Timestamp, Volume,
};

fn point(time: i64, value: f64) -> Point {
    Point::new(Timestamp::from_secs(time), Price::from(value))
}

fn bar(time: i64) -> Candle {
    Candle::new(
        Timestamp::from_secs(time),
        OHLCV::new(
            Price::from(100.0),
            Price::from(110.0),
            Price::from(90.0),
            Price::from(105.0),
            Volume::from(1.0),
        ),
    )
}

fn backfill(n: i64) -> FeedEvent {
    FeedEvent::Backfill((0..n).map(bar).collect())
}

#[test]
fn trendline_scenario_click_hover_click() {
    let mut session = ChartSession::new(Symbol::from("AAPL"), 800, 450);
    session.select_tool(Some(ToolMode::Trendline));

    session.pointer_event(PointerEvent::Click(point(1, 10.0)));
    session.pointer_event(PointerEvent::Hover(point(5, 20.0)));
    assert!(session.preview().is_some());
    assert!(session.drawings().is_empty());

    let outcome = session.pointer_event(PointerEvent::Click(point(5, 20.0)));
    let ClickOutcome::Finalized(Drawing::Trendline { points }) = outcome else {
        panic!("expected a finalized trendline, got {outcome:?}");
    };
    assert_eq!(points[0], point(1, 10.0));
    assert_eq!(points[1], point(5, 20.0));

    assert!(session.buffer().is_empty());
    assert_eq!(session.mode(), ToolMode::Idle);
    assert_eq!(session.drawings().len(), 1);
    assert_eq!(session.overlay().line_count(), 1);
}

#[test]
fn horizontal_scenario_immediate_level() {
    let mut session = ChartSession::new(Symbol::from("AAPL"), 800, 450);
    session.select_tool(Some(ToolMode::Horizontal));

    let outcome = session.pointer_event(PointerEvent::Click(point(100, 50.0)));
    let ClickOutcome::Finalized(Drawing::HorizontalLevel { price, anchor_time }) = outcome else {
        panic!("expected a horizontal level, got {outcome:?}");
    };
    assert_eq!(price.value(), 50.0);
    assert_eq!(anchor_time.value(), 100);
    assert_eq!(session.mode(), ToolMode::Idle);
    assert_eq!(session.drawings().len(), 1);
}

#[test]
fn below_threshold_sequences_leave_the_drawing_set_unchanged() {
    let mut session = ChartSession::new(Symbol::from("AAPL"), 800, 450);

    session.select_tool(Some(ToolMode::Trendline));
    session.pointer_event(PointerEvent::Click(point(1, 10.0)));
    assert!(session.drawings().is_empty());
    session.reset();

    session.select_tool(Some(ToolMode::SixPoint));
    for t in 0..5 {
        session.pointer_event(PointerEvent::Click(point(t, 10.0)));
    }
    assert!(session.drawings().is_empty());
}

#[test]
fn clear_all_empties_everything_atomically() {
    let mut session = ChartSession::new(Symbol::from("AAPL"), 800, 450);
    session.apply_feed_event(backfill(12));

    session.select_tool(Some(ToolMode::Horizontal));
    session.pointer_event(PointerEvent::Click(point(3, 100.0)));
    session.select_tool(Some(ToolMode::Trendline));
    session.pointer_event(PointerEvent::Click(point(1, 10.0)));
    session.pointer_event(PointerEvent::Click(point(5, 20.0)));
    session.select_tool(Some(ToolMode::SixPoint));
    session.pointer_event(PointerEvent::Click(point(7, 30.0)));
    session.pointer_event(PointerEvent::Hover(point(8, 31.0)));

    assert_eq!(session.drawings().len(), 2);
    assert!(session.overlay().primitive_count() > 0);

    session.clear_all();

    assert!(session.drawings().is_empty());
    assert!(session.buffer().is_empty());
    assert!(session.preview().is_none());
    assert_eq!(session.overlay().primitive_count(), 0);
    assert_eq!(session.mode(), ToolMode::Idle);

    // The candle series survives a clear-all; only annotations drop.
    assert_eq!(session.surface().candle_count(), 12);
}

#[test]
fn change_symbol_discards_all_previous_state() {
    let mut session = ChartSession::new(Symbol::from("AAPL"), 800, 450);
    session.apply_feed_event(backfill(12));
    session.select_tool(Some(ToolMode::Trendline));
    session.pointer_event(PointerEvent::Click(point(1, 10.0)));
    session.pointer_event(PointerEvent::Click(point(5, 20.0)));
    assert_eq!(session.drawings().len(), 1);

    session.change_symbol(Symbol::from("MSFT"));

    assert_eq!(session.symbol().value(), "MSFT");
    assert_eq!(session.surface().candle_count(), 0);
    assert!(!session.surface().is_ready());
    assert!(session.drawings().is_empty());
    assert_eq!(session.overlay().primitive_count(), 0);
    assert_eq!(session.mode(), ToolMode::Idle);

    // The fresh session accepts its own backfill.
    assert_eq!(session.apply_feed_event(backfill(12)), FeedOutcome::BackfillLoaded(12));
    assert!(session.surface().is_ready());
    // The viewport keeps the container size across the swap.
    assert_eq!(session.surface().viewport.width, 800);
    assert_eq!(session.surface().viewport.height, 450);
}

#[test]
fn feed_messages_after_shutdown_are_dropped() {
    let mut session = ChartSession::new(Symbol::from("AAPL"), 800, 450);
    session.apply_feed_event(backfill(12));
    assert!(session.is_feed_open());

    session.shutdown();
    assert!(!session.is_feed_open());
    assert_eq!(session.overlay().primitive_count(), 0);

    let late_tick = FeedEvent::LiveTick {
        time: Timestamp::from_secs(99),
        value: Price::from(500.0),
    };
    assert_eq!(session.apply_feed_event(late_tick), FeedOutcome::Dropped);
    assert_eq!(session.apply_feed_event(backfill(20)), FeedOutcome::Dropped);
    assert_eq!(session.surface().candle_count(), 12);
}

#[test]
fn rejected_clicks_are_complete_no_ops() {
    let mut session = ChartSession::new(Symbol::from("AAPL"), 800, 450);
    session.select_tool(Some(ToolMode::Trendline));
    session.pointer_event(PointerEvent::Click(point(7, 10.0)));

    let outcome = session.pointer_event(PointerEvent::Click(point(7, 42.0)));
    assert_eq!(outcome, ClickOutcome::Rejected);
    assert_eq!(session.buffer().len(), 1);
    assert!(session.drawings().is_empty());
    assert_eq!(session.mode(), ToolMode::Trendline);
}
