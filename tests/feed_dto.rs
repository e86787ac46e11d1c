use annotation_chart_wasm::domain::events::FeedEvent;
use annotation_chart_wasm::infrastructure::websocket::parse_feed_message;

#[test]
fn parses_history_payload() {
    let raw = r#"{
        "history": [
            {"time": 100, "open": 10.0, "high": 12.0, "low": 9.0, "close": 11.0, "volume": 3.5},
            {"time": 160, "open": 11.0, "high": 13.0, "low": 10.0, "close": 12.0}
        ]
    }"#;

    let Some(FeedEvent::Backfill(candles)) = parse_feed_message(raw) else {
        panic!("expected a backfill event");
    };
    assert_eq!(candles.len(), 2);
    assert_eq!(candles[0].timestamp.value(), 100);
    assert_eq!(candles[0].ohlcv.volume.value(), 3.5);
    assert_eq!(candles[1].timestamp.value(), 160);
    // volume defaults to zero when the feed omits it
    assert_eq!(candles[1].ohlcv.volume.value(), 0.0);
}

#[test]
fn parses_live_payload() {
    let raw = r#"{"live": {"time": 170, "value": 12.75}}"#;

    let Some(FeedEvent::LiveTick { time, value }) = parse_feed_message(raw) else {
        panic!("expected a live tick event");
    };
    assert_eq!(time.value(), 170);
    assert_eq!(value.value(), 12.75);
}

#[test]
fn message_with_neither_field_is_ignored() {
    assert_eq!(parse_feed_message(r#"{"status": "ok"}"#), None);
    assert_eq!(parse_feed_message(r#"{}"#), None);
}

#[test]
fn unparseable_frame_is_ignored() {
    assert_eq!(parse_feed_message("not json at all"), None);
    assert_eq!(parse_feed_message(r#"{"history": 42}"#), None);
}

#[test]
fn empty_history_is_ignored() {
    assert_eq!(parse_feed_message(r#"{"history": []}"#), None);
}

#[test]
fn backfill_wins_when_both_fields_are_present() {
    let raw = r#"{
        "history": [{"time": 100, "open": 10.0, "high": 12.0, "low": 9.0, "close": 11.0}],
        "live": {"time": 170, "value": 12.75}
    }"#;

    match parse_feed_message(raw) {
        Some(FeedEvent::Backfill(candles)) => assert_eq!(candles.len(), 1),
        other => panic!("expected backfill to win, got {other:?}"),
    }
}
