use crate::domain::drawing::Point;
use crate::domain::market_data::{Candle, Price, Timestamp};

/// One normalized message from the market-data stream.
///
/// Backfill always precedes ticks for a subscription; the adapter enforces
/// monotonic non-decreasing tick time on application.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
    /// The one-time historical burst delivered at subscription start.
    Backfill(Vec<Candle>),
    /// A streaming update approximating the in-progress bar with the latest
    /// traded price.
    LiveTick { time: Timestamp, value: Price },
}

/// One pointer-derived input event, already converted to domain coordinates
/// through the chart surface's coordinate mapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Click(Point),
    Hover(Point),
    /// The pointer left the plotted area; any pending preview is dropped.
    Leave,
}
