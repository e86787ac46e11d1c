use crate::domain::events::FeedEvent;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{Candle, CandleSeries};

/// A chart is "ready" only once backfill length exceeds this many bars.
pub const MIN_READY_BARS: usize = 10;

/// What a feed event did to the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedOutcome {
    /// Backfill replaced the series wholesale (bar count attached).
    BackfillLoaded(usize),
    /// A live tick replaced or opened the most recent bar.
    TickApplied,
    /// A stale or premature message was discarded without mutation.
    Dropped,
}

/// Data Feed Adapter: folds backfill and live-tick events into a candle
/// series. Live ticks deliberately replace the whole OHLC of the latest bar
/// with the last traded price (volume zero) rather than aggregating intrabar.
#[derive(Debug, Clone, Default)]
pub struct FeedProcessor;

impl FeedProcessor {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(&self, series: &mut CandleSeries, event: FeedEvent) -> FeedOutcome {
        match event {
            FeedEvent::Backfill(candles) => self.apply_backfill(series, candles),
            FeedEvent::LiveTick { time, value } => {
                let Some(latest) = series.latest() else {
                    // Ticks are only meaningful once a backfill established the series.
                    get_logger().debug(
                        LogComponent::Domain("Feed"),
                        &format!("dropping tick at {} before backfill", time.value()),
                    );
                    return FeedOutcome::Dropped;
                };

                let latest_time = latest.timestamp;
                if time < latest_time {
                    get_logger().debug(
                        LogComponent::Domain("Feed"),
                        &format!(
                            "dropping out-of-order tick: {} < {}",
                            time.value(),
                            latest_time.value()
                        ),
                    );
                    return FeedOutcome::Dropped;
                }

                if time == latest_time {
                    series.replace_latest(Candle::flat(time, value));
                } else {
                    series.add_candle(Candle::flat(time, value));
                }
                FeedOutcome::TickApplied
            }
        }
    }

    fn apply_backfill(&self, series: &mut CandleSeries, candles: Vec<Candle>) -> FeedOutcome {
        if candles.is_empty() {
            get_logger().debug(LogComponent::Domain("Feed"), "ignoring empty backfill");
            return FeedOutcome::Dropped;
        }

        series.clear();
        let mut skipped = 0usize;
        for candle in candles {
            if candle.ohlcv.is_valid() {
                series.add_candle(candle);
            } else {
                skipped += 1;
            }
        }
        if skipped > 0 {
            get_logger().warn(
                LogComponent::Domain("Feed"),
                &format!("backfill contained {skipped} invalid bars, skipped"),
            );
        }

        get_logger().info(
            LogComponent::Domain("Feed"),
            &format!("backfill loaded: {} bars", series.count()),
        );
        FeedOutcome::BackfillLoaded(series.count())
    }

    /// Readiness threshold from the feed contract.
    pub fn is_ready(&self, series: &CandleSeries) -> bool {
        series.count() > MIN_READY_BARS
    }
}
