use super::value_objects::Viewport;
use crate::domain::events::FeedEvent;
use crate::domain::market_data::{CandleSeries, FeedOutcome, FeedProcessor};

/// Default cap on bars kept in memory per symbol session.
pub const DEFAULT_MAX_BARS: usize = 10_000;

/// Domain entity - the chart surface for one symbol session.
///
/// Owns the rendered price series plus the coordinate mapper. Created fresh
/// per symbol subscription and replaced wholesale on symbol change.
#[derive(Debug, Clone)]
pub struct ChartSurface {
    series: CandleSeries,
    pub viewport: Viewport,
    feed: FeedProcessor,
    ready: bool,
}

impl ChartSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            series: CandleSeries::new(DEFAULT_MAX_BARS),
            viewport: Viewport::new(width, height),
            feed: FeedProcessor::new(),
            ready: false,
        }
    }

    /// Fold one feed event into the series, then refresh readiness and the
    /// visible window.
    pub fn apply_feed_event(&mut self, event: FeedEvent) -> FeedOutcome {
        let outcome = self.feed.apply(&mut self.series, event);
        if outcome != FeedOutcome::Dropped {
            self.ready = self.feed.is_ready(&self.series);
            self.fit_viewport_to_data();
        }
        outcome
    }

    /// The chart only renders once backfill brought enough bars.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn series(&self) -> &CandleSeries {
        &self.series
    }

    pub fn candle_count(&self) -> usize {
        self.series.count()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport.resize(width, height);
    }

    /// Fit the viewport window to the data with 5% vertical padding.
    fn fit_viewport_to_data(&mut self) {
        let Some((min_price, max_price)) = self.series.price_range() else {
            return;
        };
        let padding = (max_price.value() - min_price.value()) * 0.05;
        self.viewport.min_price = min_price.value() - padding;
        self.viewport.max_price = max_price.value() + padding;

        if let Some((first, last)) = self.series.time_range() {
            self.viewport.start_time = first.as_f64();
            self.viewport.end_time = last.as_f64();
        }
    }
}
