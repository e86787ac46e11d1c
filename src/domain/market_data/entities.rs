pub use super::value_objects::{OHLCV, Price, Timestamp, Volume};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Domain entity - Candle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: Timestamp,
    pub ohlcv: OHLCV,
}

impl Candle {
    pub fn new(timestamp: Timestamp, ohlcv: OHLCV) -> Self {
        Self { timestamp, ohlcv }
    }

    /// A flat bar carrying a single traded value, volume zero.
    pub fn flat(timestamp: Timestamp, value: Price) -> Self {
        Self { timestamp, ohlcv: OHLCV::flat(value) }
    }

    pub fn is_bullish(&self) -> bool {
        self.ohlcv.close > self.ohlcv.open
    }

    pub fn is_bearish(&self) -> bool {
        self.ohlcv.close < self.ohlcv.open
    }
}

/// Domain entity - time-ordered, deduplicated candle series.
///
/// Timestamps are strictly increasing across stored bars: adding a candle
/// whose timestamp already exists replaces that bar, it never appends a
/// second bar for the same time.
#[derive(Debug, Clone)]
pub struct CandleSeries {
    candles: VecDeque<Candle>,
    max_size: usize,
}

impl CandleSeries {
    pub fn new(max_size: usize) -> Self {
        Self { candles: VecDeque::new(), max_size }
    }

    pub fn add_candle(&mut self, candle: Candle) {
        if let Some(last) = self.candles.back_mut() {
            if last.timestamp == candle.timestamp {
                *last = candle;
                return;
            }
            if candle.timestamp < last.timestamp {
                self.insert_candle_sorted(candle);
                return;
            }
        }

        self.candles.push_back(candle);

        if self.candles.len() > self.max_size {
            self.candles.pop_front();
        }
    }

    /// Insert a candle while keeping time order; same-time bars replace.
    fn insert_candle_sorted(&mut self, candle: Candle) {
        let insert_pos = self
            .candles
            .iter()
            .position(|c| c.timestamp >= candle.timestamp)
            .unwrap_or(self.candles.len());

        if insert_pos < self.candles.len() && self.candles[insert_pos].timestamp == candle.timestamp
        {
            self.candles[insert_pos] = candle;
        } else {
            self.candles.insert(insert_pos, candle);
        }

        if self.candles.len() > self.max_size {
            self.candles.pop_front();
        }
    }

    /// Replace the most recent bar wholesale.
    pub fn replace_latest(&mut self, candle: Candle) {
        if let Some(last) = self.candles.back_mut() {
            *last = candle;
        }
    }

    pub fn get_candles(&self) -> &VecDeque<Candle> {
        &self.candles
    }

    pub fn latest(&self) -> Option<&Candle> {
        self.candles.back()
    }

    pub fn count(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_size
    }

    pub fn clear(&mut self) {
        self.candles.clear();
    }

    /// Get the last closing price
    pub fn get_latest_price(&self) -> Option<&Price> {
        self.candles.back().map(|candle| &candle.ohlcv.close)
    }

    /// Get the price range of all candles
    pub fn price_range(&self) -> Option<(&Price, &Price)> {
        if self.candles.is_empty() {
            return None;
        }

        let mut min_price = &self.candles[0].ohlcv.low;
        let mut max_price = &self.candles[0].ohlcv.high;

        for candle in &self.candles {
            if candle.ohlcv.low.value() < min_price.value() {
                min_price = &candle.ohlcv.low;
            }
            if candle.ohlcv.high.value() > max_price.value() {
                max_price = &candle.ohlcv.high;
            }
        }

        Some((min_price, max_price))
    }

    /// Get the time range spanned by the series
    pub fn time_range(&self) -> Option<(Timestamp, Timestamp)> {
        match (self.candles.front(), self.candles.back()) {
            (Some(first), Some(last)) => Some((first.timestamp, last.timestamp)),
            _ => None,
        }
    }
}
