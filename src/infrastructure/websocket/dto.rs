use crate::domain::events::FeedEvent;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{Candle, OHLCV, Price, Timestamp, Volume};
use serde::Deserialize;

/// DTO for one inbound stream payload.
///
/// The wire contract is one logical field per message: `history` once at
/// subscription start, then `live` repeatedly. Anything carrying neither is
/// malformed and gets ignored.
#[derive(Debug, Deserialize)]
pub struct FeedMessage {
    #[serde(default)]
    pub history: Option<Vec<CandleDto>>,
    #[serde(default)]
    pub live: Option<LiveTickDto>,
}

/// DTO for one historical bar
#[derive(Debug, Clone, Deserialize)]
pub struct CandleDto {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
}

/// DTO for one live trade sample
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LiveTickDto {
    pub time: i64,
    pub value: f64,
}

impl CandleDto {
    pub fn to_domain_candle(&self) -> Candle {
        Candle::new(
            Timestamp::from_secs(self.time),
            OHLCV::new(
                Price::from(self.open),
                Price::from(self.high),
                Price::from(self.low),
                Price::from(self.close),
                Volume::from(self.volume),
            ),
        )
    }
}

impl FeedMessage {
    /// Convert the payload into a feed event, or `None` when it is malformed
    /// or empty. Backfill wins if a message ever carries both fields, since
    /// backfill precedes ticks in the stream ordering.
    pub fn into_event(self) -> Option<FeedEvent> {
        if let Some(history) = self.history {
            if history.is_empty() {
                return None;
            }
            let candles = history.iter().map(CandleDto::to_domain_candle).collect();
            return Some(FeedEvent::Backfill(candles));
        }

        if let Some(tick) = self.live {
            return Some(FeedEvent::LiveTick {
                time: Timestamp::from_secs(tick.time),
                value: Price::from(tick.value),
            });
        }

        None
    }
}

/// Parse one raw text frame into a feed event. Unparseable JSON and payloads
/// with neither recognized field are dropped here with a log line; no state
/// is mutated downstream.
pub fn parse_feed_message(raw: &str) -> Option<FeedEvent> {
    let message: FeedMessage = match serde_json::from_str(raw) {
        Ok(message) => message,
        Err(e) => {
            get_logger().debug(
                LogComponent::Infrastructure("FeedWS"),
                &format!("ignoring unparseable frame: {e}"),
            );
            return None;
        }
    };

    let event = message.into_event();
    if event.is_none() {
        get_logger()
            .debug(LogComponent::Infrastructure("FeedWS"), "ignoring frame without history/live");
    }
    event
}
