pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{Candle, CandleSeries};
pub use services::{FeedOutcome, FeedProcessor, MIN_READY_BARS};
pub use value_objects::{OHLCV, Price, Symbol, Timestamp, Volume};
