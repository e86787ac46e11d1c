pub mod client_handle;
pub mod dto;
pub mod stream_client;

pub use client_handle::FeedSubscription;
pub use dto::{CandleDto, FeedMessage, LiveTickDto, parse_feed_message};
pub use stream_client::MarketStreamClient;
