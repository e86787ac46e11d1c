use crate::domain::errors::InfrastructureError;
use crate::domain::events::FeedEvent;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::Symbol;
use crate::infrastructure::websocket::client_handle::FeedSubscription;
use crate::infrastructure::websocket::dto::parse_feed_message;
use futures::StreamExt;
use gloo_net::websocket::{Message, futures::WebSocket};

/// Default stream endpoint; deployments override it per environment.
const DEFAULT_FEED_ENDPOINT: &str = "wss://stream.quotedash.io/ws";

/// WebSocket client for one symbol's market-data stream, based on gloo.
///
/// The server sends `{history: [...]}` once, then `{live: {...}}` frames.
/// The client only normalizes frames into `FeedEvent`s; ordering rules are
/// enforced by the feed processor that consumes them.
pub struct MarketStreamClient {
    symbol: Symbol,
    endpoint: String,
}

impl MarketStreamClient {
    pub fn new(symbol: Symbol) -> Self {
        Self { symbol, endpoint: DEFAULT_FEED_ENDPOINT.to_string() }
    }

    pub fn with_endpoint(symbol: Symbol, endpoint: &str) -> Self {
        Self { symbol, endpoint: endpoint.trim_end_matches('/').to_string() }
    }

    pub fn stream_url(&self) -> String {
        format!("{}/{}", self.endpoint, self.symbol.value())
    }

    /// Connect to the stream for this client's symbol.
    pub async fn connect(&self) -> Result<WebSocket, String> {
        let url = self.stream_url();
        get_logger()
            .info(LogComponent::Infrastructure("FeedWS"), &format!("🔌 Connecting to {url}"));

        let ws = WebSocket::open(&url)
            .map_err(|e| InfrastructureError::FeedConnection(format!("{e:?}")).to_string())?;

        get_logger().info(
            LogComponent::Infrastructure("FeedWS"),
            &format!("✅ Connected to stream for {}", self.symbol.value()),
        );
        Ok(ws)
    }

    /// Pump the stream until the subscription is closed, reconnecting with
    /// exponential backoff. Each usable frame is handed to `on_event`; after
    /// `subscription.close()` nothing is delivered, ever.
    pub async fn run<F>(&self, subscription: FeedSubscription, mut on_event: F)
    where
        F: FnMut(FeedEvent),
    {
        use gloo_timers::future::sleep;
        use std::time::Duration;

        let mut delay = 1u64;
        while !subscription.is_closed() {
            let mut stream = match self.connect().await {
                Ok(ws) => {
                    delay = 1;
                    ws
                }
                Err(e) => {
                    get_logger().error(
                        LogComponent::Infrastructure("FeedWS"),
                        &format!("❌ Connection error: {e}"),
                    );
                    sleep(Duration::from_secs(delay)).await;
                    delay = (delay * 2).min(32);
                    continue;
                }
            };

            while let Some(msg) = stream.next().await {
                if subscription.is_closed() {
                    return;
                }
                match msg {
                    Ok(Message::Text(data)) => {
                        if let Some(event) = parse_feed_message(&data) {
                            on_event(event);
                        }
                    }
                    Ok(Message::Bytes(_)) => {
                        // Binary frames are not part of the contract.
                    }
                    Err(e) => {
                        get_logger().error(
                            LogComponent::Infrastructure("FeedWS"),
                            &format!("❌ WebSocket error: {e:?}"),
                        );
                        break;
                    }
                }
            }

            if subscription.is_closed() {
                return;
            }
            get_logger().warn(
                LogComponent::Infrastructure("FeedWS"),
                &format!("🔌 Reconnecting in {delay}s"),
            );
            sleep(Duration::from_secs(delay)).await;
            delay = (delay * 2).min(32);
        }
    }
}
