use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, header::ACCEPT};
use serde_json::Value;

use crate::config::{ApiSettings, COINGECKO, DF};
use crate::data::FetchError;
use crate::domain::{MarketCoin, TrendingEntry};
use crate::utils::AppInstant;

/// Abstract interface for fetching market snapshots.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait MarketDataProvider {
    /// One page of the listing, ordered by descending market cap.
    async fn fetch_markets(&self, page: u32) -> Result<Vec<MarketCoin>, FetchError>;

    /// The trending list, still in its envelope shape.
    async fn fetch_trending(&self) -> Result<Vec<TrendingEntry>, FetchError>;
}

/// Provider handle shared between the UI thread and spawned fetches.
#[cfg(not(target_arch = "wasm32"))]
pub type SharedProvider = std::sync::Arc<dyn MarketDataProvider + Send + Sync>;
#[cfg(target_arch = "wasm32")]
pub type SharedProvider = std::rc::Rc<dyn MarketDataProvider>;

#[cfg(not(target_arch = "wasm32"))]
pub fn share_provider<P>(provider: P) -> SharedProvider
where
    P: MarketDataProvider + Send + Sync + 'static,
{
    std::sync::Arc::new(provider)
}

#[cfg(target_arch = "wasm32")]
pub fn share_provider<P>(provider: P) -> SharedProvider
where
    P: MarketDataProvider + 'static,
{
    std::rc::Rc::new(provider)
}

pub struct CoinGeckoProvider {
    client: Client,
    settings: ApiSettings,
}

impl CoinGeckoProvider {
    pub fn new(settings: ApiSettings) -> Result<Self> {
        let builder = Client::builder();

        // Browsers own the timeout and user agent on wasm.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .timeout(std::time::Duration::from_secs(COINGECKO.client.timeout_secs))
            .user_agent(COINGECKO.client.user_agent);

        let client = builder.build().context("failed to build HTTP client")?;
        Ok(Self { client, settings })
    }

    async fn get_body(&self, request: RequestBuilder, what: &str) -> Result<String, FetchError> {
        let start = AppInstant::now();
        let response = request.header(ACCEPT, "application/json").send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{} request failed with HTTP {}", what, status);
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.text().await?;
        if DF.log_fetch {
            log::info!(
                "{} fetched: {} bytes in {}ms",
                what,
                body.len(),
                start.elapsed().as_millis()
            );
        }
        Ok(body)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl MarketDataProvider for CoinGeckoProvider {
    async fn fetch_markets(&self, page: u32) -> Result<Vec<MarketCoin>, FetchError> {
        let request = self
            .client
            .get(self.settings.markets_url())
            .query(&self.settings.markets_query(page));
        let body = self.get_body(request, "market listing").await?;
        parse_markets(&body, COINGECKO.markets.per_page)
    }

    async fn fetch_trending(&self) -> Result<Vec<TrendingEntry>, FetchError> {
        let request = self.client.get(self.settings.trending_url());
        let body = self.get_body(request, "trending coins").await?;
        parse_trending(&body)
    }
}

/// Decode a `/coins/markets` body. Anything but a JSON array is an error;
/// the result never holds more than `per_page` records.
pub fn parse_markets(body: &str, per_page: usize) -> Result<Vec<MarketCoin>, FetchError> {
    let value: Value = serde_json::from_str(body).map_err(|e| FetchError::Decode {
        what: "market listing",
        reason: e.to_string(),
    })?;
    if !value.is_array() {
        return Err(FetchError::NotAnArray("market listing"));
    }

    let mut coins: Vec<MarketCoin> =
        serde_json::from_value(value).map_err(|e| FetchError::Decode {
            what: "market listing",
            reason: e.to_string(),
        })?;
    coins.truncate(per_page);
    Ok(coins)
}

/// Decode a `/search/trending` body and return its `coins` array.
pub fn parse_trending(body: &str) -> Result<Vec<TrendingEntry>, FetchError> {
    let mut value: Value = serde_json::from_str(body).map_err(|e| FetchError::Decode {
        what: "trending coins",
        reason: e.to_string(),
    })?;

    let coins = match value.get_mut("coins").map(Value::take) {
        Some(coins @ Value::Array(_)) => coins,
        _ => return Err(FetchError::NotAnArray("trending coins")),
    };

    serde_json::from_value(coins).map_err(|e| FetchError::Decode {
        what: "trending coins",
        reason: e.to_string(),
    })
}
