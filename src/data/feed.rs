use chrono::{DateTime, Local};
use poll_promise::Promise;

use crate::config::DF;
use crate::data::{FetchError, FetchSpawner, MarketDataProvider, SharedProvider};
use crate::domain::{MarketCoin, TrendingEntry};

/// One fetched listing page.
#[derive(Debug, Clone)]
pub struct MarketPage {
    pub page: u32,
    pub coins: Vec<MarketCoin>,
    pub fetched_at: DateTime<Local>,
}

/// Raw inputs for the highlights panels: trending list plus the first market page.
#[derive(Debug, Clone)]
pub struct HighlightsData {
    pub trending: Vec<TrendingEntry>,
    pub market: Vec<MarketCoin>,
    pub fetched_at: DateTime<Local>,
}

pub async fn load_page<P>(provider: &P, page: u32) -> Result<MarketPage, FetchError>
where
    P: MarketDataProvider + ?Sized,
{
    let coins = provider.fetch_markets(page).await.inspect_err(|e| {
        log::warn!("Failed to fetch market page {}: {}", page, e);
    })?;
    if DF.log_fetch {
        log::info!("Market page {} loaded with {} coins", page, coins.len());
    }
    Ok(MarketPage {
        page,
        coins,
        fetched_at: Local::now(),
    })
}

/// Both requests go out together; either failing fails the whole load.
pub async fn load_highlights<P>(provider: &P) -> Result<HighlightsData, FetchError>
where
    P: MarketDataProvider + ?Sized,
{
    let (trending, market) =
        futures::try_join!(provider.fetch_trending(), provider.fetch_markets(1)).inspect_err(
            |e| {
                log::warn!("Failed to fetch highlights: {}", e);
            },
        )?;
    if DF.log_fetch {
        log::info!(
            "Highlights loaded: {} trending, {} market coins",
            trending.len(),
            market.len()
        );
    }
    Ok(HighlightsData {
        trending,
        market,
        fetched_at: Local::now(),
    })
}

/// Issues fetches against a provider and returns promises for the UI to poll.
#[derive(Clone)]
pub struct MarketFeed {
    provider: SharedProvider,
    spawner: FetchSpawner,
}

impl MarketFeed {
    pub fn new(provider: SharedProvider, spawner: FetchSpawner) -> Self {
        Self { provider, spawner }
    }

    pub fn request_page(&self, page: u32) -> Promise<Result<MarketPage, FetchError>> {
        let provider = self.provider.clone();
        self.spawner
            .spawn(async move { load_page(provider.as_ref(), page).await })
    }

    pub fn request_highlights(&self) -> Promise<Result<HighlightsData, FetchError>> {
        let provider = self.provider.clone();
        self.spawner
            .spawn(async move { load_highlights(provider.as_ref()).await })
    }
}
