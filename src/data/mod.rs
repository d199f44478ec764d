mod cache;
mod error;
mod feed;
mod provider;
mod spawner;

pub use {
    cache::{FetchSlot, PageCache},
    error::FetchError,
    feed::{HighlightsData, MarketFeed, MarketPage, load_highlights, load_page},
    provider::{
        CoinGeckoProvider, MarketDataProvider, SharedProvider, parse_markets, parse_trending,
        share_provider,
    },
    spawner::FetchSpawner,
};
