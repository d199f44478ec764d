use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use crate::config::COINGECKO;

/// One row of `/coins/markets`. An immutable snapshot at fetch time.
/// Null numbers read as zero and a null image as empty.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketCoin {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub image: String,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub current_price: f64,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub total_volume: f64,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub market_cap: f64,

    // Extras shown in the detail overlay when present.
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub high_24h: Option<f64>,
    #[serde(default)]
    pub low_24h: Option<f64>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl MarketCoin {
    /// Missing 24h change counts as flat wherever a number is needed.
    pub fn change_or_zero(&self) -> f64 {
        self.price_change_percentage_24h.unwrap_or(0.0)
    }
}

/// Element of the `/search/trending` `coins` array: `{ "item": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingEntry {
    pub item: TrendingItem,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingItem {
    pub id: String,
    #[serde(default)]
    pub coin_id: Option<u64>,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub thumb: String,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub data: Option<TrendingData>,
}

/// Price block nested in a trending item. Market cap and volume arrive
/// pre-formatted (e.g. `"$1,234,567"`). Individual currencies may be null.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrendingData {
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub price_change_percentage_24h: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub market_cap: Option<String>,
    #[serde(default)]
    pub total_volume: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinSource {
    Market,
    Trending { score: Option<u32> },
}

/// The shape every view renders. Both API shapes normalize into this.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinView {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub current_price: Option<f64>,
    pub change_24h: Option<f64>,
    pub total_volume: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_rank: Option<u32>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub last_updated: Option<String>,
    pub source: CoinSource,
}

impl CoinView {
    pub fn ticker(&self) -> String {
        self.symbol.to_uppercase()
    }

    pub fn change_or_zero(&self) -> f64 {
        self.change_24h.unwrap_or(0.0)
    }

    /// Normalize a trending envelope, reading the 24h change for `vs_currency`.
    pub fn from_trending(entry: &TrendingEntry, vs_currency: &str) -> Self {
        let item = &entry.item;
        let data = item.data.as_ref();
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            symbol: item.symbol.clone(),
            image: item
                .large
                .clone()
                .or_else(|| item.small.clone())
                .unwrap_or_else(|| item.thumb.clone()),
            current_price: data.and_then(|d| d.price),
            change_24h: data.and_then(|d| {
                d.price_change_percentage_24h
                    .get(&vs_currency.to_lowercase())
                    .copied()
                    .flatten()
            }),
            total_volume: data
                .and_then(|d| d.total_volume.as_deref())
                .and_then(parse_money),
            market_cap: data
                .and_then(|d| d.market_cap.as_deref())
                .and_then(parse_money),
            market_cap_rank: item.market_cap_rank,
            high_24h: None,
            low_24h: None,
            circulating_supply: None,
            last_updated: None,
            source: CoinSource::Trending { score: item.score },
        }
    }
}

impl From<&MarketCoin> for CoinView {
    fn from(coin: &MarketCoin) -> Self {
        Self {
            id: coin.id.clone(),
            name: coin.name.clone(),
            symbol: coin.symbol.clone(),
            image: coin.image.clone(),
            current_price: Some(coin.current_price),
            change_24h: coin.price_change_percentage_24h,
            total_volume: Some(coin.total_volume),
            market_cap: Some(coin.market_cap),
            market_cap_rank: coin.market_cap_rank,
            high_24h: coin.high_24h,
            low_24h: coin.low_24h,
            circulating_supply: coin.circulating_supply,
            last_updated: coin.last_updated.clone(),
            source: CoinSource::Market,
        }
    }
}

impl From<&TrendingEntry> for CoinView {
    fn from(entry: &TrendingEntry) -> Self {
        Self::from_trending(entry, COINGECKO.markets.vs_currency)
    }
}

/// Parse a pre-formatted amount such as `"$1,234,567.89"`.
pub fn parse_money(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKET_JSON: &str = r#"{
        "id": "bitcoin",
        "symbol": "btc",
        "name": "Bitcoin",
        "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
        "current_price": 67123.5,
        "market_cap": 1320000000000,
        "market_cap_rank": 1,
        "total_volume": 28000000000,
        "high_24h": 68000.0,
        "low_24h": 66000.0,
        "price_change_percentage_24h": -1.25,
        "circulating_supply": 19700000.0,
        "last_updated": "2024-05-01T12:00:00.000Z"
    }"#;

    const TRENDING_JSON: &str = r#"{
        "item": {
            "id": "pepe",
            "coin_id": 29850,
            "name": "Pepe",
            "symbol": "PEPE",
            "market_cap_rank": 24,
            "thumb": "https://assets.coingecko.com/coins/images/29850/thumb/pepe.jpg",
            "small": "https://assets.coingecko.com/coins/images/29850/small/pepe.jpg",
            "large": "https://assets.coingecko.com/coins/images/29850/large/pepe.jpg",
            "score": 0,
            "data": {
                "price": 0.0000123,
                "price_change_percentage_24h": { "usd": 12.5, "eur": 12.1 },
                "market_cap": "$5,172,000,000",
                "total_volume": "$1,048,000,000"
            }
        }
    }"#;

    #[test]
    fn market_coin_parses_full_record() {
        let coin: MarketCoin = serde_json::from_str(MARKET_JSON).unwrap();
        assert_eq!(coin.id, "bitcoin");
        assert_eq!(coin.market_cap_rank, Some(1));
        assert_eq!(coin.price_change_percentage_24h, Some(-1.25));
        assert_eq!(coin.market_cap, 1_320_000_000_000.0);
    }

    #[test]
    fn market_coin_tolerates_nulls_and_missing_change() {
        let json = r#"{
            "id": "newcoin", "symbol": "new", "name": "New Coin", "image": "",
            "current_price": null, "market_cap": null, "total_volume": 10.0,
            "price_change_percentage_24h": null
        }"#;
        let coin: MarketCoin = serde_json::from_str(json).unwrap();
        assert_eq!(coin.current_price, 0.0);
        assert_eq!(coin.market_cap, 0.0);
        assert_eq!(coin.price_change_percentage_24h, None);
        assert_eq!(coin.change_or_zero(), 0.0);
    }

    #[test]
    fn market_coin_normalizes() {
        let coin: MarketCoin = serde_json::from_str(MARKET_JSON).unwrap();
        let view = CoinView::from(&coin);
        assert_eq!(view.ticker(), "BTC");
        assert_eq!(view.current_price, Some(67123.5));
        assert_eq!(view.change_24h, Some(-1.25));
        assert_eq!(view.source, CoinSource::Market);
    }

    #[test]
    fn trending_entry_unwraps_envelope() {
        let entry: TrendingEntry = serde_json::from_str(TRENDING_JSON).unwrap();
        let view = CoinView::from(&entry);
        assert_eq!(view.id, "pepe");
        assert_eq!(view.name, "Pepe");
        assert_eq!(view.change_24h, Some(12.5));
        assert_eq!(view.market_cap, Some(5_172_000_000.0));
        assert_eq!(view.total_volume, Some(1_048_000_000.0));
        assert!(view.image.contains("/large/"));
        assert_eq!(view.source, CoinSource::Trending { score: Some(0) });

        let in_eur = CoinView::from_trending(&entry, "EUR");
        assert_eq!(in_eur.change_24h, Some(12.1));
    }

    #[test]
    fn trending_entry_without_data_block() {
        let json = r#"{ "item": { "id": "x", "name": "X Token", "symbol": "X", "thumb": "t.png" } }"#;
        let entry: TrendingEntry = serde_json::from_str(json).unwrap();
        let view = CoinView::from(&entry);
        assert_eq!(view.image, "t.png");
        assert_eq!(view.current_price, None);
        assert_eq!(view.change_24h, None);
        assert_eq!(view.change_or_zero(), 0.0);
    }

    #[test]
    fn market_coin_tolerates_null_image() {
        let json = r#"{
            "id": "ghost", "symbol": "gst", "name": "Ghost", "image": null,
            "current_price": 2.5, "market_cap": 100.0, "total_volume": 10.0
        }"#;
        let coin: MarketCoin = serde_json::from_str(json).unwrap();
        assert_eq!(coin.image, "");
        assert_eq!(coin.current_price, 2.5);
        assert_eq!(CoinView::from(&coin).image, "");
    }

    #[test]
    fn trending_tolerates_null_per_currency_change() {
        let json = r#"{ "item": {
            "id": "pepe", "name": "Pepe", "symbol": "PEPE", "thumb": null,
            "data": { "price": 0.00001, "price_change_percentage_24h": { "usd": 3.0, "xyz": null } }
        } }"#;
        let entry: TrendingEntry = serde_json::from_str(json).unwrap();
        assert_eq!(CoinView::from_trending(&entry, "usd").change_24h, Some(3.0));
        assert_eq!(CoinView::from_trending(&entry, "xyz").change_24h, None);
        assert_eq!(CoinView::from(&entry).image, "");

        let whole_map_null = r#"{ "item": {
            "id": "x", "name": "X", "symbol": "X",
            "data": { "price_change_percentage_24h": null }
        } }"#;
        let entry: TrendingEntry = serde_json::from_str(whole_map_null).unwrap();
        assert_eq!(CoinView::from(&entry).change_24h, None);
    }

    #[test]
    fn parse_money_strips_formatting() {
        assert_eq!(parse_money("$1,234,567.50"), Some(1_234_567.5));
        assert_eq!(parse_money("$0.0001"), Some(0.0001));
        assert_eq!(parse_money("n/a"), None);
    }
}
