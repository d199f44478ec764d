mod coin;

pub use coin::{
    CoinSource, CoinView, MarketCoin, TrendingData, TrendingEntry, TrendingItem, parse_money,
};
