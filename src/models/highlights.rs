use strum_macros::{Display, EnumIter};

use crate::config::DASHBOARD;
use crate::domain::{CoinView, MarketCoin, TrendingEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum HighlightKind {
    #[strum(to_string = "Trending Coins")]
    Trending,
    #[strum(to_string = "Top Gainers")]
    Gainers,
    #[strum(to_string = "Top Losers")]
    Losers,
    #[strum(to_string = "Highest Volume")]
    Volume,
}

/// One ranked card list with its "show more" toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightList {
    pub kind: HighlightKind,
    coins: Vec<CoinView>,
    expanded: bool,
    initial_count: usize,
}

impl HighlightList {
    pub fn new(kind: HighlightKind, coins: Vec<CoinView>, initial_count: usize) -> Self {
        Self {
            kind,
            coins,
            expanded: false,
            initial_count,
        }
    }

    pub fn visible(&self) -> &[CoinView] {
        if self.expanded {
            &self.coins
        } else {
            &self.coins[..self.initial_count.min(self.coins.len())]
        }
    }

    pub fn all(&self) -> &[CoinView] {
        &self.coins
    }

    pub fn has_more(&self) -> bool {
        self.coins.len() > self.initial_count
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        if self.has_more() {
            self.expanded = !self.expanded;
        }
    }
}

/// The four highlight lists derived from one trending fetch and one market page.
#[derive(Debug, Clone, PartialEq)]
pub struct Highlights {
    lists: Vec<HighlightList>,
}

impl Highlights {
    pub fn derive(
        trending: &[TrendingEntry],
        market: &[MarketCoin],
        vs_currency: &str,
        initial_count: usize,
    ) -> Self {
        let trending = trending
            .iter()
            .map(|entry| CoinView::from_trending(entry, vs_currency))
            .collect();
        Self {
            lists: vec![
                HighlightList::new(HighlightKind::Trending, trending, initial_count),
                HighlightList::new(HighlightKind::Gainers, top_gainers(market), initial_count),
                HighlightList::new(HighlightKind::Losers, top_losers(market), initial_count),
                HighlightList::new(HighlightKind::Volume, highest_volume(market), initial_count),
            ],
        }
    }

    pub fn with_defaults(trending: &[TrendingEntry], market: &[MarketCoin], vs_currency: &str) -> Self {
        Self::derive(
            trending,
            market,
            vs_currency,
            DASHBOARD.highlights.initial_count,
        )
    }

    pub fn lists(&self) -> &[HighlightList] {
        &self.lists
    }

    pub fn list(&self, kind: HighlightKind) -> Option<&HighlightList> {
        self.lists.iter().find(|l| l.kind == kind)
    }

    pub fn toggle(&mut self, kind: HighlightKind) {
        if let Some(list) = self.lists.iter_mut().find(|l| l.kind == kind) {
            list.toggle();
        }
    }
}

/// Market page by 24h change, biggest rise first.
pub fn top_gainers(market: &[MarketCoin]) -> Vec<CoinView> {
    ranked(market, |a, b| b.change_or_zero().total_cmp(&a.change_or_zero()))
}

/// Market page by 24h change, biggest fall first.
pub fn top_losers(market: &[MarketCoin]) -> Vec<CoinView> {
    ranked(market, |a, b| a.change_or_zero().total_cmp(&b.change_or_zero()))
}

pub fn highest_volume(market: &[MarketCoin]) -> Vec<CoinView> {
    ranked(market, |a, b| b.total_volume.total_cmp(&a.total_volume))
}

fn ranked<F>(market: &[MarketCoin], compare: F) -> Vec<CoinView>
where
    F: Fn(&MarketCoin, &MarketCoin) -> std::cmp::Ordering,
{
    let mut sorted: Vec<&MarketCoin> = market.iter().collect();
    sorted.sort_by(|a, b| compare(a, b));
    sorted.into_iter().map(CoinView::from).collect()
}
