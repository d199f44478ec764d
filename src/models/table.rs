use std::cmp::Ordering;

use strum_macros::{Display, EnumIter};

use crate::config::{COINGECKO, DF};
use crate::domain::MarketCoin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Sortable table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum SortKey {
    #[strum(to_string = "#")]
    Rank,
    Name,
    Price,
    #[strum(to_string = "24h Change")]
    Change24h,
    #[strum(to_string = "24h Volume")]
    Volume,
    #[strum(to_string = "Market Cap")]
    MarketCap,
}

/// A visible row. `rank` is the coin's absolute position in the listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow<'a> {
    pub rank: usize,
    pub coin: &'a MarketCoin,
}

/// Filter / sort / page state of the coin table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    page: u32,
    max_pages: u32,
    per_page: usize,
    query: String,
    sort: Option<(SortKey, SortDirection)>,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(COINGECKO.max_pages, COINGECKO.markets.per_page)
    }
}

impl TableState {
    pub fn new(max_pages: u32, per_page: usize) -> Self {
        Self {
            page: 1,
            max_pages: max_pages.max(1),
            per_page,
            query: String::new(),
            sort: None,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Direct handle for the search box.
    pub fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn sort(&self) -> Option<(SortKey, SortDirection)> {
        self.sort
    }

    /// New key sorts ascending; the same key again flips direction.
    pub fn select_sort(&mut self, key: SortKey) {
        self.sort = Some(match self.sort {
            Some((current, dir)) if current == key => (key, dir.toggle()),
            _ => (key, SortDirection::Ascending),
        });
        if DF.log_table {
            log::info!("Table sort now {:?}", self.sort);
        }
    }

    /// Back to fetched (market cap) order.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.max_pages
    }

    /// Move to `page` if it's in `[1, max_pages]` and not current. Filter and
    /// sort reset on every actual change. Returns whether the page changed.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if page < 1 || page > self.max_pages || page == self.page {
            return false;
        }
        self.page = page;
        self.query.clear();
        self.sort = None;
        if DF.log_table {
            log::info!("Table moved to page {}", page);
        }
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> bool {
        self.go_to_page(self.page.saturating_sub(1))
    }

    /// Filtered, sorted rows of the current page.
    pub fn rows<'a>(&self, coins: &'a [MarketCoin]) -> Vec<TableRow<'a>> {
        let offset = (self.page as usize - 1) * self.per_page;
        let mut indexed = filter_coins(coins, &self.query);
        if let Some((key, dir)) = self.sort {
            sort_coins(&mut indexed, key, dir);
        }
        indexed
            .into_iter()
            .map(|(idx, coin)| TableRow {
                rank: offset + idx + 1,
                coin,
            })
            .collect()
    }
}

/// Name or symbol contains `query`, case-insensitive.
pub fn matches_query(coin: &MarketCoin, needle_lower: &str) -> bool {
    coin.name.to_lowercase().contains(needle_lower)
        || coin.symbol.to_lowercase().contains(needle_lower)
}

/// Coins matching `query`, paired with their index in `coins`.
/// A blank query keeps everything.
pub fn filter_coins<'a>(coins: &'a [MarketCoin], query: &str) -> Vec<(usize, &'a MarketCoin)> {
    let needle = query.trim().to_lowercase();
    coins
        .iter()
        .enumerate()
        .filter(|(_, coin)| needle.is_empty() || matches_query(coin, &needle))
        .collect()
}

/// Stable sort; equal keys keep their fetched order in either direction.
pub fn sort_coins(rows: &mut [(usize, &MarketCoin)], key: SortKey, dir: SortDirection) {
    rows.sort_by(|a, b| {
        let ord = compare_by(key, a, b);
        match dir {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

fn compare_by(key: SortKey, a: &(usize, &MarketCoin), b: &(usize, &MarketCoin)) -> Ordering {
    let (a_idx, a) = a;
    let (b_idx, b) = b;
    match key {
        SortKey::Rank => a_idx.cmp(b_idx),
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Price => a.current_price.total_cmp(&b.current_price),
        SortKey::Change24h => a.change_or_zero().total_cmp(&b.change_or_zero()),
        SortKey::Volume => a.total_volume.total_cmp(&b.total_volume),
        SortKey::MarketCap => a.market_cap.total_cmp(&b.market_cap),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(id: &str, name: &str, symbol: &str, price: f64, change: Option<f64>) -> MarketCoin {
        MarketCoin {
            id: id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            image: String::new(),
            current_price: price,
            price_change_percentage_24h: change,
            total_volume: price * 10.0,
            market_cap: 1_000_000.0 - price,
            market_cap_rank: None,
            high_24h: None,
            low_24h: None,
            circulating_supply: None,
            last_updated: None,
        }
    }

    fn sample() -> Vec<MarketCoin> {
        vec![
            coin("bitcoin", "Bitcoin", "btc", 65000.0, Some(1.2)),
            coin("ethereum", "Ethereum", "eth", 3200.0, Some(-0.5)),
            coin("tether", "Tether", "usdt", 1.0, Some(0.0)),
            coin("wrapped-bitcoin", "Wrapped Bitcoin", "wbtc", 65000.0, None),
            coin("bitget-token", "Bitget Token", "bgb", 1.0, Some(4.0)),
            coin("solana", "Solana", "sol", 150.0, Some(3.3)),
        ]
    }

    fn ids(rows: &[TableRow<'_>]) -> Vec<String> {
        rows.iter().map(|r| r.coin.id.clone()).collect()
    }

    #[test]
    fn empty_query_returns_everything() {
        let coins = sample();
        let state = TableState::default();
        assert_eq!(state.rows(&coins).len(), coins.len());

        let mut blank = TableState::default();
        blank.set_query("   ");
        assert_eq!(blank.rows(&coins).len(), coins.len());
    }

    #[test]
    fn filter_matches_name_or_symbol_case_insensitive() {
        let coins = sample();
        let mut state = TableState::default();
        state.set_query("BIT");
        assert_eq!(
            ids(&state.rows(&coins)),
            vec!["bitcoin", "wrapped-bitcoin", "bitget-token"]
        );

        state.set_query("usdt");
        assert_eq!(ids(&state.rows(&coins)), vec!["tether"]);

        state.set_query("nothing-like-this");
        assert!(state.rows(&coins).is_empty());
    }

    #[test]
    fn every_filtered_row_contains_query() {
        let coins = sample();
        let mut state = TableState::default();
        for query in ["b", "T", "sol", "coin", "x"] {
            state.set_query(query);
            let needle = query.to_lowercase();
            for row in state.rows(&coins) {
                assert!(
                    row.coin.name.to_lowercase().contains(&needle)
                        || row.coin.symbol.to_lowercase().contains(&needle)
                );
            }
        }
    }

    #[test]
    fn same_key_toggles_ascending_descending_ascending() {
        let mut state = TableState::default();
        state.select_sort(SortKey::Price);
        assert_eq!(state.sort(), Some((SortKey::Price, SortDirection::Ascending)));
        state.select_sort(SortKey::Price);
        assert_eq!(state.sort(), Some((SortKey::Price, SortDirection::Descending)));
        state.select_sort(SortKey::Price);
        assert_eq!(state.sort(), Some((SortKey::Price, SortDirection::Ascending)));

        state.select_sort(SortKey::Name);
        assert_eq!(state.sort(), Some((SortKey::Name, SortDirection::Ascending)));
    }

    #[test]
    fn toggling_twice_restores_order() {
        let coins = sample();
        let mut state = TableState::default();
        state.select_sort(SortKey::Change24h);
        let first = ids(&state.rows(&coins));
        state.select_sort(SortKey::Change24h);
        state.select_sort(SortKey::Change24h);
        assert_eq!(ids(&state.rows(&coins)), first);
    }

    #[test]
    fn clear_sort_restores_fetched_order() {
        let coins = sample();
        let mut state = TableState::default();
        state.set_query("bit");
        let original = ids(&state.rows(&coins));

        state.select_sort(SortKey::Price);
        assert_eq!(
            ids(&state.rows(&coins)),
            vec!["bitget-token", "bitcoin", "wrapped-bitcoin"]
        );

        state.clear_sort();
        assert_eq!(ids(&state.rows(&coins)), original);
    }

    #[test]
    fn price_descending_then_ascending_then_clear_on_bit() {
        let coins = sample();
        let mut state = TableState::default();
        state.set_query("bit");
        let original = ids(&state.rows(&coins));
        assert_eq!(original, vec!["bitcoin", "wrapped-bitcoin", "bitget-token"]);

        state.select_sort(SortKey::Price);
        state.select_sort(SortKey::Price);
        assert_eq!(state.sort(), Some((SortKey::Price, SortDirection::Descending)));
        assert_eq!(ids(&state.rows(&coins)), original);

        state.select_sort(SortKey::Price);
        assert_eq!(state.sort(), Some((SortKey::Price, SortDirection::Ascending)));
        assert_eq!(
            ids(&state.rows(&coins)),
            vec!["bitget-token", "bitcoin", "wrapped-bitcoin"]
        );

        state.clear_sort();
        assert_eq!(state.sort(), None);
        assert_eq!(ids(&state.rows(&coins)), original);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let coins = sample();
        let mut state = TableState::default();

        state.select_sort(SortKey::Price);
        let asc = ids(&state.rows(&coins));
        // tether and bitget-token share a price; fetched order holds.
        assert_eq!(&asc[..2], &["tether", "bitget-token"]);

        state.select_sort(SortKey::Price);
        let desc = ids(&state.rows(&coins));
        assert_eq!(&desc[..2], &["bitcoin", "wrapped-bitcoin"]);
        assert_eq!(&desc[4..], &["tether", "bitget-token"]);
    }

    #[test]
    fn missing_change_sorts_as_zero() {
        let coins = sample();
        let mut state = TableState::default();
        state.select_sort(SortKey::Change24h);
        let asc = ids(&state.rows(&coins));
        assert_eq!(
            asc,
            vec![
                "ethereum",
                "tether",
                "wrapped-bitcoin",
                "bitcoin",
                "solana",
                "bitget-token"
            ]
        );
    }

    #[test]
    fn rank_sort_uses_fetched_position() {
        let coins = sample();
        let mut state = TableState::default();
        state.select_sort(SortKey::Rank);
        state.select_sort(SortKey::Rank);
        let rows = state.rows(&coins);
        assert_eq!(rows.first().map(|r| r.rank), Some(6));
        assert_eq!(rows.last().map(|r| r.rank), Some(1));
    }

    #[test]
    fn rank_is_absolute_across_pages() {
        let coins = sample();
        let mut state = TableState::new(20, 50);
        assert!(state.go_to_page(3));
        let rows = state.rows(&coins);
        assert_eq!(rows[0].rank, 101);
        assert_eq!(rows[5].rank, 106);
    }

    #[test]
    fn changing_page_resets_filter_and_sort() {
        let mut state = TableState::default();
        state.set_query("eth");
        state.select_sort(SortKey::Volume);

        assert!(state.next_page());
        assert_eq!(state.page(), 2);
        assert_eq!(state.query(), "");
        assert_eq!(state.sort(), None);

        state.set_query("sol");
        state.select_sort(SortKey::Name);
        assert!(state.prev_page());
        assert_eq!(state.query(), "");
        assert_eq!(state.sort(), None);
    }

    #[test]
    fn page_navigation_is_bounded() {
        let mut state = TableState::new(3, 50);
        assert!(!state.has_prev());
        assert!(!state.prev_page());
        assert!(!state.go_to_page(0));
        assert!(!state.go_to_page(4));
        assert_eq!(state.page(), 1);

        assert!(state.go_to_page(3));
        assert!(!state.has_next());
        assert!(!state.next_page());
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn staying_on_the_same_page_keeps_state() {
        let mut state = TableState::default();
        state.set_query("bit");
        state.select_sort(SortKey::Price);
        assert!(!state.go_to_page(1));
        assert_eq!(state.query(), "bit");
        assert!(state.sort().is_some());
    }
}
