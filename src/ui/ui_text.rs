use std::sync::LazyLock;

use crate::config::DASHBOARD;

pub const ICON_SORT_ASC: &str = "⏶";
pub const ICON_SORT_DESC: &str = "⏷";
pub const ICON_SORT: &str = "⬍"; // (Sort Neutral)
pub const ICON_CLOSE: &str = "✖";
pub const ICON_SEARCH: &str = "🔍";
pub const ICON_REFRESH: &str = "⟳";
pub const ICON_WARNING: &str = "⚠";
pub const ICON_TRENDING: &str = "🔥";
pub const ICON_GAINERS: &str = "📈";
pub const ICON_LOSERS: &str = "📉";
pub const ICON_VOLUME: &str = "📊";

pub struct UiText {
    pub app_title: String,
    pub highlights_title: String,

    pub icon_close: String,
    pub icon_sort_asc: String,
    pub icon_sort_desc: String,
    pub icon_sort: String,
    pub icon_refresh: String,

    // --- Highlights ---
    pub icon_trending: String,
    pub icon_gainers: String,
    pub icon_losers: String,
    pub icon_volume: String,
    pub hl_show_more: String,
    pub hl_show_less: String,
    pub hl_loading: String,
    pub hl_empty: String,

    // --- Coin table ---
    pub tbl_search_hint: String,
    pub tbl_clear_sort: String,
    pub tbl_loading: String,
    pub tbl_no_matches: String,
    pub tbl_prev: String,
    pub tbl_next: String,
    pub tbl_refresh_hover: String,
    pub tbl_updated: String,
    pub tbl_page: String,
    pub tbl_sort_hover: String,

    // --- Errors ---
    pub error_load_coins: String,
    pub error_load_highlights: String,
    pub error_rate_limited: String,
    pub label_retry: String,

    // --- Detail overlay ---
    pub ov_price: String,
    pub ov_change: String,
    pub ov_volume: String,
    pub ov_market_cap: String,
    pub ov_rank: String,
    pub ov_high: String,
    pub ov_low: String,
    pub ov_supply: String,
    pub ov_updated: String,
    pub ov_source_market: String,
    pub ov_source_trending: String,
    pub ov_close_hint: String,
    pub ov_not_available: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: format!("🪙 {}", DASHBOARD.title),
    highlights_title: "📊 Highlights".to_string(),

    icon_close: ICON_CLOSE.to_string(),
    icon_sort_asc: ICON_SORT_ASC.to_string(),
    icon_sort_desc: ICON_SORT_DESC.to_string(),
    icon_sort: ICON_SORT.to_string(),
    icon_refresh: ICON_REFRESH.to_string(),

    icon_trending: ICON_TRENDING.to_string(),
    icon_gainers: ICON_GAINERS.to_string(),
    icon_losers: ICON_LOSERS.to_string(),
    icon_volume: ICON_VOLUME.to_string(),
    hl_show_more: "Show More".to_string(),
    hl_show_less: "Show Less".to_string(),
    hl_loading: "Loading highlights...".to_string(),
    hl_empty: "Nothing to show".to_string(),

    tbl_search_hint: format!("{} Search name or symbol", ICON_SEARCH),
    tbl_clear_sort: "Clear sort".to_string(),
    tbl_loading: "Loading...".to_string(),
    tbl_no_matches: "No coins match your search.".to_string(),
    tbl_prev: "Previous".to_string(),
    tbl_next: "Next".to_string(),
    tbl_refresh_hover: "Fetch this page again".to_string(),
    tbl_updated: "Updated".to_string(),
    tbl_page: "Page".to_string(),
    tbl_sort_hover: "Click to sort, again to flip direction".to_string(),

    error_load_coins: "Failed to load coins".to_string(),
    error_load_highlights: "Unable to fetch highlights".to_string(),
    error_rate_limited: "CoinGecko rate limit hit. Wait a minute, then retry.".to_string(),
    label_retry: format!("{} Retry", ICON_REFRESH),

    ov_price: "Price".to_string(),
    ov_change: "24h Change".to_string(),
    ov_volume: "24h Volume".to_string(),
    ov_market_cap: "Market Cap".to_string(),
    ov_rank: "Market Cap Rank".to_string(),
    ov_high: "24h High".to_string(),
    ov_low: "24h Low".to_string(),
    ov_supply: "Circulating Supply".to_string(),
    ov_updated: "Last Updated".to_string(),
    ov_source_market: "Market listing".to_string(),
    ov_source_trending: "Trending".to_string(),
    ov_close_hint: "Esc or click outside to close".to_string(),
    ov_not_available: "-".to_string(),
});
