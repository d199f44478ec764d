//! CoinGecko public API configuration.

/// Query parameters sent with every market listing request.
pub struct MarketsQuery {
    pub vs_currency: &'static str,
    pub order: &'static str,
    /// Records per page. Also the hard cap on rows the table will render.
    pub per_page: usize,
    pub price_change_window: &'static str,
}

pub struct Endpoints {
    pub markets: &'static str,
    pub trending: &'static str,
}

pub struct ClientDefaults {
    pub timeout_secs: u64,
    pub user_agent: &'static str,
}

pub struct CoinGeckoConfig {
    pub base_url: &'static str,
    pub endpoints: Endpoints,
    pub markets: MarketsQuery,
    /// Page navigation upper bound. CoinGecko doesn't return a total count.
    pub max_pages: u32,
    pub client: ClientDefaults,
}

pub const COINGECKO: CoinGeckoConfig = CoinGeckoConfig {
    base_url: "https://api.coingecko.com/api/v3",
    endpoints: Endpoints {
        markets: "/coins/markets",
        trending: "/search/trending",
    },
    markets: MarketsQuery {
        vs_currency: "usd",
        order: "market_cap_desc",
        per_page: 50,
        price_change_window: "24h",
    },
    max_pages: 20,
    client: ClientDefaults {
        timeout_secs: 20, // CoinGecko free tier can be slow
        user_agent: concat!("coin-dashboard/", env!("CARGO_PKG_VERSION")),
    },
};

/// Runtime-overridable API settings (CLI on native, defaults on wasm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub base_url: String,
    pub vs_currency: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: COINGECKO.base_url.to_string(),
            vs_currency: COINGECKO.markets.vs_currency.to_string(),
        }
    }
}

impl ApiSettings {
    pub fn markets_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            COINGECKO.endpoints.markets
        )
    }

    pub fn trending_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            COINGECKO.endpoints.trending
        )
    }

    /// Query pairs for one page of the market listing.
    pub fn markets_query(&self, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("vs_currency", self.vs_currency.clone()),
            ("order", COINGECKO.markets.order.to_string()),
            ("per_page", COINGECKO.markets.per_page.to_string()),
            ("page", page.to_string()),
            (
                "price_change_percentage",
                COINGECKO.markets.price_change_window.to_string(),
            ),
        ]
    }

    pub fn currency_label(&self) -> String {
        self.vs_currency.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_tolerate_trailing_slash() {
        let settings = ApiSettings {
            base_url: "http://localhost:8080/api/v3/".to_string(),
            vs_currency: "eur".to_string(),
        };
        assert_eq!(
            settings.markets_url(),
            "http://localhost:8080/api/v3/coins/markets"
        );
        assert_eq!(
            settings.trending_url(),
            "http://localhost:8080/api/v3/search/trending"
        );
    }

    #[test]
    fn markets_query_carries_page_and_currency() {
        let settings = ApiSettings::default();
        let query = settings.markets_query(7);
        assert!(query.contains(&("page", "7".to_string())));
        assert!(query.contains(&("vs_currency", "usd".to_string())));
        assert!(query.contains(&("per_page", "50".to_string())));
        assert!(query.contains(&("order", "market_cap_desc".to_string())));
        assert!(query.contains(&("price_change_percentage", "24h".to_string())));
    }
}
