use thiserror::Error;

/// Everything that can go wrong between issuing a request and holding parsed records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("unexpected response: {0} is not an array")]
    NotAnArray(&'static str),

    #[error("could not decode {what}: {reason}")]
    Decode { what: &'static str, reason: String },
}

impl FetchError {
    /// CoinGecko's free tier answers 429 when hammered.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Status { status: 429, .. })
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Status {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => Self::Network(err.to_string()),
        }
    }
}
