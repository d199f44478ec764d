//! Configuration module for the coin dashboard.

// Can all be private now because we have a public re-export.
mod coingecko;
mod dashboard;
mod debug;

// Re-export commonly used items
pub use coingecko::{ApiSettings, COINGECKO, CoinGeckoConfig};
pub use dashboard::{DASHBOARD, DashboardConfig};
pub use debug::DF;
