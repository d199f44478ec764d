#![allow(clippy::collapsible_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

pub use app::App;
pub use config::ApiSettings;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CoinGecko API root, e.g. a local mock server
    #[arg(long, default_value = config::COINGECKO.base_url)]
    pub api_base_url: String,

    /// Quote currency for prices and 24h change
    #[arg(long, default_value = config::COINGECKO.markets.vs_currency)]
    pub vs_currency: String,
}

impl Default for Cli {
    fn default() -> Self {
        let defaults = ApiSettings::default();
        Self {
            api_base_url: defaults.base_url,
            vs_currency: defaults.vs_currency,
        }
    }
}

impl Cli {
    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            base_url: self.api_base_url.clone(),
            vs_currency: self.vs_currency.to_lowercase(),
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<App> {
    App::new(cc, args)
}
