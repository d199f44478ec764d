mod format;
mod perf;
mod time_utils;

pub use format::{
    format_compact, format_currency, format_grouped, format_pct, format_supply, truncate_name,
};
pub use time_utils::{AppInstant, format_api_timestamp, format_updated};
