use chrono::{DateTime, Local};

/// Monotonic clock that also works in the browser.
pub type AppInstant = web_time::Instant;

pub const STANDARD_TIME_FORMAT: &str = "%H:%M:%S";
pub const STANDARD_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// When a snapshot was fetched, e.g. `14:03:27`.
pub fn format_updated(at: &DateTime<Local>) -> String {
    at.format(STANDARD_TIME_FORMAT).to_string()
}

/// CoinGecko `last_updated` (RFC 3339) in local time. Unparseable input is shown as-is.
pub fn format_api_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt
            .with_timezone(&Local)
            .format(STANDARD_DATE_TIME_FORMAT)
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn updated_is_clock_time() {
        let at = Local.with_ymd_and_hms(2024, 5, 1, 9, 5, 7).unwrap();
        assert_eq!(format_updated(&at), "09:05:07");
    }

    #[test]
    fn bad_api_timestamp_passes_through() {
        assert_eq!(format_api_timestamp("yesterday"), "yesterday");
        assert_eq!(format_api_timestamp("2024-05-01T12:00:00.000Z").len(), 16);
    }
}
