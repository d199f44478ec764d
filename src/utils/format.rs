//! Number formatting for prices, volumes and percentages.

use thousands::Separable;

/// Fixed-point with grouped integer part: `1234567.891, 2` -> `1,234,567.89`.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    // No sign when rounding leaves only zeros.
    let sign = if value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        "-"
    } else {
        ""
    };
    format!("{}{}", sign, fixed.separate_with_commas())
}

/// Price with precision by magnitude.
/// - `>= 1`: 2 decimals (`$65,012.50`)
/// - `< 1`: enough decimals for three significant digits, max 10 (`$0.0000123`)
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    if abs == 0.0 {
        return "$0.00".to_string();
    }
    if abs >= 1.0 {
        return format!("{}${}", sign, format_grouped(abs, 2));
    }

    let decimals = ((-abs.log10().floor()) as usize + 2).clamp(2, 10);
    let fixed = format!("{:.*}", decimals, abs);
    let trimmed = trim_fraction(&fixed, 2);
    format!("{}${}", sign, trimmed)
}

/// Drop trailing zeros but keep at least `min_decimals`.
fn trim_fraction(fixed: &str, min_decimals: usize) -> String {
    let Some((int_part, frac)) = fixed.split_once('.') else {
        return fixed.to_string();
    };
    let mut frac = frac.trim_end_matches('0').to_string();
    while frac.len() < min_decimals {
        frac.push('0');
    }
    format!("{}.{}", int_part, frac)
}

/// Large amounts in short form: `$1.32T`, `$28.00B`, `$456.70M`, `$12.30K`.
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    let (scaled, suffix) = if abs >= 1e12 {
        (abs / 1e12, "T")
    } else if abs >= 1e9 {
        (abs / 1e9, "B")
    } else if abs >= 1e6 {
        (abs / 1e6, "M")
    } else if abs >= 1e3 {
        (abs / 1e3, "K")
    } else {
        return format_currency(value);
    };
    format!("{}${:.2}{}", sign, scaled, suffix)
}

/// Signed two-decimal percentage; blank when the API didn't send one.
pub fn format_pct(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:+.2}%", v),
        _ => String::new(),
    }
}

pub fn format_supply(value: f64) -> String {
    format_grouped(value, 0)
}

/// Character-aware truncation with a trailing ellipsis.
pub fn truncate_name(name: &str, max_chars: usize) -> String {
    if name.chars().count() > max_chars {
        let head: String = name.chars().take(max_chars).collect();
        format!("{}…", head)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(65012.5), "$65,012.50");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(1.0), "$1.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn currency_keeps_small_prices_readable() {
        assert_eq!(format_currency(0.5), "$0.50");
        assert_eq!(format_currency(0.0123), "$0.0123");
        assert_eq!(format_currency(0.0000123), "$0.0000123");
        assert_eq!(format_currency(-0.25), "-$0.25");
    }

    #[test]
    fn compact_picks_suffix() {
        assert_eq!(format_compact(1.32e12), "$1.32T");
        assert_eq!(format_compact(28e9), "$28.00B");
        assert_eq!(format_compact(456_700_000.0), "$456.70M");
        assert_eq!(format_compact(12_300.0), "$12.30K");
        assert_eq!(format_compact(950.0), "$950.00");
    }

    #[test]
    fn pct_is_signed_or_blank() {
        assert_eq!(format_pct(Some(1.234)), "+1.23%");
        assert_eq!(format_pct(Some(-0.5)), "-0.50%");
        assert_eq!(format_pct(None), "");
        assert_eq!(format_pct(Some(f64::NAN)), "");
    }

    #[test]
    fn grouped_handles_negatives_and_whole_numbers() {
        assert_eq!(format_grouped(-1234.5, 1), "-1,234.5");
        assert_eq!(format_supply(19_700_000.4), "19,700,000");
        assert_eq!(format_grouped(-0.001, 2), "0.00");
        assert_eq!(format_grouped(100.0, 0), "100");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_name("Bitcoin", 10), "Bitcoin");
        assert_eq!(truncate_name("Wrapped Bitcoin", 10), "Wrapped Bi…");
        assert_eq!(truncate_name("ÄÖÜäöüßéèê_x", 10), "ÄÖÜäöüßéèê…");
    }
}
