//! Number and text formatting shared by every panel.

/// Groups the integer part with commas and renders exactly `decimals` fraction digits.
/// e.g. 1234567.891 with 2 decimals -> "1,234,567.89"
pub fn format_thousands(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let body = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    // Only show a minus sign if something non-zero survived the rounding.
    let rounds_to_zero = body.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !rounds_to_zero {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Locale-style number: thousands separators, up to 3 fraction digits, trailing zeros trimmed.
pub fn format_locale_number(value: f64) -> String {
    let s = format_thousands(value, 3);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Crypto card price: separators for large prices, plain 2dp otherwise.
pub fn format_price(price: f64) -> String {
    if price >= 1000.0 {
        format!("${}", format_thousands(price, 2))
    } else {
        format!("${:.2}", price)
    }
}

/// Currency style used on the ticker tape: always grouped, always 2dp.
pub fn format_usd(amount: f64) -> String {
    let s = format_thousands(amount, 2);
    match s.strip_prefix('-') {
        Some(rest) => format!("-${}", rest),
        None => format!("${}", s),
    }
}

/// `$1.23T` at or above a thousand billion, otherwise `$456.78B`.
pub fn format_market_cap(market_cap: f64) -> String {
    let billions = market_cap / 1_000_000_000.0;
    if billions >= 1000.0 {
        format!("${:.2}T", billions / 1000.0)
    } else {
        format!("${:.2}B", billions)
    }
}

pub fn format_signed(value: f64, decimals: usize) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{}{:.*}", sign, decimals, value)
}

pub fn format_signed_pct(value: f64) -> String {
    format!("{}%", format_signed(value, 2))
}

pub fn change_arrow(change: f64) -> &'static str {
    if change >= 0.0 { "↗" } else { "↘" }
}

/// Cuts `text` to `max_chars` characters and appends `...` when anything was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0.0, 2), "0.00");
        assert_eq!(format_thousands(999.0, 0), "999");
        assert_eq!(format_thousands(1000.0, 0), "1,000");
        assert_eq!(format_thousands(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_thousands(-98765.4, 1), "-98,765.4");
        assert_eq!(format_thousands(-0.001, 2), "0.00");
    }

    #[test]
    fn locale_number_trims_fraction() {
        assert_eq!(format_locale_number(1234.5), "1,234.5");
        assert_eq!(format_locale_number(83148335533.0), "83,148,335,533");
        assert_eq!(format_locale_number(0.12345), "0.123");
    }

    #[test]
    fn price_switches_style_at_one_thousand() {
        assert_eq!(format_price(999.5), "$999.50");
        assert_eq!(format_price(64123.456), "$64,123.46");
        assert_eq!(format_usd(187.1), "$187.10");
        assert_eq!(format_usd(-2.5), "-$2.50");
    }

    #[test]
    fn market_cap_units() {
        assert_eq!(format_market_cap(1_270_000_000_000.0), "$1.27T");
        assert_eq!(format_market_cap(415_500_000_000.0), "$415.50B");
        assert_eq!(format_market_cap(0.0), "$0.00B");
    }

    #[test]
    fn signed_values() {
        assert_eq!(format_signed(1.234, 2), "+1.23");
        assert_eq!(format_signed(0.0, 2), "+0.00");
        assert_eq!(format_signed(-3.0, 2), "-3.00");
        assert_eq!(format_signed_pct(-0.456), "-0.46%");
        assert_eq!(change_arrow(0.0), "↗");
        assert_eq!(change_arrow(-0.1), "↘");
    }

    #[test]
    fn truncation_is_char_aware() {
        assert_eq!(truncate_chars("short", 50), "short");
        assert_eq!(truncate_chars("abcdef", 3), "abc...");
        assert_eq!(truncate_chars("ééééé", 2), "éé...");
        assert_eq!(truncate_chars("abc", 3), "abc");
    }
}
