//! Display formatting for prices and timestamps
//!
//! Output matches the en-US formatting the services page uses. Date
//! formatting is fail-soft like the loader: an unparseable timestamp is
//! returned verbatim rather than erroring.

use chrono::NaiveDateTime;

/// Format an amount as en-US currency, e.g. `$1,234.56`
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    format!(
        "{}${}.{:02}",
        if negative { "-" } else { "" },
        group_thousands(whole),
        fraction
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Format an ISO 8601 timestamp in long en-US form,
/// e.g. `January 5, 2026 at 02:30 PM`
pub fn format_date(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(dt) => dt.format("%B %-d, %Y at %I:%M %p").to_string(),
        None => timestamp.to_string(),
    }
}

/// Accepts the shapes the backend emits: RFC 3339 with offset, naive
/// datetime (Python `isoformat()`), or a bare date
fn parse_timestamp(timestamp: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(timestamp, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping_and_cents() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(50.0), "$50.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1234567.89), "$1,234,567.89");
    }

    #[test]
    fn test_currency_rounds_to_cents() {
        assert_eq!(format_currency(19.999), "$20.00");
        assert_eq!(format_currency(-5.25), "-$5.25");
    }

    #[test]
    fn test_date_naive_isoformat() {
        assert_eq!(
            format_date("2026-01-05T14:30:00"),
            "January 5, 2026 at 02:30 PM"
        );
    }

    #[test]
    fn test_date_bare_date() {
        assert_eq!(
            format_date("2026-08-30"),
            "August 30, 2026 at 12:00 AM"
        );
    }

    #[test]
    fn test_unparseable_date_falls_back_to_input() {
        assert_eq!(format_date("not a date"), "not a date");
        assert_eq!(format_date(""), "");
    }
}
