use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const EVENT_DATE_FORMAT: &str = "%b %d, %Y";
    pub const LOCAL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
    pub const CLOCK_FORMAT: &str = "%H:%M";

    /// Naive timestamps written by the backend scrapers (no offset, UTC).
    const NAIVE_DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ];
    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

    pub fn now_timestamp_ms() -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A timestamp as far as it could be recovered from a loose string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LooseTime {
    /// Calendar date only. Never shifted across time zones.
    Date(NaiveDate),
    /// Full instant, already converted to local time.
    Instant(NaiveDateTime),
}

impl LooseTime {
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Date(d) => *d,
            Self::Instant(dt) => dt.date(),
        }
    }

    /// Sort key; date-only values sort as local midnight.
    pub fn sort_key(&self) -> NaiveDateTime {
        match self {
            Self::Date(d) => d.and_hms_opt(0, 0, 0).unwrap_or_default(),
            Self::Instant(dt) => *dt,
        }
    }
}

pub fn parse_loose_time(raw: &str) -> Option<LooseTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(LooseTime::Instant(dt.with_timezone(&Local).naive_local()));
    }

    for fmt in TimeUtils::NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            let local = Utc.from_utc_datetime(&naive).with_timezone(&Local);
            return Some(LooseTime::Instant(local.naive_local()));
        }
    }

    TimeUtils::DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .map(LooseTime::Date)
}

/// Calendar style date (`Mar 05, 2024`), or the raw text when it does not parse.
pub fn format_event_date(raw: &str) -> String {
    match parse_loose_time(raw) {
        Some(t) => t.date().format(TimeUtils::EVENT_DATE_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// Local date and time for push timestamps; `None` when unparseable.
pub fn format_local_datetime(raw: &str) -> Option<String> {
    parse_loose_time(raw).map(|t| match t {
        LooseTime::Date(d) => d.format("%Y-%m-%d").to_string(),
        LooseTime::Instant(dt) => dt.format(TimeUtils::LOCAL_DATETIME_FORMAT).to_string(),
    })
}

pub fn format_clock(at: &DateTime<Local>) -> String {
    at.format(TimeUtils::CLOCK_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_only_inputs_keep_their_day() {
        assert_eq!(format_event_date("2024-03-05"), "Mar 05, 2024");
        assert_eq!(format_event_date("05/03/2024"), "Mar 05, 2024");
        assert_eq!(
            parse_loose_time("2024-03-05"),
            Some(LooseTime::Date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()))
        );
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_event_date("next Tuesday"), "next Tuesday");
        assert_eq!(format_local_datetime("soon"), None);
        assert!(parse_loose_time("   ").is_none());
    }

    #[test]
    fn instants_parse_in_every_supported_shape() {
        assert!(matches!(
            parse_loose_time("2025-01-10T14:30:00Z"),
            Some(LooseTime::Instant(_))
        ));
        assert!(matches!(
            parse_loose_time("2025-01-10T14:30:00.123456"),
            Some(LooseTime::Instant(_))
        ));
        assert!(matches!(
            parse_loose_time("2025-01-10 14:30:00"),
            Some(LooseTime::Instant(_))
        ));
    }

    #[test]
    fn sort_key_orders_dates_before_later_instants() {
        let a = parse_loose_time("2024-01-01").unwrap();
        let b = parse_loose_time("2024-06-01").unwrap();
        assert!(a.sort_key() < b.sort_key());
    }
}
