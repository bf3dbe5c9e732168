//! Economic calendar events.
//!
//! The calendar file is whatever the fetcher dumped, so events are read field by
//! field through alias lists rather than a fixed schema.

use serde::Serialize;
use serde_json::{Map, Value};
use strum_macros::Display;

use super::lenient::value_as_text;
use crate::utils::{format_event_date, parse_loose_time};

const TITLE_KEYS: &[&str] = &["title", "event", "name", "description"];
const DATE_KEYS: &[&str] = &["date", "time", "datetime", "timestamp"];
const IMPACT_KEYS: &[&str] = &["impact", "importance", "priority"];
const COUNTRY_KEYS: &[&str] = &["country", "region"];
const ACTUAL_KEYS: &[&str] = &["actual", "actualValue"];
const FORECAST_KEYS: &[&str] = &["forecast", "forecastValue", "expected"];
const LINK_KEYS: &[&str] = &["link", "url"];

pub const DEFAULT_EVENT_TITLE: &str = "Economic Event";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EconomicEvent {
    pub title: String,
    pub date: Option<String>,
    pub impact: Option<String>,
    pub country: Option<String>,
    pub actual: Option<String>,
    pub forecast: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ImpactLevel {
    High,
    Medium,
    Low,
    Unknown,
}

impl ImpactLevel {
    pub fn classify(impact: &str) -> Self {
        let lower = impact.to_lowercase();
        if lower.contains("high") {
            Self::High
        } else if lower.contains("medium") {
            Self::Medium
        } else if lower.contains("low") {
            Self::Low
        } else {
            Self::Unknown
        }
    }
}

fn first_text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find_map(value_as_text)
}

impl EconomicEvent {
    /// Reads one event; anything that is not a JSON object is skipped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            title: first_text(obj, TITLE_KEYS).unwrap_or_else(|| DEFAULT_EVENT_TITLE.to_string()),
            date: first_text(obj, DATE_KEYS),
            impact: first_text(obj, IMPACT_KEYS),
            country: first_text(obj, COUNTRY_KEYS),
            actual: first_text(obj, ACTUAL_KEYS),
            forecast: first_text(obj, FORECAST_KEYS),
            link: first_text(obj, LINK_KEYS),
        })
    }

    pub fn impact_level(&self) -> ImpactLevel {
        self.impact
            .as_deref()
            .map_or(ImpactLevel::Unknown, ImpactLevel::classify)
    }

    pub fn display_date(&self) -> Option<String> {
        self.date.as_deref().map(format_event_date)
    }
}

/// Accepts a bare array, an object with an `events` array, or one event object.
pub fn normalize_calendar(value: &Value) -> Vec<EconomicEvent> {
    let items: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(obj) => match obj.get("events") {
            Some(Value::Array(items)) => items.iter().collect(),
            _ => vec![value],
        },
        _ => Vec::new(),
    };
    items
        .into_iter()
        .filter_map(EconomicEvent::from_value)
        .collect()
}

/// Ascending by date. Undated or unparseable events go last, in their original order.
pub fn sort_events(events: &mut [EconomicEvent]) {
    // sort_by_key is stable, so ties keep arrival order.
    events.sort_by_key(|e| match e.date.as_deref().and_then(parse_loose_time) {
        Some(t) => (0, Some(t.sort_key())),
        None => (1, None),
    });
}

/// Normalise, sort and cap the calendar for display.
pub fn prepare_calendar(value: &Value, limit: usize) -> Vec<EconomicEvent> {
    let mut events = normalize_calendar(value);
    sort_events(&mut events);
    events.truncate(limit);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn resolves_field_aliases() {
        let e = EconomicEvent::from_value(&json!({
            "event": "Nonfarm Payrolls",
            "time": "2025-02-07",
            "importance": "High",
            "region": "US",
            "actualValue": 143,
            "expected": "170K",
            "url": "https://fred.stlouisfed.org/"
        }))
        .unwrap();
        assert_eq!(
            e,
            EconomicEvent {
                title: "Nonfarm Payrolls".into(),
                date: Some("2025-02-07".into()),
                impact: Some("High".into()),
                country: Some("US".into()),
                actual: Some("143".into()),
                forecast: Some("170K".into()),
                link: Some("https://fred.stlouisfed.org/".into()),
            }
        );
    }

    #[test]
    fn first_non_empty_alias_wins() {
        let e = EconomicEvent::from_value(&json!({"title": "", "name": "CPI Release"})).unwrap();
        assert_eq!(e.title, "CPI Release");
        let untitled = EconomicEvent::from_value(&json!({"date": "2025-01-01"})).unwrap();
        assert_eq!(untitled.title, DEFAULT_EVENT_TITLE);
        assert!(untitled.impact.is_none());
    }

    #[test]
    fn accepts_every_response_shape() {
        let arr = json!([{"name": "A"}, {"name": "B"}, "junk"]);
        assert_eq!(normalize_calendar(&arr).len(), 2);

        let wrapped = json!({"events": [{"name": "A"}]});
        assert_eq!(normalize_calendar(&wrapped)[0].title, "A");

        let single = json!({"name": "Solo", "date": "2025-03-01"});
        assert_eq!(normalize_calendar(&single)[0].title, "Solo");

        assert!(normalize_calendar(&json!("nope")).is_empty());
        assert!(normalize_calendar(&json!([])).is_empty());
    }

    #[test]
    fn sorts_by_date_with_undated_last_and_stable() {
        let value = json!([
            {"name": "no date 1"},
            {"name": "march", "date": "2025-03-01"},
            {"name": "garbage", "date": "TBD"},
            {"name": "january", "date": "2025-01-15"},
            {"name": "no date 2"}
        ]);
        let titles: Vec<String> = prepare_calendar(&value, 10)
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(
            titles,
            vec!["january", "march", "no date 1", "garbage", "no date 2"]
        );
    }

    #[test]
    fn limits_after_sorting() {
        let events: Vec<Value> = (1..=15)
            .rev()
            .map(|d| json!({"name": format!("day {}", d), "date": format!("2025-01-{:02}", d)}))
            .collect();
        let out = prepare_calendar(&Value::Array(events), 10);
        assert_eq!(out.len(), 10);
        assert_eq!(out[0].title, "day 1");
        assert_eq!(out[9].title, "day 10");
    }

    #[test]
    fn impact_classification() {
        assert_eq!(ImpactLevel::classify("HIGH impact"), ImpactLevel::High);
        assert_eq!(ImpactLevel::classify("Medium"), ImpactLevel::Medium);
        assert_eq!(ImpactLevel::classify("low"), ImpactLevel::Low);
        assert_eq!(ImpactLevel::classify("3 stars"), ImpactLevel::Unknown);
        assert_eq!(EconomicEvent::default().impact_level(), ImpactLevel::Unknown);
    }

    #[test]
    fn display_date_formats_or_passes_through() {
        let mut e = EconomicEvent {
            date: Some("2025-02-07".into()),
            ..Default::default()
        };
        assert_eq!(e.display_date().as_deref(), Some("Feb 07, 2025"));
        e.date = Some("Q1".into());
        assert_eq!(e.display_date().as_deref(), Some("Q1"));
    }
}
