use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::Selector;

/// Per-period OHLCV summary as served by the provider.
///
/// The provider emits every numeric field as a decimal string
/// (`"1. open": "100.0000"`), so the fields carry custom deserializers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OhlcvRecord {
    #[serde(rename = "1. open", deserialize_with = "f64_from_str")]
    pub open: f64,
    #[serde(rename = "2. high", deserialize_with = "f64_from_str")]
    pub high: f64,
    #[serde(rename = "3. low", deserialize_with = "f64_from_str")]
    pub low: f64,
    #[serde(rename = "4. close", deserialize_with = "f64_from_str")]
    pub close: f64,
    #[serde(rename = "5. volume", deserialize_with = "u64_from_str")]
    pub volume: u64,
}

fn f64_from_str<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    value.trim().parse().map_err(DeError::custom)
}

fn u64_from_str<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    value.trim().parse().map_err(DeError::custom)
}

/// One timestamped entry of a provider series.
///
/// Timestamp format depends on granularity: `yyyy-mm-dd`,
/// `yyyy-mm-dd hh:mm:ss`, or `yyyy-mm`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesEntry {
    pub timestamp: String,
    pub record: OhlcvRecord,
}

impl SeriesEntry {
    pub fn new(timestamp: impl Into<String>, record: OhlcvRecord) -> Self {
        Self {
            timestamp: timestamp.into(),
            record,
        }
    }
}

/// Provider time series in document order.
///
/// Ordering invariant: entries arrive most-recent-first and the predecessor
/// lookup assumes it. The invariant is not verified here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeSeries {
    entries: Vec<SeriesEntry>,
}

impl TimeSeries {
    pub fn new(entries: Vec<SeriesEntry>) -> Self {
        Self { entries }
    }

    /// Builds a series from the provider's JSON object, preserving key order.
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        let object = value
            .as_object()
            .ok_or_else(|| serde_json::Error::custom("time series must be a JSON object"))?;

        let entries = object
            .iter()
            .map(|(timestamp, record)| {
                let record: OhlcvRecord = serde_json::from_value(record.clone())?;
                Ok(SeriesEntry::new(timestamp.clone(), record))
            })
            .collect::<Result<Vec<_>, serde_json::Error>>()?;

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[SeriesEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the first entry matching the selector in stored order, together
    /// with the next stored entry (the chronological predecessor).
    pub fn locate(&self, selector: &Selector) -> Option<SeriesMatch<'_>> {
        let index = match selector {
            Selector::Latest => {
                if self.entries.is_empty() {
                    return None;
                }
                0
            }
            Selector::Match(needle) => self
                .entries
                .iter()
                .position(|entry| timestamp_contains(&entry.timestamp, needle))?,
        };

        Some(SeriesMatch {
            entry: &self.entries[index],
            previous: self.entries.get(index + 1),
        })
    }
}

/// A located series entry plus its chronological predecessor, when one
/// exists. The predecessor feeds the change-from-previous fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesMatch<'a> {
    pub entry: &'a SeriesEntry,
    pub previous: Option<&'a SeriesEntry>,
}

/// Loose substring test used for selector lookup.
///
/// Seconds are always `00` in provider keys, so a trailing `:00` is stripped
/// before matching to let `hh:mm` input match `hh:mm:ss` keys. First match in
/// stored order wins; ambiguous substrings resolve to the most recent entry.
fn timestamp_contains(timestamp: &str, needle: &str) -> bool {
    timestamp
        .strip_suffix(":00")
        .unwrap_or(timestamp)
        .contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(close: f64) -> OhlcvRecord {
        OhlcvRecord {
            open: close - 1.0,
            high: close + 1.0,
            low: close - 2.0,
            close,
            volume: 100,
        }
    }

    fn daily_series() -> TimeSeries {
        TimeSeries::new(vec![
            SeriesEntry::new("2024-01-03", record(104.0)),
            SeriesEntry::new("2024-01-02", record(101.0)),
            SeriesEntry::new("2024-01-01", record(99.0)),
        ])
    }

    #[test]
    fn latest_selects_first_entry_and_second_as_predecessor() {
        let series = daily_series();
        let found = series.locate(&Selector::Latest).expect("must match");
        assert_eq!(found.entry.timestamp, "2024-01-03");
        assert_eq!(
            found.previous.map(|entry| entry.timestamp.as_str()),
            Some("2024-01-02")
        );
    }

    #[test]
    fn latest_on_single_entry_has_no_predecessor() {
        let series = TimeSeries::new(vec![SeriesEntry::new("2024-01-03", record(104.0))]);
        let found = series.locate(&Selector::Latest).expect("must match");
        assert!(found.previous.is_none());
    }

    #[test]
    fn latest_on_empty_series_finds_nothing() {
        assert!(TimeSeries::default().locate(&Selector::Latest).is_none());
    }

    #[test]
    fn substring_selects_matching_key() {
        let series = daily_series();
        let found = series
            .locate(&Selector::Match(String::from("01-02")))
            .expect("must match");
        assert_eq!(found.entry.timestamp, "2024-01-02");
        assert_eq!(
            found.previous.map(|entry| entry.timestamp.as_str()),
            Some("2024-01-01")
        );
    }

    #[test]
    fn oldest_entry_has_no_predecessor() {
        let series = daily_series();
        let found = series
            .locate(&Selector::Match(String::from("2024-01-01")))
            .expect("must match");
        assert!(found.previous.is_none());
    }

    #[test]
    fn unmatched_selector_finds_nothing() {
        let series = daily_series();
        assert!(series
            .locate(&Selector::Match(String::from("2023-12-29")))
            .is_none());
    }

    #[test]
    fn minute_selector_matches_key_with_seconds() {
        let series = TimeSeries::new(vec![
            SeriesEntry::new("2024-01-03 09:31:00", record(104.0)),
            SeriesEntry::new("2024-01-03 09:30:00", record(103.0)),
        ]);

        let found = series
            .locate(&Selector::Match(String::from("09:30")))
            .expect("must match");
        assert_eq!(found.entry.timestamp, "2024-01-03 09:30:00");
    }

    #[test]
    fn ambiguous_substring_resolves_to_most_recent_entry() {
        let series = daily_series();
        let found = series
            .locate(&Selector::Match(String::from("2024")))
            .expect("must match");
        assert_eq!(found.entry.timestamp, "2024-01-03");
    }

    #[test]
    fn series_from_json_preserves_document_order() {
        let value: Value = serde_json::from_str(
            r#"{
                "2024-01-02": {"1. open": "100.0", "2. high": "105.0", "3. low": "99.0", "4. close": "104.0", "5. volume": "1000"},
                "2024-01-01": {"1. open": "98.0", "2. high": "101.0", "3. low": "97.0", "4. close": "99.0", "5. volume": "900"}
            }"#,
        )
        .expect("fixture must parse");

        let series = TimeSeries::from_value(&value).expect("series must parse");
        assert_eq!(series.len(), 2);
        assert_eq!(series.entries()[0].timestamp, "2024-01-02");
        assert_eq!(series.entries()[0].record.close, 104.0);
        assert_eq!(series.entries()[1].record.volume, 900);
    }

    #[test]
    fn non_numeric_field_fails_to_parse() {
        let value: Value = serde_json::from_str(
            r#"{"2024-01-02": {"1. open": "n/a", "2. high": "105.0", "3. low": "99.0", "4. close": "104.0", "5. volume": "1000"}}"#,
        )
        .expect("fixture must parse");

        assert!(TimeSeries::from_value(&value).is_err());
    }
}
