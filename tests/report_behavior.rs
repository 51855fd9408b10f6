//! Behavior-driven tests for report building.
//!
//! These tests verify the derived-field arithmetic: sign handling, four-place
//! rounding, and the predecessor-dependent change fields.

use quotebot_core::{build_report, ColorHint, OhlcvRecord, ReportPayload, SeriesEntry, Symbol};

fn entry(timestamp: &str, open: f64, high: f64, low: f64, close: f64, volume: u64) -> SeriesEntry {
    SeriesEntry::new(
        timestamp,
        OhlcvRecord {
            open,
            high,
            low,
            close,
            volume,
        },
    )
}

fn field_value(report: &ReportPayload, name: &str) -> String {
    report
        .fields
        .iter()
        .find(|field| field.name.starts_with(name))
        .unwrap_or_else(|| panic!("report must carry a '{name}' field"))
        .value
        .clone()
}

#[test]
fn report_carries_all_fields_in_display_order() {
    let current = entry("2024-01-02", 100.0, 105.0, 99.0, 104.0, 1000);
    let previous = entry("2024-01-01", 98.0, 101.0, 97.0, 99.0, 900);

    let report = build_report(
        &Symbol::new("TSLA"),
        "Time Series (Daily)",
        &current,
        Some(&previous),
    );

    let names: Vec<&str> = report
        .fields
        .iter()
        .map(|field| field.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Open",
            "Close",
            "Difference",
            "High",
            "Low",
            "Range",
            "Volume",
            "Change (from 2024-01-01)",
        ]
    );
}

#[test]
fn daily_gain_scenario_produces_signed_rounded_values() {
    let current = entry("2024-01-02", 100.0, 105.0, 99.0, 104.0, 1000);
    let previous = entry("2024-01-01", 98.0, 101.0, 97.0, 99.0, 900);

    let report = build_report(
        &Symbol::new("TSLA"),
        "Time Series (Daily)",
        &current,
        Some(&previous),
    );

    assert_eq!(report.title, "TSLA Stock Data");
    assert_eq!(report.subtitle, "From Time Series (Daily), at 2024-01-02");
    assert_eq!(field_value(&report, "Open"), "100 USD");
    assert_eq!(field_value(&report, "Close"), "104 USD");
    assert_eq!(field_value(&report, "Difference"), "+4.0000 USD");
    assert_eq!(field_value(&report, "High"), "105 USD");
    assert_eq!(field_value(&report, "Low"), "99 USD");
    assert_eq!(field_value(&report, "Range"), "6.0000 USD");
    assert_eq!(field_value(&report, "Volume"), "1000");
    assert_eq!(field_value(&report, "Change"), "+5.0000 USD (+5.0505%)");
    assert_eq!(report.color, Some(ColorHint::Positive));
}

#[test]
fn losses_keep_their_minus_sign() {
    let current = entry("2024-01-02", 104.0, 105.0, 99.0, 100.0, 1000);
    let previous = entry("2024-01-01", 98.0, 101.0, 97.0, 104.0, 900);

    let report = build_report(
        &Symbol::new("TSLA"),
        "Time Series (Daily)",
        &current,
        Some(&previous),
    );

    assert_eq!(field_value(&report, "Difference"), "-4.0000 USD");
    assert_eq!(field_value(&report, "Change"), "-4.0000 USD (-3.8462%)");
    assert_eq!(report.color, Some(ColorHint::Negative));
}

#[test]
fn difference_is_sign_symmetric_under_open_close_reversal() {
    let gain = entry("2024-01-02", 10.0, 13.0, 9.0, 12.0, 10);
    let loss = entry("2024-01-02", 12.0, 13.0, 9.0, 10.0, 10);

    let gain_report = build_report(&Symbol::new("A"), "Time Series (Daily)", &gain, None);
    let loss_report = build_report(&Symbol::new("A"), "Time Series (Daily)", &loss, None);

    assert_eq!(field_value(&gain_report, "Difference"), "+2.0000 USD");
    assert_eq!(field_value(&loss_report, "Difference"), "-2.0000 USD");
}

#[test]
fn range_is_never_signed() {
    let report = build_report(
        &Symbol::new("A"),
        "Time Series (Daily)",
        &entry("2024-01-02", 10.0, 13.5, 9.25, 12.0, 10),
        None,
    );

    assert_eq!(field_value(&report, "Range"), "4.2500 USD");
}

#[test]
fn change_is_unavailable_exactly_when_no_predecessor_exists() {
    let oldest = entry("2024-01", 100.0, 110.0, 95.0, 108.0, 50_000);

    let report = build_report(&Symbol::new("MSFT"), "Monthly Time Series", &oldest, None);

    assert_eq!(field_value(&report, "Change"), "Unavailable");
    assert!(report.color.is_none());
}

#[test]
fn zero_percent_change_is_unsigned_and_hints_negative() {
    let current = entry("2024-01-02", 99.5, 100.0, 99.0, 99.0, 100);
    let previous = entry("2024-01-01", 98.0, 100.0, 97.0, 99.0, 100);

    let report = build_report(
        &Symbol::new("TSLA"),
        "Time Series (Daily)",
        &current,
        Some(&previous),
    );

    assert_eq!(field_value(&report, "Change"), "0.0000 USD (0.0000%)");
    assert_eq!(report.color, Some(ColorHint::Negative));
}

#[test]
fn fractional_percent_change_rounds_to_four_places() {
    // 104.37 / 99.13 * 100 - 100 = 5.285988...
    let current = entry("2024-01-02", 100.0, 105.0, 99.0, 104.37, 1000);
    let previous = entry("2024-01-01", 98.0, 101.0, 97.0, 99.13, 900);

    let report = build_report(
        &Symbol::new("TSLA"),
        "Time Series (Daily)",
        &current,
        Some(&previous),
    );

    assert_eq!(field_value(&report, "Change"), "+5.2400 USD (+5.2860%)");
}

#[test]
fn color_hex_values_match_the_platform_palette() {
    assert_eq!(ColorHint::Positive.as_hex(), "#00ae86");
    assert_eq!(ColorHint::Negative.as_hex(), "#e74c3c");
}
