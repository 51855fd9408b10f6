use serde::Serialize;

use crate::domain::{SeriesEntry, Symbol};

/// Presentation hint the chat collaborator may apply to the report accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorHint {
    Positive,
    Negative,
}

impl ColorHint {
    pub const fn as_hex(self) -> &'static str {
        match self {
            Self::Positive => "#00ae86",
            Self::Negative => "#e74c3c",
        }
    }
}

/// One named field of a report, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportField {
    pub name: String,
    pub value: String,
    /// Whether the collaborator may place this field side-by-side with its
    /// neighbors.
    pub inline: bool,
}

impl ReportField {
    fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: true,
        }
    }

    fn block(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }
}

/// Structured stock report handed to the chat collaborator for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportPayload {
    pub title: String,
    pub subtitle: String,
    pub fields: Vec<ReportField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorHint>,
}

/// Builds the report for a matched series entry.
///
/// Derived values are rounded to four decimal places. The change fields need
/// a predecessor close; without one they read `Unavailable` and no color hint
/// is attached.
pub fn build_report(
    symbol: &Symbol,
    series_label: &str,
    entry: &SeriesEntry,
    previous: Option<&SeriesEntry>,
) -> ReportPayload {
    let record = &entry.record;

    let mut fields = vec![
        ReportField::inline("Open", format!("{} USD", record.open)),
        ReportField::inline("Close", format!("{} USD", record.close)),
        ReportField::inline(
            "Difference",
            format!("{} USD", signed_fixed(record.close - record.open)),
        ),
        ReportField::inline("High", format!("{} USD", record.high)),
        ReportField::inline("Low", format!("{} USD", record.low)),
        ReportField::inline("Range", format!("{:.4} USD", record.high - record.low)),
        ReportField::block("Volume", record.volume.to_string()),
    ];

    let color = match previous {
        Some(previous_entry) => {
            let previous_close = previous_entry.record.close;
            let percent_change = record.close / previous_close * 100.0 - 100.0;

            fields.push(ReportField::block(
                format!("Change (from {})", previous_entry.timestamp),
                format!(
                    "{} USD ({}%)",
                    signed_fixed(record.close - previous_close),
                    signed_fixed(percent_change)
                ),
            ));

            Some(if percent_change > 0.0 {
                ColorHint::Positive
            } else {
                ColorHint::Negative
            })
        }
        None => {
            fields.push(ReportField::block("Change", "Unavailable"));
            None
        }
    };

    ReportPayload {
        title: format!("{symbol} Stock Data"),
        subtitle: format!("From {series_label}, at {}", entry.timestamp),
        fields,
        color,
    }
}

/// Formats a value to four decimal places with an explicit `+` on positive
/// values. Zero is unsigned; negatives keep their `-`.
fn signed_fixed(value: f64) -> String {
    // -0.0 would otherwise render as "-0.0000".
    let value = if value == 0.0 { 0.0 } else { value };
    if value > 0.0 {
        format!("+{value:.4}")
    } else {
        format!("{value:.4}")
    }
}
