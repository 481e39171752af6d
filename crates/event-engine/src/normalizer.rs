//! Raw row normalization.
//!
//! Converts one scraped calendar row into a typed candidate or rejects it.
//! Rejection is silent by design: irrelevant and malformed rows carry no
//! signal and never surface as errors.

use calendar_client::RawCalendarRow;
use common::Currency;
use tracing::debug;

/// Sentinel title the calendar renders on empty days.
const NO_EVENTS_SENTINEL: &str = "No events";

/// An accepted row with trimmed fields and a parsed currency, ready for
/// classification. The impact indicator stays raw text; the classifier
/// owns its interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    pub title: String,
    pub time: String,
    pub currency: Currency,
    pub description: String,
    pub actual: String,
    pub forecast: String,
    pub previous: String,
    pub impact_indicator: String,
}

/// Normalize one raw row. Returns `None` when the row is rejected:
/// empty or sentinel title, absent impact cell, or a currency other than
/// EUR/USD. Actual/forecast/previous are kept as raw text — numeric
/// parsing happens at inference time, never here.
pub fn normalize_row(row: &RawCalendarRow) -> Option<NormalizedRow> {
    let title = row.title.trim();
    if title.is_empty() || title == NO_EVENTS_SENTINEL {
        return None;
    }

    let impact_indicator = match &row.impact_indicator {
        Some(indicator) => indicator.trim().to_string(),
        None => {
            debug!("Rejecting row without impact cell: {}", title);
            return None;
        }
    };

    let currency = Currency::parse(&row.currency);
    if currency == Currency::Other {
        debug!(
            "Rejecting {} row (not EUR/USD): {}",
            row.currency.trim(),
            title
        );
        return None;
    }

    Some(NormalizedRow {
        title: title.to_string(),
        time: row.time.trim().to_string(),
        currency,
        description: row.description.trim().to_string(),
        actual: row.actual.trim().to_string(),
        forecast: row.forecast.trim().to_string(),
        previous: row.previous.trim().to_string(),
        impact_indicator,
    })
}
