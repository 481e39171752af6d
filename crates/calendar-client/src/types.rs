//! Raw row shape produced by calendar extraction.

/// One calendar row as scraped, before any normalization. Every field is
/// the element's text content; missing cells are empty strings. The impact
/// indicator is `None` when the row has no impact cell at all (separator
/// and banner rows), which the normalizer treats as a rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCalendarRow {
    pub title: String,
    pub time: String,
    pub currency: String,
    pub description: String,
    pub actual: String,
    pub forecast: String,
    pub previous: String,
    /// Human-readable qualifier from the impact cell, e.g.
    /// "High Impact Expected".
    pub impact_indicator: Option<String>,
}
