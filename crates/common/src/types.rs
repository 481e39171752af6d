//! Domain types shared across the pipeline crates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Currency attached to a calendar row. Only EUR and USD rows carry signal
/// for the tracked instruments; everything else is rejected upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Usd,
    Other,
}

impl Currency {
    /// Parse a trimmed currency cell. Anything that is not EUR/USD maps to
    /// `Other` so the normalizer can drop it.
    pub fn parse(raw: &str) -> Currency {
        match raw.trim().to_ascii_uppercase().as_str() {
            "EUR" => Currency::Eur,
            "USD" => Currency::Usd,
            _ => Currency::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Other => "OTHER",
        }
    }
}

/// Qualitative severity tag attached to an economic release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// One of the three assets whose direction the pipeline predicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instrument {
    #[serde(rename = "EUR/USD")]
    EurUsd,
    #[serde(rename = "NASDAQ")]
    Nasdaq,
    #[serde(rename = "US30")]
    Us30,
}

impl Instrument {
    /// All tracked instruments, in verdict output order.
    pub const ALL: [Instrument; 3] = [Instrument::EurUsd, Instrument::Nasdaq, Instrument::Us30];

    pub fn as_str(&self) -> &'static str {
        match self {
            Instrument::EurUsd => "EUR/USD",
            Instrument::Nasdaq => "NASDAQ",
            Instrument::Us30 => "US30",
        }
    }
}

/// A normalized, classified economic-calendar event. Immutable once the
/// classifier has produced it (sentiment annotation fills the one optional
/// slot before the event reaches inference).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicEvent {
    pub title: String,
    /// Opaque display string from the calendar; never parsed.
    pub time: String,
    pub currency: Currency,
    #[serde(default)]
    pub description: String,
    /// Raw numeric-looking text; `""` when the calendar shows no value.
    #[serde(default)]
    pub actual: String,
    #[serde(default)]
    pub forecast: String,
    #[serde(default)]
    pub previous: String,
    pub impact: Impact,
    pub instruments: Vec<Instrument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<f64>,
}

impl EconomicEvent {
    pub fn affects(&self, instrument: Instrument) -> bool {
        self.instruments.contains(&instrument)
    }
}

/// Directional call for a single instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Neutral,
}

/// One directional verdict with its rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketVerdict {
    pub instrument: Instrument,
    pub direction: Direction,
    pub rationale: String,
}

/// Output of the inference stage: structured per-instrument verdicts from
/// the rule engine, or one free-text commentary from the narrative strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Assessment {
    Verdicts(Vec<MarketVerdict>),
    Commentary(String),
}

/// The packaged result of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    pub events: Vec<EconomicEvent>,
    pub verdict: Assessment,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_parse() {
        assert_eq!(Currency::parse(" usd "), Currency::Usd);
        assert_eq!(Currency::parse("EUR"), Currency::Eur);
        assert_eq!(Currency::parse("GBP"), Currency::Other);
        assert_eq!(Currency::parse(""), Currency::Other);
    }

    #[test]
    fn test_instrument_serializes_to_display_names() {
        let json = serde_json::to_string(&Instrument::EurUsd).unwrap();
        assert_eq!(json, "\"EUR/USD\"");
        let json = serde_json::to_string(&Instrument::Us30).unwrap();
        assert_eq!(json, "\"US30\"");
    }

    #[test]
    fn test_assessment_serializes_untagged() {
        let narrative = Assessment::Commentary("quiet session".into());
        assert_eq!(
            serde_json::to_string(&narrative).unwrap(),
            "\"quiet session\""
        );

        let verdicts = Assessment::Verdicts(vec![MarketVerdict {
            instrument: Instrument::Nasdaq,
            direction: Direction::Down,
            rationale: "hot inflation print".into(),
        }]);
        let json = serde_json::to_string(&verdicts).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"NASDAQ\""));
    }
}
