//! Impact and instrument-relevance classification.

use std::str::FromStr;

use common::{Currency, EconomicEvent, Impact, Instrument};

use crate::normalizer::NormalizedRow;

/// Release-name substrings that gate index relevance under the keyword
/// policy: inflation gauges, employment reports, growth and confidence
/// indicators, and rate decisions. Matched case-insensitively against the
/// event title.
pub const MACRO_KEYWORDS: [&str; 20] = [
    "cpi",
    "pce",
    "ppi",
    "inflation",
    "non-farm",
    "nonfarm",
    "nfp",
    "unemployment",
    "employment",
    "jobless",
    "payroll",
    "gdp",
    "retail sales",
    "consumer confidence",
    "consumer sentiment",
    "ism",
    "pmi",
    "fomc",
    "federal funds",
    "interest rate",
];

/// Which instrument-relevance rules are active. The two policies diverge
/// on precision for the equity indices and are never mixed within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelevancePolicy {
    /// Any USD event affects NASDAQ and US30 unconditionally.
    Broad,
    /// NASDAQ/US30 relevance additionally requires a macro-keyword match
    /// in the title. Fewer false positives on index calls, lower recall.
    Keyword,
}

impl RelevancePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelevancePolicy::Broad => "broad",
            RelevancePolicy::Keyword => "keyword",
        }
    }
}

impl FromStr for RelevancePolicy {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "broad" => Ok(RelevancePolicy::Broad),
            "keyword" => Ok(RelevancePolicy::Keyword),
            other => Err(format!(
                "invalid relevance policy '{}'; expected broad|keyword",
                other
            )),
        }
    }
}

/// Map the impact cell's human-readable qualifier to a level.
/// Unknown indicator text defaults to Low rather than rejecting the row.
pub fn impact_from_indicator(indicator: &str) -> Impact {
    let lower = indicator.to_ascii_lowercase();
    if lower.contains("high") {
        Impact::High
    } else if lower.contains("med") {
        Impact::Medium
    } else {
        Impact::Low
    }
}

fn title_has_macro_keyword(title: &str) -> bool {
    let lower = title.to_ascii_lowercase();
    MACRO_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

fn relevant_instruments(
    currency: Currency,
    title: &str,
    policy: RelevancePolicy,
) -> Vec<Instrument> {
    let mut instruments = Vec::new();

    // EUR/USD relevance is policy-independent.
    if matches!(currency, Currency::Eur | Currency::Usd) {
        instruments.push(Instrument::EurUsd);
    }

    if currency == Currency::Usd {
        let indices_relevant = match policy {
            RelevancePolicy::Broad => true,
            RelevancePolicy::Keyword => title_has_macro_keyword(title),
        };
        if indices_relevant {
            instruments.push(Instrument::Nasdaq);
            instruments.push(Instrument::Us30);
        }
    }

    instruments
}

/// Assemble a classified event from an accepted row. Returns `None` when
/// the event is relevant to no tracked instrument.
pub fn classify(row: NormalizedRow, policy: RelevancePolicy) -> Option<EconomicEvent> {
    let impact = impact_from_indicator(&row.impact_indicator);
    let instruments = relevant_instruments(row.currency, &row.title, policy);
    if instruments.is_empty() {
        return None;
    }

    Some(EconomicEvent {
        title: row.title,
        time: row.time,
        currency: row.currency,
        description: row.description,
        actual: row.actual,
        forecast: row.forecast,
        previous: row.previous,
        impact,
        instruments,
        sentiment_score: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(currency: Currency, title: &str, indicator: &str) -> NormalizedRow {
        NormalizedRow {
            title: title.to_string(),
            time: "8:30am".into(),
            currency,
            description: String::new(),
            actual: String::new(),
            forecast: String::new(),
            previous: String::new(),
            impact_indicator: indicator.to_string(),
        }
    }

    // ── Impact parsing ────────────────────────────────────────────────

    #[test]
    fn test_impact_from_indicator_levels() {
        assert_eq!(impact_from_indicator("High Impact Expected"), Impact::High);
        assert_eq!(
            impact_from_indicator("Medium Impact Expected"),
            Impact::Medium
        );
        assert_eq!(impact_from_indicator("Low Impact Expected"), Impact::Low);
    }

    #[test]
    fn test_impact_from_indicator_is_case_insensitive() {
        assert_eq!(impact_from_indicator("HIGH"), Impact::High);
        assert_eq!(impact_from_indicator("med"), Impact::Medium);
    }

    #[test]
    fn test_impact_unknown_indicator_defaults_to_low() {
        assert_eq!(impact_from_indicator("Unknown"), Impact::Low);
        assert_eq!(impact_from_indicator(""), Impact::Low);
    }

    // ── Relevance policies ────────────────────────────────────────────

    #[test]
    fn test_broad_policy_usd_affects_all_instruments() {
        let event = classify(
            row(Currency::Usd, "Trade Balance", "Medium Impact Expected"),
            RelevancePolicy::Broad,
        )
        .unwrap();
        assert!(event.affects(Instrument::EurUsd));
        assert!(event.affects(Instrument::Nasdaq));
        assert!(event.affects(Instrument::Us30));
    }

    #[test]
    fn test_broad_policy_eur_affects_only_eurusd() {
        let event = classify(
            row(Currency::Eur, "German Ifo Business Climate", "High Impact Expected"),
            RelevancePolicy::Broad,
        )
        .unwrap();
        assert_eq!(event.instruments, vec![Instrument::EurUsd]);
    }

    #[test]
    fn test_keyword_policy_macro_title_includes_indices() {
        let event = classify(
            row(Currency::Usd, "Core CPI m/m", "High Impact Expected"),
            RelevancePolicy::Keyword,
        )
        .unwrap();
        assert!(event.affects(Instrument::Nasdaq));
        assert!(event.affects(Instrument::Us30));
    }

    #[test]
    fn test_keyword_policy_non_macro_title_excludes_indices() {
        let event = classify(
            row(Currency::Usd, "Trade Balance", "Medium Impact Expected"),
            RelevancePolicy::Keyword,
        )
        .unwrap();
        assert_eq!(event.instruments, vec![Instrument::EurUsd]);
    }

    #[test]
    fn test_keyword_policy_eur_never_gets_indices() {
        let event = classify(
            row(Currency::Eur, "CPI Flash Estimate y/y", "High Impact Expected"),
            RelevancePolicy::Keyword,
        )
        .unwrap();
        assert_eq!(event.instruments, vec![Instrument::EurUsd]);
    }

    #[test]
    fn test_classify_carries_impact_through() {
        let event = classify(
            row(Currency::Usd, "CPI y/y", "Medium Impact Expected"),
            RelevancePolicy::Broad,
        )
        .unwrap();
        assert_eq!(event.impact, Impact::Medium);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "broad".parse::<RelevancePolicy>().unwrap(),
            RelevancePolicy::Broad
        );
        assert_eq!(
            " Keyword ".parse::<RelevancePolicy>().unwrap(),
            RelevancePolicy::Keyword
        );
        assert!("strict".parse::<RelevancePolicy>().is_err());
    }
}
