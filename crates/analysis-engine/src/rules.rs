//! Rule-based directional inference.
//!
//! Pure function of the filtered event set: per-currency pressure scores
//! from actual-vs-forecast surprises, with an inflation-gauge override for
//! the equity indices. All comparisons are strict; equality yields Neutral.

use common::{Currency, Direction, EconomicEvent, Impact, Instrument, MarketVerdict};

/// Inflation gauges whose hot/cool prints drive the index override.
const INFLATION_GAUGES: [&str; 2] = ["cpi", "pce"];

/// Parse a raw display value as a number: strip everything that is not a
/// digit, sign, or decimal point, then parse. Unparsable or empty text
/// degrades to 0.0 — never an error.
pub fn numeric(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
        .collect();
    cleaned.parse::<f64>().unwrap_or(0.0)
}

fn surprise(event: &EconomicEvent) -> f64 {
    numeric(&event.actual) - numeric(&event.forecast)
}

fn weight(event: &EconomicEvent) -> i64 {
    if event.impact == Impact::High {
        2
    } else {
        1
    }
}

fn is_inflation_gauge(title: &str) -> bool {
    let lower = title.to_ascii_lowercase();
    INFLATION_GAUGES.iter().any(|kw| lower.contains(kw))
}

/// Accumulated signed weights per currency. Order-independent: the sum is
/// commutative over the event set.
fn pressure_scores(events: &[EconomicEvent]) -> (i64, i64) {
    let mut eur = 0i64;
    let mut usd = 0i64;

    for event in events {
        let diff = surprise(event);
        let delta = if diff > 0.0 {
            weight(event)
        } else if diff < 0.0 {
            -weight(event)
        } else {
            continue;
        };

        match event.currency {
            Currency::Eur => eur += delta,
            Currency::Usd => usd += delta,
            Currency::Other => {}
        }
    }

    (eur, usd)
}

fn eurusd_verdict(eur_pressure: i64, usd_pressure: i64) -> MarketVerdict {
    let balance = eur_pressure - usd_pressure;
    let (direction, rationale) = if balance > 0 {
        (
            Direction::Up,
            format!(
                "EUR/USD expected to rise on stronger euro-area and/or weaker US data \
                 (EUR pressure {:+}, USD pressure {:+}).",
                eur_pressure, usd_pressure
            ),
        )
    } else if balance < 0 {
        (
            Direction::Down,
            format!(
                "EUR/USD expected to fall on stronger US and/or weaker euro-area data \
                 (EUR pressure {:+}, USD pressure {:+}).",
                eur_pressure, usd_pressure
            ),
        )
    } else {
        (
            Direction::Neutral,
            "No clear move expected in EUR/USD; the data is balanced.".to_string(),
        )
    };

    MarketVerdict {
        instrument: Instrument::EurUsd,
        direction,
        rationale,
    }
}

fn index_verdict(
    instrument: Instrument,
    events: &[EconomicEvent],
    usd_pressure: i64,
) -> MarketVerdict {
    let hot_print = events.iter().any(|e| {
        e.currency == Currency::Usd && is_inflation_gauge(&e.title) && surprise(e) > 0.0
    });
    let cool_print = events.iter().any(|e| {
        e.currency == Currency::Usd && is_inflation_gauge(&e.title) && surprise(e) < 0.0
    });

    let (direction, rationale) = if hot_print {
        (
            Direction::Down,
            format!(
                "{} expected to fall: hot inflation prints raise expectations of tighter policy.",
                instrument.as_str()
            ),
        )
    } else if cool_print {
        (
            Direction::Up,
            format!(
                "{} expected to rise: cool inflation prints point toward possible rate cuts.",
                instrument.as_str()
            ),
        )
    } else if usd_pressure > 0 {
        (
            Direction::Down,
            format!(
                "A strengthening dollar (USD pressure {:+}) could weigh on {}.",
                usd_pressure,
                instrument.as_str()
            ),
        )
    } else if usd_pressure < 0 {
        (
            Direction::Up,
            format!(
                "A weakening dollar (USD pressure {:+}) favors upside in {}.",
                usd_pressure,
                instrument.as_str()
            ),
        )
    } else {
        (
            Direction::Neutral,
            format!(
                "No clear move expected in {}; the market is in wait-and-see mode.",
                instrument.as_str()
            ),
        )
    };

    MarketVerdict {
        instrument,
        direction,
        rationale,
    }
}

/// Produce one verdict per tracked instrument from the filtered event set.
/// Deterministic and idempotent: re-running on the same set yields
/// identical verdicts.
pub fn assess(events: &[EconomicEvent]) -> Vec<MarketVerdict> {
    let (eur_pressure, usd_pressure) = pressure_scores(events);

    vec![
        eurusd_verdict(eur_pressure, usd_pressure),
        index_verdict(Instrument::Nasdaq, events, usd_pressure),
        index_verdict(Instrument::Us30, events, usd_pressure),
    ]
}
