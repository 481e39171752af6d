//! Narrative inference strategy.
//!
//! Delegates the wording of the assessment (not the underlying event
//! selection) to a hosted generation service. Best-effort and advisory:
//! every failure mode degrades to a fixed human-readable commentary
//! instead of failing the pipeline.

use common::EconomicEvent;
use llm_client::{GenerationParams, LlmClient};
use tracing::warn;

/// Returned when no generation credential is configured.
pub const CREDENTIAL_MISSING_MSG: &str =
    "Analysis unavailable: generation service credential is not configured.";

/// Returned when the filtered event set is empty.
pub const NO_RELEVANT_EVENTS_MSG: &str = "No relevant EUR or USD events to analyze.";

/// Returned when the generation call fails for any reason.
pub const SERVICE_UNREACHABLE_MSG: &str =
    "Could not generate the analysis: generation service unreachable.";

/// Section header closing the prompt; also used to strip a template echo
/// from the model's reply.
const ASSESSMENT_HEADER: &str = "### Assessment per instrument:";

fn value_or_dash(raw: &str) -> &str {
    if raw.is_empty() {
        "—"
    } else {
        raw
    }
}

/// Fixed-template prompt embedding every filtered event.
pub fn build_prompt(events: &[EconomicEvent]) -> String {
    let mut prompt = String::from(
        "You are a financial analyst specialized in forex and equity-index markets.\n\
         Assess whether the following news push each of these instruments up or down:\n\
         \n\
         - **EUR/USD**: driven by US (USD) and euro-area (EUR) data\n\
         - **NASDAQ**: sensitive to US rates, inflation and confidence\n\
         - **US30 (Dow Jones)**: moved by US macro data\n\
         \n\
         Only state the direction per instrument.\n\
         \n\
         ### Recent news:\n",
    );

    for event in events {
        prompt.push_str(&format!(
            "\n- [{}] {}\n  • Time: {}\n  • Impact: {:?}\n  • Actual: {}, Forecast: {}, Previous: {}\n",
            event.currency.as_str(),
            event.title,
            value_or_dash(&event.time),
            event.impact,
            value_or_dash(&event.actual),
            value_or_dash(&event.forecast),
            value_or_dash(&event.previous),
        ));
    }

    prompt.push('\n');
    prompt.push_str(ASSESSMENT_HEADER);
    prompt.push('\n');
    prompt
}

/// Drop a leading template echo, keeping only the text after the final
/// section header when the model repeats it.
fn strip_template_echo(reply: &str) -> &str {
    match reply.find(ASSESSMENT_HEADER) {
        Some(idx) => {
            let tail = reply[idx + ASSESSMENT_HEADER.len()..].trim();
            if tail.is_empty() {
                reply.trim()
            } else {
                tail
            }
        }
        None => reply.trim(),
    }
}

/// Narrative strategy backend. Holds no client when the credential is
/// absent, in which case every call returns the fixed unavailable message.
pub struct NarrativeAnalyst {
    client: Option<LlmClient>,
    params: GenerationParams,
}

impl NarrativeAnalyst {
    pub fn new(client: Option<LlmClient>, params: GenerationParams) -> Self {
        Self { client, params }
    }

    /// Produce a free-text market commentary for the event set.
    /// Never errors: connectivity, auth, and empty-input cases all return
    /// a fixed fallback string.
    pub async fn assess(&self, events: &[EconomicEvent]) -> String {
        if events.is_empty() {
            return NO_RELEVANT_EVENTS_MSG.to_string();
        }

        let client = match &self.client {
            Some(client) => client,
            None => return CREDENTIAL_MISSING_MSG.to_string(),
        };

        let prompt = build_prompt(events);
        match client.generate(&prompt, self.params).await {
            Ok(reply) => strip_template_echo(&reply).to_string(),
            Err(e) => {
                warn!("Narrative generation failed: {}", e);
                SERVICE_UNREACHABLE_MSG.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{Currency, Impact, Instrument};

    fn cpi_event() -> EconomicEvent {
        EconomicEvent {
            title: "Core CPI m/m".into(),
            time: "8:30am".into(),
            currency: Currency::Usd,
            description: "Change in the price of goods and services".into(),
            actual: "0.4%".into(),
            forecast: "0.3%".into(),
            previous: String::new(),
            impact: Impact::High,
            instruments: Instrument::ALL.to_vec(),
            sentiment_score: None,
        }
    }

    #[test]
    fn test_prompt_embeds_event_fields() {
        let prompt = build_prompt(&[cpi_event()]);
        assert!(prompt.contains("[USD] Core CPI m/m"));
        assert!(prompt.contains("Time: 8:30am"));
        assert!(prompt.contains("Impact: High"));
        assert!(prompt.contains("Actual: 0.4%, Forecast: 0.3%, Previous: —"));
        assert!(prompt.trim_end().ends_with(ASSESSMENT_HEADER));
    }

    #[test]
    fn test_strip_template_echo() {
        let echoed = format!(
            "...preamble...\n{}\nEUR/USD: likely down.",
            ASSESSMENT_HEADER
        );
        assert_eq!(strip_template_echo(&echoed), "EUR/USD: likely down.");
        assert_eq!(
            strip_template_echo("  EUR/USD: likely down.  "),
            "EUR/USD: likely down."
        );
        // Header echoed with nothing after it: keep the whole reply.
        let bare = format!("Some commentary.\n{}", ASSESSMENT_HEADER);
        assert_eq!(strip_template_echo(&bare), bare.trim());
    }

    #[tokio::test]
    async fn test_empty_event_set_short_circuits() {
        let analyst = NarrativeAnalyst::new(None, GenerationParams::default());
        assert_eq!(analyst.assess(&[]).await, NO_RELEVANT_EVENTS_MSG);
    }

    #[tokio::test]
    async fn test_missing_credential_returns_fixed_message() {
        let analyst = NarrativeAnalyst::new(None, GenerationParams::default());
        assert_eq!(analyst.assess(&[cpi_event()]).await, CREDENTIAL_MISSING_MSG);
    }
}
