//! Pipeline orchestrator.
//!
//! Sequences one run: acquire raw rows → normalize → classify → filter →
//! optional sentiment annotation → directional inference → packaged report.
//! Zero accepted events short-circuits before any strategy runs, so the
//! narrative variant never makes an external call for an empty set.

use analysis_engine::{narrative, rules, NarrativeAnalyst};
use anyhow::bail;
use calendar_client::{CalendarClient, RawCalendarRow};
use chrono::Utc;
use common::{Assessment, EconomicEvent, Impact, PipelineReport};
use event_engine::{classify, normalize_row, RelevancePolicy, SentimentScorer};
use llm_client::{GenerationParams, LlmClient};
use tracing::{info, warn};

use crate::config::AppConfig;

/// The configured inference strategy.
enum AnalysisBackend {
    Rules,
    Narrative(NarrativeAnalyst),
}

impl AnalysisBackend {
    fn name(&self) -> &'static str {
        match self {
            AnalysisBackend::Rules => "rules",
            AnalysisBackend::Narrative(_) => "narrative",
        }
    }
}

pub struct Pipeline {
    client: CalendarClient,
    policy: RelevancePolicy,
    backend: AnalysisBackend,
    scorer: Option<SentimentScorer>,
}

impl Pipeline {
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let policy: RelevancePolicy = match config.analysis.relevance_policy.parse() {
            Ok(policy) => policy,
            Err(e) => bail!("analysis.relevance_policy: {}", e),
        };

        let backend = match config.analysis.strategy.trim().to_ascii_lowercase().as_str() {
            "rules" => AnalysisBackend::Rules,
            "narrative" => {
                let api_key = std::env::var(&config.llm.api_key_env)
                    .ok()
                    .filter(|key| !key.trim().is_empty());
                if api_key.is_none() {
                    warn!(
                        "{} is not set; narrative analysis will degrade to a fixed message",
                        config.llm.api_key_env
                    );
                }

                let client = api_key.map(|key| {
                    LlmClient::new(
                        config.llm.api_base.clone(),
                        key,
                        config.llm.model.clone(),
                        config.llm.timeout_ms,
                        config.llm.max_retries,
                    )
                });
                let params = GenerationParams {
                    max_tokens: config.llm.max_tokens,
                    temperature: config.llm.temperature,
                };
                AnalysisBackend::Narrative(NarrativeAnalyst::new(client, params))
            }
            other => bail!(
                "invalid analysis.strategy '{}'; expected rules|narrative",
                other
            ),
        };

        let scorer = config
            .analysis
            .annotate_sentiment
            .then(SentimentScorer::new);

        info!(
            "Pipeline configured: strategy={} relevance_policy={} sentiment={}",
            backend.name(),
            policy.as_str(),
            scorer.is_some()
        );

        Ok(Self {
            client: CalendarClient::new(
                config.calendar.url.clone(),
                config.calendar.request_timeout_ms,
            ),
            policy,
            backend,
            scorer,
        })
    }

    /// Normalize, classify, and filter raw rows into the final event set:
    /// EUR/USD rows only, impact High or Medium, non-empty instruments,
    /// sentiment attached when enabled.
    pub fn process_rows(&self, rows: &[RawCalendarRow]) -> Vec<EconomicEvent> {
        let mut events: Vec<EconomicEvent> = rows
            .iter()
            .filter_map(normalize_row)
            .filter_map(|row| classify(row, self.policy))
            .filter(|event| event.impact != Impact::Low)
            .collect();

        if let Some(scorer) = &self.scorer {
            for event in &mut events {
                let text = format!("{} {}", event.title, event.description);
                event.sentiment_score = Some(scorer.score(&text));
            }
        }

        info!(
            "Accepted {} of {} calendar rows after classification",
            events.len(),
            rows.len()
        );
        events
    }

    async fn run_strategy(&self, events: &[EconomicEvent]) -> Assessment {
        match &self.backend {
            AnalysisBackend::Rules => Assessment::Verdicts(rules::assess(events)),
            AnalysisBackend::Narrative(analyst) => {
                Assessment::Commentary(analyst.assess(events).await)
            }
        }
    }

    /// One full pipeline run. Acquisition failure is the only error that
    /// propagates; everything downstream degrades locally.
    pub async fn run_once(&self) -> common::Result<PipelineReport> {
        let rows = self.client.fetch_rows().await?;
        let events = self.process_rows(&rows);

        if events.is_empty() {
            info!("No qualifying events; skipping inference");
            return Ok(PipelineReport {
                events,
                verdict: Assessment::Commentary(narrative::NO_RELEVANT_EVENTS_MSG.to_string()),
                generated_at: Utc::now(),
            });
        }

        let verdict = self.run_strategy(&events).await;

        Ok(PipelineReport {
            events,
            verdict,
            generated_at: Utc::now(),
        })
    }
}
