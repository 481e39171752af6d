use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use tokio::time::sleep;
use tracing::instrument;

use crate::types::{GenerationError, GenerationParams};

/// Chat-completions client (OpenAI-compatible endpoint). One user message
/// in, the first choice's text out; the caller owns prompt construction
/// and any fallback policy.
pub struct LlmClient {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
    max_retries: u32,
}

impl LlmClient {
    pub fn new(
        api_base: String,
        api_key: String,
        model: String,
        timeout_ms: u64,
        max_retries: u32,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .expect("failed to build generation HTTP client");

        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
            model,
            max_retries,
        }
    }

    fn extract_text_content(response_body: &serde_json::Value) -> Result<&str, GenerationError> {
        response_body
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.pointer("/message/content"))
            .and_then(|content| content.as_str())
            .ok_or_else(|| {
                GenerationError::MalformedResponse(
                    "missing 'choices[0].message.content' field".into(),
                )
            })
    }

    /// Request one completion for `prompt`. Retries on timeout and 429
    /// with linear backoff, up to `max_retries` attempts.
    #[instrument(skip(self, prompt, params), fields(model = %self.model))]
    pub async fn generate(
        &self,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<String, GenerationError> {
        let url = format!("{}/chat/completions", self.api_base);
        let payload = json!({
            "model": self.model,
            "max_tokens": params.max_tokens,
            "temperature": params.temperature,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ]
        });

        let mut attempt = 0u32;
        loop {
            let send_result = self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .header("content-type", "application/json")
                .json(&payload)
                .send()
                .await;

            match send_result {
                Ok(response) => {
                    let status = response.status();
                    if !status.is_success() {
                        let body = response.text().await.unwrap_or_default();
                        if status.as_u16() == 429 && attempt < self.max_retries {
                            attempt += 1;
                            sleep(Duration::from_millis(150 * u64::from(attempt))).await;
                            continue;
                        }
                        return Err(GenerationError::HttpStatus {
                            status: status.as_u16(),
                            body,
                        });
                    }

                    let response_body: serde_json::Value = response
                        .json()
                        .await
                        .map_err(|e| GenerationError::ApiError(e.to_string()))?;
                    let text = Self::extract_text_content(&response_body)?;
                    return Ok(text.to_string());
                }
                Err(e) => {
                    if e.is_timeout() {
                        if attempt < self.max_retries {
                            attempt += 1;
                            sleep(Duration::from_millis(150 * u64::from(attempt))).await;
                            continue;
                        }
                        return Err(GenerationError::Timeout);
                    }
                    if attempt < self.max_retries {
                        attempt += 1;
                        sleep(Duration::from_millis(150 * u64::from(attempt))).await;
                        continue;
                    }
                    return Err(GenerationError::ApiError(e.to_string()));
                }
            }
        }
    }
}
