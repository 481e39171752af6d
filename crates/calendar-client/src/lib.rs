//! Economic-calendar acquisition client.
//!
//! Fetches the public calendar page over plain HTTP and extracts one
//! `RawCalendarRow` per calendar row. The fields are opaque display text;
//! all interpretation (filtering, impact parsing, numeric parsing) happens
//! downstream in `event-engine`.

pub mod parser;
pub mod types;

use std::time::Duration;

use common::Error;
use tracing::{debug, info};

pub use parser::extract_rows;
pub use types::RawCalendarRow;

/// Desktop browser identity; the calendar serves a stripped page to
/// unknown agents.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";

/// Cap an error body at `max` bytes without splitting a UTF-8 character.
fn truncate_body(body: &str, max: usize) -> &str {
    if body.len() <= max {
        return body;
    }
    let mut end = max;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

/// HTTP client for the calendar page.
#[derive(Debug, Clone)]
pub struct CalendarClient {
    client: reqwest::Client,
    url: String,
}

impl CalendarClient {
    pub fn new(url: impl Into<String>, request_timeout_ms: u64) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_millis(request_timeout_ms))
            .build()
            .expect("failed to build calendar HTTP client");

        Self {
            client,
            url: url.into(),
        }
    }

    /// Fetch the calendar page and extract its raw rows.
    pub async fn fetch_rows(&self) -> Result<Vec<RawCalendarRow>, Error> {
        debug!("Fetching calendar page: {}", self.url);

        let resp = self
            .client
            .get(&self.url)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| Error::Http(format!("calendar fetch failed: {}", e)))?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Calendar(format!(
                "calendar returned {}: {}",
                status,
                truncate_body(&body, 500)
            )));
        }

        let html = resp
            .text()
            .await
            .map_err(|e| Error::Calendar(format!("failed to read calendar body: {}", e)))?;

        let rows = extract_rows(&html);
        info!("Extracted {} raw calendar rows", rows.len());

        Ok(rows)
    }
}
