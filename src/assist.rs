use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// The hosted text service. Unlike the note backend this is not
/// configurable — the client talks to the public instance.
pub const TEXTCRAFT_URL: &str = "https://ai-textcraft.onrender.com";

/// Target summary length passed to the condense endpoint. The service
/// takes it as a string.
const SUMMARY_LENGTH: &str = "15";

/// Word the condense endpoint is told to avoid.
const BLOCKED_WORD: &str = "Beta";

/// How many tags to request per summary.
const TAG_COUNT: u32 = 5;

/// The service can take a while to spin up from idle.
const ASSIST_TIMEOUT_SECS: u64 = 60;

#[derive(Serialize)]
struct CondenseRequest<'a> {
    info: &'a str,
    length: &'a str,
    #[serde(rename = "blockedWord")]
    blocked_word: &'a str,
}

#[derive(Deserialize)]
struct CondenseResponse {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Serialize)]
struct TagsRequest<'a> {
    info: &'a str,
    length: u32,
}

#[derive(Deserialize)]
struct TagsResponse {
    #[serde(default)]
    tags: Vec<String>,
}

/// Client for the AI summarize/tag endpoints.
pub struct TextAssist {
    client: Client,
    base_url: String,
}

impl TextAssist {
    pub fn new() -> Self {
        Self::with_base_url(TEXTCRAFT_URL.to_string())
    }

    /// Point the client somewhere else. Only tests use this — the real
    /// endpoint is fixed.
    pub fn with_base_url(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(ASSIST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");
        Self { client, base_url }
    }

    /// Condense note content into a short summary. An empty or missing
    /// summary in a successful response is still an error — there is
    /// nothing to show and nothing to feed the tag endpoint.
    pub async fn condense(&self, info: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .post(format!("{}/text/consize", self.base_url))
            .json(&CondenseRequest {
                info,
                length: SUMMARY_LENGTH,
                blocked_word: BLOCKED_WORD,
            })
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                message: None,
            });
        }
        let body: CondenseResponse = response.json().await?;
        match body.content {
            Some(content) if !content.trim().is_empty() => Ok(content),
            _ => Err(ApiError::Status {
                status,
                message: Some("No summary returned from API".to_string()),
            }),
        }
    }

    /// Ask for tag suggestions for a summary.
    pub async fn suggest_tags(&self, info: &str) -> Result<Vec<String>, ApiError> {
        let response = self
            .client
            .post(format!("{}/text/tags", self.base_url))
            .json(&TagsRequest {
                info,
                length: TAG_COUNT,
            })
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                message: None,
            });
        }
        let body: TagsResponse = response.json().await?;
        Ok(body.tags)
    }
}

impl Default for TextAssist {
    fn default() -> Self {
        Self::new()
    }
}
