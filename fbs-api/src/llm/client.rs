//! Gemini generation client
//!
//! Wraps the Gemini `generateContent` REST endpoint behind the
//! `TextGenerator` capability trait. One HTTP call per `generate`, fixed
//! sampling configuration, no retries: retry/fallback policy belongs to the
//! augmentation orchestrator, which substitutes canned text on failure.
//!
//! # API Reference
//! - Endpoint: https://generativelanguage.googleapis.com/v1beta/models
//! - Documentation: https://ai.google.dev/api/generate-content

use async_trait::async_trait;
use fbs_common::config::GeminiConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Gemini API base URL
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Timeout for a single generation request
///
/// Bounds the latency a degraded backend can add to one submission; on
/// expiry the call fails and the orchestrator falls back.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fixed sampling configuration for every call
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.95;
const TOP_K: i32 = 40;
const MAX_OUTPUT_TOKENS: i32 = 500;

/// A single generation call failure
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Request never completed (connect, timeout, TLS)
    #[error("Network error: {0}")]
    Network(String),

    /// Backend returned an error status or error payload
    #[error("API error: {0}")]
    Api(String),

    /// Response body could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Response parsed but contained no usable text
    #[error("Empty response: {0}")]
    Empty(String),
}

/// Text generation capability
///
/// The orchestrator only depends on this trait; any concrete model backend
/// can be substituted behind it (including scripted generators in tests).
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt, or fail with a single error
    ///
    /// Implementations must never return partial or garbled text: the
    /// result is either the complete trimmed output or an error.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Gemini REST client
pub struct GeminiClient {
    /// HTTP client for API requests
    http_client: Client,
    /// API key, passed as a query parameter
    api_key: String,
    /// Model name, e.g. "gemini-1.5-flash"
    model: String,
}

impl GeminiClient {
    /// Create a new client for the configured model and key
    pub fn new(config: &GeminiConfig) -> Self {
        Self {
            http_client: Client::builder()
                .timeout(DEFAULT_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_BASE, self.model, self.api_key
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!(prompt_length = prompt.len(), model = %self.model, "Calling Gemini API");

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_p: TOP_P,
                top_k: TOP_K,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Network(format!("Gemini request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api(format!(
                "Gemini API returned error {}: {}",
                status, body
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Parse(format!("Failed to parse Gemini response: {}", e)))?;

        let text = body
            .candidates
            .into_iter()
            .flatten()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .flatten()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(GenerationError::Empty(
                "Gemini response contained no candidate text".to_string(),
            ));
        }

        debug!(output_length = text.len(), "Gemini call complete");
        Ok(text)
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: i32,
    max_output_tokens: i32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_includes_model_and_key() {
        let client = GeminiClient::new(&GeminiConfig {
            api_key: "test-key".to_string(),
            model: "gemini-1.5-flash".to_string(),
        });
        assert_eq!(
            client.endpoint(),
            format!("{}/gemini-1.5-flash:generateContent?key=test-key", GEMINI_API_BASE)
        );
    }

    #[test]
    fn test_generation_config_serializes_camel_case() {
        let config = GenerationConfig {
            temperature: TEMPERATURE,
            top_p: TOP_P,
            top_k: TOP_K,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        };
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("temperature").is_some());
        assert!(json.get("topP").is_some());
        assert_eq!(json["topK"], 40);
        assert_eq!(json["maxOutputTokens"], 500);
    }

    #[test]
    fn test_response_parsing_extracts_candidate_text() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Thank you!"}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();
        let text: String = parsed
            .candidates
            .into_iter()
            .flatten()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().flatten().filter_map(|p| p.text).collect())
            .unwrap_or_default();
        assert_eq!(text, "Thank you!");
    }

    #[test]
    fn test_response_parsing_tolerates_missing_candidates() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_none());
    }
}
