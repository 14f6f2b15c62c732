//! Gemini generative language client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Credential, GenerationConfig};
use crate::ports::GenerationClient;

const X_GOOG_API_KEY: &str = "x-goog-api-key";

/// HTTP client for the `generateContent` endpoint.
#[derive(Clone)]
pub struct HttpGeminiClient {
    credential: Credential,
    endpoint: String,
    model: String,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("credential", &self.credential)
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a client bound to the configured model.
    pub fn new(credential: Credential, config: &GenerationConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { credential, endpoint: config.endpoint(), model: config.model.clone(), client })
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GenerationClient for HttpGeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let request = ApiRequest { contents: vec![Content { parts: vec![RequestPart { text: prompt }] }] };

        tracing::debug!(model = %self.model, prompt_chars = prompt.len(), "sending generateContent request");

        let response = self
            .client
            .post(&self.endpoint)
            .header(X_GOOG_API_KEY, self.credential.expose())
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(|e| AppError::generation_failed(format!("HTTP request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            tracing::debug!(status = status.as_u16(), "generation request rejected");
            return Err(AppError::generation_failed(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text.trim()
            )));
        }

        let api_response: ApiResponse = response
            .json()
            .map_err(|e| AppError::generation_failed(format!("Failed to parse response: {}", e)))?;

        extract_text(api_response)
    }
}

fn extract_text(response: ApiResponse) -> Result<String, AppError> {
    if let Some(reason) = response.prompt_feedback.and_then(|feedback| feedback.block_reason) {
        return Err(AppError::generation_failed(format!("Prompt was blocked: {}", reason)));
    }

    let parts = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts)
        .ok_or_else(|| AppError::generation_failed("No candidates in response"))?;

    let text: String = parts.into_iter().filter_map(|part| part.text).collect();
    if text.is_empty() {
        return Err(AppError::generation_failed("Response contained no text"));
    }
    Ok(text)
}
