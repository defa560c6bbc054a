use crate::{
    abstract_trait::ExtractionClientTrait,
    config::GeminiConfig,
    errors::ServiceError,
    extraction::{image::ValidatedImage, parser::excerpt, prompt::PRODUCT_EXTRACTION_PROMPT},
};
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text { text: &'a str },
    InlineData { inline_data: InlineData<'a> },
}

#[derive(Debug, Serialize)]
struct InlineData<'a> {
    mime_type: &'a str,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

/// Calls the Gemini `generateContent` endpoint with the extraction prompt and
/// the photo inlined as base64. Failures are not retried.
pub struct GeminiClient {
    http_client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, ServiceError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| ServiceError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            config,
        })
    }
}

#[async_trait]
impl ExtractionClientTrait for GeminiClient {
    async fn extract(&self, image: &ValidatedImage) -> Result<String, ServiceError> {
        info!(
            "🤖 Sending {} image ({} bytes) to {}",
            image.mime_type(),
            image.bytes.len(),
            self.config.model
        );

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: PRODUCT_EXTRACTION_PROMPT,
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type(),
                            data: STANDARD.encode(&image.bytes),
                        },
                    },
                ],
            }],
        };

        let response = self
            .http_client
            .post(self.config.generate_content_url())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("❌ Model request failed: {e}");
                ServiceError::ExtractionFailed(format!("request to model failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("❌ Model returned status {status}");
            return Err(ServiceError::ExtractionFailed(format!(
                "model returned status {status}: {}",
                excerpt(&body)
            )));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|e| {
            ServiceError::ExtractionFailed(format!("unreadable model response: {e}"))
        })?;

        let text = payload.into_text().ok_or_else(|| {
            ServiceError::ExtractionFailed("model response contained no text".into())
        })?;

        debug!("Model output: {}", excerpt(&text));

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_matches_gemini_shape() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text { text: "describe" },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/png",
                            data: STANDARD.encode([1u8, 2, 3]),
                        },
                    },
                ],
            }],
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "contents": [{
                    "parts": [
                        { "text": "describe" },
                        { "inline_data": { "mime_type": "image/png", "data": "AQID" } }
                    ]
                }]
            })
        );
    }

    #[test]
    fn joins_text_parts_of_first_candidate() {
        let payload: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "```json\n{\"brand\":" }, { "text": "\"boAt\"}\n```" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();

        assert_eq!(
            payload.into_text().as_deref(),
            Some("```json\n{\"brand\":\"boAt\"}\n```")
        );
    }

    #[test]
    fn blocked_or_empty_response_has_no_text() {
        let blocked: GenerateContentResponse =
            serde_json::from_value(json!({ "promptFeedback": { "blockReason": "SAFETY" } }))
                .unwrap();
        assert!(blocked.into_text().is_none());

        let empty: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [{ "content": { "parts": [] } }] }))
                .unwrap();
        assert!(empty.into_text().is_none());
    }
}
