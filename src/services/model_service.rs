use async_trait::async_trait;
use schemars::{schema_for, JsonSchema};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Sampling knobs for one generation call. Tuning, not correctness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: Option<i32>,
}

/// Quizzes run hot for variety across repeated requests on the same topic.
pub const QUIZ_SAMPLING: SamplingParams = SamplingParams {
    temperature: 1.0,
    top_p: 0.9,
    top_k: Some(40),
};

/// Flashcards stay closer to the curriculum wording.
pub const FLASHCARD_SAMPLING: SamplingParams = SamplingParams {
    temperature: 0.9,
    top_p: 0.8,
    top_k: None,
};

/// The seam between the generation pipelines and the remote model. One
/// method: prompt plus structured-output schema in, raw candidate text out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        response_schema: serde_json::Value,
        sampling: SamplingParams,
    ) -> AppResult<String>;
}

/// Derive the structured-output schema for a payload type, stripped of the
/// metadata keys the generation service has no use for.
pub fn response_schema<T: JsonSchema>() -> serde_json::Value {
    let schema = schema_for!(T);
    let mut value = serde_json::to_value(schema).unwrap_or_else(|_| serde_json::json!({}));
    if let Some(object) = value.as_object_mut() {
        object.remove("$schema");
        object.remove("title");
    }
    value
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
    temperature: f32,
    top_p: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

fn first_candidate_text(response: GenerateContentResponse) -> AppResult<String> {
    response
        .candidates
        .into_iter()
        .flatten()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts)
        .into_iter()
        .flatten()
        .next()
        .and_then(|part| part.text)
        .map(|text| text.trim().to_string())
        .ok_or_else(|| {
            AppError::MalformedResponse("response contained no candidate text".to_string())
        })
}

/// Gemini `generateContent` client over plain reqwest.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: SecretString,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        GeminiClient {
            http: reqwest::Client::new(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
            api_key: config.gemini_api_key.clone(),
        }
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        response_schema: serde_json::Value,
        sampling: SamplingParams,
    ) -> AppResult<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema,
                temperature: sampling.temperature,
                top_p: sampling.top_p,
                top_k: sampling.top_k,
            },
        };

        let response = self
            .http
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .query(&[("key", self.api_key.expose_secret())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            log::error!("Generation request failed with {}: {}", status, detail);
            return Err(AppError::TransportError(format!(
                "generation service returned {}",
                status
            )));
        }

        let raw = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&raw)?;
        first_candidate_text(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_serializes_to_the_wire_names() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: "prompt" }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: serde_json::json!({"type": "object"}),
                temperature: 1.0,
                top_p: 0.9,
                top_k: Some(40),
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "prompt");
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(json["generationConfig"]["topK"], 40);
    }

    #[test]
    fn top_k_is_omitted_when_absent() {
        let config = GenerationConfig {
            response_mime_type: "application/json",
            response_schema: serde_json::json!({}),
            temperature: 0.9,
            top_p: 0.8,
            top_k: None,
        };
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("topK").is_none());
    }

    #[test]
    fn candidate_text_is_extracted_and_trimmed() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"  {\"questions\":[]} \n"}]}}]}"#,
        )
        .unwrap();

        assert_eq!(
            first_candidate_text(response).unwrap(),
            r#"{"questions":[]}"#
        );
    }

    #[test]
    fn empty_candidates_are_malformed() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(
            first_candidate_text(response),
            Err(AppError::MalformedResponse(_))
        ));
    }

    #[test]
    fn schema_derivation_strips_metadata() {
        #[derive(JsonSchema)]
        #[allow(dead_code)]
        struct Payload {
            items: Vec<String>,
        }

        let schema = response_schema::<Payload>();
        assert!(schema.get("$schema").is_none());
        assert!(schema.get("title").is_none());
        assert_eq!(schema["type"], "object");
        assert!(schema["properties"].get("items").is_some());
    }
}
