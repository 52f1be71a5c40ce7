//! Google Generative Language (Gemini) client.
//!
//! Speaks the REST `generateContent` method directly. One request per call,
//! carrying the instruction, the resume text and the job description as three
//! ordered text parts of a single user turn.

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::llm::generator::TextGenerator;
use crate::llm::prompts::PromptTemplate;
use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(instruction: &'a str, resume_text: &'a str, job_description: &'a str) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![
                    Part { text: instruction },
                    Part { text: resume_text },
                    Part { text: job_description },
                ],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
    status: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, all parts joined.
    fn into_text(self) -> Result<String, GenerationError> {
        let block_reason = self.prompt_feedback.and_then(|f| f.block_reason);

        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(GenerationError::EmptyResponse { reason: block_reason });
        };

        let text: String = candidate
            .content
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GenerationError::EmptyResponse {
                reason: block_reason.or(candidate.finish_reason),
            });
        }
        Ok(text)
    }
}

/// Decodes a successful `generateContent` body into the response text.
fn parse_response(body: &str) -> Result<String, GenerationError> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;
    response.into_text()
}

/// Builds the error for a non-2xx reply, preferring the provider's own message.
fn api_error(status: u16, body: &str) -> GenerationError {
    let message = match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.status {
            Some(code) => format!("{} ({})", envelope.error.message, code),
            None => envelope.error.message,
        },
        Err(_) if body.trim().is_empty() => "no response body".to_string(),
        Err(_) => body.trim().to_string(),
    };
    GenerationError::Api { status, message }
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    /// Fails with [`GenerationError::MissingApiKey`] when the configuration
    /// carries no key.
    pub fn new(config: &GenerationConfig) -> Result<Self, GenerationError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(GenerationError::MissingApiKey)?;

        Ok(Self {
            client: Client::builder().build()?,
            api_key,
            model: config.model.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        template: &PromptTemplate,
        resume_text: &str,
        job_description: &str,
    ) -> Result<String, GenerationError> {
        let request_body = GenerateContentRequest::new(template.text(), resume_text, job_description);

        debug!(
            "Sending generateContent to {} (mode: {:?}, resume: {} chars, job: {} chars)",
            self.model,
            template.mode(),
            resume_text.len(),
            job_description.len()
        );

        let response = self
            .client
            .post(self.url())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Generative model API returned {}", status);
            return Err(api_error(status.as_u16(), &body));
        }

        let text = parse_response(&body)?;
        debug!("Received {} chars from {}", text.len(), self.model);
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
