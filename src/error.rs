//! Error handling for the resume analyzer

use std::time::Duration;
use thiserror::Error;

/// Failure to turn resume bytes into text. Extraction is all-or-nothing.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("failed to read PDF: {0}")]
    Pdf(String),

    #[error("PDF backend aborted while extracting text: {0}")]
    Aborted(String),

    #[error("extraction task failed: {0}")]
    Task(String),
}

/// Failure reported by (or on the way to) the generative model provider.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("no API key configured; set GOOGLE_API_KEY")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("could not decode model response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("model returned no text{}", .reason.as_deref().map(|r| format!(" ({r})")).unwrap_or_default())]
    EmptyResponse { reason: Option<String> },

    #[error("generation timed out after {0:?}")]
    Timeout(Duration),
}

impl GenerationError {
    /// Whether a fresh attempt could plausibly succeed: transport failures,
    /// timeouts, rate limiting and provider-side 5xx.
    pub fn is_transient(&self) -> bool {
        match self {
            GenerationError::Http(_) | GenerationError::Timeout(_) => true,
            GenerationError::Api { status, .. } => *status == 429 || *status >= 500,
            GenerationError::MissingApiKey
            | GenerationError::Decode(_)
            | GenerationError::EmptyResponse { .. } => false,
        }
    }
}

/// Outcome of a failed analysis request. The two kinds stay distinct so the
/// front end can tell an unreadable resume from a provider failure.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Error extracting PDF text: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Error generating response: {0}")]
    Generation(#[from] GenerationError),
}

#[derive(Error, Debug)]
pub enum ResumeAnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeAnalyzerError>;

impl From<GenerationError> for ResumeAnalyzerError {
    fn from(err: GenerationError) -> Self {
        ResumeAnalyzerError::Analysis(AnalysisError::Generation(err))
    }
}

impl From<askama::Error> for ResumeAnalyzerError {
    fn from(err: askama::Error) -> Self {
        ResumeAnalyzerError::OutputFormatting(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(GenerationError::Api { status: 429, message: "quota".into() }.is_transient());
        assert!(GenerationError::Api { status: 503, message: "busy".into() }.is_transient());
        assert!(GenerationError::Timeout(Duration::from_secs(5)).is_transient());
        assert!(!GenerationError::Api { status: 403, message: "denied".into() }.is_transient());
        assert!(!GenerationError::MissingApiKey.is_transient());
        assert!(!GenerationError::EmptyResponse { reason: None }.is_transient());
    }

    #[test]
    fn test_empty_response_message() {
        let err = GenerationError::EmptyResponse { reason: Some("SAFETY".into()) };
        assert_eq!(err.to_string(), "model returned no text (SAFETY)");
        let err = GenerationError::EmptyResponse { reason: None };
        assert_eq!(err.to_string(), "model returned no text");
    }

    #[test]
    fn test_analysis_error_messages_are_distinct() {
        let extraction = AnalysisError::from(ExtractionError::Pdf("bad header".into()));
        let generation = AnalysisError::from(GenerationError::MissingApiKey);
        assert!(extraction.to_string().starts_with("Error extracting PDF text"));
        assert!(generation.to_string().starts_with("Error generating response"));
    }
}
