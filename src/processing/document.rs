//! Documents flowing through the analysis pipeline

use crate::error::ExtractionError;
use crate::input::text_extractor::PdfExtractor;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A resume as uploaded: the raw PDF bytes plus text derived from them at
/// most once.
#[derive(Debug)]
pub struct ResumeDocument {
    bytes: Vec<u8>,
    text: OnceLock<String>,
}

impl ResumeDocument {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            text: OnceLock::new(),
        }
    }

    /// Extracted text, computed on first call. A failed extraction leaves the
    /// slot empty.
    pub fn text(&self) -> Result<&str, ExtractionError> {
        if let Some(text) = self.text.get() {
            return Ok(text);
        }
        let text = PdfExtractor::extract(&self.bytes)?;
        Ok(self.text.get_or_init(|| text))
    }

    pub fn is_extracted(&self) -> bool {
        self.text.get().is_some()
    }
}

/// Caller-supplied job description, passed to the model untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobDescription(String);

impl JobDescription {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for JobDescription {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for JobDescription {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
