//! Resume analysis orchestration

use crate::error::{AnalysisError, ExtractionError};
use crate::llm::generator::TextGenerator;
use crate::llm::prompts::{AnalysisMode, PromptCatalog};
use crate::processing::document::{JobDescription, ResumeDocument};
use crate::processing::interpreter::ResponseInterpreter;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Outcome of one successful analysis. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    response_text: String,
    percentage: Option<u32>,
    mode: AnalysisMode,
}

impl AnalysisResult {
    pub fn new(response_text: String, percentage: Option<u32>, mode: AnalysisMode) -> Self {
        Self {
            response_text,
            percentage,
            mode,
        }
    }

    /// Raw model output, exactly as received.
    pub fn response_text(&self) -> &str {
        &self.response_text
    }

    pub fn percentage(&self) -> Option<u32> {
        self.percentage
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }
}

/// Runs extract → select template → generate → interpret for one request.
/// Holds no per-request state, so one instance can serve concurrent calls.
pub struct AnalysisOrchestrator<G> {
    generator: G,
    catalog: PromptCatalog,
    interpreter: ResponseInterpreter,
}

impl<G> AnalysisOrchestrator<G>
where
    G: TextGenerator,
{
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            catalog: PromptCatalog::new(),
            interpreter: ResponseInterpreter::new(),
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub async fn analyze(
        &self,
        resume_bytes: Vec<u8>,
        job_description: &JobDescription,
        mode: AnalysisMode,
    ) -> Result<AnalysisResult, AnalysisError> {
        self.analyze_document(ResumeDocument::new(resume_bytes), job_description, mode)
            .await
    }

    /// Extraction runs on the blocking pool. If it fails, the generator is
    /// never called. The generator is called at most once.
    pub async fn analyze_document(
        &self,
        document: ResumeDocument,
        job_description: &JobDescription,
        mode: AnalysisMode,
    ) -> Result<AnalysisResult, AnalysisError> {
        let document = tokio::task::spawn_blocking(move || -> Result<ResumeDocument, ExtractionError> {
            document.text()?;
            Ok(document)
        })
        .await
        .map_err(|e| ExtractionError::Task(e.to_string()))??;

        let resume_text = document.text()?;
        info!("Extracted {} characters of resume text", resume_text.len());

        let template = self.catalog.template_for(mode);
        info!("Requesting {} from {}", mode, self.generator.model_name());

        let response_text = self
            .generator
            .generate(&template, resume_text, job_description.as_str())
            .await?;

        let percentage = self.interpreter.extract_percentage(&response_text);
        match percentage {
            Some(value) => debug!("Found match percentage {}% in response", value),
            None => debug!("No match percentage in response"),
        }

        Ok(AnalysisResult::new(response_text, percentage, mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;
    use crate::llm::prompts::PromptTemplate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingGenerator {
        calls: AtomicUsize,
    }

    impl TextGenerator for CountingGenerator {
        async fn generate(
            &self,
            _template: &PromptTemplate,
            _resume_text: &str,
            _job_description: &str,
        ) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("Match: 70%".to_string())
        }
    }

    #[tokio::test]
    async fn test_unreadable_resume_skips_generation() {
        let orchestrator = AnalysisOrchestrator::new(CountingGenerator {
            calls: AtomicUsize::new(0),
        });

        let result = orchestrator
            .analyze(b"%PDF-garbage".to_vec(), &JobDescription::new("job"), AnalysisMode::MatchPercentage)
            .await;

        assert!(matches!(result, Err(AnalysisError::Extraction(_))));
        assert_eq!(orchestrator.generator().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_result_accessors() {
        let result = AnalysisResult::new("Match: 90%".into(), Some(90), AnalysisMode::MatchPercentage);
        assert_eq!(result.response_text(), "Match: 90%");
        assert_eq!(result.percentage(), Some(90));
        assert_eq!(result.mode(), AnalysisMode::MatchPercentage);
    }
}
