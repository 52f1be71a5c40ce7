//! Fixed instruction templates for the two analysis modes

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisMode {
    DetailedReview,
    MatchPercentage,
}

impl AnalysisMode {
    pub fn label(self) -> &'static str {
        match self {
            AnalysisMode::DetailedReview => "Detailed Resume Review",
            AnalysisMode::MatchPercentage => "Match Percentage Analysis",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Instruction text sent as the first part of a generation request. Resume
/// text and job description travel as separate parts; nothing is substituted
/// into the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    mode: AnalysisMode,
    text: &'static str,
}

impl PromptTemplate {
    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    pub fn text(&self) -> &'static str {
        self.text
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PromptCatalog;

impl PromptCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn template_for(&self, mode: AnalysisMode) -> PromptTemplate {
        let text = match mode {
            AnalysisMode::DetailedReview => DETAILED_REVIEW_TEMPLATE,
            AnalysisMode::MatchPercentage => MATCH_PERCENTAGE_TEMPLATE,
        };
        PromptTemplate { mode, text }
    }
}

const DETAILED_REVIEW_TEMPLATE: &str = r#"As an experienced Technical Human Resource Manager, provide a detailed professional evaluation
of the candidate's resume against the job description. Please analyze:
1. Overall alignment with the role
2. Key strengths and qualifications that match
3. Notable gaps or areas for improvement
4. Specific recommendations for enhancing the resume
5. Final verdict on suitability for the role

Format the response with clear headings and professional language."#;

const MATCH_PERCENTAGE_TEMPLATE: &str = r#"As an ATS (Applicant Tracking System) expert, provide:
1. Overall match percentage (%)
2. Key matching keywords found
3. Important missing keywords
4. Skills gap analysis
5. Specific recommendations for improvement

Start with the percentage match prominently displayed."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_mode_selects_ats_template() {
        let template = PromptCatalog::new().template_for(AnalysisMode::MatchPercentage);
        assert_eq!(template.mode(), AnalysisMode::MatchPercentage);
        assert!(template.text().starts_with("As an ATS (Applicant Tracking System) expert"));
        assert!(template.text().contains("1. Overall match percentage (%)"));
        assert!(template.text().ends_with("Start with the percentage match prominently displayed."));
    }

    #[test]
    fn test_review_mode_selects_review_template() {
        let template = PromptCatalog::new().template_for(AnalysisMode::DetailedReview);
        assert_eq!(template.mode(), AnalysisMode::DetailedReview);
        assert!(template.text().contains("Technical Human Resource Manager"));
        assert!(template.text().contains("5. Final verdict on suitability for the role"));
    }

    #[test]
    fn test_selection_is_deterministic() {
        let catalog = PromptCatalog::new();
        for mode in [AnalysisMode::DetailedReview, AnalysisMode::MatchPercentage] {
            assert_eq!(catalog.template_for(mode), catalog.template_for(mode));
        }
        assert_ne!(
            catalog.template_for(AnalysisMode::DetailedReview).text(),
            catalog.template_for(AnalysisMode::MatchPercentage).text()
        );
    }

    #[test]
    fn test_templates_have_no_placeholders() {
        let catalog = PromptCatalog::new();
        for mode in [AnalysisMode::DetailedReview, AnalysisMode::MatchPercentage] {
            let text = catalog.template_for(mode).text();
            assert!(!text.contains('{'));
            assert!(!text.contains('}'));
        }
    }
}
