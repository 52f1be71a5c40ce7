//! Report structures wrapping an analysis result for presentation and export

use crate::error::Result;
use crate::llm::prompts::AnalysisMode;
use crate::processing::analyzer::AnalysisResult;
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub resume_file: String,
    pub job_source: String,
    pub model_used: String,
    pub processing_time_ms: u64,
    pub version: String,
}

/// Match/gap split for drawing. The extracted percentage is kept as-is in the
/// result; only the drawing is clamped to 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchGauge {
    pub matched: u32,
    pub gap: u32,
}

impl MatchGauge {
    pub fn from_percentage(percentage: u32) -> Self {
        let matched = percentage.min(100);
        Self {
            matched,
            gap: 100 - matched,
        }
    }
}

impl ReportMetadata {
    /// Processing times too long for `u64` milliseconds saturate.
    pub fn new(resume_file: &Path, job_source: impl Into<String>, model_used: impl Into<String>, processing_time: Duration) -> Self {
        Self {
            generated_at: Utc::now(),
            resume_file: display_name(resume_file),
            job_source: job_source.into(),
            model_used: model_used.into(),
            processing_time_ms: u64::try_from(processing_time.as_millis()).unwrap_or(u64::MAX),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl AnalysisReport {
    pub fn new(result: AnalysisResult, metadata: ReportMetadata) -> Self {
        Self { result, metadata }
    }

    pub fn gauge(&self) -> Option<MatchGauge> {
        self.result.percentage().map(MatchGauge::from_percentage)
    }

    pub fn mode(&self) -> AnalysisMode {
        self.result.mode()
    }
}

/// File name without directories, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Writes the raw analysis text to `dir/file_name`, byte for byte.
pub fn export_analysis(result: &AnalysisResult, dir: &Path, file_name: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, result.response_text())?;
    info!("Exported analysis to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_gauge_clamps_only_for_drawing() {
        assert_eq!(MatchGauge::from_percentage(78), MatchGauge { matched: 78, gap: 22 });
        assert_eq!(MatchGauge::from_percentage(150), MatchGauge { matched: 100, gap: 0 });

        let result = AnalysisResult::new("150% fit".into(), Some(150), AnalysisMode::MatchPercentage);
        let report = AnalysisReport::new(result, ReportMetadata::new(Path::new("cv.pdf"), "job.txt", "m", Duration::from_millis(1)));
        assert_eq!(report.result.percentage(), Some(150));
        assert_eq!(report.gauge().unwrap().matched, 100);
    }

    #[test]
    fn test_no_percentage_no_gauge() {
        let result = AnalysisResult::new("Solid review".into(), None, AnalysisMode::DetailedReview);
        let report = AnalysisReport::new(result, ReportMetadata::new(Path::new("cv.pdf"), "inline", "m", Duration::from_millis(1)));
        assert!(report.gauge().is_none());
    }

    #[test]
    fn test_export_writes_raw_text_verbatim() {
        let dir = tempdir().unwrap();
        let text = "## Match: 90%\n\n* Python\n* AWS\n";
        let result = AnalysisResult::new(text.to_string(), Some(90), AnalysisMode::MatchPercentage);

        let path = export_analysis(&result, &dir.path().join("exports"), "resume_analysis.txt").unwrap();

        assert_eq!(path.file_name().unwrap(), "resume_analysis.txt");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), text);
    }

    #[test]
    fn test_metadata_uses_file_name() {
        let metadata = ReportMetadata::new(Path::new("/tmp/uploads/jane_doe.pdf"), "job.md", "gemini", Duration::from_millis(42));
        assert_eq!(metadata.resume_file, "jane_doe.pdf");
        assert_eq!(metadata.processing_time_ms, 42);
    }

    #[test]
    fn test_processing_time_saturates() {
        let metadata = ReportMetadata::new(Path::new("cv.pdf"), "job.md", "gemini", Duration::MAX);
        assert_eq!(metadata.processing_time_ms, u64::MAX);
    }
}
