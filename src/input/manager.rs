//! Input manager for loading resumes and job descriptions from disk

use crate::error::{Result, ResumeAnalyzerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PlainTextExtractor, TextExtractor};
use crate::processing::document::JobDescription;
use log::info;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    max_resume_bytes: u64,
}

impl InputManager {
    pub fn new(max_resume_bytes: u64) -> Self {
        Self { max_resume_bytes }
    }

    /// Reads the resume PDF as raw bytes. Text extraction happens later in
    /// the analysis pipeline.
    pub async fn read_resume(&self, path: &Path) -> Result<Vec<u8>> {
        Self::ensure_exists(path)?;

        if FileType::from_path(path) != FileType::Pdf {
            return Err(ResumeAnalyzerError::UnsupportedFormat(format!(
                "Resume must be a PDF: {}",
                path.display()
            )));
        }

        let size = fs::metadata(path).await?.len();
        if size > self.max_resume_bytes {
            return Err(ResumeAnalyzerError::InvalidInput(format!(
                "Resume is {} bytes, limit is {} bytes: {}",
                size,
                self.max_resume_bytes,
                path.display()
            )));
        }

        info!("Reading resume PDF: {} ({} bytes)", path.display(), size);
        Ok(fs::read(path).await?)
    }

    pub async fn read_job_description(&self, path: &Path) -> Result<JobDescription> {
        Self::ensure_exists(path)?;

        let file_type = FileType::from_path(path);
        if !file_type.is_job_description() {
            return Err(ResumeAnalyzerError::UnsupportedFormat(format!(
                "Unsupported job description file type: {}",
                path.display()
            )));
        }

        let text = if file_type == FileType::Markdown {
            info!("Processing markdown job description: {}", path.display());
            MarkdownExtractor.extract(path).await?
        } else {
            info!("Reading plain text job description: {}", path.display());
            PlainTextExtractor.extract(path).await?
        };

        Self::job_description_from_text(text)
    }

    pub fn job_description_from_text(text: impl Into<String>) -> Result<JobDescription> {
        let job = JobDescription::new(text);
        if job.is_blank() {
            return Err(ResumeAnalyzerError::InvalidInput(
                "Job description is empty".to_string(),
            ));
        }
        Ok(job)
    }

    fn ensure_exists(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(ResumeAnalyzerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }
        Ok(())
    }
}
